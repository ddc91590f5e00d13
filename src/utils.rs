//! Small formatting helpers shared across the crate.

/// Normalizes a function label to a short display name.
///
/// Trims whitespace, drops a trailing `()`, and keeps only the last
/// `::`-separated path segment, so `filters::denoise()` renders as `denoise`.
#[must_use]
pub fn norm_func_name(function: &str) -> String {
    let name = function.trim();
    let name = name.strip_suffix("()").unwrap_or(name);
    let name = name.rsplit("::").next().unwrap_or(name).trim();
    name.to_string()
}
