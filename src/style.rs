//! Color handling for error display.
//!
//! Styling is resolved once per process: output is colorized only when stdout
//! is an interactive terminal and `NO_COLOR` is unset.

use std::io::IsTerminal;
use std::sync::LazyLock;

use console::style;

static COLOR: LazyLock<bool> =
    LazyLock::new(|| std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal());

pub(crate) fn use_color() -> bool {
    *COLOR
}

/// Styles an error-type name (red, bold).
pub(crate) fn error_name(name: &str) -> String {
    if use_color() {
        style(name).red().bold().force_styling(true).to_string()
    } else {
        name.to_string()
    }
}

/// Styles a parenthesized originating-function header (cyan).
pub(crate) fn func_header(function: &str) -> String {
    if use_color() {
        style(format!("({function})")).cyan().force_styling(true).to_string()
    } else {
        format!("({function})")
    }
}
