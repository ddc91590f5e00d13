//! Labeled error types for code built on the frame-processing engine.
//!
//! The hierarchy mirrors the standard error categories (value, key, type,
//! runtime, permission) while adding a uniform, colorized, function-attributed
//! message format. Callers select failures by matching on [`ErrorCategory`]
//! instead of downcasting.

use std::fmt;
use std::sync::LazyLock;

use thiserror::Error;

use crate::style;
use crate::utils::norm_func_name;

/// Result type for frameprops operations.
pub type Result<T, E = CustomError> = std::result::Result<T, E>;

/// The standard category a [`CustomError`] reports under.
///
/// A `Key` error is still a `CustomError`; a handler that only cares about
/// key failures selects it here, the way a catch site would pick the
/// standard class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Value,
    Key,
    Type,
    Runtime,
    Permission,
}

impl ErrorCategory {
    const ALL: [ErrorCategory; 5] = [
        ErrorCategory::Value,
        ErrorCategory::Key,
        ErrorCategory::Type,
        ErrorCategory::Runtime,
        ErrorCategory::Permission,
    ];

    /// Internal type name, before the display transformation.
    const fn raw_name(self) -> &'static str {
        match self {
            ErrorCategory::Value => "CustomValueError",
            ErrorCategory::Key => "CustomKeyError",
            ErrorCategory::Type => "CustomTypeError",
            ErrorCategory::Runtime => "CustomRuntimeError",
            ErrorCategory::Permission => "CustomPermissionError",
        }
    }

    /// Display name with the `Custom` prefix stripped and styling applied.
    ///
    /// Computed once per process from the registration table.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        DISPLAY_NAMES[self as usize].as_str()
    }
}

/// Strips the internal `Custom` prefix and applies terminal styling.
fn display_name_for(raw: &'static str) -> String {
    let name = raw.strip_prefix("Custom").unwrap_or(raw);
    style::error_name(name)
}

static DISPLAY_NAMES: LazyLock<[String; 5]> =
    LazyLock::new(|| ErrorCategory::ALL.map(|category| display_name_for(category.raw_name())));

static FRAME_PROP_NAME: LazyLock<String> = LazyLock::new(|| display_name_for("FramePropError"));

/// Base error type: a category tag, an optional templated message, and an
/// optional originating-function label.
///
/// Messages are templates with `{name}` placeholders, filled at construction
/// through [`CustomError::arg`]. Once raised an error is never mutated.
///
/// ```
/// use frameprops::{CustomError, ErrorCategory};
///
/// let err = CustomError::value("Expected {expected} planes, got {got}")
///     .arg("expected", 3)
///     .arg("got", 1)
///     .function("filters::merge_planes");
///
/// assert_eq!(err.category(), ErrorCategory::Value);
/// assert_eq!(err.message(), Some("Expected 3 planes, got 1"));
/// ```
#[derive(Debug, Clone)]
pub struct CustomError {
    category: ErrorCategory,
    name: &'static str,
    message: Option<String>,
    function: Option<String>,
}

impl CustomError {
    /// A bare signal carrying no message.
    #[must_use]
    pub fn new(category: ErrorCategory) -> Self {
        Self {
            category,
            name: category.display_name(),
            message: None,
            function: None,
        }
    }

    fn with_message(category: ErrorCategory, message: impl fmt::Display) -> Self {
        Self {
            message: Some(message.to_string()),
            ..Self::new(category)
        }
    }

    /// A `Value`-category error with a message template.
    #[must_use]
    pub fn value(message: impl fmt::Display) -> Self {
        Self::with_message(ErrorCategory::Value, message)
    }

    /// A `Key`-category error with a message template.
    #[must_use]
    pub fn key(message: impl fmt::Display) -> Self {
        Self::with_message(ErrorCategory::Key, message)
    }

    /// A `Type`-category error with a message template.
    #[must_use]
    pub fn type_error(message: impl fmt::Display) -> Self {
        Self::with_message(ErrorCategory::Type, message)
    }

    /// A `Runtime`-category error with a message template.
    #[must_use]
    pub fn runtime(message: impl fmt::Display) -> Self {
        Self::with_message(ErrorCategory::Runtime, message)
    }

    /// A `Permission`-category error with a message template.
    #[must_use]
    pub fn permission(message: impl fmt::Display) -> Self {
        Self::with_message(ErrorCategory::Permission, message)
    }

    /// Substitutes the `{name}` placeholder in the message template with
    /// `value`'s string representation.
    #[must_use]
    pub fn arg(mut self, name: &str, value: impl fmt::Display) -> Self {
        if let Some(message) = self.message.as_mut() {
            *message = message.replace(&format!("{{{name}}}"), &value.to_string());
        }
        self
    }

    /// Attaches the originating function, normalized to a short display name.
    #[must_use]
    pub fn function(mut self, function: impl AsRef<str>) -> Self {
        self.function = Some(norm_func_name(function.as_ref()));
        self
    }

    /// Overrides the displayed type name. The name must already be styled.
    pub(crate) fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// The category this error reports under.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    /// The rendered message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The normalized originating-function label, if any.
    #[must_use]
    pub fn function_name(&self) -> Option<&str> {
        self.function.as_deref()
    }
}

impl fmt::Display for CustomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;

        let Some(message) = &self.message else {
            return Ok(());
        };

        write!(f, ": ")?;

        if let Some(function) = &self.function {
            write!(f, "{} ", style::func_header(function))?;
        }

        write!(f, "{message}")
    }
}

impl std::error::Error for CustomError {}

/// How a property lookup failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FramePropErrorKind {
    /// The container has no entry for the key.
    MissingKey,
    /// The entry exists but holds a value of a different type.
    WrongType {
        expected: &'static str,
        actual: &'static str,
    },
    /// The container itself could not be obtained; no type details available.
    Unknown,
}

/// Failure while reading a frame property.
///
/// A `Key`-category error that also records the property key and, for
/// mismatches, both the expected and the actual type name.
#[derive(Debug, Clone, Error)]
#[error("{inner}")]
pub struct FramePropError {
    key: String,
    kind: FramePropErrorKind,
    inner: CustomError,
}

impl FramePropError {
    /// The key has no entry in the property container.
    #[must_use]
    pub fn missing_key(key: impl Into<String>, function: &str) -> Self {
        let key = key.into();
        let inner = CustomError::key("Key {key} not present in props!")
            .named(FRAME_PROP_NAME.as_str())
            .arg("key", &key)
            .function(function);

        Self {
            key,
            kind: FramePropErrorKind::MissingKey,
            inner,
        }
    }

    /// The entry exists but does not hold the expected type.
    #[must_use]
    pub fn wrong_type(
        key: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
        function: &str,
    ) -> Self {
        let key = key.into();
        let inner =
            CustomError::key("Key {key} did not contain expected type: Expected {t} got {prop_t}!")
                .named(FRAME_PROP_NAME.as_str())
                .arg("key", &key)
                .arg("t", expected)
                .arg("prop_t", actual)
                .function(function);

        Self {
            key,
            kind: FramePropErrorKind::WrongType { expected, actual },
            inner,
        }
    }

    /// The lookup failed for a reason other than a missing key or a type
    /// mismatch, e.g. the source's frame could not be materialized.
    #[must_use]
    pub fn unknown(key: impl Into<String>, function: &str) -> Self {
        let key = key.into();
        let inner = CustomError::key("Error while getting prop {key}!")
            .named(FRAME_PROP_NAME.as_str())
            .arg("key", &key)
            .function(function);

        Self {
            key,
            kind: FramePropErrorKind::Unknown,
            inner,
        }
    }

    /// The property key the lookup was for.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// How the lookup failed.
    #[must_use]
    pub fn kind(&self) -> &FramePropErrorKind {
        &self.kind
    }

    /// Always [`ErrorCategory::Key`].
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.inner.category()
    }
}

impl From<FramePropError> for CustomError {
    fn from(err: FramePropError) -> Self {
        err.inner
    }
}
