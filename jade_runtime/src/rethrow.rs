//! Attaching template source context to errors raised while rendering.

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings for [`rethrow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RethrowConfig {
    /// Whether the template source may be read from disk when it was not supplied.
    ///
    /// Hosts without filesystem access (sandboxes, browsers) should turn this off.
    pub filesystem: bool,
    /// Number of lines shown before and after the failing line.
    pub context_lines: usize,
    /// Name used in place of the filename when there is none.
    pub default_label: String,
}
impl Default for RethrowConfig {
    fn default() -> Self {
        RethrowConfig {
            filesystem: true,
            context_lines: 3,
            default_label: String::from("Jade"),
        }
    }
}

/// An error raised while rendering a template.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RenderError {
    /// The error message, including any source context that has been attached.
    pub message: String,
    /// The template file the error was raised in, once known.
    pub path: Option<PathBuf>,
    /// The underlying cause, if any.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}
impl RenderError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        RenderError {
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create an error wrapping `source`, using its message.
    pub fn from_source(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        RenderError {
            message: source.to_string(),
            path: None,
            source: Some(Box::new(source)),
        }
    }
}

/// Anything generated template code can raise.
#[derive(Debug, Error)]
pub enum Thrown {
    /// A render error. [`rethrow`] attaches source context to these.
    #[error(transparent)]
    Error(#[from] RenderError),
    /// A plain value raised by template code. Passed through untouched.
    #[error("{0}")]
    Value(serde_json::Value),
}

/// Attach source context to `thrown` and hand it back to be raised again.
///
/// Plain [`Thrown::Value`]s are returned unchanged. For a [`Thrown::Error`]:
///
/// - Without a non-empty `source`, and with no `filename` or with [`RethrowConfig::filesystem`] off,
///   ` on line <lineno>` is appended to the message.
/// - Otherwise the source is taken from `source`, or read from `filename` when
///   `source` is missing or empty, and the
///   message becomes `<filename>:<lineno>`, a window of numbered source lines around
///   `lineno` (see [`context_window`]), a blank line, then the original message. The
///   error's path is set to `filename`. If the file cannot be read, the error gets the
///   line-only message instead.
///
/// ```rust
/// use jade_runtime::{rethrow, RenderError, RethrowConfig, Thrown};
///
/// let config = RethrowConfig::default();
/// let thrown = rethrow(&config, RenderError::new("boom").into(), None, 5, None);
/// assert_eq!(thrown.to_string(), "boom on line 5");
/// ```
pub fn rethrow(
    config: &RethrowConfig,
    thrown: Thrown,
    filename: Option<&Path>,
    lineno: usize,
    source: Option<&str>,
) -> Thrown {
    let mut err = match thrown {
        Thrown::Error(err) => err,
        other => return other,
    };

    let source = match (source.filter(|s| !s.is_empty()), filename) {
        (Some(source), _) => source.to_string(),
        (None, Some(filename)) if config.filesystem => match std::fs::read_to_string(filename) {
            Ok(source) => source,
            Err(e) => {
                debug!(
                    "could not read template source {}: {e}; reporting line only",
                    filename.display()
                );
                return rethrow(config, Thrown::Error(err), None, lineno, None);
            }
        },
        _ => {
            err.message.push_str(&format!(" on line {lineno}"));
            return Thrown::Error(err);
        }
    };

    let context = context_window(&source, lineno, config.context_lines);
    let label = match filename {
        Some(filename) => filename.display().to_string(),
        None => config.default_label.clone(),
    };
    err.path = filename.map(Path::to_path_buf);
    err.message = format!("{label}:{lineno}\n{context}\n\n{}", err.message);
    Thrown::Error(err)
}

/// Render the lines of `source` around the 1-indexed `lineno`.
///
/// Covers the 0-indexed lines `lineno - context .. lineno + context`, clamped to the
/// source: `context - 1` lines before the failing line and `context` lines after it.
/// Each line is written as `    <n>| <text>`, with `  > ` in place of the leading
/// spaces on the failing line.
///
/// ```rust
/// use jade_runtime::context_window;
///
/// let window = context_window("a\nb\nc\nd", 2, 2);
/// assert_eq!(window, "    1| a\n  > 2| b\n    3| c\n    4| d");
/// ```
pub fn context_window(source: &str, lineno: usize, context: usize) -> String {
    let lines: Vec<&str> = source.split('\n').collect();
    let end = lines.len().min(lineno.saturating_add(context));
    let start = lineno.saturating_sub(context).min(end);

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let curr = start + i + 1;
            let marker = if curr == lineno { "  > " } else { "    " };
            format!("{marker}{curr}| {line}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
