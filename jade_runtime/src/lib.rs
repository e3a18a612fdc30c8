#![deny(missing_docs)]
//! Runtime helpers called by compiled Jade templates while they render.
//!
//! Generated template code builds [`Attributes`] for each element, combines them with
//! [`merge`], and turns them into markup with [`attrs`] (or [`attr`] for a single pair).
//! [`classes`] and [`style`] normalise the many shapes a `class` or `style` value may
//! take, [`escape`] makes text safe to embed in HTML, and [`rethrow`] attaches the
//! surrounding template source to an error raised during rendering.
//!
//! Values and the strings produced from them are allocated through a bump allocator
//! ([bumpalo::Bump]) which must be passed to every helper that allocates.
//!
//! # Example
//!
//! ```
//! use jade_runtime::{attrs, bumpalo::Bump, merge, Attributes, Value};
//!
//! let bump = Bump::new();
//! let defaults = Attributes::from_pairs(&bump, [("class", "btn"), ("type", "button")]);
//! let extra = Attributes::from_pairs(
//!     &bump,
//!     [("class", Value::str(&bump, "primary")), ("disabled", Value::Bool(true))],
//! );
//! let merged = merge(&bump, &defaults, &extra);
//! assert_eq!(
//!     attrs(&bump, &merged, true),
//!     r#" class="btn primary" type="button" disabled"#
//! );
//! ```

// Re-export bumpalo for convenience
pub use bumpalo;

mod attributes;
pub use attributes::Attributes;

mod class;
pub use class::classes;

mod escape;
pub use escape::{escape, escape_value};

mod merge;
pub use merge::{merge, merge_all};

mod render;
pub use render::{attr, attrs, write_attrs};

mod rethrow;
pub use rethrow::{context_window, rethrow, RenderError, RethrowConfig, Thrown};

mod style;
pub use style::style;

mod value;
pub use value::{IntoValue, Value};
