//! CSS selector string assembly with ordering and uniqueness rules.
//!
//! This crate provides a chainable builder for CSS selector strings, plus a
//! couple of small companion utilities:
//!
//! - **Selectors**: element, id, class, attribute, pseudo-class and
//!   pseudo-element fragments, validated against the selector grammar order
//! - **Combinators**: join two built selectors with `+`, `~`, `>` or a space
//! - **Geometry**: a minimal rectangle value type
//! - **JSON helpers**: compact serialize/deserialize wrappers over serde_json
//!
//! # Example
//!
//! ```
//! use selectsmith::prelude::*;
//!
//! let selector = combine(
//!     element("div").id("main")?,
//!     "+",
//!     element("table").id("data")?,
//! )
//! .render();
//! assert_eq!(selector, "div#main + table#data");
//! # Ok::<(), selectsmith::Error>(())
//! ```
//!
//! Rendering a selector empties the builder: the same instance is reusable
//! for the next expression, and a second `render` in a row returns `""`.

pub mod geometry;
pub mod json;
pub mod selector;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used items.
pub mod prelude {
    pub use crate::geometry::Rectangle;
    pub use crate::json::{deserialize, serialize};
    pub use crate::selector::{
        Category, SelectorBuilder, attr, class, combine, element, id, pseudo_class, pseudo_element,
    };
    pub use crate::{Error, Result};
}
