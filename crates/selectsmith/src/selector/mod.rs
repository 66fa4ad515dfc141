//! CSS selector assembly: typed fragments, ordering rules, rendering.

mod builder;
mod category;

pub use builder::{SelectorBuilder, attr, class, combine, element, id, pseudo_class, pseudo_element};
pub use category::Category;
