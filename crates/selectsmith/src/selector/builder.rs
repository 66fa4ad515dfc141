//! Chainable CSS selector assembly.

use std::mem;

use super::Category;
use crate::error::{Error, Result};

/// Builds a CSS selector string from typed fragments.
///
/// Fragments must arrive in grammar order (see [`Category`]); element, id and
/// pseudo-element fragments may appear at most once per selector. Methods
/// consume and return the builder so chains read like the selector itself:
///
/// ```
/// use selectsmith::selector::element;
///
/// let selector = element("a")
///     .attr(r#"href$=".png""#)?
///     .pseudo_class("focus")?
///     .render();
/// assert_eq!(selector, r#"a[href$=".png"]:focus"#);
/// # Ok::<(), selectsmith::Error>(())
/// ```
///
/// [`render`](SelectorBuilder::render) empties the builder as a side effect,
/// so a single instance can be reused across selector expressions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    /// Result of a `combine` call; the next `render` returns this instead of
    /// assembling the fragment slots.
    combined: Option<String>,
    /// Latest category written so far, for the ordering check.
    latest: Option<Category>,
}

impl SelectorBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the type (tag name) fragment.
    pub fn element(mut self, name: impl Into<String>) -> Result<Self> {
        if self.element.is_some() {
            return Err(Error::duplicate(Category::Element));
        }
        self.admit(Category::Element)?;
        self.element = Some(name.into());
        Ok(self)
    }

    /// Set the id fragment, rendered with a `#` prefix.
    pub fn id(mut self, name: impl Into<String>) -> Result<Self> {
        if self.id.is_some() {
            return Err(Error::duplicate(Category::Id));
        }
        self.admit(Category::Id)?;
        self.id = Some(name.into());
        Ok(self)
    }

    /// Add a class fragment, rendered with a `.` prefix.
    pub fn class(mut self, name: impl Into<String>) -> Result<Self> {
        self.admit(Category::Class)?;
        self.classes.push(name.into());
        Ok(self)
    }

    /// Add an attribute fragment, rendered wrapped in `[` and `]`.
    ///
    /// The expression is stored verbatim: nothing validates or escapes its
    /// content.
    pub fn attr(mut self, expr: impl Into<String>) -> Result<Self> {
        self.admit(Category::Attribute)?;
        self.attributes.push(expr.into());
        Ok(self)
    }

    /// Add a pseudo-class fragment, rendered with a `:` prefix.
    pub fn pseudo_class(mut self, name: impl Into<String>) -> Result<Self> {
        self.admit(Category::PseudoClass)?;
        self.pseudo_classes.push(name.into());
        Ok(self)
    }

    /// Set the pseudo-element fragment, rendered with a `::` prefix.
    pub fn pseudo_element(mut self, name: impl Into<String>) -> Result<Self> {
        if self.pseudo_element.is_some() {
            return Err(Error::duplicate(Category::PseudoElement));
        }
        self.admit(Category::PseudoElement)?;
        self.pseudo_element = Some(name.into());
        Ok(self)
    }

    /// Assemble the selector string and reset the builder.
    ///
    /// Fragments are emitted in grammar order with their prefixes and no
    /// separators; absent categories are skipped, so an empty builder renders
    /// `""`. If a [`combine`] result is pending it is returned instead of the
    /// fragment slots. Either way the builder is left as-new afterwards —
    /// rendering twice in a row yields the selector, then `""`.
    pub fn render(&mut self) -> String {
        let state = mem::take(self);

        if let Some(combined) = state.combined {
            return combined;
        }

        let mut out = String::new();
        if let Some(element) = state.element {
            out.push_str(&element);
        }
        if let Some(id) = state.id {
            out.push('#');
            out.push_str(&id);
        }
        for class in state.classes {
            out.push('.');
            out.push_str(&class);
        }
        for attr in state.attributes {
            out.push('[');
            out.push_str(&attr);
            out.push(']');
        }
        for pseudo in state.pseudo_classes {
            out.push(':');
            out.push_str(&pseudo);
        }
        if let Some(pseudo) = state.pseudo_element {
            out.push_str("::");
            out.push_str(&pseudo);
        }

        tracing::trace!(selector = %out, "rendered selector");
        out
    }

    /// Ordering gate: a fragment may not belong to an earlier category than
    /// the latest one already written.
    fn admit(&mut self, category: Category) -> Result<()> {
        if let Some(latest) = self.latest {
            if category < latest {
                return Err(Error::out_of_order(category, latest));
            }
        }
        self.latest = Some(category);
        Ok(())
    }
}

/// Start a selector with a type (tag name) fragment.
pub fn element(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder {
        element: Some(name.into()),
        latest: Some(Category::Element),
        ..Default::default()
    }
}

/// Start a selector with an id fragment.
pub fn id(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder {
        id: Some(name.into()),
        latest: Some(Category::Id),
        ..Default::default()
    }
}

/// Start a selector with a class fragment.
pub fn class(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder {
        classes: vec![name.into()],
        latest: Some(Category::Class),
        ..Default::default()
    }
}

/// Start a selector with an attribute fragment.
pub fn attr(expr: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder {
        attributes: vec![expr.into()],
        latest: Some(Category::Attribute),
        ..Default::default()
    }
}

/// Start a selector with a pseudo-class fragment.
pub fn pseudo_class(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder {
        pseudo_classes: vec![name.into()],
        latest: Some(Category::PseudoClass),
        ..Default::default()
    }
}

/// Start a selector with a pseudo-element fragment.
pub fn pseudo_element(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder {
        pseudo_element: Some(name.into()),
        latest: Some(Category::PseudoElement),
        ..Default::default()
    }
}

/// Join two selectors with a combinator token.
///
/// Both operands are rendered eagerly, each observing its reset-on-render
/// contract. The token is placed between them with a single space on each
/// side and is otherwise opaque: `" "`, `"+"`, `"~"` and `">"` are the usual
/// choices but nothing validates the content. The joined string is held by
/// the returned builder and produced by its next
/// [`render`](SelectorBuilder::render) call.
pub fn combine(
    mut a: SelectorBuilder,
    combinator: &str,
    mut b: SelectorBuilder,
) -> SelectorBuilder {
    let joined = format!("{} {} {}", a.render(), combinator, b.render());
    tracing::debug!(selector = %joined, "combined selectors");
    SelectorBuilder {
        combined: Some(joined),
        ..Default::default()
    }
}
