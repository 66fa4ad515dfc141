//! Selector fragment categories.

use std::fmt;

/// The six recognized selector fragment kinds, in grammar order.
///
/// A selector is assembled left to right: element, then id, then classes,
/// then attributes, then pseudo-classes, then the pseudo-element. The
/// discriminant order encodes that sequence, so categories compare by
/// grammar position: `Category::Element < Category::Id`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Type selector (tag name, no prefix).
    Element,
    /// ID selector (`#id`).
    Id,
    /// Class selector (`.class`), repeatable.
    Class,
    /// Attribute selector (`[expr]`), repeatable.
    Attribute,
    /// Pseudo-class selector (`:name`), repeatable.
    PseudoClass,
    /// Pseudo-element selector (`::name`).
    PseudoElement,
}

impl Category {
    /// Whether a selector may hold more than one fragment of this kind.
    pub fn is_repeatable(self) -> bool {
        matches!(
            self,
            Category::Class | Category::Attribute | Category::PseudoClass
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Element => write!(f, "element"),
            Category::Id => write!(f, "id"),
            Category::Class => write!(f, "class"),
            Category::Attribute => write!(f, "attribute"),
            Category::PseudoClass => write!(f, "pseudo-class"),
            Category::PseudoElement => write!(f, "pseudo-element"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_compare_by_grammar_position() {
        assert!(Category::Element < Category::Id);
        assert!(Category::Id < Category::Class);
        assert!(Category::Class < Category::Attribute);
        assert!(Category::Attribute < Category::PseudoClass);
        assert!(Category::PseudoClass < Category::PseudoElement);
    }

    #[test]
    fn only_class_attribute_and_pseudo_class_repeat() {
        assert!(!Category::Element.is_repeatable());
        assert!(!Category::Id.is_repeatable());
        assert!(Category::Class.is_repeatable());
        assert!(Category::Attribute.is_repeatable());
        assert!(Category::PseudoClass.is_repeatable());
        assert!(!Category::PseudoElement.is_repeatable());
    }
}
