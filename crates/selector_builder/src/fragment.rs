//! Fragment kinds of a compound selector.
//! Spec: <https://www.w3.org/TR/selectors-3/>

use core::fmt;

/// The kind of one fragment appended to a compound selector.
///
/// Declaration order is the required append order inside one compound
/// selector, so the derived `Ord` IS the ordering contract:
/// `Element < Id < Class < Attribute < PseudoClass < PseudoElement`.
/// Spec: Section 5–8 — sequences of simple selectors
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SelectorFragmentKind {
    /// Type selector, e.g. `div`.
    /// Spec: Section 5 — Type selectors
    Element,
    /// ID selector, e.g. `#main`.
    /// Spec: Section 7 — ID selectors
    Id,
    /// Class selector, e.g. `.container`.
    /// Spec: Section 6 — Class selectors
    Class,
    /// Attribute selector, e.g. `[href$=".png"]`.
    /// Spec: Section 8 — Attribute selectors
    Attribute,
    /// Pseudo-class, e.g. `:focus`.
    PseudoClass,
    /// Pseudo-element, e.g. `::before`.
    PseudoElement,
}

impl SelectorFragmentKind {
    /// True for kinds that may occur at most once per compound selector.
    #[inline]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Append one punctuated fragment of this kind to `out`.
    ///
    /// `value` is opaque: identifiers and attribute expressions are not
    /// validated, only wrapped in the per-kind punctuation.
    pub(crate) fn write_fragment(self, out: &mut String, value: &str) {
        match self {
            Self::Element => {}
            Self::Id => out.push('#'),
            Self::Class => out.push('.'),
            Self::Attribute => out.push('['),
            Self::PseudoClass => out.push(':'),
            Self::PseudoElement => out.push_str("::"),
        }
        out.push_str(value);
        if self == Self::Attribute {
            out.push(']');
        }
    }
}

impl fmt::Display for SelectorFragmentKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
        };
        formatter.write_str(name)
    }
}
