//! Failure kinds for compound-selector construction.

use crate::fragment::SelectorFragmentKind;
use core::fmt;
use std::error::Error;

/// Errors raised while appending a fragment to a compound selector.
///
/// Both variants are raised before any text is written, so the receiver
/// builder is left untouched and the caller may keep using it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorError {
    /// A kind limited to one occurrence was appended a second time.
    /// Reported in preference to [`SelectorError::OutOfOrderFragment`]
    /// when a duplicate is also out of order.
    DuplicateUniqueFragment(SelectorFragmentKind),
    /// A fragment was appended after a kind that must follow it.
    OutOfOrderFragment {
        /// The kind being appended.
        fragment: SelectorFragmentKind,
        /// The later-ordered kind already present in the compound selector.
        follows: SelectorFragmentKind,
    },
}

impl fmt::Display for SelectorError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateUniqueFragment(fragment) => write!(
                formatter,
                "duplicate {fragment} selector: element, id and pseudo-element \
                 should not occur more than one time inside the selector"
            ),
            Self::OutOfOrderFragment { fragment, follows } => write!(
                formatter,
                "{fragment} selector after {follows} selector: selector parts \
                 should be arranged in the following order: element, id, class, \
                 attribute, pseudo-class, pseudo-element"
            ),
        }
    }
}

impl Error for SelectorError {}
