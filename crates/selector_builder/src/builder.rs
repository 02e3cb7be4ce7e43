//! Immutable fluent construction of CSS selector strings.
//! Spec: <https://www.w3.org/TR/selectors-3/>

use crate::error::SelectorError;
use crate::fragment::SelectorFragmentKind;
use core::fmt;

/// A CSS selector under construction.
///
/// Values are immutable: every append returns a brand-new builder and the
/// receiver stays valid, so one shared prefix can branch into any number of
/// independent selectors. Within one compound selector the fragment kinds
/// must be non-decreasing under [`SelectorFragmentKind`]'s order, and
/// element, id and pseudo-element may each occur at most once.
///
/// Spec: Section 5–8 — simple selector sequences; Section 11 — combinators
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    /// Exact CSS text accumulated so far, possibly spanning several
    /// combined compound selectors.
    serialized: String,
    /// Kinds appended to the current compound selector, in call order.
    /// Always non-decreasing; empty again after [`SelectorBuilder::combine`].
    fragments: Vec<SelectorFragmentKind>,
}

impl SelectorBuilder {
    /// The shared empty starting value. Constant and freely reusable: it is
    /// a plain value, not a process-wide singleton, and every construction
    /// chain started from it is independent.
    pub const EMPTY: Self = Self {
        serialized: String::new(),
        fragments: Vec::new(),
    };

    /// Create a new empty builder.
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Append a type selector fragment, e.g. `div`.
    ///
    /// When text is already present a single space is inserted before the
    /// name: a non-leading element is a descendant join. With ordering
    /// enforced this only arises on builders produced by
    /// [`SelectorBuilder::combine`].
    /// Spec: Section 5 — Type selectors
    ///
    /// # Errors
    /// [`SelectorError::DuplicateUniqueFragment`] if an element fragment was
    /// already appended; [`SelectorError::OutOfOrderFragment`] if any other
    /// fragment was.
    pub fn element(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorFragmentKind::Element, value)
    }

    /// Append an ID selector fragment as `#value`.
    /// Spec: Section 7 — ID selectors
    ///
    /// # Errors
    /// [`SelectorError::DuplicateUniqueFragment`] if an id fragment was
    /// already appended; [`SelectorError::OutOfOrderFragment`] if a
    /// later-ordered fragment was.
    pub fn id(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorFragmentKind::Id, value)
    }

    /// Append a class selector fragment as `.value`. May repeat.
    /// Spec: Section 6 — Class selectors
    ///
    /// # Errors
    /// [`SelectorError::OutOfOrderFragment`] if a later-ordered fragment was
    /// already appended.
    pub fn class(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorFragmentKind::Class, value)
    }

    /// Append an attribute selector fragment as `[value]`. The expression
    /// inside the brackets is opaque and may repeat.
    /// Spec: Section 8 — Attribute selectors
    ///
    /// # Errors
    /// [`SelectorError::OutOfOrderFragment`] if a pseudo-class or
    /// pseudo-element fragment was already appended.
    pub fn attr(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorFragmentKind::Attribute, value)
    }

    /// Append a pseudo-class fragment as `:value`. May repeat.
    ///
    /// # Errors
    /// [`SelectorError::OutOfOrderFragment`] if a pseudo-element fragment
    /// was already appended.
    pub fn pseudo_class(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorFragmentKind::PseudoClass, value)
    }

    /// Append a pseudo-element fragment as `::value`.
    ///
    /// # Errors
    /// [`SelectorError::DuplicateUniqueFragment`] if a pseudo-element
    /// fragment was already appended.
    pub fn pseudo_element(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorFragmentKind::PseudoElement, value)
    }

    /// Join two finished selectors with a combinator token.
    ///
    /// The result is `left + " " + combinator + " " + right`. The token is
    /// opaque (typically one of `' '`, `'>'`, `'+'`, `'~'`, never validated)
    /// and composition nests arbitrarily. The combined value carries an
    /// empty fragment history: it represents a finished complex selector,
    /// and appending fragments to it restarts ordering and cardinality
    /// tracking from scratch.
    /// Spec: Section 11 — Combinators
    pub fn combine(left: &Self, combinator: &str, right: &Self) -> Self {
        let mut serialized = String::with_capacity(
            left.serialized
                .len()
                .saturating_add(combinator.len())
                .saturating_add(right.serialized.len())
                .saturating_add(2),
        );
        serialized.push_str(&left.serialized);
        serialized.push(' ');
        serialized.push_str(combinator);
        serialized.push(' ');
        serialized.push_str(&right.serialized);
        log::trace!("combined selectors into {serialized:?}");
        Self {
            serialized,
            fragments: Vec::new(),
        }
    }

    /// The accumulated CSS text, verbatim. Idempotent.
    #[inline]
    pub fn stringify(&self) -> &str {
        &self.serialized
    }

    /// Validate, then produce the appended copy. The duplicate check runs
    /// before the ordering check so a duplicate unique fragment that is
    /// also out of order reports the duplicate. The fragment history is
    /// always non-decreasing, so comparing against its last entry is a
    /// full ordering check.
    fn append(&self, kind: SelectorFragmentKind, value: &str) -> Result<Self, SelectorError> {
        if kind.is_unique() && self.fragments.contains(&kind) {
            return Err(SelectorError::DuplicateUniqueFragment(kind));
        }
        if let Some(&last) = self.fragments.last() {
            if last > kind {
                return Err(SelectorError::OutOfOrderFragment {
                    fragment: kind,
                    follows: last,
                });
            }
        }

        let mut appended = self.clone();
        if kind == SelectorFragmentKind::Element && !appended.serialized.is_empty() {
            // Descendant join before a non-leading element name.
            appended.serialized.push(' ');
        }
        kind.write_fragment(&mut appended.serialized, value);
        appended.fragments.push(kind);
        log::trace!("appended {kind} fragment; selector is now {:?}", appended.serialized);
        Ok(appended)
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.serialized)
    }
}
