//! CSS selector string construction.
//! Spec: <https://www.w3.org/TR/selectors-3/>
//!
//! This crate builds selector text; it never parses selectors or matches
//! them against a document tree. The surface is a single immutable value
//! type, [`SelectorBuilder`]:
//! - One append method per simple-selector kind (type, id, class,
//!   attribute, pseudo-class, pseudo-element)
//! - Ordering and cardinality enforcement within a compound selector
//! - Combinator composition of finished selectors into complex selectors
//!
//! Every append returns a fresh builder and leaves the receiver usable,
//! so a shared prefix can branch into independent selectors.

mod builder;
mod error;
mod fragment;

// Re-export public API
pub use builder::SelectorBuilder;
pub use error::SelectorError;
pub use fragment::SelectorFragmentKind;
