//! # autodiag-refine
//!
//! Narrows a winning hypothesis family to a named component.
//!
//! Each family owns an **ordered** list of [`RefinementRule`]s. The first
//! rule whose required observations are all YES and whose excluded
//! observations are all NO or unanswered wins. Specific rules must come
//! before general ones. No match leaves the diagnosis at family level.

#![deny(unsafe_code)]

pub mod builtin;
pub mod error;
pub mod table;

pub use error::{RefineError, RefineResult};
pub use table::{RefinementRule, RefinementTable};
