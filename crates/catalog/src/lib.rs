//! # autodiag-catalog
//!
//! Static data the diagnosis pipeline reads but does not own:
//!
//! - the **observation catalog**: known symptom ids, their default strength,
//!   domain grouping and safety-critical flag;
//! - the **family mapping table**: for each observation, one primary family
//!   and an ordered list of secondary (spillover) families.
//!
//! A built-in catalog ships with the crate; an external one can be loaded
//! from JSON. Either way it is validated once and then only read.

#![deny(unsafe_code)]

pub mod builtin;
pub mod error;
pub mod ids;
pub mod model;

pub use builtin::builtin_document;
pub use error::{CatalogError, CatalogResult};
pub use ids::SAFETY_TRIGGERS;
pub use model::{Catalog, CatalogDocument, FamilyMapping, ObservationDomain, ObservationSpec};
