//! Monthly tax declaration (PPP-PD) projection.
//!
//! This module projects a finished calculation into the fixed field set of
//! the monthly employer tax filing and renders it as the declaration XML
//! document. The projection rounds, selects and renames — it never
//! recomputes any monetary figure.

mod projector;
mod xml;

pub use projector::{DeclarationFields, project};
