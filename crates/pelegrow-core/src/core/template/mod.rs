//! # Template Module
//!
//! Section extraction and table builders for PELE hetero-atom templates.
//!
//! ## Key Components
//!
//! - [`raw`] - The [`Template`] text holder and its section markers
//! - [`section`] - Literal marker-to-marker section extraction
//! - [`atoms`] - Atom table: label to index (plus the full atom row)
//! - [`nonbonded`] - Property table: index to van der Waals radius and partial charge
//! - [`bonds`] - Bond table: directed `(donor, acceptor)` pair to bond length, and the
//!   acceptor-side bond filter
//! - [`error`] - Structural errors raised while reading or slicing a template
//!
//! ## Usage
//!
//! ```ignore
//! use pelegrow::core::template::{Template, atoms::AtomTable, bonds::BondTable};
//!
//! let template = Template::new(text);
//! let atoms = AtomTable::from_template(&template)?;
//! let bonds = BondTable::from_template(&template)?;
//! ```

pub mod atoms;
pub mod bonds;
pub mod error;
pub mod nonbonded;
pub mod raw;
mod scan;
pub mod section;

#[cfg(test)]
pub(crate) mod fixtures;

pub use raw::{Section, Template};
