//! # Workflows Module
//!
//! High-level operations combining the tables of two templates: the one a ligand
//! started from and the one obtained after growing a fragment onto it.
//!
//! ## Architecture
//!
//! - **New-Atom Detection** ([`diff`]) - Labels present in the grown template only
//! - **Property Transplant** ([`transplant`]) - Copying non-bonded properties of an
//!   initial-template atom onto a grown-template atom, driven by an explicit plan
//! - **Growth Workflow** ([`grow`]) - End-to-end run producing a [`grow::GrowthReport`]

pub mod diff;
pub mod grow;
pub mod transplant;
