//! # PELEGROW Core Library
//!
//! Parsing and differencing of PELE force-field "Hetero Atoms" templates, used
//! when a ligand is grown by attaching a fragment and the parameters of the newly
//! added atoms have to be located or transplanted.
//!
//! ## Architectural Philosophy
//!
//! The library keeps the same two-layer split used across the project:
//!
//! - **[`core`]: The Foundation.** Stateless text processing. A [`core::template::Template`]
//!   is split into marker-delimited sections, and each section is scanned line by line
//!   into an immutable table (atoms, non-bonded properties, bonds). Also hosts the
//!   template reader and CSV report writers.
//!
//! - **[`workflows`]: The Public API.** Composes the tables of an initial and a grown
//!   template into a [`workflows::grow::GrowthReport`]: the new atoms, their
//!   non-bonded properties, the bonds that attach them, and any property transplants
//!   requested through a [`workflows::grow::TransplantPlan`].
//!
//! ```ignore
//! use pelegrow::core::io::reader::read_template;
//! use pelegrow::workflows::grow::{self, TransplantPlan};
//!
//! let initial = read_template("mbez", "DataLocal/Templates/OPLS2005/HeteroAtoms/")?;
//! let grown = read_template("pyjz", "DataLocal/Templates/OPLS2005/HeteroAtoms/")?;
//! let plan = TransplantPlan::new().with("_H8_", "_C8_");
//! let report = grow::run(&initial, &grown, &plan)?;
//! ```

pub mod core;
pub mod workflows;
