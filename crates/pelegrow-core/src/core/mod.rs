//! # Core Module
//!
//! Building blocks for reading PELE hetero-atom templates.
//!
//! ## Overview
//!
//! A PELE template is a small fixed-format text file. After a header, its content is
//! divided into ordered sections separated by literal marker lines: a line of `*`
//! before the atom block, then `NBON` (non-bonded parameters), `BOND` and `THET`
//! (angles). The core module extracts those sections and turns their rows into
//! lookup tables.
//!
//! ## Architecture
//!
//! - **Template Parsing** ([`template`]) - Section extraction and the atom, property
//!   and bond table builders
//! - **File I/O** ([`io`]) - Reading templates from a template directory and writing
//!   tables as CSV reports
//!
//! ## Parsing Policy
//!
//! Builders fail fast when a section is missing, since every downstream result would
//! be meaningless, but they skip individual rows that do not match the expected column
//! layout. Real template files carry annotation lines, and those must not abort a run.

pub mod io;
pub mod template;
