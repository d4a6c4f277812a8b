//! Provides input/output functionality for PELE templates and derived tables.
//!
//! Templates are read whole from a template directory. Derived tables can be written
//! as CSV reports so they can be consumed by the template-building step of a
//! growing workflow.

pub mod reader;
pub mod report;
