use crate::core::template::atoms::AtomTable;
use crate::core::template::nonbonded::{AtomProperties, PropertyTable};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Which side of a transplant a lookup failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSide {
    Source,
    Destination,
}

impl std::fmt::Display for TableSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableSide::Source => write!(f, "source"),
            TableSide::Destination => write!(f, "destination"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransplantError {
    #[error("Atom '{label}' not found in the {side} atom table")]
    MissingAtomLabel { label: String, side: TableSide },
    #[error("No non-bonded properties for atom '{label}' (index {index}) in the source property table")]
    MissingPropertyIndex { label: String, index: usize },
}

/// Copies the properties of `source_label` onto `dest_label`.
///
/// The source atom is resolved through `source_atoms` and `source_properties`; the values
/// found there are written into `dest_properties` under the index that `dest_atoms`
/// assigns to `dest_label`, replacing any existing entry.
///
/// # Return
///
/// Returns the destination entry that was replaced, if any.
///
/// # Errors
///
/// Returns [`TransplantError`] if either label or the source properties are missing. All
/// lookups happen before the write, so `dest_properties` is left untouched on error.
pub fn transplant_property(
    source_label: &str,
    dest_label: &str,
    source_atoms: &AtomTable,
    dest_atoms: &AtomTable,
    source_properties: &PropertyTable,
    dest_properties: &mut PropertyTable,
) -> Result<Option<AtomProperties>, TransplantError> {
    let source_index =
        source_atoms
            .index_of(source_label)
            .ok_or_else(|| TransplantError::MissingAtomLabel {
                label: source_label.to_string(),
                side: TableSide::Source,
            })?;
    let dest_index =
        dest_atoms
            .index_of(dest_label)
            .ok_or_else(|| TransplantError::MissingAtomLabel {
                label: dest_label.to_string(),
                side: TableSide::Destination,
            })?;
    let properties = *source_properties.get(source_index).ok_or_else(|| {
        TransplantError::MissingPropertyIndex {
            label: source_label.to_string(),
            index: source_index,
        }
    })?;

    debug!(
        "Transplanting {} ({}) onto {} ({}): vdw {:.4}, charge {:.4}",
        source_label, source_index, dest_label, dest_index, properties.vdw_radius, properties.charge
    );
    Ok(dest_properties.insert(dest_index, properties))
}

/// A source/destination label pair of a [`TransplantPlan`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Correspondence {
    pub source: String,
    pub destination: String,
}

/// An ordered list of atom correspondences whose properties are carried from the initial
/// template to the grown one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransplantPlan {
    #[serde(default, rename = "correspondence")]
    correspondences: Vec<Correspondence>,
}

#[derive(Debug, Error)]
pub enum PlanLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

impl TransplantPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl Into<String>, destination: impl Into<String>) -> Self {
        self.push(source, destination);
        self
    }

    pub fn push(&mut self, source: impl Into<String>, destination: impl Into<String>) {
        self.correspondences.push(Correspondence {
            source: source.into(),
            destination: destination.into(),
        });
    }

    pub fn extend(&mut self, other: TransplantPlan) {
        self.correspondences.extend(other.correspondences);
    }

    /// Loads a plan from a TOML file holding `[[correspondence]]` tables with `source`
    /// and `destination` keys.
    pub fn load(path: &Path) -> Result<Self, PlanLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| PlanLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| PlanLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn correspondences(&self) -> &[Correspondence] {
        &self.correspondences
    }

    pub fn is_empty(&self) -> bool {
        self.correspondences.is_empty()
    }

    pub fn len(&self) -> usize {
        self.correspondences.len()
    }

    /// Applies every correspondence in order and returns the updated table.
    ///
    /// Works on a copy of `dest_properties`; the first failing correspondence aborts the
    /// whole plan.
    pub fn apply(
        &self,
        source_atoms: &AtomTable,
        dest_atoms: &AtomTable,
        source_properties: &PropertyTable,
        dest_properties: &PropertyTable,
    ) -> Result<PropertyTable, TransplantError> {
        let mut updated = dest_properties.clone();
        for pair in &self.correspondences {
            transplant_property(
                &pair.source,
                &pair.destination,
                source_atoms,
                dest_atoms,
                source_properties,
                &mut updated,
            )?;
        }
        Ok(updated)
    }
}
