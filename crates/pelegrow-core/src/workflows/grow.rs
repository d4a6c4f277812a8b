use super::diff::detect_new_atoms;
use super::transplant::TransplantError;
use crate::core::template::Template;
use crate::core::template::atoms::AtomTable;
use crate::core::template::bonds::{BondTable, filter_bonds};
use crate::core::template::error::TemplateError;
use crate::core::template::nonbonded::PropertyTable;
use thiserror::Error;
use tracing::{debug, info, instrument};

pub use super::transplant::TransplantPlan;

#[derive(Debug, Error)]
pub enum GrowError {
    #[error("Template '{template}' could not be parsed: {source}")]
    Template {
        template: String,
        #[source]
        source: TemplateError,
    },
    #[error("Property transplant failed: {source}")]
    Transplant {
        #[from]
        source: TransplantError,
    },
}

/// Everything a growing step needs to know about the atoms a fragment introduced.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthReport {
    pub initial_atoms: AtomTable,
    pub final_atoms: AtomTable,
    /// Atoms of the final template whose label is absent from the initial one.
    pub new_atoms: AtomTable,
    /// Non-bonded properties of the new atoms, read from the final template.
    pub new_atom_properties: PropertyTable,
    /// Bonds of the final template whose acceptor is a new atom.
    pub new_bonds: BondTable,
    /// Full property table of the final template after applying the transplant plan.
    /// `None` when the plan is empty.
    pub transplanted_properties: Option<PropertyTable>,
}

fn template_label(template: &Template) -> String {
    template.name().unwrap_or("<unnamed>").to_string()
}

fn parsed<T>(template: &Template, result: Result<T, TemplateError>) -> Result<T, GrowError> {
    result.map_err(|source| GrowError::Template {
        template: template_label(template),
        source,
    })
}

/// Compares an initial template with the template obtained after growing a fragment.
///
/// # Errors
///
/// Returns [`GrowError::Template`] if either template lacks a required section, and
/// [`GrowError::Transplant`] if a correspondence of `plan` cannot be resolved.
#[instrument(
    skip_all,
    name = "growth_workflow",
    fields(
        initial = initial.name().unwrap_or_default(),
        grown = grown.name().unwrap_or_default()
    )
)]
pub fn run(
    initial: &Template,
    grown: &Template,
    plan: &TransplantPlan,
) -> Result<GrowthReport, GrowError> {
    let initial_atoms = parsed(initial, AtomTable::from_template(initial))?;
    let final_atoms = parsed(grown, AtomTable::from_template(grown))?;
    debug!(
        "Atom tables built: {} initial, {} final.",
        initial_atoms.len(),
        final_atoms.len()
    );

    let new_atoms = detect_new_atoms(&initial_atoms, &final_atoms);
    let new_atom_properties = parsed(grown, PropertyTable::for_atoms(grown, &new_atoms))?;

    let final_bonds = parsed(grown, BondTable::from_template(grown))?;
    let new_bonds = filter_bonds(&new_atoms.indices(), &final_bonds);

    let transplanted_properties = if plan.is_empty() {
        None
    } else {
        let initial_properties = parsed(initial, PropertyTable::for_atoms(initial, &initial_atoms))?;
        let final_properties = parsed(grown, PropertyTable::for_atoms(grown, &final_atoms))?;
        let updated = plan.apply(
            &initial_atoms,
            &final_atoms,
            &initial_properties,
            &final_properties,
        )?;
        debug!("Applied {} property transplant(s).", plan.len());
        Some(updated)
    };

    info!(
        "Found {} new atom(s), {} with properties, {} attaching bond(s).",
        new_atoms.len(),
        new_atom_properties.len(),
        new_bonds.len()
    );

    Ok(GrowthReport {
        initial_atoms,
        final_atoms,
        new_atoms,
        new_atom_properties,
        new_bonds,
        transplanted_properties,
    })
}
