use super::atoms::AtomTable;
use super::error::TemplateError;
use super::raw::{Section, Template};
use super::scan::{parse_decimal, parse_index};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// The two non-bonded properties carried over between templates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomProperties {
    pub vdw_radius: f64,
    pub charge: f64,
}

/// One complete row of the `NBON` section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonBondedRecord {
    pub index: usize,
    pub vdw_radius: f64,
    pub well_depth: f64,
    pub charge: f64,
    /// Trailing implicit-solvent columns, kept verbatim.
    pub solvation: [f64; 4],
}

impl NonBondedRecord {
    /// Parses a row `index radius(4 decimals) depth charge s1 s2 s3 s4`. Extra trailing
    /// columns are ignored.
    pub fn parse(line: &str) -> Option<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 8 {
            return None;
        }

        let index = parse_index(tokens[0])?;
        let vdw_radius = parse_decimal(tokens[1], false, Some(4))?;
        let well_depth = parse_decimal(tokens[2], false, None)?;
        let charge = parse_decimal(tokens[3], true, None)?;
        let mut solvation = [0.0; 4];
        for (slot, token) in solvation.iter_mut().zip(&tokens[4..8]) {
            *slot = parse_decimal(token, true, None)?;
        }

        Some(Self {
            index,
            vdw_radius,
            well_depth,
            charge,
            solvation,
        })
    }

    pub fn properties(&self) -> AtomProperties {
        AtomProperties {
            vdw_radius: self.vdw_radius,
            charge: self.charge,
        }
    }
}

/// Mapping from atom index to its van der Waals radius and partial charge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyTable {
    entries: BTreeMap<usize, AtomProperties>,
}

impl PropertyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from a template, keeping only rows whose index is in `indices`.
    pub fn from_template(
        template: &Template,
        indices: &BTreeSet<usize>,
    ) -> Result<Self, TemplateError> {
        let section = template.section(Section::NonBonded)?;
        Ok(Self::from_section(section, indices))
    }

    /// Builds the table for the atoms of `atoms`, typically an atom table or a subset of one.
    pub fn for_atoms(template: &Template, atoms: &AtomTable) -> Result<Self, TemplateError> {
        Self::from_template(template, &atoms.indices())
    }

    pub fn from_section(section: &str, indices: &BTreeSet<usize>) -> Self {
        let entries = parse_records(section)
            .filter(|record| indices.contains(&record.index))
            .map(|record| (record.index, record.properties()))
            .collect();
        Self { entries }
    }

    pub fn get(&self, index: usize) -> Option<&AtomProperties> {
        self.entries.get(&index)
    }

    /// Sets the properties of `index`, returning the previous value if there was one.
    pub fn insert(&mut self, index: usize, properties: AtomProperties) -> Option<AtomProperties> {
        self.entries.insert(index, properties)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &AtomProperties)> {
        self.entries.iter().map(|(index, props)| (*index, props))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_records(section: &str) -> impl Iterator<Item = NonBondedRecord> + '_ {
    section.lines().filter_map(|line| {
        let record = NonBondedRecord::parse(line);
        if record.is_none() && !line.trim().is_empty() {
            debug!("Skipping unrecognized NBON row: {:?}", line.trim());
        }
        record
    })
}

/// Returns every parsable `NBON` row of a template, in file order.
pub fn non_bonded_records(template: &Template) -> Result<Vec<NonBondedRecord>, TemplateError> {
    Ok(parse_records(template.section(Section::NonBonded)?).collect())
}

/// Builds the property table of a template given as plain text, filtered to the indices
/// held by `filter`.
pub fn build_property_table(
    filter: &AtomTable,
    text: &str,
) -> Result<PropertyTable, TemplateError> {
    PropertyTable::for_atoms(&Template::new(text), filter)
}
