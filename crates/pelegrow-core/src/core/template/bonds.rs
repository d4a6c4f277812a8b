use super::error::TemplateError;
use super::raw::{Section, Template};
use super::scan::{parse_decimal, parse_index};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondRecord {
    pub force_constant: f64,
    pub length: f64,
}

/// Bonds of a template keyed by the directed `(donor, acceptor)` pair recorded in the file.
///
/// `(a, b)` and `(b, a)` are distinct keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BondTable {
    bonds: BTreeMap<(usize, usize), BondRecord>,
}

impl BondTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_template(template: &Template) -> Result<Self, TemplateError> {
        Ok(Self::from_section(template.section(Section::Bonds)?))
    }

    pub fn from_section(section: &str) -> Self {
        let mut table = Self::new();
        for line in section.lines() {
            match parse_bond_row(line) {
                Some((key, record)) => {
                    table.bonds.insert(key, record);
                }
                None if !line.trim().is_empty() => {
                    debug!("Skipping unrecognized BOND row: {:?}", line.trim());
                }
                None => {}
            }
        }
        table
    }

    pub fn get(&self, donor: usize, acceptor: usize) -> Option<&BondRecord> {
        self.bonds.get(&(donor, acceptor))
    }

    pub fn length(&self, donor: usize, acceptor: usize) -> Option<f64> {
        self.get(donor, acceptor).map(|bond| bond.length)
    }

    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &BondRecord)> {
        self.bonds.iter().map(|(key, bond)| (*key, bond))
    }

    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }
}

/// Parses `donor acceptor force_constant length`.
fn parse_bond_row(line: &str) -> Option<((usize, usize), BondRecord)> {
    let mut tokens = line.split_whitespace();
    let donor = parse_index(tokens.next()?)?;
    let acceptor = parse_index(tokens.next()?)?;
    let force_constant = parse_decimal(tokens.next()?, false, None)?;
    let length = parse_decimal(tokens.next()?, false, None)?;
    Some((
        (donor, acceptor),
        BondRecord {
            force_constant,
            length,
        },
    ))
}

/// Returns the bonds whose acceptor (second index of the key) is in `indices`.
///
/// A grown atom is the acceptor of the bond that attaches it to the scaffold, so this
/// surfaces exactly the bonds introduced by growth.
pub fn filter_bonds(indices: &BTreeSet<usize>, bonds: &BondTable) -> BondTable {
    BondTable {
        bonds: bonds
            .bonds
            .iter()
            .filter(|((_, acceptor), _)| indices.contains(acceptor))
            .map(|(key, bond)| (*key, *bond))
            .collect(),
    }
}

/// Builds the bond table of a template given as plain text.
pub fn build_bond_table(text: &str) -> Result<BondTable, TemplateError> {
    BondTable::from_template(&Template::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::template::fixtures::{GROWN_TEMPLATE, INITIAL_TEMPLATE};

    #[test]
    fn builds_one_entry_per_row() {
        let table = build_bond_table(INITIAL_TEMPLATE).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.length(2, 16), Some(1.08));
        assert_eq!(
            table.get(1, 2),
            Some(&BondRecord {
                force_constant: 317.0,
                length: 1.51
            })
        );
    }

    #[test]
    fn bond_keys_are_directional() {
        let table = build_bond_table(INITIAL_TEMPLATE).unwrap();
        assert!(table.get(2, 16).is_some());
        assert!(table.get(16, 2).is_none());
    }

    #[test]
    fn skips_malformed_rows() {
        let table = BondTable::from_section("   1    2  317.000    1.510\n   bad row\n   3    4  553.000\n");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn angle_rows_are_not_read_as_bonds() {
        let table = build_bond_table(GROWN_TEMPLATE).unwrap();
        assert!(table.get(1, 2).is_some());
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn missing_angle_marker_is_an_error() {
        let result = build_bond_table("BOND\n   1    2  317.000    1.510\nEND\n");
        assert!(matches!(
            result,
            Err(TemplateError::SectionNotFound {
                start: "BOND",
                end: "THET"
            })
        ));
    }

    #[test]
    fn filter_keeps_every_bond_with_selected_acceptor() {
        let table = build_bond_table(GROWN_TEMPLATE).unwrap();
        let filtered = filter_bonds(&BTreeSet::from([17]), &table);
        let keys: Vec<_> = filtered.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![(2, 17)]);
        assert_eq!(filtered.length(2, 17), Some(1.51));
    }

    #[test]
    fn filter_ignores_donor_position() {
        let table = build_bond_table(INITIAL_TEMPLATE).unwrap();
        let filtered = filter_bonds(&BTreeSet::from([2]), &table);
        assert!(filtered.iter().all(|((_, acceptor), _)| acceptor == 2));
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn filter_is_exactly_the_acceptor_subset() {
        let table = build_bond_table(INITIAL_TEMPLATE).unwrap();
        let selected = BTreeSet::from([3, 4, 16]);
        let filtered = filter_bonds(&selected, &table);
        let expected: Vec<_> = table
            .iter()
            .filter(|((_, acceptor), _)| selected.contains(acceptor))
            .map(|(key, bond)| (key, *bond))
            .collect();
        let actual: Vec<_> = filtered.iter().map(|(key, bond)| (key, *bond)).collect();
        assert_eq!(actual, expected);
        assert_eq!(filtered.len(), 3);
    }
}
