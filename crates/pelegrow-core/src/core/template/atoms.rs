use super::error::TemplateError;
use super::raw::{Section, Template};
use super::scan::{is_word, parse_coordinate, parse_index};
use nalgebra::Vector3;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// One row of the atom block of a template.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub index: usize,
    pub parent: usize,
    /// Single-character kind flag (`M` for main chain, `S` for side chain).
    pub kind: char,
    pub atom_type: Option<String>,
    pub label: String,
    pub group: Option<usize>,
    pub coordinates: Vector3<f64>,
}

impl AtomRecord {
    /// Parses an atom row, returning `None` when the line does not follow the layout
    /// `index parent kind [type] label [group] x y z`.
    pub fn parse(line: &str) -> Option<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let n = tokens.len();
        if !(7..=9).contains(&n) {
            return None;
        }

        let index = parse_index(tokens[0])?;
        let parent = parse_index(tokens[1])?;
        let mut kind_chars = tokens[2].chars();
        let kind = kind_chars.next().filter(|_| is_word(tokens[2]))?;
        if kind_chars.next().is_some() {
            return None;
        }

        let (atom_type, label, group) = match &tokens[3..n - 3] {
            [label] if is_label(label) => (None, *label, None),
            [atom_type, label] if is_word(atom_type) && is_label(label) => {
                (Some(*atom_type), *label, None)
            }
            [label, group] if is_label(label) => (None, *label, Some(parse_index(group)?)),
            [atom_type, label, group] if is_word(atom_type) && is_label(label) => {
                (Some(*atom_type), *label, Some(parse_index(group)?))
            }
            _ => return None,
        };

        let x = parse_coordinate(tokens[n - 3], true)?;
        let y = parse_coordinate(tokens[n - 2], false)?;
        let z = parse_coordinate(tokens[n - 1], false)?;

        Some(Self {
            index,
            parent,
            kind,
            atom_type: atom_type.map(str::to_string),
            label: label.to_string(),
            group,
            coordinates: Vector3::new(x, y, z),
        })
    }
}

fn is_label(token: &str) -> bool {
    is_word(token) && token.chars().count() >= 4
}

/// Mapping from atom label to atom index for a single template.
///
/// Labels and indices are both unique: when a later row reuses a label or an index,
/// the later row replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomTable {
    atoms: BTreeMap<String, AtomRecord>,
    labels_by_index: BTreeMap<usize, String>,
}

impl AtomTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_template(template: &Template) -> Result<Self, TemplateError> {
        Ok(Self::from_section(template.section(Section::Atoms)?))
    }

    /// Builds the table from the text of an atom section, skipping unrecognized lines.
    pub fn from_section(section: &str) -> Self {
        let mut table = Self::new();
        for line in section.lines() {
            match AtomRecord::parse(line) {
                Some(record) => table.insert(record),
                None if !line.trim().is_empty() => {
                    debug!("Skipping unrecognized atom row: {:?}", line.trim());
                }
                None => {}
            }
        }
        table
    }

    pub fn insert(&mut self, record: AtomRecord) {
        let label = record.label.clone();
        let index = record.index;

        if let Some(previous) = self.atoms.insert(label.clone(), record) {
            if previous.index != index {
                debug!("Atom label {} redefined (index {} -> {})", label, previous.index, index);
                self.labels_by_index.remove(&previous.index);
            }
        }
        if let Some(other) = self.labels_by_index.insert(index, label.clone()) {
            if other != label {
                debug!("Atom index {} reassigned from {} to {}", index, other, label);
                self.atoms.remove(&other);
            }
        }
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.atoms.get(label).map(|record| record.index)
    }

    pub fn label_of(&self, index: usize) -> Option<&str> {
        self.labels_by_index.get(&index).map(String::as_str)
    }

    pub fn get(&self, label: &str) -> Option<&AtomRecord> {
        self.atoms.get(label)
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.atoms.contains_key(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.atoms.keys().map(String::as_str)
    }

    pub fn indices(&self) -> BTreeSet<usize> {
        self.labels_by_index.keys().copied().collect()
    }

    /// Iterates over `(label, index)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.atoms
            .iter()
            .map(|(label, record)| (label.as_str(), record.index))
    }

    pub fn records(&self) -> impl Iterator<Item = &AtomRecord> {
        self.atoms.values()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Returns the sub-table holding only the atoms whose label satisfies `keep`.
    pub fn filter_labels(&self, mut keep: impl FnMut(&str) -> bool) -> Self {
        self.atoms
            .iter()
            .filter(|(label, _)| keep(label))
            .map(|(_, record)| record.clone())
            .collect()
    }
}

impl FromIterator<AtomRecord> for AtomTable {
    fn from_iter<T: IntoIterator<Item = AtomRecord>>(iter: T) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

/// Builds the atom table of a template given as plain text.
pub fn build_atom_table(text: &str) -> Result<AtomTable, TemplateError> {
    AtomTable::from_template(&Template::new(text))
}
