use crate::core::template::atoms::AtomTable;

/// Returns the atoms of `final_atoms` whose label does not appear in `initial_atoms`.
///
/// An empty result means no atoms were added.
pub fn detect_new_atoms(initial_atoms: &AtomTable, final_atoms: &AtomTable) -> AtomTable {
    final_atoms.filter_labels(|label| !initial_atoms.contains_label(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::template::atoms::build_atom_table;
    use crate::core::template::fixtures::{GROWN_TEMPLATE, INITIAL_TEMPLATE};

    #[test]
    fn detects_atom_added_by_growth() {
        let initial = build_atom_table(INITIAL_TEMPLATE).unwrap();
        let grown = build_atom_table(GROWN_TEMPLATE).unwrap();

        let new_atoms = detect_new_atoms(&initial, &grown);
        let entries: Vec<_> = new_atoms.iter().collect();
        assert_eq!(entries, vec![("_C8_", 17)]);
    }

    #[test]
    fn identical_label_sets_yield_no_new_atoms() {
        let initial = build_atom_table(INITIAL_TEMPLATE).unwrap();
        assert!(detect_new_atoms(&initial, &initial).is_empty());
    }

    #[test]
    fn removed_atoms_are_not_reported() {
        let initial = build_atom_table(INITIAL_TEMPLATE).unwrap();
        let grown = build_atom_table(GROWN_TEMPLATE).unwrap();

        let reversed = detect_new_atoms(&grown, &initial);
        let labels: Vec<_> = reversed.labels().collect();
        assert_eq!(labels, vec!["_H8_"]);
    }

    #[test]
    fn new_atoms_keep_final_template_records() {
        let initial = build_atom_table(INITIAL_TEMPLATE).unwrap();
        let grown = build_atom_table(GROWN_TEMPLATE).unwrap();

        let new_atoms = detect_new_atoms(&initial, &grown);
        assert_eq!(new_atoms.get("_C8_"), grown.get("_C8_"));
    }
}
