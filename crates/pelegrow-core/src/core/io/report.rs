use crate::core::template::atoms::AtomTable;
use crate::core::template::bonds::BondTable;
use crate::core::template::nonbonded::PropertyTable;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct AtomRow<'a> {
    label: &'a str,
    index: usize,
    parent: usize,
    kind: char,
    atom_type: Option<&'a str>,
    group: Option<usize>,
    x: f64,
    y: f64,
    z: f64,
}

#[derive(Debug, Serialize)]
struct PropertyRow<'a> {
    index: usize,
    label: Option<&'a str>,
    vdw_radius: f64,
    charge: f64,
}

#[derive(Debug, Serialize)]
struct BondRow {
    donor: usize,
    acceptor: usize,
    force_constant: f64,
    length: f64,
}

pub fn write_atoms_csv(atoms: &AtomTable, writer: impl Write) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in atoms.records() {
        csv_writer.serialize(AtomRow {
            label: &record.label,
            index: record.index,
            parent: record.parent,
            kind: record.kind,
            atom_type: record.atom_type.as_deref(),
            group: record.group,
            x: record.coordinates.x,
            y: record.coordinates.y,
            z: record.coordinates.z,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes a property table; `atoms` supplies the label column where the index is known.
pub fn write_properties_csv(
    properties: &PropertyTable,
    atoms: &AtomTable,
    writer: impl Write,
) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (index, props) in properties.iter() {
        csv_writer.serialize(PropertyRow {
            index,
            label: atoms.label_of(index),
            vdw_radius: props.vdw_radius,
            charge: props.charge,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_bonds_csv(bonds: &BondTable, writer: impl Write) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for ((donor, acceptor), bond) in bonds.iter() {
        csv_writer.serialize(BondRow {
            donor,
            acceptor,
            force_constant: bond.force_constant,
            length: bond.length,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>, ReportError> {
    Ok(BufWriter::new(File::create(path)?))
}

pub fn write_atoms_csv_to_path(atoms: &AtomTable, path: impl AsRef<Path>) -> Result<(), ReportError> {
    write_atoms_csv(atoms, create(path.as_ref())?)
}

pub fn write_properties_csv_to_path(
    properties: &PropertyTable,
    atoms: &AtomTable,
    path: impl AsRef<Path>,
) -> Result<(), ReportError> {
    write_properties_csv(properties, atoms, create(path.as_ref())?)
}

pub fn write_bonds_csv_to_path(bonds: &BondTable, path: impl AsRef<Path>) -> Result<(), ReportError> {
    write_bonds_csv(bonds, create(path.as_ref())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::template::Template;
    use crate::core::template::fixtures::GROWN_TEMPLATE;
    use std::collections::BTreeSet;
    use tempfile::tempdir;

    fn grown() -> (AtomTable, PropertyTable, BondTable) {
        let template = Template::new(GROWN_TEMPLATE);
        let atoms = AtomTable::from_template(&template).unwrap();
        let props = PropertyTable::for_atoms(&template, &atoms).unwrap();
        let bonds = BondTable::from_template(&template).unwrap();
        (atoms, props, bonds)
    }

    #[test]
    fn atoms_csv_has_header_and_one_row_per_atom() {
        let (atoms, _, _) = grown();
        let mut buffer = Vec::new();
        write_atoms_csv(&atoms, &mut buffer).unwrap();

        let content = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "label,index,parent,kind,atom_type,group,x,y,z");
        assert_eq!(lines.len(), atoms.len() + 1);
        assert!(lines.contains(&"_C8_,17,2,S,CT,0,1.51,120.0,-180.0"));
    }

    #[test]
    fn properties_csv_includes_labels() {
        let (atoms, props, _) = grown();
        let mut buffer = Vec::new();
        write_properties_csv(&props, &atoms, &mut buffer).unwrap();

        let content = String::from_utf8(buffer).unwrap();
        assert!(content.starts_with("index,label,vdw_radius,charge\n"));
        assert!(content.contains("17,_C8_,1.75,-0.12\n"));
    }

    #[test]
    fn properties_csv_leaves_unknown_labels_empty() {
        let template = Template::new(GROWN_TEMPLATE);
        let props = PropertyTable::from_template(&template, &BTreeSet::from([17])).unwrap();
        let mut buffer = Vec::new();
        write_properties_csv(&props, &AtomTable::new(), &mut buffer).unwrap();

        let content = String::from_utf8(buffer).unwrap();
        assert!(content.contains("17,,1.75,-0.12\n"));
    }

    #[test]
    fn bonds_csv_written_to_path() {
        let (_, _, bonds) = grown();
        let dir = tempdir().unwrap();
        let path = dir.path().join("bonds.csv");
        write_bonds_csv_to_path(&bonds, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("donor,acceptor,force_constant,length\n"));
        assert!(content.contains("2,17,317.0,1.51\n"));
    }

    #[test]
    fn writing_to_missing_directory_fails_with_io_error() {
        let (atoms, _, _) = grown();
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("atoms.csv");
        let result = write_atoms_csv_to_path(&atoms, &path);
        assert!(matches!(result, Err(ReportError::Io(_))));
    }
}
