use crate::cli::InspectArgs;
use crate::config::defaults::DefaultsConfig;
use crate::error::Result;
use crate::utils::templates::load_template;
use pelegrow::core::template::Template;
use pelegrow::core::template::atoms::AtomTable;
use pelegrow::core::template::bonds::BondTable;
use pelegrow::core::template::nonbonded::PropertyTable;
use std::io::{self, Write};
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    let template_dir = args
        .template_dir
        .unwrap_or_else(|| DefaultsConfig::default().template_dir);
    let template = load_template(&args.template, &template_dir)?;
    info!("Inspecting template '{}'", args.template);

    write_tables(&template, &mut io::stdout().lock())
}

fn write_tables(template: &Template, out: &mut impl Write) -> Result<()> {
    let atoms = AtomTable::from_template(template)?;
    let properties = PropertyTable::for_atoms(template, &atoms)?;
    let bonds = BondTable::from_template(template)?;

    writeln!(out, "Atoms ({}):", atoms.len())?;
    for record in atoms.records() {
        writeln!(
            out,
            "  {:>4} {:<6} parent {:>4}  type {:<4}",
            record.index,
            record.label,
            record.parent,
            record.atom_type.as_deref().unwrap_or("-")
        )?;
    }

    writeln!(out, "Non-bonded properties ({}):", properties.len())?;
    for (index, props) in properties.iter() {
        writeln!(
            out,
            "  {:>4} {:<6} vdw {:>8.4}  charge {:>8.4}",
            index,
            atoms.label_of(index).unwrap_or("?"),
            props.vdw_radius,
            props.charge
        )?;
    }

    writeln!(out, "Bonds ({}):", bonds.len())?;
    for ((donor, acceptor), bond) in bonds.iter() {
        writeln!(
            out,
            "  {:>4} -> {:<4} k {:>8.3}  length {:>7.3}",
            donor, acceptor, bond.force_constant, bond.length
        )?;
    }

    Ok(())
}
