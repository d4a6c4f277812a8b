use crate::cli::DiffArgs;
use crate::config::build_diff_config;
use crate::error::Result;
use crate::utils::templates::load_template;
use pelegrow::core::io::report;
use pelegrow::workflows::grow::{self, GrowthReport};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: DiffArgs) -> Result<()> {
    let config = build_diff_config(&args)?;
    info!(
        "Comparing '{}' against {} grown template(s) in {:?}",
        config.initial,
        config.grown.len(),
        config.template_dir
    );

    let initial = load_template(&config.initial, &config.template_dir)?;

    let reports = config
        .grown
        .par_iter()
        .enumerate()
        .map(|(i, name)| -> Result<(String, GrowthReport)> {
            let grown = load_template(name, &config.template_dir)?;
            let report = grow::run(&initial, &grown, &config.plan)?;
            let label = grown
                .name()
                .map(str::to_string)
                .unwrap_or_else(|| format!("grown_{}", i + 1));
            Ok((label, report))
        })
        .collect::<Result<Vec<_>>>()?;
    let reports = disambiguate_labels(reports);

    for (name, growth) in &reports {
        print_summary(name, growth);
        if let Some(dir) = &config.output_dir {
            write_reports(dir, name, growth)?;
            println!("Reports for '{}' written to: {}", name, dir.display());
        }
    }

    Ok(())
}

/// Suffixes labels shared by several grown templates with their 1-based position, so
/// report files of `a/pyjz` and `b/pyjz` do not overwrite each other.
fn disambiguate_labels(reports: Vec<(String, GrowthReport)>) -> Vec<(String, GrowthReport)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for (label, _) in &reports {
        *counts.entry(label.clone()).or_default() += 1;
    }

    reports
        .into_iter()
        .enumerate()
        .map(|(i, (label, report))| {
            if counts[&label] > 1 {
                let unique = format!("{}_{}", label, i + 1);
                warn!(
                    "Grown template name '{}' is not unique; reporting it as '{}'.",
                    label, unique
                );
                (unique, report)
            } else {
                (label, report)
            }
        })
        .collect()
}

fn print_summary(name: &str, growth: &GrowthReport) {
    if growth.new_atoms.is_empty() {
        warn!("No new atoms found in '{}'.", name);
        println!("{}: no new atoms", name);
        return;
    }

    println!("{}: {} new atom(s)", name, growth.new_atoms.len());
    for (label, index) in growth.new_atoms.iter() {
        match growth.new_atom_properties.get(index) {
            Some(props) => println!(
                "  {:<6} index {:>4}  vdw {:>8.4}  charge {:>8.4}",
                label, index, props.vdw_radius, props.charge
            ),
            None => println!("  {:<6} index {:>4}  (no NBON entry)", label, index),
        }
    }
    for ((donor, acceptor), bond) in growth.new_bonds.iter() {
        println!(
            "  bond {:>4} -> {:<4} length {:>7.3}",
            donor, acceptor, bond.length
        );
    }
    if let Some(transplanted) = &growth.transplanted_properties {
        println!("  {} atom(s) after property transplant", transplanted.len());
    }
}

fn write_reports(dir: &Path, name: &str, growth: &GrowthReport) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    report::write_atoms_csv_to_path(&growth.new_atoms, dir.join(format!("{name}_atoms.csv")))?;
    report::write_properties_csv_to_path(
        &growth.new_atom_properties,
        &growth.final_atoms,
        dir.join(format!("{name}_properties.csv")),
    )?;
    report::write_bonds_csv_to_path(&growth.new_bonds, dir.join(format!("{name}_bonds.csv")))?;
    if let Some(transplanted) = &growth.transplanted_properties {
        report::write_properties_csv_to_path(
            transplanted,
            &growth.final_atoms,
            dir.join(format!("{name}_transplanted.csv")),
        )?;
    }
    Ok(())
}
