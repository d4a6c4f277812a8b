pub mod defaults;
pub mod file;
pub mod models;

use crate::cli::DiffArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use defaults::DefaultsConfig;
use file::FileConfig;
use models::DiffConfig;
use pelegrow::workflows::grow::TransplantPlan;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Merges command-line arguments, the optional config file and built-in defaults, in
/// that order of priority.
///
/// Transplant correspondences accumulate instead: those of the plan file come first,
/// then the config file's own entries, then `--map` values.
pub fn build_diff_config(args: &DiffArgs) -> Result<DiffConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    let template_dir = resolve_template_dir(args.template_dir.as_deref(), &file_config, &defaults);

    let mut plan = match args.plan.as_ref().or(file_config.plan.as_ref()) {
        Some(path) => {
            debug!("Loading transplant plan from {:?}", path);
            TransplantPlan::load(path)?
        }
        None => TransplantPlan::new(),
    };
    plan.extend(file_config.correspondences());
    for value in &args.map {
        let (source, destination) =
            parser::parse_correspondence(value).map_err(|e| CliError::Argument(e.to_string()))?;
        plan.push(source, destination);
    }

    let output_dir = args.output_dir.clone().or(file_config.output_dir);
    if let Some(dir) = &output_dir {
        if dir.exists() && !dir.is_dir() {
            return Err(CliError::Config(format!(
                "Output path {:?} exists and is not a directory",
                dir
            )));
        }
    }

    Ok(DiffConfig {
        initial: args.initial.clone(),
        grown: args.grown.clone(),
        template_dir,
        plan,
        output_dir,
    })
}

pub fn resolve_template_dir(
    cli_arg: Option<&Path>,
    file_config: &FileConfig,
    defaults: &DefaultsConfig,
) -> PathBuf {
    cli_arg
        .map(Path::to_path_buf)
        .or_else(|| file_config.template_dir.clone())
        .unwrap_or_else(|| defaults.template_dir.clone())
}
