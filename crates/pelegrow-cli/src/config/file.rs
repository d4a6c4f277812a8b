use crate::error::{CliError, Result};
use pelegrow::workflows::grow::TransplantPlan;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileCorrespondence {
    pub source: String,
    pub destination: String,
}

/// Contents of a `--config` TOML file. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub template_dir: Option<PathBuf>,
    pub plan: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub correspondence: Vec<FileCorrespondence>,
}

impl FileConfig {
    /// Reads a config file. Relative paths inside it are resolved against the directory
    /// holding the file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration file {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        let mut config: FileConfig = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        if let Some(base) = path.parent() {
            for entry in [
                &mut config.template_dir,
                &mut config.plan,
                &mut config.output_dir,
            ] {
                if let Some(p) = entry.as_mut() {
                    if p.is_relative() {
                        *p = base.join(&*p);
                    }
                }
            }
        }
        Ok(config)
    }

    pub fn correspondences(&self) -> TransplantPlan {
        let mut plan = TransplantPlan::new();
        for entry in &self.correspondence {
            plan.push(entry.source.clone(), entry.destination.clone());
        }
        plan
    }
}
