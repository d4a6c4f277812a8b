use pelegrow::core::io::reader::DEFAULT_TEMPLATE_DIR;
use std::path::PathBuf;

pub struct DefaultsConfig {
    pub template_dir: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
        }
    }
}
