use pelegrow::workflows::grow::TransplantPlan;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DiffConfig {
    pub initial: String,
    pub grown: Vec<String>,
    pub template_dir: PathBuf,
    pub plan: TransplantPlan,
    pub output_dir: Option<PathBuf>,
}
