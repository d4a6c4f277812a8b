use crate::core::template::Template;
use crate::core::template::error::TemplateError;
use std::path::Path;
use tracing::{debug, error};

/// Directory holding the OPLS2005 hetero-atom templates of a PELE installation, relative
/// to the PELE data root.
pub const DEFAULT_TEMPLATE_DIR: &str = "DataLocal/Templates/OPLS2005/HeteroAtoms/";

/// Reads the template `name` from `directory`.
///
/// # Errors
///
/// Returns [`TemplateError::Io`] if the file cannot be read and
/// [`TemplateError::EmptyTemplate`] if it is zero bytes long.
pub fn read_template(name: &str, directory: impl AsRef<Path>) -> Result<Template, TemplateError> {
    read_template_path(directory.as_ref().join(name), name)
}

/// Reads a template from an explicit path, naming it after the file.
pub fn read_template_from_path(path: impl AsRef<Path>) -> Result<Template, TemplateError> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());
    read_template_path(path, &name)
}

fn read_template_path(path: impl AsRef<Path>, name: &str) -> Result<Template, TemplateError> {
    let path = path.as_ref();
    debug!("Reading template '{}' from {:?}", name, path);
    let text = std::fs::read_to_string(path).map_err(|e| TemplateError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;

    let template = Template::with_name(name, text);
    if template.is_empty() {
        error!("Template file {} is empty!", name);
        return Err(TemplateError::EmptyTemplate {
            name: name.to_string(),
        });
    }
    Ok(template)
}
