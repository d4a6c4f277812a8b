use pelegrow::core::io::reader::{read_template, read_template_from_path};
use pelegrow::core::template::Template;
use pelegrow::core::template::error::TemplateError;
use std::path::Path;
use tracing::debug;

/// Reads a template given either as a path or as a bare name inside `template_dir`.
///
/// Arguments that are absolute or contain a path separator are read as paths.
pub fn load_template(name_or_path: &str, template_dir: &Path) -> Result<Template, TemplateError> {
    let path = Path::new(name_or_path);
    if path.is_absolute() || name_or_path.contains(['/', '\\']) {
        debug!("Reading template from explicit path {:?}", path);
        read_template_from_path(path)
    } else {
        read_template(name_or_path, template_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const TEXT: &str = "*\n   1     0 M  CT   _C1_     0    1.0  0.0  0.0\nNBON\nBOND\nTHET\n";

    #[test]
    fn bare_names_resolve_inside_template_dir() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("mbez"), TEXT).unwrap();

        let template = load_template("mbez", dir.path()).unwrap();
        assert_eq!(template.name(), Some("mbez"));
    }

    #[test]
    fn paths_are_read_directly() {
        let dir = tempdir().unwrap();
        let other = tempdir().unwrap();
        let path = dir.path().join("pyjz");
        fs::write(&path, TEXT).unwrap();

        let template = load_template(path.to_str().unwrap(), other.path()).unwrap();
        assert_eq!(template.name(), Some("pyjz"));
    }

    #[test]
    fn missing_template_is_an_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            load_template("missing", dir.path()),
            Err(TemplateError::Io { .. })
        ));
    }
}
