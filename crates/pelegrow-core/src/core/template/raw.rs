use super::error::TemplateError;
use super::section::extract_section;

/// The sections of a hetero-atom template consumed by the table builders.
///
/// Each section is delimited by a pair of literal markers: the start marker must be
/// followed by a line break, and the section ends right before the next end marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Atom rows, between the `*` line closing the header and `NBON`.
    Atoms,
    /// Non-bonded parameter rows, between `NBON` and `BOND`.
    NonBonded,
    /// Bond rows, between `BOND` and `THET`.
    Bonds,
}

impl Section {
    pub const fn markers(self) -> (&'static str, &'static str) {
        match self {
            Section::Atoms => ("*", "NBON"),
            Section::NonBonded => ("NBON", "BOND"),
            Section::Bonds => ("BOND", "THET"),
        }
    }
}

/// Raw text of a PELE hetero-atom template.
///
/// The text is never modified after construction; every table is built from it
/// on demand, so a single `Template` can be shared by reference between workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: Option<String>,
    text: String,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            name: None,
            text: text.into(),
        }
    }

    pub fn with_name(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            text: text.into(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True only for a template with no content at all; whitespace counts as content.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the text of one section.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::SectionNotFound`] if the markers of `section` do not
    /// both appear in the expected order.
    pub fn section(&self, section: Section) -> Result<&str, TemplateError> {
        let (start, end) = section.markers();
        extract_section(&self.text, start, end)
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::template::fixtures::INITIAL_TEMPLATE;

    #[test]
    fn section_returns_rows_between_markers() {
        let template = Template::new(INITIAL_TEMPLATE);
        let bonds = template.section(Section::Bonds).unwrap();
        assert!(bonds.contains("317.000"));
        assert!(!bonds.contains("BOND"));
        assert!(!bonds.contains("THET"));
    }

    #[test]
    fn section_fails_when_markers_are_missing() {
        let template = Template::new("* header\n*\n   1     0 M  CT   _C1_ 0 1.0 0.0 0.0\n");
        assert!(matches!(
            template.section(Section::NonBonded),
            Err(TemplateError::SectionNotFound {
                start: "NBON",
                end: "BOND"
            })
        ));
    }

    #[test]
    fn name_is_kept_when_provided() {
        let template = Template::with_name("mbez", "text");
        assert_eq!(template.name(), Some("mbez"));
        assert_eq!(Template::new("text").name(), None);
    }

    #[test]
    fn only_zero_length_template_is_empty() {
        assert!(Template::new("").is_empty());
        assert!(!Template::new(" \n\t\n").is_empty());
        assert!(!Template::new(INITIAL_TEMPLATE).is_empty());
    }
}
