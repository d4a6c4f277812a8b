use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid correspondence '{0}'. Expected 'SOURCE=DESTINATION' (e.g., '_H8_=_C8_').")]
    InvalidCorrespondenceFormat(String),

    #[error("Component '{component}' cannot be empty in correspondence '{value}'.")]
    EmptyComponent {
        component: &'static str,
        value: String,
    },
}

/// Splits a `SOURCE=DESTINATION` atom-label pair.
pub fn parse_correspondence(value: &str) -> Result<(String, String), ParseError> {
    let (source, destination) = value
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidCorrespondenceFormat(value.to_string()))?;
    if destination.contains('=') {
        return Err(ParseError::InvalidCorrespondenceFormat(value.to_string()));
    }

    let source = source.trim();
    let destination = destination.trim();
    if source.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "source",
            value: value.to_string(),
        });
    }
    if destination.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "destination",
            value: value.to_string(),
        });
    }
    Ok((source.to_string(), destination.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_label_pair() {
        assert_eq!(
            parse_correspondence("_H8_=_C8_"),
            Ok(("_H8_".to_string(), "_C8_".to_string()))
        );
    }

    #[test]
    fn trims_whitespace_around_labels() {
        assert_eq!(
            parse_correspondence(" _H8_ = _C8_ "),
            Ok(("_H8_".to_string(), "_C8_".to_string()))
        );
    }

    #[test]
    fn rejects_missing_or_repeated_separator() {
        assert_eq!(
            parse_correspondence("_H8_"),
            Err(ParseError::InvalidCorrespondenceFormat("_H8_".to_string()))
        );
        assert!(matches!(
            parse_correspondence("a=b=c"),
            Err(ParseError::InvalidCorrespondenceFormat(_))
        ));
    }

    #[test]
    fn rejects_empty_components() {
        assert!(matches!(
            parse_correspondence("=_C8_"),
            Err(ParseError::EmptyComponent {
                component: "source",
                ..
            })
        ));
        assert!(matches!(
            parse_correspondence("_H8_= "),
            Err(ParseError::EmptyComponent {
                component: "destination",
                ..
            })
        ));
    }
}
