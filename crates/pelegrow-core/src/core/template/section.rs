use super::error::TemplateError;

/// Returns the text lying between two literal markers.
///
/// The section starts right after the first occurrence of `start` that is immediately
/// followed by a line break (`\n` or `\r\n`), and ends right before the first
/// occurrence of `end` after that point. Markers are plain text; characters such as
/// `*` carry no special meaning.
///
/// # Errors
///
/// Returns [`TemplateError::SectionNotFound`] if no such start marker exists or no
/// end marker follows it.
pub fn extract_section<'a>(
    text: &'a str,
    start: &'static str,
    end: &'static str,
) -> Result<&'a str, TemplateError> {
    let not_found = || TemplateError::SectionNotFound { start, end };

    let body_start = text
        .match_indices(start)
        .find_map(|(pos, _)| {
            let rest = &text[pos + start.len()..];
            if rest.starts_with('\n') {
                Some(pos + start.len() + 1)
            } else if rest.starts_with("\r\n") {
                Some(pos + start.len() + 2)
            } else {
                None
            }
        })
        .ok_or_else(not_found)?;

    let body = &text[body_start..];
    let body_end = body.find(end).ok_or_else(not_found)?;
    Ok(&body[..body_end])
}
