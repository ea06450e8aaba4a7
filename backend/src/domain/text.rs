//! Shared length checks for free-text entity fields.

/// Why a text field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextViolation {
    Empty,
    TooLong { max: usize },
}

/// Trim `value` and require between one and `max` characters.
pub(crate) fn required_trimmed(value: String, max: usize) -> Result<String, TextViolation> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TextViolation::Empty);
    }
    if trimmed.chars().count() > max {
        return Err(TextViolation::TooLong { max });
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_owned())
    }
}

/// Accept `value` as given, including empty, up to `max` characters.
pub(crate) fn optional_bounded(value: String, max: usize) -> Result<String, TextViolation> {
    if value.chars().count() > max {
        return Err(TextViolation::TooLong { max });
    }
    Ok(value)
}
