/// Validation utilities for the summary input area

use crate::error::ValidationError;

/// Shortest text the summarizer accepts, in characters.
pub const MIN_INPUT_CHARS: usize = 10;
/// Longest text the summarizer accepts, in characters.
pub const MAX_INPUT_CHARS: usize = 5000;

/// Characters that count toward the limits; surrounding whitespace is ignored.
pub fn input_char_count(text: &str) -> usize {
    text.trim().chars().count()
}

pub fn validate_summary_input(text: &str) -> Result<(), ValidationError> {
    let chars = input_char_count(text);

    if chars == 0 {
        return Err(ValidationError::new("text", "No text provided"));
    }

    if chars < MIN_INPUT_CHARS {
        return Err(ValidationError::new(
            "text",
            format!("Text too short (minimum {} characters)", MIN_INPUT_CHARS),
        ));
    }

    if chars > MAX_INPUT_CHARS {
        return Err(ValidationError::new(
            "text",
            format!("Text too long (maximum {} characters)", MAX_INPUT_CHARS),
        ));
    }

    Ok(())
}
