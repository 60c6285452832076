/// Formatting utilities for displaying drafts and history titles

/// Longest history title shown in the sidebar, in characters.
pub const MAX_TITLE_CHARS: usize = 40;

/// Derive a sidebar title from a draft: first non-empty line, whitespace
/// collapsed, truncated with an ellipsis. `None` for blank text.
pub fn derive_title(text: &str) -> Option<String> {
    let line = text.lines().map(str::trim).find(|l| !l.is_empty())?;
    let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= MAX_TITLE_CHARS {
        return Some(collapsed);
    }

    let mut title: String = collapsed.chars().take(MAX_TITLE_CHARS).collect();
    let mid_word = collapsed
        .chars()
        .nth(MAX_TITLE_CHARS)
        .is_some_and(|c| !c.is_whitespace());
    if mid_word {
        if let Some(space) = title.rfind(' ') {
            title.truncate(space);
        }
    }
    title.truncate(title.trim_end().len());
    title.push('…');
    Some(title)
}

/// Character counter shown under the input, e.g. "1,204 / 5,000 characters".
pub fn format_char_count(count: usize, max: usize) -> String {
    format!(
        "{} / {} characters",
        with_thousands_separator(count),
        with_thousands_separator(max)
    )
}

fn with_thousands_separator(num: usize) -> String {
    let num_str = num.to_string();
    let mut result = String::new();

    for (i, ch) in num_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    result.chars().rev().collect()
}
