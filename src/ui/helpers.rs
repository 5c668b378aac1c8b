//! Shared rendering utilities.
//!
//! Low-level ANSI helpers used across the UI components: cursor positioning,
//! SGR styling, and substring match highlighting. Theming is out of scope
//! for this pane, so styles are fixed SGR attributes rather than a
//! configurable palette.

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// SGR bold.
#[must_use]
pub fn bold() -> &'static str {
    "\u{1b}[1m"
}

/// SGR dim.
#[must_use]
pub fn dim() -> &'static str {
    "\u{1b}[2m"
}

/// SGR reverse video, used for the focused row.
#[must_use]
pub fn invert() -> &'static str {
    "\u{1b}[7m"
}

/// SGR underline, used for substring match highlights.
#[must_use]
pub fn underline() -> &'static str {
    "\u{1b}[4m"
}

/// Resets all SGR attributes.
#[must_use]
pub fn reset() -> &'static str {
    "\u{1b}[0m"
}

/// Builds a display string with underlined character ranges for substring
/// matches.
///
/// Splits the text into highlighted and normal sections based on the
/// provided character ranges. Highlighting is suppressed on the focused row,
/// where reverse video already carries the emphasis.
///
/// Ranges use character indices (not byte indices) with exclusive ends, as
/// produced by [`crate::app::state::match_ranges`].
#[must_use]
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], is_focused: bool) -> String {
    if ranges.is_empty() || is_focused {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut output = String::new();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start > current_pos {
            output.extend(&chars[current_pos..start]);
        }

        output.push_str(underline());
        output.extend(&chars[start..end.min(chars.len())]);
        output.push_str(reset());

        current_pos = end;
    }

    if current_pos < chars.len() {
        output.extend(&chars[current_pos..]);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_cover_the_matched_ranges() {
        let text = render_highlighted_text("He / Him / His", &[(5, 7), (11, 13)], false);
        assert_eq!(
            text,
            format!(
                "He / {u}Hi{r}m / {u}Hi{r}s",
                u = underline(),
                r = reset()
            )
        );
    }

    #[test]
    fn focused_rows_skip_highlighting() {
        let text = render_highlighted_text("He / Him / His", &[(5, 7)], true);
        assert_eq!(text, "He / Him / His");
    }
}
