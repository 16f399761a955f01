//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: cursor positioning, search match highlighting with proper ANSI
//! escape sequence management, and content wrapping for card previews.
//!
//! All text measurement operates on character indices, not byte indices, so
//! multi-byte UTF-8 content renders correctly.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for search matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Highlighting is disabled for selected items to avoid
/// fighting the selection background.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - Character index ranges to highlight, inclusive start and
///   exclusive end
/// * `theme` - Active color theme for highlight colors
/// * `is_selected` - Whether the item is currently selected
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end.min(chars.len())].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Truncates `text` to at most `width` characters, appending an ellipsis when
/// anything was cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = chars[..width.saturating_sub(1)].iter().collect();
    out.push('\u{2026}');
    out
}

/// Wraps `text` to `width` characters and keeps at most `max_lines` lines.
///
/// Wrapping is word-based with a hard break for words longer than the width.
/// Newlines in the input force line breaks. When the text does not fit, the
/// last kept line ends with an ellipsis.
#[must_use]
pub fn wrap_truncated(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut truncated = false;

    'outer: for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            let current_len = current.chars().count();

            if current.is_empty() && word_len <= width {
                current.push_str(word);
            } else if current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    if lines.len() == max_lines {
                        truncated = true;
                        break 'outer;
                    }
                }
                // Hard-break words wider than the line.
                let mut rest: Vec<char> = word.chars().collect();
                while rest.len() > width {
                    lines.push(rest.drain(..width).collect());
                    if lines.len() == max_lines {
                        truncated = true;
                        break 'outer;
                    }
                }
                current = rest.into_iter().collect();
            }
        }
        lines.push(current);
        if lines.len() == max_lines && text.lines().count() > lines.len() {
            truncated = true;
        }
        if lines.len() == max_lines {
            break;
        }
    }

    if truncated {
        if let Some(last) = lines.last_mut() {
            *last = truncate(last, width.saturating_sub(1));
            last.push('\u{2026}');
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello w\u{2026}");
        assert_eq!(truncate("héllo wörld", 8), "héllo w\u{2026}");
    }

    #[test]
    fn wrap_breaks_on_words_and_limits_lines() {
        let lines = wrap_truncated("the quick brown fox jumps over the lazy dog", 12, 3);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "the quick");
        assert!(lines[2].ends_with('\u{2026}'));
    }

    #[test]
    fn wrap_honors_embedded_newlines() {
        let lines = wrap_truncated("first\nsecond", 20, 3);
        assert_eq!(lines, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn wrap_hard_breaks_long_words() {
        let lines = wrap_truncated("abcdefghij", 4, 5);
        assert_eq!(lines[0], "abcd");
        assert_eq!(lines[1], "efgh");
        assert_eq!(lines[2], "ij");
    }
}
