//! Timeline card list renderer.
//!
//! Renders the windowed entry cards in the main content area: day badge,
//! title with search match highlighting, timestamp, a truncated content
//! preview, tag chips, and the metadata line. The selected card carries an
//! accent marker down its left edge.

use crate::ui::helpers::{self, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EntryCardVm;
use crate::ui::SIDEBAR_COLS;

/// First column of the main content area.
const MAIN_COL: usize = SIDEBAR_COLS + 3;

/// Renders the card list starting at the specified row.
///
/// Returns the next available row position.
pub fn render_timeline(row: usize, cards: &[EntryCardVm], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_card(current_row, card, theme, cols);
    }
    current_row
}

/// Renders a single timeline card.
///
/// # Layout
///
/// ```text
/// ▍ 15  Title of the entry                              ★
///       Sunday, January 15, 2024 • 9:30 AM
///       Up to three wrapped lines of
///       content preview...
///       #tag1 #tag2
///       happy · sunny · Home · 2 photos · voice note
///       142 characters
/// ──────────────────────────────────────────────────────
/// ```
fn render_card(row: usize, card: &EntryCardVm, theme: &Theme, cols: usize) -> usize {
    let body_col = MAIN_COL + 6;
    let width = cols.saturating_sub(body_col + 1).max(20);

    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.accent_fg));
        for marker_row in row..row + 7 {
            position_cursor(marker_row, MAIN_COL.saturating_sub(2));
            print!("\u{258d}");
        }
        print!("{}", Theme::reset());
    }

    // Day badge and title row.
    position_cursor(row, MAIN_COL);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{:>2}", card.day);
    print!("{}", Theme::reset());

    position_cursor(row, body_col);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    let title = card.title.as_deref().unwrap_or("Untitled");
    helpers::render_highlighted_text(
        &truncate(title, width.saturating_sub(2)),
        &card.title_highlights,
        theme,
        card.is_selected,
    );
    print!("{}", Theme::reset());
    if card.is_favorite {
        print!(" {}\u{2605}{}", Theme::fg(&theme.colors.favorite_fg), Theme::reset());
    }

    // Timestamp.
    position_cursor(row + 1, body_col);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", truncate(&card.timestamp, width));
    print!("{}", Theme::reset());

    // Content preview, always three rows tall to keep cards uniform.
    print!("{}", Theme::fg(&theme.colors.text_normal));
    for (i, line) in card.body_lines.iter().take(3).enumerate() {
        position_cursor(row + 2 + i, body_col);
        print!("{line}");
    }
    print!("{}", Theme::reset());

    // Tag chips.
    position_cursor(row + 5, body_col);
    print!("{}", Theme::fg(&theme.colors.tag_fg));
    let chips: Vec<String> = card.tags.iter().map(|t| format!("#{t}")).collect();
    print!("{}", truncate(&chips.join(" "), width));
    print!("{}", Theme::reset());

    // Metadata line.
    position_cursor(row + 6, body_col);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", truncate(&metadata_line(card), width));
    print!("{}", Theme::reset());

    // Separator.
    position_cursor(row + 7, MAIN_COL);
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{}", "\u{2500}".repeat(cols.saturating_sub(MAIN_COL)));
    print!("{}", Theme::reset());

    row + 8
}

/// Joins the optional metadata fields into a single dim line.
fn metadata_line(card: &EntryCardVm) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(mood) = &card.mood {
        parts.push(mood.clone());
    }
    if let Some(weather) = &card.weather {
        parts.push(weather.clone());
    }
    if let Some(location) = &card.location {
        parts.push(location.clone());
    }
    if card.photo_count > 0 {
        parts.push(format!("{} photos", card.photo_count));
    }
    if card.has_voice_note {
        parts.push("voice note".to_string());
    }
    parts.push(format!("{} characters", card.char_count));
    parts.join(" \u{00b7} ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> EntryCardVm {
        EntryCardVm {
            day: "15".to_string(),
            title: Some("A Beautiful Morning".to_string()),
            is_favorite: true,
            timestamp: "Sunday, January 15, 2024 \u{2022} 9:30 AM".to_string(),
            body_lines: vec!["preview".to_string()],
            photo_count: 2,
            has_voice_note: false,
            tags: vec!["gratitude".to_string()],
            mood: Some("happy".to_string()),
            weather: Some("sunny".to_string()),
            location: Some("Home".to_string()),
            char_count: 42,
            is_selected: false,
            title_highlights: Vec::new(),
        }
    }

    #[test]
    fn metadata_line_joins_present_fields() {
        let line = metadata_line(&card());
        assert_eq!(
            line,
            "happy \u{00b7} sunny \u{00b7} Home \u{00b7} 2 photos \u{00b7} 42 characters"
        );
    }

    #[test]
    fn metadata_line_skips_absent_fields() {
        let mut card = card();
        card.mood = None;
        card.weather = None;
        card.location = None;
        card.photo_count = 0;
        assert_eq!(metadata_line(&card), "42 characters");
    }
}
