//! Entry editor form renderer.
//!
//! Draws the full-width entry form in the main content area: heading, the six
//! form fields with a focus marker, the tag chips with the in-progress tag
//! input, indicator flags, and the save control. Field focus is purely
//! visual here; all interaction happens in the event handler.

use crate::app::editor::EditorFocus;
use crate::ui::helpers::{position_cursor, truncate, wrap_truncated};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EditorVm;
use crate::ui::SIDEBAR_COLS;

const MAIN_COL: usize = SIDEBAR_COLS + 3;

/// Content rows shown in the body field.
const CONTENT_ROWS: usize = 6;

/// Renders the editor form starting at the specified row.
///
/// Returns the next available row position.
pub fn render_editor(row: usize, editor: &EditorVm, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(MAIN_COL + 1).max(20);
    let mut current_row = row;

    position_cursor(current_row, MAIN_COL);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", editor.heading);
    print!("{}", Theme::reset());
    if editor.is_favorite {
        print!(
            "  {}\u{2605} favorite{}",
            Theme::fg(&theme.colors.favorite_fg),
            Theme::reset()
        );
    }
    if editor.is_recording {
        print!(
            "  {}\u{25cf} recording{}",
            Theme::fg(&theme.colors.error_fg),
            Theme::reset()
        );
    }
    current_row += 2;

    current_row = render_text_field(
        current_row,
        "Title",
        &editor.title,
        editor.focus == EditorFocus::Title,
        theme,
        width,
    );

    current_row = render_content_field(current_row, editor, theme, width);

    current_row = render_tags_field(current_row, editor, theme, width);

    current_row = render_text_field(
        current_row,
        "Mood",
        selection_display(&editor.mood),
        editor.focus == EditorFocus::Mood,
        theme,
        width,
    );
    current_row = render_text_field(
        current_row,
        "Weather",
        selection_display(&editor.weather),
        editor.focus == EditorFocus::Weather,
        theme,
        width,
    );
    current_row = render_text_field(
        current_row,
        "Location",
        &editor.location,
        editor.focus == EditorFocus::Location,
        theme,
        width,
    );

    // Save control and character count.
    position_cursor(current_row + 1, MAIN_COL);
    if editor.can_save {
        print!("{}", Theme::fg(&theme.colors.accent_fg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("[ {} ]", editor.save_label);
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("  {} characters", editor.char_count);
    print!("{}", Theme::reset());

    current_row + 2
}

/// A one-line labeled field with a focus marker.
fn render_text_field(
    row: usize,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
    width: usize,
) -> usize {
    render_label(row, label, focused, theme);

    position_cursor(row, MAIN_COL + 10);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", truncate(value, width.saturating_sub(10)));
    print!("{}", Theme::reset());

    row + 2
}

/// The multi-line content field.
fn render_content_field(row: usize, editor: &EditorVm, theme: &Theme, width: usize) -> usize {
    render_label(row, "Content", editor.focus == EditorFocus::Content, theme);

    let lines = wrap_truncated(&editor.content, width.saturating_sub(10), CONTENT_ROWS);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    for (i, line) in lines.iter().enumerate() {
        position_cursor(row + i, MAIN_COL + 10);
        print!("{line}");
    }
    print!("{}", Theme::reset());

    if editor.content.is_empty() {
        position_cursor(row, MAIN_COL + 10);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("What's on your mind?");
        print!("{}", Theme::reset());
    }

    row + CONTENT_ROWS + 1
}

/// Committed tag chips plus the in-progress tag input.
fn render_tags_field(row: usize, editor: &EditorVm, theme: &Theme, width: usize) -> usize {
    let focused = editor.focus == EditorFocus::Tags;
    render_label(row, "Tags", focused, theme);

    position_cursor(row, MAIN_COL + 10);
    print!("{}", Theme::fg(&theme.colors.tag_fg));
    let chips: Vec<String> = editor.tags.iter().map(|t| format!("#{t}")).collect();
    let line = chips.join(" ");
    print!("{}", truncate(&line, width.saturating_sub(10)));
    if focused {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        if line.is_empty() {
            print!("{}_", editor.tag_input);
        } else {
            print!(" {}_", editor.tag_input);
        }
    }
    print!("{}", Theme::reset());

    row + 2
}

fn render_label(row: usize, label: &str, focused: bool, theme: &Theme) {
    position_cursor(row, MAIN_COL);
    if focused {
        print!("{}", Theme::fg(&theme.colors.accent_fg));
        print!("\u{258d} {label}");
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("  {label}");
    }
    print!("{}", Theme::reset());
}

/// Selection fields show a hint instead of an empty string.
fn selection_display(value: &str) -> &str {
    if value.is_empty() {
        "\u{2039}none\u{203a}"
    } else {
        value
    }
}
