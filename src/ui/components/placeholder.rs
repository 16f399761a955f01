//! "Coming soon" screen renderer for the calendar and advanced-search views.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PlaceholderVm;
use crate::ui::SIDEBAR_COLS;

/// Renders the placeholder heading and message, centered in the main content
/// area.
pub fn render_placeholder(placeholder: &PlaceholderVm, theme: &Theme, rows: usize, cols: usize) {
    let main_width = cols.saturating_sub(SIDEBAR_COLS);
    let row = (rows / 2).max(1);

    position_cursor(row, centered_main_col(main_width, placeholder.heading.len()));
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", placeholder.heading);
    print!("{}", Theme::reset());

    position_cursor(
        row + 2,
        centered_main_col(main_width, placeholder.message.len()),
    );
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", placeholder.message);
    print!("{}", Theme::reset());
}

/// 1-indexed column centering `len` characters right of the sidebar.
fn centered_main_col(main_width: usize, len: usize) -> usize {
    SIDEBAR_COLS + (main_width.saturating_sub(len) / 2).max(1)
}
