//! Notification banner renderer.
//!
//! Draws the transient save-result banner on the top row of the main content
//! area, colored by severity. The banner overdraws whatever is beneath it; it
//! disappears on the next render after user input clears the notice.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NoticeVm;
use crate::ui::SIDEBAR_COLS;

/// Renders the notification banner on the given row.
pub fn render_notice(row: usize, notice: &NoticeVm, theme: &Theme, cols: usize) {
    let col = SIDEBAR_COLS + 3;
    let width = cols.saturating_sub(col + 1).max(10);
    let color = if notice.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.success_fg
    };

    position_cursor(row, col);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(color));
    print!("{}", truncate(&notice.text, width));
    print!("{}", Theme::reset());
}
