//! Footer component renderer.
//!
//! Draws a separator line and the context-appropriate keybinding hints on the
//! bottom two rows of the terminal.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer separator and keybinding hints.
pub fn render_footer(footer: &FooterInfo, theme: &Theme, rows: usize, cols: usize) {
    if rows < 2 {
        return;
    }

    position_cursor(rows - 1, 1);
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{}", "\u{2500}".repeat(cols));
    print!("{}", Theme::reset());

    position_cursor(rows, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", truncate(&footer.keybindings, cols.saturating_sub(1)));
    print!("{}", Theme::reset());
}
