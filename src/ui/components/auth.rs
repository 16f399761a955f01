//! Full-screen authentication branches.
//!
//! Two screens live here: the loading splash shown while the session state is
//! unresolved, and the sign-in prompt shown once it resolves to signed-out.
//! Both are centered vertically and horizontally.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::AuthScreen;

/// Renders the loading or sign-in screen, centered.
pub fn render_auth_screen(screen: AuthScreen, theme: &Theme, rows: usize, cols: usize) {
    match screen {
        AuthScreen::Loading => render_loading(theme, rows, cols),
        AuthScreen::SignIn => render_sign_in(theme, rows, cols),
    }
}

fn render_loading(theme: &Theme, rows: usize, cols: usize) {
    let message = "Loading your journal...";
    let row = (rows / 2).max(1);

    position_cursor(row, centered_col(cols, message.len()));
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{message}");
    print!("{}", Theme::reset());
}

fn render_sign_in(theme: &Theme, rows: usize, cols: usize) {
    let title = "Daybook";
    let subtitle = "Your personal journal";
    let prompt = "Press Enter to sign in";
    let row = (rows / 2).saturating_sub(1).max(1);

    position_cursor(row, centered_col(cols, title.len()));
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{title}");
    print!("{}", Theme::reset());

    position_cursor(row + 1, centered_col(cols, subtitle.len()));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{subtitle}");
    print!("{}", Theme::reset());

    position_cursor(row + 3, centered_col(cols, prompt.len()));
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{prompt}");
    print!("{}", Theme::reset());
}

/// 1-indexed column that centers `len` characters in `cols`.
fn centered_col(cols: usize, len: usize) -> usize {
    (cols.saturating_sub(len) / 2).max(1)
}
