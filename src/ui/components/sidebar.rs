//! Sidebar component renderer.
//!
//! The sidebar is a fixed-width column on the left edge: application title,
//! the signed-in user, view navigation, the search box, and the static
//! widgets (quick stats, recent tags, on-this-day). A vertical border
//! separates it from the main content area.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SidebarVm;
use crate::ui::SIDEBAR_COLS;

/// Inner text width inside the sidebar, margins excluded.
const INNER_WIDTH: usize = SIDEBAR_COLS - 4;

/// Renders the sidebar and its border down the full height.
pub fn render_sidebar(sidebar: &SidebarVm, theme: &Theme, rows: usize) {
    render_border(theme, rows);

    let mut row = 1;

    position_cursor(row, 2);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", sidebar.title);
    print!("{}", Theme::reset());
    row += 1;

    if let Some(name) = &sidebar.user_name {
        position_cursor(row, 2);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", truncate(name, INNER_WIDTH));
        print!("{}", Theme::reset());
    }
    row += 2;

    row = render_nav(sidebar, theme, row);
    row = render_search_box(sidebar, theme, row + 1);
    row = render_section(
        theme,
        row + 1,
        "Quick Stats",
        sidebar
            .quick_stats
            .iter()
            .map(|(label, value)| format!("{label}: {value}")),
    );
    row = render_section(
        theme,
        row + 1,
        "Recent Tags",
        sidebar.recent_tags.iter().map(|tag| format!("#{tag}")),
    );
    row = render_section(
        theme,
        row + 1,
        "On This Day",
        [truncate(&sidebar.on_this_day, INNER_WIDTH)],
    );

    if row + 1 < rows {
        position_cursor(rows.saturating_sub(2), 2);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", sidebar.settings_label);
        print!("{}", Theme::reset());
    }
}

fn render_border(theme: &Theme, rows: usize) {
    print!("{}", Theme::fg(&theme.colors.border));
    for row in 1..=rows {
        position_cursor(row, SIDEBAR_COLS);
        print!("\u{2502}");
    }
    print!("{}", Theme::reset());
}

/// Navigation list; the active view gets an accent marker.
fn render_nav(sidebar: &SidebarVm, theme: &Theme, start_row: usize) -> usize {
    let mut row = start_row;
    for (label, is_active) in &sidebar.nav_items {
        position_cursor(row, 2);
        if *is_active {
            print!("{}", Theme::fg(&theme.colors.accent_fg));
            print!("\u{258d} {label}");
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("  {label}");
        }
        print!("{}", Theme::reset());
        row += 1;
    }
    row
}

/// The search box, bordered when the query input has focus.
fn render_search_box(sidebar: &SidebarVm, theme: &Theme, start_row: usize) -> usize {
    let border_color = if sidebar.search_active {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };
    let width = INNER_WIDTH + 2;

    position_cursor(start_row, 2);
    print!("{}", Theme::fg(border_color));
    print!("\u{250c}{}\u{2510}", "\u{2500}".repeat(width - 2));

    position_cursor(start_row + 1, 2);
    print!("\u{2502}");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    let query = truncate(&sidebar.search_query, width - 2);
    let shown = if query.is_empty() && !sidebar.search_active {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        truncate("Search entries...", width - 2)
    } else {
        query
    };
    print!("{shown:<pad$}", pad = width - 2);
    print!("{}", Theme::fg(border_color));
    print!("\u{2502}");

    position_cursor(start_row + 2, 2);
    print!("\u{2514}{}\u{2518}", "\u{2500}".repeat(width - 2));
    print!("{}", Theme::reset());

    start_row + 3
}

fn render_section(
    theme: &Theme,
    start_row: usize,
    heading: &str,
    items: impl IntoIterator<Item = String>,
) -> usize {
    let mut row = start_row;

    position_cursor(row, 2);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{heading}");
    print!("{}", Theme::reset());
    row += 1;

    print!("{}", Theme::fg(&theme.colors.text_dim));
    for item in items {
        position_cursor(row, 3);
        print!("{}", truncate(&item, INNER_WIDTH));
        row += 1;
    }
    print!("{}", Theme::reset());
    row
}
