//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components. It handles screen
//! branching (auth, editor, placeholder, timeline) and draws the shared
//! chrome around whichever branch is active.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UiViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UiViewModel;

/// Renders the application UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// appropriate screen branch. Prints ANSI-styled output using `print!`; the
/// shell owns screen clearing and flushing.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a pre-computed view model.
///
/// Exactly one content branch draws per frame: an auth screen, the editor,
/// a placeholder, or the timeline. The sidebar, notice banner, and footer are
/// layered around the authenticated branches.
fn render_viewmodel(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(screen) = vm.auth_screen {
        components::render_auth_screen(screen, theme, rows, cols);
        components::render_footer(&vm.footer, theme, rows, cols);
        return;
    }

    if let Some(sidebar) = &vm.sidebar {
        // Reserve the bottom two rows for the footer.
        components::render_sidebar(sidebar, theme, rows.saturating_sub(2));
    }

    if let Some(editor) = &vm.editor {
        components::render_editor(1, editor, theme, cols);
    } else if let Some(placeholder) = &vm.placeholder {
        components::render_placeholder(placeholder, theme, rows, cols);
    } else {
        components::render_timeline(2, &vm.cards, theme, cols);
    }

    if let Some(notice) = &vm.notice {
        components::render_notice(1, notice, theme, cols);
    }

    components::render_footer(&vm.footer, theme, rows, cols);
}
