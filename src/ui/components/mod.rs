//! Composable UI component renderers.
//!
//! Each component renders one region of the screen from view model data,
//! positioning its own cursor and returning the next available row where that
//! convention applies. Components never read application state directly.
//!
//! # Components
//!
//! - [`auth`]: Full-screen loading and sign-in branches
//! - [`sidebar`]: Navigation, search box, and static widgets
//! - [`timeline`]: Entry card list
//! - [`editor`]: Entry form
//! - [`placeholder`]: "Coming soon" screens
//! - [`notice`]: Notification banner
//! - [`footer`]: Keybinding hints

pub mod auth;
pub mod editor;
pub mod footer;
pub mod notice;
pub mod placeholder;
pub mod sidebar;
pub mod timeline;

pub use auth::render_auth_screen;
pub use editor::render_editor;
pub use footer::render_footer;
pub use notice::render_notice;
pub use placeholder::render_placeholder;
pub use sidebar::render_sidebar;
pub use timeline::render_timeline;
