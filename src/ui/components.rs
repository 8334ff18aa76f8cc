//! App-aware chrome components
//!
//! The pieces of the window that know about `crate::app::Message` and
//! application state: the header bar, the article side menu and the page
//! footer. Message-free building blocks live in `crate::ui::widgets`.

pub mod header_bar;
pub mod page_footer;
pub mod side_menu;

pub use header_bar::{HEADER_HEIGHT, Page};
