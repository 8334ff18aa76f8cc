//! Reusable presentational widgets
//!
//! Everything here is generic over the message type and carries no
//! application state: cards, banners and headers that pages assemble.
//! App-aware chrome (header bar, side menu, footer) lives in
//! `crate::ui::components`; canvas drawing in `crate::ui::primitives`.

pub mod callout;
pub mod info_card;
pub mod section_header;
pub mod stat_card;
pub mod video_card;

pub use callout::{error_banner, success_panel};
pub use info_card::view as info_card;
pub use video_card::view as video_card;
