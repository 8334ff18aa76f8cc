//! Animation system
//!
//! Three pieces: `iced_anim`-backed hover transitions for interactive
//! cards and navigation, a count-up ramp for the statistic figures, and
//! a one-shot visibility trigger that starts those ramps when the reader
//! scrolls them into view.

mod hover;
mod ramp;
mod view_trigger;

pub use hover::HoverAnimations;
pub use ramp::{RAMP_DURATION, RampCounter};
pub use view_trigger::{Region, VISIBLE_THRESHOLD, ViewTrigger, visible_fraction};
