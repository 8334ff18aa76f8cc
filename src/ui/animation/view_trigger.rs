//! One-shot visibility trigger for scroll-revealed content
//!
//! Fires the first time a watched region is sufficiently visible inside
//! the scroll viewport, then stays fired for the life of the page. The
//! statistic counters start on that single shot, whether the reader
//! scrolls down to them or the section is already on screen when the
//! page opens.

/// Fraction of the watched region that must be visible before firing
pub const VISIBLE_THRESHOLD: f32 = 0.5;

/// Vertical extent of a region inside scrollable content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Distance from the top of the scrollable content to the region
    pub top: f32,
    pub height: f32,
}

/// Fraction of `region` visible in a viewport scrolled to `scroll_offset`
pub fn visible_fraction(region: Region, scroll_offset: f32, viewport_height: f32) -> f32 {
    if region.height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let view_bottom = scroll_offset + viewport_height;
    let visible_top = region.top.max(scroll_offset);
    let visible_bottom = (region.top + region.height).min(view_bottom);
    ((visible_bottom - visible_top).max(0.0) / region.height).clamp(0.0, 1.0)
}

/// Latch that fires on the first sufficiently-visible observation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewTrigger {
    #[default]
    Watching,
    Fired,
}

impl ViewTrigger {
    /// Feed one visibility observation. Returns `true` exactly once, on
    /// the observation that first crosses the threshold.
    pub fn observe(&mut self, fraction: f32) -> bool {
        if *self == ViewTrigger::Fired {
            return false;
        }
        if fraction >= VISIBLE_THRESHOLD {
            *self = ViewTrigger::Fired;
            return true;
        }
        false
    }

    pub fn has_fired(&self) -> bool {
        matches!(self, ViewTrigger::Fired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_once() {
        let mut trigger = ViewTrigger::default();
        assert!(!trigger.observe(0.49));
        assert!(trigger.observe(0.5));
        assert!(trigger.has_fired());
        assert!(!trigger.observe(1.0), "a fired trigger stays quiet");
        assert!(!trigger.observe(0.0));
        assert!(trigger.has_fired());
    }

    #[test]
    fn fires_on_the_first_observation_when_already_visible() {
        let mut trigger = ViewTrigger::default();
        assert!(trigger.observe(1.0));
    }

    #[test]
    fn fraction_is_one_when_fully_inside_the_viewport() {
        let region = Region {
            top: 100.0,
            height: 300.0,
        };
        assert_eq!(visible_fraction(region, 50.0, 600.0), 1.0);
    }

    #[test]
    fn fraction_is_zero_outside_the_viewport() {
        let region = Region {
            top: 2000.0,
            height: 400.0,
        };
        // Above the region.
        assert_eq!(visible_fraction(region, 0.0, 800.0), 0.0);
        // Scrolled well past it.
        assert_eq!(visible_fraction(region, 3000.0, 800.0), 0.0);
    }

    #[test]
    fn fraction_counts_the_overlapping_part_only() {
        let region = Region {
            top: 900.0,
            height: 400.0,
        };
        // Viewport 0..1000 sees the region's first 100 points.
        assert_eq!(visible_fraction(region, 0.0, 1000.0), 0.25);
        // Viewport 1100..1500 sees 1100..1300, the bottom 200.
        assert_eq!(visible_fraction(region, 1100.0, 400.0), 0.5);
    }

    #[test]
    fn degenerate_sizes_never_fire() {
        let flat = Region {
            top: 10.0,
            height: 0.0,
        };
        assert_eq!(visible_fraction(flat, 0.0, 800.0), 0.0);
        let region = Region {
            top: 10.0,
            height: 100.0,
        };
        assert_eq!(visible_fraction(region, 0.0, 0.0), 0.0);
    }
}
