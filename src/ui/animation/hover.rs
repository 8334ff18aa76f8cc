//! Hover transition manager
//!
//! Smooth hover highlights for navigation links and content cards. Only
//! one item is hovered at a time, so the manager tracks just the active
//! item and the one fading back out.

use std::hash::Hash;
use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

const HOVER_DURATION: Duration = Duration::from_millis(200);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

/// Hover state for a set of mutually exclusive items
#[derive(Debug)]
pub struct HoverAnimations<K: Eq + Hash + Clone> {
    active_key: Option<K>,
    active_anim: Animated<f32>,
    fading_key: Option<K>,
    fading_anim: Animated<f32>,
}

impl<K: Eq + Hash + Clone> Default for HoverAnimations<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> HoverAnimations<K> {
    pub fn new() -> Self {
        Self {
            active_key: None,
            active_anim: Animated::transition(0.0, hover_easing()),
            fading_key: None,
            fading_anim: Animated::transition(0.0, hover_easing()),
        }
    }

    /// Set the hovered item, or `None` when the pointer leaves.
    ///
    /// The previously active item keeps its current progress and fades
    /// back to zero instead of snapping.
    pub fn set_hovered(&mut self, key: Option<K>) {
        if self.active_key == key {
            return;
        }

        if let Some(old) = self.active_key.take() {
            self.fading_key = Some(old);
            let current = *self.active_anim.value();
            self.fading_anim = Animated::transition(current, hover_easing());
            self.fading_anim.update(0.0.into());
        }

        if let Some(new_key) = key {
            self.active_key = Some(new_key);
            self.active_anim = Animated::transition(0.0, hover_easing());
            self.active_anim.update(1.0.into());
        }
    }

    /// Interpolated progress for a key, 0.0 to 1.0
    pub fn get_progress(&self, key: &K) -> f32 {
        if self.active_key.as_ref() == Some(key) {
            *self.active_anim.value()
        } else if self.fading_key.as_ref() == Some(key) {
            *self.fading_anim.value()
        } else {
            0.0
        }
    }

    /// Whether any transition is still running
    pub fn is_animating(&self) -> bool {
        self.active_anim.is_animating() || self.fading_anim.is_animating()
    }

    /// Drop the fading slot once it has settled back to zero
    pub fn cleanup_completed(&mut self) {
        if self.fading_key.is_some()
            && *self.fading_anim.value() < 0.01
            && self.fading_anim.value() == self.fading_anim.target()
        {
            self.fading_key = None;
        }
    }

    /// Advance both transitions to `now`
    pub fn tick(&mut self, now: Instant) {
        self.active_anim.tick(now);
        self.fading_anim.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_one_active_item() {
        let mut hover: HoverAnimations<usize> = HoverAnimations::new();
        hover.set_hovered(Some(3));
        hover.tick(Instant::now() + HOVER_DURATION * 2);
        assert!(hover.get_progress(&3) > 0.9);
        assert_eq!(hover.get_progress(&7), 0.0);
    }

    #[test]
    fn previous_item_fades_out_when_a_new_one_is_hovered() {
        let mut hover: HoverAnimations<usize> = HoverAnimations::new();
        let t0 = Instant::now();
        hover.set_hovered(Some(1));
        hover.tick(t0 + HOVER_DURATION * 2);
        hover.set_hovered(Some(2));
        // Immediately after the switch, item 1 has not snapped to zero.
        assert!(hover.get_progress(&1) > 0.5);
        hover.tick(t0 + HOVER_DURATION * 4);
        assert!(hover.get_progress(&1) < 0.1);
        assert!(hover.get_progress(&2) > 0.9);
    }
}
