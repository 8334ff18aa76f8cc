// src/app/update/stats.rs
//! Statistics fetch and count-up handlers

use std::time::Instant;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, StatCounters};
use crate::features::stats::StatsState;
use crate::ui::animation::{Region, visible_fraction};
use crate::ui::components::header_bar::HEADER_HEIGHT;

/// Estimated extent of the statistics band inside the landing page,
/// measured from the top of the scrollable content
const STATS_BAND_REGION: Region = Region {
    top: 2050.0,
    height: 320.0,
};

impl App {
    /// Feed the current scroll position to the one-shot trigger and start
    /// the count-ups on the observation that first crosses the threshold.
    ///
    /// The trigger may fire before the payload has arrived; the counters
    /// then start as soon as they exist.
    pub(super) fn observe_stats_band(&mut self) {
        // Once fired the trigger is done, no further geometry is computed
        if self.ui.home.counters_trigger.has_fired() {
            return;
        }
        let viewport_height = (self.ui.window_size.height - HEADER_HEIGHT).max(0.0);
        let fraction = visible_fraction(
            STATS_BAND_REGION,
            self.ui.home.scroll_offset,
            viewport_height,
        );
        if self.ui.home.counters_trigger.observe(fraction) {
            if let Some(counters) = &mut self.ui.home.counters {
                counters.start(Instant::now());
            }
        }
    }

    /// Handle statistics-related messages
    pub fn handle_stats(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::HomeScrolled(y_offset) => {
                self.ui.home.scroll_offset = *y_offset;
                self.observe_stats_band();
                Some(Task::none())
            }

            Message::RefreshStats => {
                // Figures already on screen stay put, only a missing
                // payload is worth another request
                if matches!(self.ui.home.stats, StatsState::Ready(_)) {
                    return Some(Task::none());
                }
                self.ui.home.stats = StatsState::Loading;
                let api = self.core.api.clone();
                Some(Task::perform(
                    async move { Message::StatsLoaded(api.fetch_stats().await) },
                    |m| m,
                ))
            }

            Message::StatsLoaded(Ok(response)) => {
                self.ui.home.stats = StatsState::from_response(response, chrono::Utc::now());
                if let Some(snapshot) = self.ui.home.stats.snapshot() {
                    let mut counters = StatCounters::new(snapshot);
                    // The band may already be on screen when the payload
                    // lands, the figures then count up right away
                    self.observe_stats_band();
                    if self.ui.home.counters_trigger.has_fired() {
                        counters.start(Instant::now());
                    }
                    self.ui.home.counters = Some(counters);
                }
                Some(Task::none())
            }

            Message::StatsLoaded(Err(e)) => {
                tracing::warn!("Statistics fetch failed: {}", e);
                self.ui.home.stats = StatsState::Unavailable;
                self.ui.home.counters = None;
                Some(Task::none())
            }

            _ => None,
        }
    }
}
