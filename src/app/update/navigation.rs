// src/app/update/navigation.rs
//! Navigation message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::stats::StatsState;
use crate::ui::components::Page;

/// Estimated top offsets of the fistula article sections, used to map
/// scroll positions to side menu entries and back
const ABOUT_SECTION_POSITIONS: [(usize, f32); 5] = [
    (0, 0.0),
    (1, 640.0),
    (2, 950.0),
    (3, 1260.0),
    (4, 1560.0),
];

/// Get scroll position for an article section
fn about_section_scroll_position(section: usize) -> f32 {
    ABOUT_SECTION_POSITIONS
        .iter()
        .find(|(s, _)| *s == section)
        .map(|(_, pos)| *pos)
        .unwrap_or(0.0)
}

/// Get the article section a scroll offset sits in
fn about_section_from_scroll_position(y_offset: f32) -> usize {
    // Flip slightly before the section top reaches the viewport top
    let search_offset = y_offset + 50.0;
    let mut current = 0;
    for (section, pos) in ABOUT_SECTION_POSITIONS.iter() {
        if search_offset >= *pos {
            current = *section;
        } else {
            break;
        }
    }
    current
}

/// Scrollable id of each page, for resetting and jumping
fn scroll_id_for(page: Page) -> &'static str {
    match page {
        Page::Home => "home_scroll",
        Page::AboutFistula => "about_scroll",
        Page::OurSolution => "solution_scroll",
        Page::PreventionTreatment => "prevention_scroll",
        Page::Survey => "survey_scroll",
        Page::Interest => "interest_scroll",
        Page::Settings => "settings_scroll",
    }
}

impl App {
    /// Switch the visible page (shared by menu clicks and back/forward)
    fn navigate_to_page(&mut self, page: Page) -> Task<Message> {
        self.ui.active_page = page;
        self.ui.copied_url = None;

        // The scroll position snaps to the top, keep the trackers in step
        match page {
            Page::Home => {
                self.ui.home.scroll_offset = 0.0;
                // A very tall window can show the statistics band at once
                self.observe_stats_band();
            }
            Page::AboutFistula => {
                self.ui.about.scroll_offset = 0.0;
                self.ui.about.active_section = 0;
            }
            _ => {}
        }

        // A failed statistics fetch gets another chance on each visit
        let refresh = if page == Page::Home && self.ui.home.stats == StatsState::Unavailable {
            Task::done(Message::RefreshStats)
        } else {
            Task::none()
        };

        Task::batch([
            iced::widget::operation::snap_to(
                iced::widget::Id::new(scroll_id_for(page)),
                iced::widget::scrollable::RelativeOffset { x: 0.0, y: 0.0 },
            ),
            refresh,
        ])
    }

    /// Handle navigation-related messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Noop => Some(Task::none()),

            Message::Navigate(page) => {
                self.ui.nav_history.push(*page);
                Some(self.navigate_to_page(*page))
            }

            Message::NavigateBack => {
                if let Some(page) = self.ui.nav_history.go_back() {
                    Some(self.navigate_to_page(page))
                } else {
                    Some(Task::none())
                }
            }

            Message::NavigateForward => {
                if let Some(page) = self.ui.nav_history.go_forward() {
                    Some(self.navigate_to_page(page))
                } else {
                    Some(Task::none())
                }
            }

            // Alt+arrow mirrors the browser history shortcuts
            Message::KeyPressed(key, modifiers) => {
                use iced::keyboard::key::{Key, Named};

                if modifiers.alt() {
                    match key {
                        Key::Named(Named::ArrowLeft) => {
                            return Some(self.update(Message::NavigateBack));
                        }
                        Key::Named(Named::ArrowRight) => {
                            return Some(self.update(Message::NavigateForward));
                        }
                        _ => {}
                    }
                }
                Some(Task::none())
            }

            Message::JumpToAboutSection(section) => {
                self.ui.about.active_section = *section;
                let target_y = about_section_scroll_position(*section);
                Some(iced::widget::operation::scroll_to(
                    iced::widget::Id::new("about_scroll"),
                    iced::widget::scrollable::AbsoluteOffset {
                        x: Some(0.0),
                        y: Some(target_y),
                    },
                ))
            }

            Message::AboutScrolled(y_offset) => {
                self.ui.about.scroll_offset = *y_offset;
                self.ui.about.active_section = about_section_from_scroll_position(*y_offset);
                Some(Task::none())
            }

            Message::OpenUrl(url) => {
                if let Err(e) = open::that(url) {
                    tracing::warn!("Failed to open {}: {}", url, e);
                }
                Some(Task::none())
            }

            Message::CopyLink(url) => {
                self.ui.copied_url = Some(*url);
                Some(iced::clipboard::write((*url).to_string()))
            }

            Message::Hover(id) => {
                self.ui.hover_animations.set_hovered(*id);
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_of_page_is_the_first_section() {
        assert_eq!(about_section_from_scroll_position(0.0), 0);
        assert_eq!(about_section_from_scroll_position(200.0), 0);
    }

    #[test]
    fn sections_flip_slightly_before_their_top() {
        // 50 px of lead so the menu highlights as the heading arrives
        assert_eq!(about_section_from_scroll_position(589.0), 0);
        assert_eq!(about_section_from_scroll_position(590.0), 1);
        assert_eq!(about_section_from_scroll_position(899.0), 1);
        assert_eq!(about_section_from_scroll_position(910.0), 2);
    }

    #[test]
    fn deep_scroll_lands_on_the_last_section() {
        assert_eq!(about_section_from_scroll_position(5000.0), 4);
    }

    #[test]
    fn jump_positions_match_the_table() {
        assert_eq!(about_section_scroll_position(0), 0.0);
        assert_eq!(about_section_scroll_position(3), 1260.0);
        assert_eq!(about_section_scroll_position(99), 0.0);
    }

    #[test]
    fn every_page_has_a_scroll_id() {
        let pages = [
            Page::Home,
            Page::AboutFistula,
            Page::OurSolution,
            Page::PreventionTreatment,
            Page::Survey,
            Page::Interest,
            Page::Settings,
        ];
        let ids: std::collections::HashSet<_> = pages.iter().map(|p| scroll_id_for(*p)).collect();
        assert_eq!(ids.len(), pages.len(), "Scroll ids must be distinct");
    }
}
