// src/app/view.rs
//! Application view rendering

use iced::Element;
use iced::widget::column;

use super::App;
use super::message::Message;
use crate::ui::components::Page;
use crate::ui::{components, pages};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let locale = self.core.locale;
        let active_page = self.ui.active_page;

        let header = components::header_bar::view(
            active_page,
            locale,
            self.ui.nav_history.can_go_back(),
            self.ui.nav_history.can_go_forward(),
            &self.ui.hover_animations,
        );

        let page: Element<'_, Message> = match active_page {
            Page::Home => pages::home::view(
                &self.ui.home,
                &self.ui.hover_animations,
                self.ui.animation_now,
                locale,
            ),
            Page::AboutFistula => pages::about::view(
                &self.ui.about,
                &self.ui.hover_animations,
                self.ui.copied_url,
                locale,
            ),
            Page::OurSolution => pages::solution::view(locale),
            Page::PreventionTreatment => pages::prevention::view(self.ui.copied_url, locale),
            Page::Survey => pages::survey::view(&self.ui.survey, locale),
            Page::Interest => pages::interest::view(&self.ui.interest, locale),
            Page::Settings => {
                pages::settings::view(&self.core.settings, self.core.api.base_url(), locale)
            }
        };

        column![header, page].into()
    }
}
