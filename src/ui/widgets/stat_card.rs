//! Statistic cards
//!
//! `counter` renders a live counting value with a label underneath,
//! `figure` renders a headline number with a title and explanation.
//! Values arrive pre-formatted so these stay free of locale logic.

use iced::widget::{Space, column, container, text};
use iced::{Alignment, Element, Fill};

use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};

/// Animated counter card used in the live statistics band
pub fn counter<'a, Message: 'a>(value: String, label: &'a str) -> Element<'a, Message> {
    container(
        column![
            text(value)
                .size(38)
                .color(theme::ACCENT_PINK)
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                }),
            Space::new().height(8),
            text(label)
                .size(14)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                })
                .align_x(Alignment::Center),
        ]
        .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding(24)
    .style(theme::figure_tile)
    .into()
}

/// Headline figure card with a short explanation
pub fn figure<'a, Message: 'a>(
    value: &'a str,
    title: &'a str,
    description: &'a str,
) -> Element<'a, Message> {
    container(
        column![
            text(value)
                .size(36)
                .color(theme::ACCENT_PINK)
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                }),
            Space::new().height(10),
            text(title)
                .size(17)
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                })
                .font(iced::Font {
                    weight: MEDIUM_WEIGHT,
                    ..Default::default()
                })
                .align_x(Alignment::Center),
            Space::new().height(6),
            text(description)
                .size(14)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                })
                .align_x(Alignment::Center),
        ]
        .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding(24)
    .style(theme::card)
    .into()
}
