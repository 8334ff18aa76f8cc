//! Section header widget
//!
//! Centered heading for page sections: an optional pink kicker line,
//! the title, and an optional subtitle. Does not depend on
//! application-specific types.

use iced::widget::{Space, column, text};
use iced::{Alignment, Element, Fill};

use crate::ui::theme::{self, BOLD_WEIGHT};

/// Create a centered section header
pub fn view<'a, Message: 'a>(
    kicker: Option<&'a str>,
    title: &'a str,
    subtitle: Option<&'a str>,
) -> Element<'a, Message> {
    let mut parts = column![].align_x(Alignment::Center).width(Fill);

    if let Some(kicker) = kicker {
        parts = parts.push(
            text(kicker)
                .size(14)
                .color(theme::KICKER_PINK)
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                }),
        );
        parts = parts.push(Space::new().height(8));
    }

    parts = parts.push(
        text(title)
            .size(30)
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            })
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            })
            .align_x(Alignment::Center),
    );

    if let Some(subtitle) = subtitle {
        parts = parts.push(Space::new().height(12));
        parts = parts.push(
            text(subtitle)
                .size(16)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                })
                .align_x(Alignment::Center)
                .width(iced::Length::Fixed(720.0)),
        );
    }

    parts.into()
}
