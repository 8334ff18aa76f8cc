//! Icon card widget
//!
//! A rounded card with a round pink icon chip, a title and a body text.
//! Used for feature highlights and prevention guidance.

use iced::widget::{Space, column, container, svg, text};
use iced::{Element, Fill};

use crate::ui::theme::{self, BOLD_WEIGHT};

/// Create an icon card
pub fn view<'a, Message: 'a>(
    icon: &'static str,
    title: &'a str,
    body: &'a str,
) -> Element<'a, Message> {
    let chip = container(
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(24)
            .height(24)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::ACCENT_PINK),
            }),
    )
    .width(48)
    .height(48)
    .center_x(48)
    .center_y(48)
    .style(theme::icon_chip);

    container(
        column![
            chip,
            Space::new().height(16),
            text(title)
                .size(17)
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                })
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                }),
            Space::new().height(8),
            text(body).size(14).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        ],
    )
    .width(Fill)
    .padding(24)
    .style(theme::card)
    .into()
}
