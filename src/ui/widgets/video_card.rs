//! Video reference card
//!
//! Embedded players are not available, so videos are presented as cards
//! that open the link in the system browser or copy it to the clipboard.

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Fill};

use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Create a video reference card
#[allow(clippy::too_many_arguments)]
pub fn view<'a, Message: Clone + 'a>(
    title: &'a str,
    caption: &'a str,
    url: &'a str,
    open_label: &'a str,
    copy_label: &'a str,
    on_open: Message,
    on_copy: Message,
) -> Element<'a, Message> {
    let play_chip = container(
        svg(svg::Handle::from_memory(icons::PLAY.as_bytes()))
            .width(22)
            .height(22)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::ACCENT_PINK),
            }),
    )
    .width(44)
    .height(44)
    .center_x(44)
    .center_y(44)
    .style(theme::icon_chip);

    let header = row![
        play_chip,
        Space::new().width(14),
        column![
            text(title)
                .size(16)
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                })
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                }),
            Space::new().height(4),
            text(caption).size(13).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
            Space::new().height(4),
            text(url).size(12).style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        ],
    ]
    .align_y(Alignment::Start);

    let open_btn = button(
        row![
            svg(svg::Handle::from_memory(icons::EXTERNAL_LINK.as_bytes()))
                .width(14)
                .height(14)
                .style(|_theme, _status| svg::Style {
                    color: Some(iced::Color::WHITE),
                }),
            Space::new().width(6),
            text(open_label).size(13),
        ]
        .align_y(Alignment::Center),
    )
    .padding([8, 14])
    .style(theme::primary_button)
    .on_press(on_open);

    let copy_btn = button(text(copy_label).size(13))
        .padding([8, 14])
        .style(theme::text_button)
        .on_press(on_copy);

    container(
        column![
            header,
            Space::new().height(14),
            row![open_btn, Space::new().width(8), copy_btn].align_y(Alignment::Center),
        ],
    )
    .width(Fill)
    .padding(20)
    .style(theme::card)
    .into()
}
