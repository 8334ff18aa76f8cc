//! Inline callouts for form feedback

use iced::widget::{Space, column, container, row, svg, text};
use iced::{Alignment, Background, Border, Color, Element, Fill};

use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Red banner shown above a form after a failed submission
pub fn error_banner<'a, Message: 'a>(message: &'a str) -> Element<'a, Message> {
    container(
        row![
            svg(svg::Handle::from_memory(icons::ALERT_CIRCLE.as_bytes()))
                .width(20)
                .height(20)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::danger(theme)),
                }),
            Space::new().width(10),
            text(message).size(14).style(|theme| text::Style {
                color: Some(theme::danger(theme)),
            }),
        ]
        .align_y(Alignment::Center),
    )
    .width(Fill)
    .padding(14)
    .style(|theme| container::Style {
        background: Some(Background::Color(Color {
            a: 0.08,
            ..theme::danger(theme)
        })),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: theme::danger(theme),
        },
        ..Default::default()
    })
    .into()
}

/// Centered confirmation shown once a submission succeeds
pub fn success_panel<'a, Message: 'a>(title: &'a str, body: &'a str) -> Element<'a, Message> {
    column![
        svg(svg::Handle::from_memory(icons::CHECK_CIRCLE.as_bytes()))
            .width(64)
            .height(64)
            .style(|theme, _status| svg::Style {
                color: Some(theme::success(theme)),
            }),
        Space::new().height(20),
        text(title)
            .size(24)
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            })
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            })
            .align_x(Alignment::Center),
        Space::new().height(10),
        text(body)
            .size(15)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            })
            .align_x(Alignment::Center),
    ]
    .align_x(Alignment::Center)
    .width(Fill)
    .into()
}
