//! Page footer with copyright and project credit
//! Rendered inside each page scrollable so it sits below the content

use iced::widget::{Space, column, container, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, MEDIUM_WEIGHT};

/// Build the footer band
pub fn view(locale: Locale) -> Element<'static, Message> {
    let brand = row![
        svg(svg::Handle::from_memory(crate::ui::icons::HEART.as_bytes()))
            .width(16)
            .height(16)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::ACCENT_PINK),
            }),
        Space::new().width(8),
        text(locale.get(Key::AppName))
            .size(14)
            .font(iced::Font {
                weight: MEDIUM_WEIGHT,
                ..Default::default()
            })
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme))
            }),
    ]
    .align_y(Alignment::Center);

    let tagline = text(locale.get(Key::AppTagline))
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let rights = text(format!(
        "© 2025 {}. {}",
        locale.get(Key::AppName),
        locale.get(Key::FooterRights)
    ))
    .size(13)
    .style(|theme| text::Style {
        color: Some(theme::text_muted(theme)),
    });

    let credit = text(locale.get(Key::FooterCredit))
        .size(12)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    container(
        column![
            brand,
            Space::new().height(6),
            tagline,
            Space::new().height(12),
            rights,
            Space::new().height(4),
            credit
        ]
        .align_x(Alignment::Center)
        .width(Fill),
    )
    .width(Fill)
    .padding(Padding::new(32.0))
    .style(theme::footer_bar)
    .into()
}
