//! Solution ecosystem page
//!
//! The four platform components as detailed cards, followed by the
//! practice testimonials.

use iced::widget::{Space, column, container, row, scrollable, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::content;
use crate::i18n::Locale;
use crate::ui::components;
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};
use crate::ui::widgets::section_header;

const COMPONENT_ICONS: [&str; 4] = [
    icons::DATABASE_ZAP,
    icons::SMARTPHONE,
    icons::LAYOUT_DASHBOARD,
    icons::BRAIN_CIRCUIT,
];

/// Build the solution page view
pub fn view(locale: Locale) -> Element<'static, Message> {
    let mut component_cards = column![].spacing(24);
    for (idx, component) in content::SOLUTION_COMPONENTS.iter().enumerate() {
        component_cards = component_cards.push(component_card(COMPONENT_ICONS[idx], component));
    }

    let testimonials = row![
        testimonial_card(&content::TESTIMONIALS[0]),
        Space::new().width(24),
        testimonial_card(&content::TESTIMONIALS[1]),
    ];

    let page = column![
        section_header::view(
            None,
            content::SOLUTION_PAGE_TITLE,
            Some(content::SOLUTION_PAGE_SUBTITLE),
        ),
        Space::new().height(40),
        component_cards,
        Space::new().height(56),
        section_header::view(
            None,
            content::TESTIMONIALS_INTRO.title,
            Some(content::TESTIMONIALS_INTRO.subtitle),
        ),
        Space::new().height(32),
        testimonials,
    ]
    .width(Fill)
    .max_width(1020);

    let content = column![
        container(page)
            .width(Fill)
            .center_x(Fill)
            .padding(Padding::new(40.0).top(36.0).bottom(64.0)),
        components::page_footer::view(locale),
    ];

    container(
        scrollable(content)
            .width(Fill)
            .height(Fill)
            .id(iced::widget::Id::new("solution_scroll"))
            .style(theme::page_scrollable),
    )
    .width(Fill)
    .height(Fill)
    .style(theme::main_content)
    .into()
}

fn component_card(
    icon: &'static str,
    component: &'static content::SolutionComponent,
) -> Element<'static, Message> {
    let mut points = column![].spacing(12);
    for point in component.points {
        points = points.push(bullet_point(point));
    }

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

    let header = row![
        chip,
        Space::new().width(16),
        text(component.title)
            .size(20)
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            })
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
    ]
    .align_y(Alignment::Center);

    container(
        column![
            header,
            Space::new().height(14),
            text(component.lead).size(15).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
            Space::new().height(18),
            points,
        ],
    )
    .width(Fill)
    .padding(28)
    .style(theme::card)
    .into()
}

fn bullet_point(point: &'static content::BulletPoint) -> Element<'static, Message> {
    let check = svg(svg::Handle::from_memory(icons::CHECK_CIRCLE.as_bytes()))
        .width(18)
        .height(18)
        .style(|theme, _status| svg::Style {
            color: Some(theme::success(theme)),
        });

    row![
        check,
        Space::new().width(10),
        column![
            text(point.label)
                .size(14)
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                })
                .font(iced::Font {
                    weight: MEDIUM_WEIGHT,
                    ..Default::default()
                }),
            text(point.text).size(14).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        ]
        .spacing(2),
    ]
    .align_y(Alignment::Start)
    .into()
}

fn testimonial_card(testimonial: &'static content::Testimonial) -> Element<'static, Message> {
    container(
        column![
            text(format!("\u{201C}{}\u{201D}", testimonial.quote))
                .size(15)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                })
                .font(iced::Font {
                    style: iced::font::Style::Italic,
                    ..Default::default()
                }),
            Space::new().height(16),
            text(testimonial.name)
                .size(14)
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                })
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                }),
            Space::new().height(2),
            text(testimonial.role).size(12).style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        ],
    )
    .width(Fill)
    .padding(28)
    .style(theme::card)
    .into()
}
