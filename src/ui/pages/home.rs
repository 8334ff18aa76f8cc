//! Landing page
//!
//! Hero, problem overview, official figures, solution highlights, the
//! live statistics band fed by the questionnaire API, and two
//! call-to-action bands. Scroll offsets are reported so the statistics
//! counters can start when their band comes into view.

use std::time::Instant;

use iced::widget::{Space, button, column, container, mouse_area, row, scrollable, svg, text};
use iced::{Alignment, Border, Color, Element, Fill, Padding, Shadow, Vector};

use crate::app::{HomePageState, HoverId, Message};
use crate::features::content;
use crate::features::stats::StatsState;
use crate::i18n::{self, Key, Locale};
use crate::ui::animation::HoverAnimations;
use crate::ui::components::{self, Page};
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};
use crate::ui::widgets::{info_card, section_header, stat_card};

/// Icons for the four solution feature cards, in card order
const FEATURE_ICONS: [&str; 4] = [
    icons::SMARTPHONE,
    icons::LAYOUT_DASHBOARD,
    icons::BRAIN_CIRCUIT,
    icons::STETHOSCOPE,
];

/// Build the landing page view
pub fn view<'a>(
    state: &'a HomePageState,
    hover_animations: &HoverAnimations<HoverId>,
    now: Instant,
    locale: Locale,
) -> Element<'a, Message> {
    let survey_cta_progress = hover_animations.get_progress(&HoverId::Cta(0));
    let contact_cta_progress = hover_animations.get_progress(&HoverId::Cta(1));

    let content = column![
        hero(locale),
        problem_section(),
        official_stats_section(),
        solution_section(),
        stats_band(state, now, locale),
        cta_band(
            &content::SURVEY_CTA,
            locale.get(Key::HomeSurveyAction),
            Message::Navigate(Page::Survey),
            HoverId::Cta(0),
            survey_cta_progress,
            true,
        ),
        cta_band(
            &content::CONTACT_CTA,
            locale.get(Key::HomeInterestAction),
            Message::Navigate(Page::Interest),
            HoverId::Cta(1),
            contact_cta_progress,
            false,
        ),
        components::page_footer::view(locale),
    ];

    container(
        scrollable(content)
            .width(Fill)
            .height(Fill)
            .id(iced::widget::Id::new("home_scroll"))
            .on_scroll(|viewport| {
                let offset = viewport.absolute_offset();
                Message::HomeScrolled(offset.y)
            })
            .style(theme::page_scrollable),
    )
    .width(Fill)
    .height(Fill)
    .style(theme::main_content)
    .into()
}

fn hero(locale: Locale) -> Element<'static, Message> {
    let title = column![
        text(content::HERO_TITLE)
            .size(40)
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            })
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            })
            .align_x(Alignment::Center),
        text(content::HERO_TITLE_ACCENT)
            .size(40)
            .color(theme::ACCENT_PINK)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            })
            .align_x(Alignment::Center),
    ]
    .align_x(Alignment::Center);

    let subtitle = text(content::HERO_SUBTITLE)
        .size(17)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        })
        .align_x(Alignment::Center)
        .width(iced::Length::Fixed(760.0));

    let survey_btn = button(text(locale.get(Key::HomeSurveyAction)).size(15))
        .padding([14, 28])
        .style(theme::primary_button)
        .on_press(Message::Navigate(Page::Survey));

    let solution_btn = button(
        row![
            text(locale.get(Key::HomeSolutionAction)).size(15),
            Space::new().width(6),
            svg(svg::Handle::from_memory(icons::ARROW_RIGHT.as_bytes()))
                .width(16)
                .height(16)
                .style(|_theme, _status| svg::Style {
                    color: Some(theme::ACCENT_PINK),
                }),
        ]
        .align_y(Alignment::Center),
    )
    .padding([14, 20])
    .style(theme::text_button)
    .on_press(Message::Navigate(Page::OurSolution));

    let inner = column![
        title,
        Space::new().height(20),
        subtitle,
        Space::new().height(30),
        row![survey_btn, Space::new().width(14), solution_btn].align_y(Alignment::Center),
    ]
    .align_x(Alignment::Center)
    .width(Fill);

    container(
        container(inner)
            .width(Fill)
            .center_x(Fill)
            .padding(Padding::new(40.0).top(80.0).bottom(80.0)),
    )
    .width(Fill)
    .style(theme::hero_band)
    .into()
}

fn problem_section() -> Element<'static, Message> {
    let mut paragraphs = column![].spacing(16);
    for paragraph in &content::PROBLEM_PARAGRAPHS {
        paragraphs = paragraphs.push(
            text(*paragraph)
                .size(15)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                })
                .align_x(Alignment::Center),
        );
    }

    let inner = column![
        section_header::view(
            Some(content::PROBLEM_INTRO.kicker),
            content::PROBLEM_INTRO.title,
            None,
        ),
        Space::new().height(24),
        paragraphs,
    ]
    .align_x(Alignment::Center)
    .width(Fill)
    .max_width(860);

    container(
        container(inner)
            .width(Fill)
            .center_x(Fill)
            .padding(Padding::new(40.0).top(64.0).bottom(64.0)),
    )
    .width(Fill)
    .into()
}

fn official_stats_section() -> Element<'static, Message> {
    let intro = &content::OFFICIAL_STATS_INTRO;

    let cards = row![
        stat_card::figure(
            content::OFFICIAL_STATS[0].statistic,
            content::OFFICIAL_STATS[0].title,
            content::OFFICIAL_STATS[0].description,
        ),
        Space::new().width(20),
        stat_card::figure(
            content::OFFICIAL_STATS[1].statistic,
            content::OFFICIAL_STATS[1].title,
            content::OFFICIAL_STATS[1].description,
        ),
        Space::new().width(20),
        stat_card::figure(
            content::OFFICIAL_STATS[2].statistic,
            content::OFFICIAL_STATS[2].title,
            content::OFFICIAL_STATS[2].description,
        ),
    ];

    let inner = column![
        section_header::view(Some(intro.kicker), intro.title, Some(intro.subtitle)),
        Space::new().height(32),
        cards,
    ]
    .align_x(Alignment::Center)
    .width(Fill)
    .max_width(1140);

    container(
        container(inner)
            .width(Fill)
            .center_x(Fill)
            .padding(Padding::new(40.0).top(64.0).bottom(64.0)),
    )
    .width(Fill)
    .style(theme::section_alt)
    .into()
}

fn solution_section() -> Element<'static, Message> {
    let intro = &content::SOLUTION_INTRO;

    let feature = |idx: usize| {
        info_card(
            FEATURE_ICONS[idx],
            content::SOLUTION_FEATURES[idx].title,
            content::SOLUTION_FEATURES[idx].description,
        )
    };

    let grid = column![
        row![feature(0), Space::new().width(20), feature(1)],
        Space::new().height(20),
        row![feature(2), Space::new().width(20), feature(3)],
    ];

    let inner = column![
        section_header::view(Some(intro.kicker), intro.title, Some(intro.subtitle)),
        Space::new().height(32),
        grid,
    ]
    .align_x(Alignment::Center)
    .width(Fill)
    .max_width(1140);

    container(
        container(inner)
            .width(Fill)
            .center_x(Fill)
            .padding(Padding::new(40.0).top(64.0).bottom(64.0)),
    )
    .width(Fill)
    .into()
}

/// Live figures from the questionnaire, counting up once scrolled into view
fn stats_band<'a>(state: &'a HomePageState, now: Instant, locale: Locale) -> Element<'a, Message> {
    let body: Element<'a, Message> = match &state.stats {
        StatsState::Loading => text(locale.get(Key::StatsLoading))
            .size(15)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            })
            .into(),
        StatsState::Unavailable => column![
            text(locale.get(Key::StatsUnavailable))
                .size(15)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                }),
            Space::new().height(16),
            button(text(locale.get(Key::Retry)).size(14))
                .padding([10, 22])
                .style(theme::primary_button)
                .on_press(Message::RefreshStats),
        ]
        .align_x(Alignment::Center)
        .into(),
        StatsState::Ready(snapshot) => {
            // Counters exist whenever a snapshot does; the direct values
            // are a fallback, not the normal path.
            let (total, awareness, cause) = match &state.counters {
                Some(c) => (
                    c.total.value(now),
                    c.awareness.value(now),
                    c.correct_cause.value(now),
                ),
                None => (
                    snapshot.total_responses,
                    u64::from(snapshot.awareness_pct),
                    u64::from(snapshot.correct_cause_pct),
                ),
            };

            let updated = format!(
                "{} {}",
                locale.get(Key::StatsUpdatedAt),
                snapshot
                    .fetched_at
                    .with_timezone(&chrono::Local)
                    .format("%H:%M"),
            );

            column![
                row![
                    stat_card::counter(
                        i18n::format_count(locale.language, total),
                        locale.get(Key::StatsTotalLabel),
                    ),
                    Space::new().width(20),
                    stat_card::counter(
                        format!("{}%", awareness),
                        locale.get(Key::StatsAwarenessLabel),
                    ),
                    Space::new().width(20),
                    stat_card::counter(format!("{}%", cause), locale.get(Key::StatsCauseLabel)),
                ],
                Space::new().height(18),
                text(updated).size(12).style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                }),
            ]
            .align_x(Alignment::Center)
            .into()
        }
    };

    let inner = column![
        section_header::view(
            Some(locale.get(Key::StatsKicker)),
            locale.get(Key::StatsTitle),
            Some(locale.get(Key::StatsIntro)),
        ),
        Space::new().height(28),
        body,
    ]
    .align_x(Alignment::Center)
    .width(Fill)
    .max_width(1140);

    container(
        container(inner)
            .width(Fill)
            .center_x(Fill)
            .padding(Padding::new(40.0).top(56.0).bottom(56.0)),
    )
    .width(Fill)
    .style(theme::hero_band)
    .into()
}

/// Full-width call-to-action, solid pink or soft pink depending on `accent`
fn cta_band(
    cta: &'static content::CallToAction,
    action_label: &'static str,
    action_message: Message,
    hover_id: HoverId,
    hover_progress: f32,
    accent: bool,
) -> Element<'static, Message> {
    let title = text(cta.title)
        .size(26)
        .style(move |theme| text::Style {
            color: Some(if accent {
                Color::WHITE
            } else {
                theme::text_primary(theme)
            }),
        })
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .align_x(Alignment::Center);

    let body = text(cta.body)
        .size(15)
        .style(move |theme| text::Style {
            color: Some(if accent {
                Color::from_rgba(1.0, 1.0, 1.0, 0.92)
            } else {
                theme::text_secondary(theme)
            }),
        })
        .align_x(Alignment::Center);

    let btn = button(
        text(action_label).size(15).font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        }),
    )
    .padding([13, 30])
    .style(move |theme, status| {
        if accent {
            // White button warming toward soft pink as the pointer settles
            button::Style {
                background: Some(iced::Background::Color(theme::blend(
                    Color::WHITE,
                    iced::color!(0xfdf2f8),
                    hover_progress,
                ))),
                text_color: theme::ACCENT_PINK,
                border: Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 6.0,
                },
                ..Default::default()
            }
        } else {
            let base = theme::primary_button(theme, status);
            button::Style {
                background: Some(iced::Background::Color(theme::blend(
                    theme::ACCENT_PINK,
                    theme::ACCENT_PINK_HOVER,
                    hover_progress,
                ))),
                ..base
            }
        }
    })
    .on_press(action_message);

    let hoverable = mouse_area(btn)
        .on_enter(Message::Hover(Some(hover_id)))
        .on_exit(Message::Hover(None));

    let inner = column![
        title,
        Space::new().height(14),
        body,
        Space::new().height(26),
        hoverable,
    ]
    .align_x(Alignment::Center)
    .width(Fill)
    .max_width(820);

    let style = if accent {
        theme::accent_band
    } else {
        theme::hero_band
    };

    container(
        container(inner)
            .width(Fill)
            .center_x(Fill)
            .padding(Padding::new(40.0).top(56.0).bottom(56.0)),
    )
    .width(Fill)
    .style(style)
    .into()
}
