//! Long-form article on obstetric fistula
//!
//! Fixed page header, a jump-link side menu and the scrolling article.
//! Scroll offsets are reported back so the side menu can highlight the
//! section currently in view, and the closing section carries the three
//! data charts.

use iced::widget::{Space, column, container, row, scrollable, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{AboutPageState, HoverId, Message};
use crate::features::content::{self, Block};
use crate::i18n::{self, Key, Locale};
use crate::ui::animation::HoverAnimations;
use crate::ui::components;
use crate::ui::icons;
use crate::ui::primitives::{
    BarChart, BarEntry, LineChart, LinePoint, PieChart, PieSlice, view_bar_chart, view_line_chart,
    view_pie_chart,
};
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::video_card;

/// Build the article page view
pub fn view<'a>(
    state: &'a AboutPageState,
    hover_animations: &HoverAnimations<HoverId>,
    copied_url: Option<&'static str>,
    locale: Locale,
) -> Element<'a, Message> {
    let header = container(
        column![
            text(content::ABOUT_KICKER)
                .size(14)
                .color(theme::KICKER_PINK)
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                }),
            Space::new().height(8),
            text(content::ABOUT_TITLE)
                .size(30)
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                })
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                })
                .align_x(Alignment::Center),
        ]
        .align_x(Alignment::Center)
        .width(Fill),
    )
    .width(Fill)
    .padding(Padding::new(40.0).top(36.0).bottom(24.0));

    let menu = components::side_menu::view(
        &content::ABOUT_SECTIONS,
        state.active_section,
        locale,
        hover_animations,
    );

    let article = scrollable(
        column![
            container(article_column(copied_url, locale))
                .width(Fill)
                .padding(Padding::new(0.0).right(40.0).bottom(64.0)),
            components::page_footer::view(locale),
        ],
    )
    .width(Fill)
    .height(Fill)
    .id(iced::widget::Id::new("about_scroll"))
    .on_scroll(|viewport| {
        let offset = viewport.absolute_offset();
        Message::AboutScrolled(offset.y)
    })
    .style(theme::page_scrollable);

    let body = row![
        container(menu).padding(Padding::new(0.0).left(40.0)),
        Space::new().width(28),
        article,
    ]
    .width(Fill)
    .height(Fill);

    container(column![header, body].width(Fill).height(Fill))
        .width(Fill)
        .height(Fill)
        .style(theme::main_content)
        .into()
}

fn article_column<'a>(copied_url: Option<&'static str>, locale: Locale) -> Element<'a, Message> {
    let mut article = column![].spacing(44).max_width(820);
    for section in &content::ABOUT_SECTIONS {
        article = article.push(article_section(section, copied_url, locale));
    }
    // The closing section carries the data charts.
    article = article.push(charts_block(locale));
    article.into()
}

fn article_section<'a>(
    section: &'static content::ArticleSection,
    copied_url: Option<&'static str>,
    locale: Locale,
) -> Element<'a, Message> {
    let mut blocks = column![
        text(section.title)
            .size(22)
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            })
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
        text(section.subtitle).size(14).style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        }),
    ]
    .spacing(8);

    blocks = blocks.push(Space::new().height(8));

    for block in section.blocks {
        let element: Element<'a, Message> = match block {
            Block::SubHeader(heading) => text(*heading)
                .size(17)
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                })
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                })
                .into(),
            Block::Paragraph(body) => text(*body)
                .size(15)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                })
                .into(),
            Block::Video(video) => {
                let copy_label = if copied_url == Some(video.url) {
                    locale.get(Key::VideoLinkCopied)
                } else {
                    locale.get(Key::VideoCopyLink)
                };
                video_card(
                    video.title,
                    video.caption,
                    video.url,
                    locale.get(Key::VideoOpen),
                    copy_label,
                    Message::OpenUrl(video.url),
                    Message::CopyLink(video.url),
                )
            }
        };
        blocks = blocks.push(element);
    }

    blocks.into()
}

/// The three datasets as rendered charts, closing the article
fn charts_block<'a>(locale: Locale) -> Element<'a, Message> {
    let bars: Vec<BarEntry> = content::GLOBAL_BURDEN
        .iter()
        .map(|point| BarEntry {
            label: point.label.to_string(),
            value: point.value as f32,
            display: i18n::format_count(locale.language, point.value),
        })
        .collect();

    let slices: Vec<PieSlice> = content::CONTINENTAL_SHARE
        .iter()
        .map(|point| PieSlice {
            label: point.label.to_string(),
            value: point.value as f32,
            display: format!("{}%", point.value),
        })
        .collect();

    let points: Vec<LinePoint> = content::ANGOLA_TREND
        .iter()
        .map(|point| LinePoint {
            label: point.label.to_string(),
            value: point.value as f32,
        })
        .collect();

    column![
        chart_card(
            icons::BAR_CHART,
            content::GLOBAL_BURDEN_TITLE,
            view_bar_chart(BarChart::new(bars), 240.0),
        ),
        Space::new().height(24),
        chart_card(
            icons::PIE_CHART,
            content::CONTINENTAL_SHARE_TITLE,
            view_pie_chart(PieChart::new(slices), 220.0),
        ),
        Space::new().height(24),
        chart_card(
            icons::LINE_CHART,
            content::ANGOLA_TREND_TITLE,
            view_line_chart(LineChart::new(points), 240.0),
        ),
    ]
    .into()
}

fn chart_card<'a>(
    icon: &'static str,
    title: &'static str,
    chart: Element<'a, Message>,
) -> Element<'a, Message> {
    let heading = row![
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(18)
            .height(18)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::ACCENT_PINK),
            }),
        Space::new().width(10),
        text(title)
            .size(16)
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            })
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
    ]
    .align_y(Alignment::Center);

    container(column![heading, Space::new().height(16), chart])
        .width(Fill)
        .padding(24)
        .style(theme::card)
        .into()
}
