//! Prevention, treatment and research page
//!
//! Prevention guidance cards, the treatment article, current studies
//! and the embedded country report with its campaign figures.

use iced::widget::{Space, column, container, row, scrollable, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::content::{self, Block};
use crate::i18n::{Key, Locale};
use crate::ui::components;
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::{self, section_header, stat_card, video_card};

const PREVENTION_ICONS: [&str; 4] = [
    icons::STETHOSCOPE,
    icons::USERS,
    icons::SHIELD_CHECK,
    icons::BOOK_OPEN,
];

/// Build the prevention page view
pub fn view(copied_url: Option<&'static str>, locale: Locale) -> Element<'static, Message> {
    let page = column![
        section_header::view(
            None,
            content::PREVENTION_PAGE_TITLE,
            Some(content::PREVENTION_PAGE_SUBTITLE),
        ),
        Space::new().height(48),
        prevention_section(),
        Space::new().height(56),
        article_section(
            &content::TREATMENT_SECTION,
            &content::TREATMENT_BLOCKS,
            copied_url,
            locale,
        ),
        Space::new().height(56),
        article_section(
            &content::STUDIES_SECTION,
            &content::STUDIES_BLOCKS,
            copied_url,
            locale,
        ),
        Space::new().height(32),
        report_section(),
    ]
    .width(Fill)
    .max_width(940);

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
            .id(iced::widget::Id::new("prevention_scroll"))
            .style(theme::page_scrollable),
    )
    .width(Fill)
    .height(Fill)
    .style(theme::main_content)
    .into()
}

fn prevention_section() -> Element<'static, Message> {
    let card = |idx: usize| {
        let info = &content::PREVENTION_CARDS[idx];
        widgets::info_card(PREVENTION_ICONS[idx], info.title, info.body)
    };

    column![
        section_header::view(
            None,
            content::PREVENTION_SECTION.title,
            Some(content::PREVENTION_SECTION.subtitle),
        ),
        Space::new().height(20),
        container(
            text(content::PREVENTION_LEAD)
                .size(15)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                })
                .align_x(Alignment::Center)
                .width(iced::Length::Fixed(820.0)),
        )
        .width(Fill)
        .center_x(Fill),
        Space::new().height(32),
        column![
            row![card(0), Space::new().width(20), card(1)],
            Space::new().height(20),
            row![card(2), Space::new().width(20), card(3)],
        ],
    ]
    .into()
}

/// Section intro followed by its article blocks
fn article_section(
    intro: &'static content::SectionIntro,
    blocks: &'static [Block],
    copied_url: Option<&'static str>,
    locale: Locale,
) -> Element<'static, Message> {
    let mut body = column![].spacing(14);

    for block in blocks {
        let element: Element<'static, Message> = match block {
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
            Block::Paragraph(paragraph) => text(*paragraph)
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
        body = body.push(element);
    }

    column![
        section_header::view(None, intro.title, Some(intro.subtitle)),
        Space::new().height(24),
        body,
    ]
    .into()
}

/// The embedded report on the national situation, rendered as one long card
fn report_section() -> Element<'static, Message> {
    let campaigns = row![
        campaign_card(&content::CAMPAIGN_CARDS[0]),
        Space::new().width(16),
        campaign_card(&content::CAMPAIGN_CARDS[1]),
        Space::new().width(16),
        campaign_card(&content::CAMPAIGN_CARDS[2]),
    ];

    let research_stats = row![
        stat_card::figure(
            content::RESEARCH_STATS[0].statistic,
            content::RESEARCH_STATS[0].title,
            content::RESEARCH_STATS[0].description,
        ),
        Space::new().width(16),
        stat_card::figure(
            content::RESEARCH_STATS[1].statistic,
            content::RESEARCH_STATS[1].title,
            content::RESEARCH_STATS[1].description,
        ),
    ];

    let mut recommendations = column![].spacing(10);
    for recommendation in &content::RECOMMENDATIONS {
        recommendations = recommendations.push(
            row![
                svg(svg::Handle::from_memory(icons::CHECK_CIRCLE.as_bytes()))
                    .width(16)
                    .height(16)
                    .style(|theme, _status| svg::Style {
                        color: Some(theme::success(theme)),
                    }),
                Space::new().width(10),
                text(*recommendation).size(14).style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
            ]
            .align_y(Alignment::Center),
        );
    }

    container(
        column![
            text(content::REPORT_TITLE)
                .size(22)
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                })
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                }),
            Space::new().height(6),
            text(content::REPORT_SUBTITLE)
                .size(14)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                }),
            Space::new().height(16),
            text(content::REPORT_INTRO)
                .size(15)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
            Space::new().height(28),
            report_heading(content::REPORT_PREVALENCE_TITLE),
            Space::new().height(12),
            stat_card::figure(
                content::PREVALENCE_STAT.statistic,
                content::PREVALENCE_STAT.title,
                content::PREVALENCE_STAT.description,
            ),
            Space::new().height(28),
            report_heading(content::REPORT_CAMPAIGNS_TITLE),
            Space::new().height(12),
            campaigns,
            Space::new().height(28),
            report_heading(content::REPORT_RESEARCH_TITLE),
            Space::new().height(12),
            container(
                text(content::RESEARCH_QUOTE)
                    .size(15)
                    .style(|theme| text::Style {
                        color: Some(theme::text_secondary(theme)),
                    })
                    .font(iced::Font {
                        style: iced::font::Style::Italic,
                        ..Default::default()
                    }),
            )
            .width(Fill)
            .padding(20)
            .style(theme::info_panel),
            Space::new().height(16),
            research_stats,
            Space::new().height(12),
            text(content::RESEARCH_CONCLUSION)
                .size(14)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
            Space::new().height(28),
            report_heading(content::REPORT_SUPPORT_TITLE),
            Space::new().height(12),
            text(content::REPORT_SUPPORT)
                .size(15)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
            Space::new().height(28),
            report_heading(content::RECOMMENDATIONS_TITLE),
            Space::new().height(12),
            recommendations,
        ],
    )
    .width(Fill)
    .padding(32)
    .style(theme::card)
    .into()
}

fn campaign_card(campaign: &'static content::CampaignCard) -> Element<'static, Message> {
    let style = if campaign.highlight {
        theme::highlight_card
    } else {
        theme::info_panel
    };

    container(
        column![
            text(campaign.title)
                .size(15)
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                })
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                }),
            Space::new().height(8),
            text(campaign.description).size(13).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        ],
    )
    .width(Fill)
    .height(Fill)
    .padding(20)
    .style(style)
    .into()
}

fn report_heading(label: &'static str) -> Element<'static, Message> {
    text(label)
        .size(18)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .into()
}
