//! Top header bar component
//! White band with history arrows, logo, page navigation, and the settings gear

use iced::widget::{Space, button, container, mouse_area, row, svg, text, tooltip};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{HoverId, Message};
use crate::i18n::{Key, Locale};
use crate::ui::animation::HoverAnimations;
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};

/// Header bar height in px, used by pages to size their scroll area
pub const HEADER_HEIGHT: f32 = 64.0;

/// Pages reachable from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    AboutFistula,
    OurSolution,
    PreventionTreatment,
    Survey,
    Interest,
    Settings,
}

impl Page {
    pub fn i18n_key(&self) -> Key {
        match self {
            Page::Home => Key::NavHome,
            Page::AboutFistula => Key::NavAbout,
            Page::OurSolution => Key::NavSolution,
            Page::PreventionTreatment => Key::NavPrevention,
            Page::Survey => Key::NavSurvey,
            Page::Interest => Key::NavInterest,
            Page::Settings => Key::NavSettings,
        }
    }
}

/// Menu entries in display order. Settings is reached through the gear instead.
pub const NAV_PAGES: [Page; 6] = [
    Page::Home,
    Page::AboutFistula,
    Page::OurSolution,
    Page::PreventionTreatment,
    Page::Survey,
    Page::Interest,
];

/// Build the header bar
pub fn view(
    active_page: Page,
    locale: Locale,
    can_go_back: bool,
    can_go_forward: bool,
    hover_animations: &HoverAnimations<HoverId>,
) -> Element<'static, Message> {
    let back_btn = history_button(
        crate::ui::icons::ARROW_LEFT,
        locale.get(Key::Back),
        can_go_back,
        Message::NavigateBack,
    );
    let forward_btn = history_button(
        crate::ui::icons::ARROW_RIGHT,
        locale.get(Key::Forward),
        can_go_forward,
        Message::NavigateForward,
    );

    // Pink heart logo + app name
    let logo = row![
        svg(svg::Handle::from_memory(crate::ui::icons::HEART.as_bytes()))
            .width(26)
            .height(26)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::ACCENT_PINK),
            }),
        Space::new().width(10),
        text(locale.get(Key::AppName))
            .size(19)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            })
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme))
            }),
    ]
    .align_y(Alignment::Center);

    // Page menu with hover animations
    let nav = row(NAV_PAGES.into_iter().enumerate().map(|(idx, page)| {
        let is_active = page == active_page;
        let hover_progress = hover_animations.get_progress(&HoverId::Nav(idx));
        nav_button_animated(
            locale.get(page.i18n_key()).to_string(),
            is_active,
            hover_progress,
            HoverId::Nav(idx),
            Message::Navigate(page),
        )
    }))
    .spacing(2)
    .align_y(Alignment::Center);

    let settings_active = active_page == Page::Settings;
    let settings_progress = hover_animations.get_progress(&HoverId::HeaderSettings);
    let settings_btn = mouse_area(
        button(
            svg(svg::Handle::from_memory(
                crate::ui::icons::SETTINGS.as_bytes(),
            ))
            .width(20)
            .height(20)
            .style(move |theme, _status| svg::Style {
                color: Some(if settings_active {
                    theme::ACCENT_PINK
                } else {
                    theme::animated_link(theme, settings_progress)
                }),
            }),
        )
        .padding(8)
        .style(theme::transparent_btn)
        .on_press(Message::Navigate(Page::Settings)),
    )
    .on_enter(Message::Hover(Some(HoverId::HeaderSettings)))
    .on_exit(Message::Hover(None));

    container(
        row![
            back_btn,
            Space::new().width(4),
            forward_btn,
            Space::new().width(18),
            logo,
            Space::new().width(Fill),
            nav,
            Space::new().width(10),
            settings_btn,
        ]
        .align_y(Alignment::Center)
        .padding(Padding::new(0.0).left(20.0).right(20.0)),
    )
    .width(Fill)
    .height(HEADER_HEIGHT)
    .center_y(HEADER_HEIGHT)
    .style(theme::header_bar)
    .into()
}

/// Back/forward arrow button, greyed out when history is empty in that direction
fn history_button(
    icon_svg: &'static str,
    label: &'static str,
    enabled: bool,
    on_press: Message,
) -> Element<'static, Message> {
    let icon = svg(svg::Handle::from_memory(icon_svg.as_bytes()))
        .width(18)
        .height(18)
        .style(move |theme, _status| svg::Style {
            color: Some(if enabled {
                theme::text_secondary(theme)
            } else {
                theme::divider(theme)
            }),
        });

    let mut btn = button(icon).padding(6).style(theme::transparent_btn);
    if enabled {
        btn = btn.on_press(on_press);
    }
    tooltip(btn, label, tooltip::Position::Bottom).into()
}

/// Single menu entry. Active page is pink, the rest fade toward pink on hover.
fn nav_button_animated(
    label: String,
    is_active: bool,
    hover_progress: f32,
    hover_id: HoverId,
    on_press: Message,
) -> Element<'static, Message> {
    let label_text = text(label)
        .size(14)
        .font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        })
        .style(move |theme| text::Style {
            color: Some(if is_active {
                theme::ACCENT_PINK
            } else {
                theme::animated_link(theme, hover_progress)
            }),
        });

    let btn = button(label_text)
        .padding(Padding::new(8.0).left(12.0).right(12.0))
        .style(move |theme, _status| {
            let bg_alpha = if is_active { 0.0 } else { 0.05 * hover_progress };
            iced::widget::button::Style {
                background: Some(iced::Background::Color(theme::hover_bg_alpha(
                    theme, bg_alpha,
                ))),
                border: iced::Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                text_color: theme::text_primary(theme),
                ..Default::default()
            }
        })
        .on_press(on_press);

    if is_active {
        btn.into()
    } else {
        mouse_area(btn)
            .on_enter(Message::Hover(Some(hover_id)))
            .on_exit(Message::Hover(None))
            .into()
    }
}
