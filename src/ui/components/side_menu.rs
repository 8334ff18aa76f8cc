//! "On this page" jump-link column for the fistula article
//! Highlights the section currently scrolled into view

use iced::widget::{Space, button, column, container, mouse_area, row, svg, text};
use iced::{Alignment, Element, Padding};

use crate::app::{HoverId, Message};
use crate::features::content::ArticleSection;
use crate::i18n::{Key, Locale};
use crate::ui::animation::HoverAnimations;
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};

/// Fixed width of the side menu column in px
pub const SIDE_MENU_WIDTH: f32 = 240.0;

/// Build the jump-link column for `sections`. Entries without a menu label
/// are part of the article but not listed here.
pub fn view(
    sections: &'static [ArticleSection],
    active_section: usize,
    locale: Locale,
    hover_animations: &HoverAnimations<HoverId>,
) -> Element<'static, Message> {
    let heading = text(locale.get(Key::OnThisPage))
        .size(12)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let links = column(
        sections
            .iter()
            .enumerate()
            .filter_map(|(idx, section)| section.menu_label.map(|label| (idx, label)))
            .map(|(idx, label)| {
                let is_active = idx == active_section;
                let hover_progress = hover_animations.get_progress(&HoverId::SideLink(idx));
                jump_link(label, idx, is_active, hover_progress)
            }),
    )
    .spacing(2);

    container(column![heading, Space::new().height(14), links])
        .width(SIDE_MENU_WIDTH)
        .padding(Padding::new(20.0).left(0.0))
        .into()
}

fn jump_link(
    label: &'static str,
    section_index: usize,
    is_active: bool,
    hover_progress: f32,
) -> Element<'static, Message> {
    let chevron = svg(svg::Handle::from_memory(
        crate::ui::icons::CHEVRON_RIGHT.as_bytes(),
    ))
    .width(14)
    .height(14)
    .style(move |theme, _status| svg::Style {
        color: Some(if is_active {
            theme::ACCENT_PINK
        } else {
            theme::animated_link(theme, hover_progress)
        }),
    });

    let label_text = text(label)
        .size(14)
        .font(iced::Font {
            weight: if is_active {
                MEDIUM_WEIGHT
            } else {
                iced::font::Weight::Normal
            },
            ..Default::default()
        })
        .style(move |theme| text::Style {
            color: Some(if is_active {
                theme::ACCENT_PINK
            } else {
                theme::animated_link(theme, hover_progress)
            }),
        });

    let btn = button(
        row![chevron, Space::new().width(8), label_text].align_y(Alignment::Center),
    )
    .padding(Padding::new(7.0).left(10.0).right(10.0))
    .style(theme::transparent_btn)
    .on_press(Message::JumpToAboutSection(section_index));

    if is_active {
        btn.into()
    } else {
        mouse_area(btn)
            .on_enter(Message::Hover(Some(HoverId::SideLink(section_index))))
            .on_exit(Message::Hover(None))
            .into()
    }
}
