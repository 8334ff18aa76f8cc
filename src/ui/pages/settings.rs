//! Settings page
//!
//! Interface preferences on top, application details underneath.
//! Every change is pushed to disk through `Message::SaveSettings`.

use iced::widget::{Space, column, container, pick_list, row, scrollable, text, toggler};
use iced::{Alignment, Background, Element, Fill, Padding};

use crate::app::Message;
use crate::features::Settings;
use crate::i18n::{Key, Language, Locale};
use crate::ui::components;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Settings page view
pub fn view(settings: &Settings, api_base_url: &str, locale: Locale) -> Element<'static, Message> {
    let title = text(locale.get(Key::SettingsTitle))
        .size(30)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let display_section = column![
        section_header(locale.get(Key::SettingsDisplayTitle)),
        setting_row(
            locale.get(Key::SettingsLanguage),
            Some(locale.get(Key::SettingsLanguageDesc)),
            language_pick_list(settings),
        ),
        divider(),
        setting_row(
            locale.get(Key::SettingsDarkMode),
            Some(locale.get(Key::SettingsDarkModeDesc)),
            toggler(settings.display.theme.is_dark())
                .on_toggle(Message::UpdateDarkMode)
                .size(24)
                .into(),
        ),
    ]
    .spacing(0);

    let about_section = column![
        section_header(locale.get(Key::SettingsAboutTitle)),
        setting_row(
            locale.get(Key::SettingsVersion),
            None,
            value_text(env!("CARGO_PKG_VERSION")),
        ),
        divider(),
        setting_row(
            locale.get(Key::SettingsApiUrl),
            Some(locale.get(Key::SettingsApiUrlDesc)),
            value_text(api_base_url),
        ),
        Space::new().height(12),
        text(locale.get(Key::SettingsDescription))
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
    ]
    .spacing(0);

    let page = column![
        title,
        Space::new().height(24),
        display_section,
        Space::new().height(36),
        about_section,
    ]
    .width(Fill)
    .max_width(720);

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
            .id(iced::widget::Id::new("settings_scroll"))
            .style(theme::page_scrollable),
    )
    .width(Fill)
    .height(Fill)
    .style(theme::main_content)
    .into()
}

fn section_header(title: &str) -> Element<'static, Message> {
    text(title.to_string())
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

/// One preference row: label (and optional description) left, control right
fn setting_row<'a>(
    label: &str,
    description: Option<&str>,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    let label: Element<'a, Message> = text(label.to_string())
        .size(15)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .into();
    let description: Option<Element<'a, Message>> = description.map(|desc| {
        text(desc.to_string())
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            })
            .into()
    });
    let labels = column(std::iter::once(label).chain(description)).spacing(4);

    container(
        row![labels, Space::new().width(Fill), control]
            .align_y(Alignment::Center)
            .width(Fill),
    )
    .padding([16, 0])
    .into()
}

/// Hairline between rows
fn divider() -> Element<'static, Message> {
    container(Space::new().width(Fill).height(1))
        .style(|theme| container::Style {
            background: Some(Background::Color(theme::divider(theme))),
            ..Default::default()
        })
        .width(Fill)
        .into()
}

fn value_text(value: &str) -> Element<'static, Message> {
    text(value.to_string())
        .size(14)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        })
        .into()
}

fn language_pick_list(settings: &Settings) -> Element<'static, Message> {
    let options: Vec<String> = Language::all()
        .iter()
        .map(|lang| lang.display_name().to_string())
        .collect();
    let current = settings.display.language().display_name().to_string();

    pick_list(options, Some(current), |value| {
        let language = Language::all()
            .iter()
            .copied()
            .find(|lang| lang.display_name() == value)
            .unwrap_or_default();
        Message::UpdateAppLanguage(language)
    })
    .padding([8, 12])
    .text_size(14)
    .style(theme::form_pick_list)
    .menu_style(theme::form_pick_list_menu)
    .into()
}
