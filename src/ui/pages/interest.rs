//! Interest registration page
//!
//! Contact form for health professionals and partner organizations.
//! Name and a plausible email are required, the rest is optional.

use iced::widget::{Space, button, column, container, row, scrollable, svg, text, text_input};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{InterestPageState, Message};
use crate::i18n::{Key, Locale};
use crate::ui::components;
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::callout;

/// Build the interest registration page
pub fn view<'a>(state: &'a InterestPageState, locale: Locale) -> Element<'a, Message> {
    let icon_chip = container(
        svg(svg::Handle::from_memory(icons::MAIL.as_bytes()))
            .width(26)
            .height(26)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::ACCENT_PINK),
            }),
    )
    .width(56)
    .height(56)
    .center_x(56)
    .center_y(56)
    .style(theme::icon_chip);

    let header = column![
        icon_chip,
        Space::new().height(16),
        text(locale.get(Key::InterestTitle))
            .size(30)
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            })
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            })
            .align_x(Alignment::Center),
        Space::new().height(10),
        text(locale.get(Key::InterestIntro))
            .size(15)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            })
            .align_x(Alignment::Center),
    ]
    .align_x(Alignment::Center)
    .width(Fill);

    let body: Element<'a, Message> = if state.phase.is_success() {
        success_view(locale)
    } else {
        form_view(state, locale)
    };

    let page = column![header, Space::new().height(28), body]
        .width(Fill)
        .max_width(640);

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
            .id(iced::widget::Id::new("interest_scroll"))
            .style(theme::page_scrollable),
    )
    .width(Fill)
    .height(Fill)
    .style(theme::main_content)
    .into()
}

fn success_view(locale: Locale) -> Element<'static, Message> {
    use crate::ui::components::Page;

    container(
        column![
            callout::success_panel(
                locale.get(Key::InterestSuccessTitle),
                locale.get(Key::InterestSuccessBody),
            ),
            Space::new().height(24),
            button(text(locale.get(Key::BackToHome)).size(14))
                .padding([10, 22])
                .style(theme::primary_button)
                .on_press(Message::Navigate(Page::Home)),
        ]
        .align_x(Alignment::Center)
        .width(Fill),
    )
    .width(Fill)
    .padding(40)
    .style(theme::card)
    .into()
}

fn form_view<'a>(state: &'a InterestPageState, locale: Locale) -> Element<'a, Message> {
    let fields = column![
        form_input(
            locale.get(Key::InterestNamePlaceholder),
            &state.nome,
            Message::InterestNameChanged,
        ),
        Space::new().height(14),
        form_input(
            locale.get(Key::InterestEmailPlaceholder),
            &state.email,
            Message::InterestEmailChanged,
        ),
        Space::new().height(14),
        row![
            form_input(
                locale.get(Key::InterestOrgPlaceholder),
                &state.organizacao,
                Message::InterestOrganizationChanged,
            ),
            Space::new().width(14),
            form_input(
                locale.get(Key::InterestRolePlaceholder),
                &state.cargo,
                Message::InterestRoleChanged,
            ),
        ],
        Space::new().height(14),
        form_input(
            locale.get(Key::InterestMessagePlaceholder),
            &state.mensagem,
            Message::InterestMessageChanged,
        ),
    ];

    let mut form = column![fields, Space::new().height(24)].width(Fill);

    if let Some(message) = state.phase.error() {
        form = form.push(callout::error_banner(message));
        form = form.push(Space::new().height(16));
    }

    container(form.push(submit_area(state, locale)))
        .width(Fill)
        .padding(32)
        .style(theme::card)
        .into()
}

fn form_input<'a>(
    placeholder: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    text_input(placeholder, value)
        .on_input(on_input)
        .padding([11, 13])
        .size(14)
        .style(theme::form_text_input)
        .width(Fill)
        .into()
}

fn submit_area<'a>(state: &'a InterestPageState, locale: Locale) -> Element<'a, Message> {
    let submitting = state.phase.is_submitting();
    let label = if submitting {
        Key::SurveySubmitting
    } else {
        Key::InterestSubmit
    };

    let mut submit = button(
        row![
            svg(svg::Handle::from_memory(icons::SEND.as_bytes()))
                .width(16)
                .height(16)
                .style(|_theme, _status| svg::Style {
                    color: Some(iced::Color::WHITE),
                }),
            Space::new().width(8),
            text(locale.get(label)).size(15),
        ]
        .align_y(Alignment::Center),
    )
    .padding([12, 28])
    .width(Fill)
    .style(theme::primary_button);

    if state.is_submittable() && !submitting {
        submit = submit.on_press(Message::SubmitInterest);
    }

    let mut area = column![submit].align_x(Alignment::Center).width(Fill);
    if !state.is_submittable() {
        area = area.push(Space::new().height(10));
        area = area.push(
            text(locale.get(Key::InterestValidationMissing))
                .size(13)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                }),
        );
    }
    area.into()
}
