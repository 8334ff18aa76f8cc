//! Knowledge questionnaire page
//!
//! Optional demographics, three single-choice questions and one
//! multi-select question. Answers post anonymously to the backend;
//! after a successful submission the form is replaced by a
//! confirmation panel.

use iced::widget::{
    Space, button, checkbox, column, container, pick_list, radio, row, scrollable, svg, text,
    text_input,
};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{Message, SurveyPageState};
use crate::i18n::{Key, Locale};
use crate::ui::components;
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};
use crate::ui::widgets::callout;

// Wire values match the questionnaire schema of the backend. The empty
// string stands for "prefer not to say" on the optional selects.
const AGE_OPTIONS: [(&str, Key); 6] = [
    ("", Key::SurveyPreferNotToSay),
    ("<18", Key::SurveyAgeUnder18),
    ("18-25", Key::SurveyAge18To25),
    ("26-35", Key::SurveyAge26To35),
    ("36-50", Key::SurveyAge36To50),
    (">50", Key::SurveyAgeOver50),
];

const GENDER_OPTIONS: [(&str, Key); 4] = [
    ("", Key::SurveyPreferNotToSay),
    ("Feminino", Key::SurveyGenderFemale),
    ("Masculino", Key::SurveyGenderMale),
    ("Outro", Key::SurveyGenderOther),
];

const HEARD_OPTIONS: [(&str, Key); 2] = [("sim", Key::SurveyYes), ("nao", Key::SurveyNo)];

const DEFINITION_OPTIONS: [(&str, Key); 4] = [
    ("infeccao", Key::SurveyDefInfection),
    ("abertura", Key::SurveyDefOpening),
    ("complicacao_genetica", Key::SurveyDefGenetic),
    ("nao_sabe", Key::SurveyDefUnknown),
];

const CAUSE_OPTIONS: [(&str, Key); 4] = [
    ("parto_prolongado", Key::SurveyCauseProlongedLabor),
    ("falta_higiene", Key::SurveyCauseHygiene),
    ("esforco_fisico", Key::SurveyCausePhysicalEffort),
    ("cirurgia_mal_sucedida", Key::SurveyCauseFailedSurgery),
];

const TREATABLE_OPTIONS: [(&str, Key); 3] = [
    ("sim", Key::SurveyTreatableYes),
    ("nao", Key::SurveyTreatableNo),
    ("nao_sei", Key::SurveyTreatableUnknown),
];

/// Build the questionnaire page
pub fn view<'a>(state: &'a SurveyPageState, locale: Locale) -> Element<'a, Message> {
    let icon_chip = container(
        svg(svg::Handle::from_memory(icons::PENCIL_LINE.as_bytes()))
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
        text(locale.get(Key::SurveyTitle))
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
        text(locale.get(Key::SurveyIntro))
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
        .max_width(780);

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
            .id(iced::widget::Id::new("survey_scroll"))
            .style(theme::page_scrollable),
    )
    .width(Fill)
    .height(Fill)
    .style(theme::main_content)
    .into()
}

/// Confirmation shown instead of the form after a successful submission
fn success_view(locale: Locale) -> Element<'static, Message> {
    use crate::ui::components::Page;

    let actions = row![
        button(text(locale.get(Key::BackToHome)).size(14))
            .padding([10, 22])
            .style(theme::primary_button)
            .on_press(Message::Navigate(Page::Home)),
        Space::new().width(10),
        button(text(locale.get(Key::SurveyAnswerAgain)).size(14))
            .padding([10, 22])
            .style(theme::text_button)
            .on_press(Message::SurveyReset),
    ]
    .align_y(Alignment::Center);

    container(
        column![
            callout::success_panel(
                locale.get(Key::SurveySuccessTitle),
                locale.get(Key::SurveySuccessBody),
            ),
            Space::new().height(24),
            actions,
        ]
        .align_x(Alignment::Center)
        .width(Fill),
    )
    .width(Fill)
    .padding(40)
    .style(theme::card)
    .into()
}

fn form_view<'a>(state: &'a SurveyPageState, locale: Locale) -> Element<'a, Message> {
    let mut form = column![
        demographics_card(state, locale),
        Space::new().height(20),
        question_card(
            locale.get(Key::SurveyQ1Title),
            radio_group(
                &HEARD_OPTIONS,
                state.ja_ouviu_falar,
                locale,
                Message::SurveyHeardSelected,
            ),
        ),
        Space::new().height(20),
        question_card(
            locale.get(Key::SurveyQ2Title),
            radio_group(
                &DEFINITION_OPTIONS,
                state.definicao,
                locale,
                Message::SurveyDefinitionSelected,
            ),
        ),
        Space::new().height(20),
        question_card(locale.get(Key::SurveyQ3Title), cause_checkboxes(state, locale)),
        Space::new().height(20),
        question_card(
            locale.get(Key::SurveyQ4Title),
            radio_group(
                &TREATABLE_OPTIONS,
                state.tratavel,
                locale,
                Message::SurveyTreatableSelected,
            ),
        ),
        Space::new().height(28),
    ]
    .width(Fill);

    if let Some(message) = state.phase.error() {
        form = form.push(callout::error_banner(message));
        form = form.push(Space::new().height(16));
    }

    form.push(submit_area(state, locale)).into()
}

/// Optional age, gender and province block
fn demographics_card<'a>(state: &'a SurveyPageState, locale: Locale) -> Element<'a, Message> {
    let age_field = column![
        field_label(locale.get(Key::SurveyAgeLabel)),
        Space::new().height(6),
        demographic_pick(
            &AGE_OPTIONS,
            state.faixa_etaria,
            locale,
            Message::SurveyAgeSelected,
        ),
    ]
    .width(Fill);

    let gender_field = column![
        field_label(locale.get(Key::SurveyGenderLabel)),
        Space::new().height(6),
        demographic_pick(
            &GENDER_OPTIONS,
            state.genero,
            locale,
            Message::SurveyGenderSelected,
        ),
    ]
    .width(Fill);

    let province_field = column![
        field_label(locale.get(Key::SurveyProvinceLabel)),
        Space::new().height(6),
        text_input(locale.get(Key::SurveyProvincePlaceholder), &state.provincia)
            .on_input(Message::SurveyProvinceChanged)
            .padding([10, 12])
            .size(14)
            .style(theme::form_text_input),
    ]
    .width(Fill);

    question_card(
        locale.get(Key::SurveyDemographicsTitle),
        column![
            row![age_field, Space::new().width(16), gender_field],
            Space::new().height(14),
            province_field,
        ]
        .into(),
    )
}

fn question_card<'a>(title: &'static str, body: Element<'a, Message>) -> Element<'a, Message> {
    container(
        column![
            text(title)
                .size(16)
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                })
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                }),
            Space::new().height(14),
            body,
        ],
    )
    .width(Fill)
    .padding(24)
    .style(theme::card)
    .into()
}

fn radio_group(
    options: &'static [(&'static str, Key)],
    selected: Option<&'static str>,
    locale: Locale,
    on_select: fn(&'static str) -> Message,
) -> Element<'static, Message> {
    let mut list = column![].spacing(10);
    for &(value, key) in options {
        list = list.push(
            radio(locale.get(key), value, selected, on_select)
                .size(18)
                .text_size(14)
                .style(theme::form_radio),
        );
    }
    list.into()
}

fn cause_checkboxes(state: &SurveyPageState, locale: Locale) -> Element<'static, Message> {
    let mut list = column![].spacing(10);
    for &(value, key) in &CAUSE_OPTIONS {
        let checked = state.causas.contains(&value);
        list = list.push(
            checkbox(checked)
                .label(locale.get(key))
                .on_toggle(move |now| Message::SurveyCauseToggled(value, now))
                .size(18)
                .text_size(14)
                .style(theme::form_checkbox),
        );
    }
    list.into()
}

/// Dropdown over wire values with localized labels
fn demographic_pick(
    options: &'static [(&'static str, Key)],
    current: &'static str,
    locale: Locale,
    on_select: fn(&'static str) -> Message,
) -> Element<'static, Message> {
    let labels: Vec<String> = options
        .iter()
        .map(|&(_, key)| locale.get(key).to_string())
        .collect();
    let selected = options
        .iter()
        .find(|&&(value, _)| value == current)
        .map(|&(_, key)| locale.get(key).to_string());

    pick_list(labels, selected, move |label| {
        let value = options
            .iter()
            .find(|&&(_, key)| locale.get(key) == label)
            .map(|&(value, _)| value)
            .unwrap_or("");
        on_select(value)
    })
    .width(Fill)
    .padding([10, 12])
    .text_size(14)
    .style(theme::form_pick_list)
    .menu_style(theme::form_pick_list_menu)
    .into()
}

fn field_label(label: &'static str) -> Element<'static, Message> {
    text(label)
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        })
        .font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        })
        .into()
}

fn submit_area<'a>(state: &'a SurveyPageState, locale: Locale) -> Element<'a, Message> {
    let submitting = state.phase.is_submitting();
    let label = if submitting {
        Key::SurveySubmitting
    } else {
        Key::SurveySubmit
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
    .style(theme::primary_button);

    if state.is_answerable() && !submitting {
        submit = submit.on_press(Message::SubmitSurvey);
    }

    let mut area = column![submit].align_x(Alignment::Center).width(Fill);
    if !state.is_answerable() {
        area = area.push(Space::new().height(10));
        area = area.push(text(locale.get(Key::SurveyValidationMissing)).size(13).style(
            |theme| text::Style {
                color: Some(theme::text_muted(theme)),
            },
        ));
    }
    area.into()
}
