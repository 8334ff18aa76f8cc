//! Theme system for the public information site
//! Light-first with pink accents, dark mode included

use iced::color;
use iced::font::Weight;
use iced::widget::{button, checkbox, container, pick_list, radio, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Bold font weight
#[cfg(target_os = "macos")]
pub const BOLD_WEIGHT: Weight = Weight::Semibold;

#[cfg(not(target_os = "macos"))]
pub const BOLD_WEIGHT: Weight = Weight::Bold;

/// Medium font weight
#[cfg(target_os = "macos")]
pub const MEDIUM_WEIGHT: Weight = Weight::Medium;

#[cfg(not(target_os = "macos"))]
pub const MEDIUM_WEIGHT: Weight = Weight::Normal;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(theme, Theme::Dark)
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x111827);
    pub const SURFACE: Color = color!(0x1f2937);
    pub const SURFACE_LIGHT: Color = color!(0x374151);
    pub const BORDER: Color = color!(0x374151);
    pub const TEXT_MUTED: Color = color!(0x9ca3af);
    pub const TEXT_SECONDARY: Color = color!(0xd1d5db);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xf9fafb);
    pub const SURFACE_LIGHT: Color = color!(0xf3f4f6);
    pub const BORDER: Color = color!(0xe5e7eb);
    pub const TEXT_MUTED: Color = color!(0x6b7280);
    pub const TEXT_SECONDARY: Color = color!(0x4b5563);
    pub const TEXT_PRIMARY: Color = color!(0x111827);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Raised surface color (cards, menus)
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// One step lighter than `surface`, for nested fills
pub fn surface_light(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE_LIGHT
    } else {
        light::SURFACE_LIGHT
    }
}

/// Card background (white on light, elevated gray on dark)
pub fn card_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::BACKGROUND
    }
}

/// Hairline borders and dividers
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Muted text, for captions and fine print
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Secondary text, for body copy
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Primary text, for headings and labels
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Hero band background (soft pink on light, near-black on dark)
pub fn hero_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        color!(0xfdf2f8)
    }
}

/// Soft pink tint for highlighted cards and figure tiles
pub fn pink_soft_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color {
            a: 0.2,
            ..color!(0x831843)
        }
    } else {
        color!(0xfdf2f8)
    }
}

/// Round icon chip background
pub fn pink_chip_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color {
            a: 0.3,
            ..color!(0x831843)
        }
    } else {
        color!(0xfce7f3)
    }
}

/// Informational panel background (recommendations box)
pub fn info_panel_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color {
            a: 0.3,
            ..color!(0x1e3a8a)
        }
    } else {
        color!(0xeff6ff)
    }
}

/// Primary pink accent (buttons, active states)
pub const ACCENT_PINK: Color = color!(0xdb2777);

/// Hover state for the pink accent
pub const ACCENT_PINK_HOVER: Color = color!(0xbe185d);

/// Disabled state for the pink accent
pub const ACCENT_PINK_DISABLED: Color = color!(0xf472b6);

/// Lighter pink used for kickers and icons
pub const KICKER_PINK: Color = color!(0xec4899);

/// Chart series palette, strongest first
pub const CHART_COLORS: [Color; 4] = [
    color!(0xec4899),
    color!(0xf472b6),
    color!(0xf9a8d4),
    color!(0xfbcfe8),
];

/// Danger/error color
pub fn danger(theme: &Theme) -> Color {
    if is_dark(theme) {
        color!(0xf87171)
    } else {
        color!(0xef4444)
    }
}

/// Success color
pub fn success(_theme: &Theme) -> Color {
    color!(0x22c55e)
}

/// Divider/separator color
pub fn divider(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.1)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.1)
    }
}

/// Overlay color for hover backgrounds, scaled by animation progress
pub fn hover_bg_alpha(theme: &Theme, alpha: f32) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, alpha)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, alpha * 0.7)
    }
}

/// Interpolated link color, secondary at rest shifting to pink on hover
pub fn animated_link(theme: &Theme, progress: f32) -> Color {
    blend(text_secondary(theme), ACCENT_PINK, progress)
}

/// Componentwise blend between two colors
pub fn blend(from: Color, to: Color, progress: f32) -> Color {
    Color {
        r: from.r + (to.r - from.r) * progress,
        g: from.g + (to.g - from.g) * progress,
        b: from.b + (to.b - from.b) * progress,
        a: from.a + (to.a - from.a) * progress,
    }
}

/// Shadow color for cards and panels
pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.12)
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Background of the page area under the header
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Sticky header bar
pub fn header_bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(card_bg(theme))),
        text_color: Some(text_primary(theme)),
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 4.0,
        },
        ..Default::default()
    }
}

/// Footer bar
pub fn footer_bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface_light(theme))),
        text_color: Some(text_muted(theme)),
        border: Border {
            width: 1.0,
            color: border_color(theme),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Hero band at the top of the landing page
pub fn hero_band(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(hero_bg(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Solid pink band for call-to-action sections
pub fn accent_band(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ACCENT_PINK)),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Alternate section background, one shade off the page background
pub fn section_alt(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Rounded content card with a border and soft shadow
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(card_bg(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Pink-tinted figure tile
pub fn figure_tile(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(pink_soft_bg(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Highlighted campaign card (pink tint, used for totals)
pub fn highlight_card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(pink_soft_bg(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        ..Default::default()
    }
}

/// Informational panel (blue box with recommendations)
pub fn info_panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(info_panel_bg(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Round pink icon chip
pub fn icon_chip(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(pink_chip_bg(theme))),
        border: Border {
            radius: 50.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary pink button
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT_PINK)),
        text_color: Color::WHITE,
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
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(ACCENT_PINK_HOVER)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(ACCENT_PINK_DISABLED)),
            shadow: Shadow::default(),
            ..base
        },
        _ => base,
    }
}

/// Bare text button, tinting pink on hover
pub fn text_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_secondary(theme),
        border: Border::default(),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            text_color: ACCENT_PINK,
            ..base
        },
        _ => base,
    }
}

/// Transparent button for custom-hover elements
pub fn transparent_btn(theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border::default(),
        ..Default::default()
    }
}

// ============================================================================
// Form Control Styles
// ============================================================================

/// Radio option, pink dot when selected
pub fn form_radio(theme: &Theme, status: radio::Status) -> radio::Style {
    let (background, border_color) = match status {
        radio::Status::Hovered { .. } => (surface_light(theme), ACCENT_PINK),
        _ => (surface(theme), border_color(theme)),
    };

    radio::Style {
        background: Background::Color(background),
        dot_color: ACCENT_PINK,
        border_width: 1.0,
        border_color,
        text_color: Some(text_primary(theme)),
    }
}

/// Checkbox option, pink fill when checked
pub fn form_checkbox(theme: &Theme, status: checkbox::Status) -> checkbox::Style {
    let checked = match status {
        checkbox::Status::Active { is_checked }
        | checkbox::Status::Hovered { is_checked }
        | checkbox::Status::Disabled { is_checked } => is_checked,
    };

    let background = if checked {
        ACCENT_PINK
    } else {
        surface(theme)
    };

    checkbox::Style {
        background: Background::Color(background),
        icon_color: Color::WHITE,
        border: Border {
            radius: 4.0.into(),
            width: 1.0,
            color: if checked {
                ACCENT_PINK
            } else {
                border_color(theme)
            },
        },
        text_color: Some(text_primary(theme)),
    }
}

/// Text input with a pink border when focused
pub fn form_text_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused { .. } => ACCENT_PINK,
        text_input::Status::Hovered => text_muted(theme),
        _ => border_color(theme),
    };

    text_input::Style {
        background: Background::Color(surface(theme)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: ACCENT_PINK,
    }
}

// ============================================================================
// Pick List (Dropdown) Styles
// ============================================================================

/// Dropdown style for forms and settings
pub fn form_pick_list(theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let bg = if is_dark(theme) {
        match status {
            pick_list::Status::Active => Color::from_rgba(1.0, 1.0, 1.0, 0.08),
            pick_list::Status::Hovered => Color::from_rgba(1.0, 1.0, 1.0, 0.12),
            pick_list::Status::Opened { .. } => Color::from_rgba(1.0, 1.0, 1.0, 0.15),
        }
    } else {
        match status {
            pick_list::Status::Active => surface(theme),
            pick_list::Status::Hovered => surface_light(theme),
            pick_list::Status::Opened { .. } => surface_light(theme),
        }
    };

    pick_list::Style {
        text_color: text_primary(theme),
        placeholder_color: text_muted(theme),
        handle_color: text_secondary(theme),
        background: Background::Color(bg),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
    }
}

/// Dropdown menu style
pub fn form_pick_list_menu(theme: &Theme) -> iced::overlay::menu::Style {
    let (bg, selected_bg) = if is_dark(theme) {
        (dark::SURFACE, Color::from_rgba(1.0, 1.0, 1.0, 0.1))
    } else {
        (light::BACKGROUND, color!(0xfce7f3))
    };

    iced::overlay::menu::Style {
        text_color: text_primary(theme),
        background: Background::Color(bg),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        selected_text_color: text_primary(theme),
        selected_background: Background::Color(selected_bg),
        shadow: Shadow::default(),
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Slim scrollbar used by every page scrollable
pub fn page_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let rail = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail.clone(),
        horizontal_rail: rail,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}
