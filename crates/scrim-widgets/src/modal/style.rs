//! Backdrop and card styling driven by transition frames

use iced::widget::container;
use iced::{Border, Color, Theme};

/// Backdrop darkness when fully shown (60% black)
pub const BACKDROP_ALPHA: f32 = 0.6;

/// Card padding at rest; scaled by the frame's zoom factor
pub const CARD_PADDING: f32 = 30.0;

/// Semi-transparent backdrop faded by `opacity`
pub fn backdrop_style(opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, BACKDROP_ALPHA * opacity).into()),
        ..Default::default()
    }
}

/// Rounded content card faded by `opacity`
///
/// `class` is the overlay's extra style class. `danger` draws a red outline,
/// `accent` uses the theme's primary colour; anything else keeps the plain
/// rounded box.
pub fn card_style(opacity: f32, class: &str) -> impl Fn(&Theme) -> container::Style {
    let class = class.to_string();
    move |theme: &Theme| {
        let palette = theme.palette();
        let base = container::rounded_box(theme);

        let border = match class.as_str() {
            "danger" => Border {
                color: palette.danger,
                width: 2.0,
                ..base.border
            },
            "accent" => Border {
                color: palette.primary,
                width: 2.0,
                ..base.border
            },
            _ => base.border,
        };

        container::Style {
            background: base.background.map(|background| background.scale_alpha(opacity)),
            border: Border {
                color: border.color.scale_alpha(opacity),
                ..border
            },
            text_color: Some(palette.text.scale_alpha(opacity)),
            ..base
        }
    }
}
