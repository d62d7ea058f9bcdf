/// View building blocks
///
/// Pure widget-tree builders, one file per screen region, plus the
/// shared colors and style helpers. Nothing in here mutates state:
/// views read the typed records and emit messages.

use iced::{Color, Shadow, Vector};

use crate::state::alerts::Severity;

pub mod alerts;
pub mod dashboard;
pub mod form;
pub mod modal;
pub mod table;

// ========== Palette ==========

pub const ACCENT: Color = iced::color!(0x0d, 0x6e, 0xfd);
pub const VALID_GREEN: Color = iced::color!(0x19, 0x87, 0x54);
pub const INVALID_RED: Color = iced::color!(0xdc, 0x35, 0x45);
pub const MUTED_TEXT: Color = iced::color!(0x6c, 0x75, 0x7d);
pub const CARD_BG: Color = Color::WHITE;
pub const STRIPE_BG: Color = iced::color!(0xf8, 0xf9, 0xfa);

/// Background and text colors for an alert of the given severity
pub fn severity_palette(severity: Severity) -> (Color, Color) {
    match severity {
        Severity::Success => (
            Color::from_rgb8(0xd1, 0xe7, 0xdd),
            Color::from_rgb8(0x0f, 0x51, 0x32),
        ),
        Severity::Danger => (
            Color::from_rgb8(0xf8, 0xd7, 0xda),
            Color::from_rgb8(0x84, 0x20, 0x29),
        ),
        Severity::Warning => (
            Color::from_rgb8(0xff, 0xf3, 0xcd),
            Color::from_rgb8(0x66, 0x4d, 0x03),
        ),
        Severity::Info => (
            Color::from_rgb8(0xcf, 0xf4, 0xfc),
            Color::from_rgb8(0x05, 0x51, 0x60),
        ),
        Severity::Primary => (
            Color::from_rgb8(0xcf, 0xe2, 0xff),
            Color::from_rgb8(0x08, 0x42, 0x98),
        ),
    }
}

/// Applies an animation alpha to a color
pub fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Card drop shadow; hovering lifts the card
pub fn card_shadow(hovered: bool) -> Shadow {
    if hovered {
        Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 18.0,
        }
    } else {
        Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faded_scales_only_alpha() {
        let half = faded(ACCENT, 0.5);
        assert_eq!(half.r, ACCENT.r);
        assert_eq!(half.a, 0.5);

        let gone = faded(Color::WHITE, 0.0);
        assert_eq!(gone.a, 0.0);
    }

    #[test]
    fn test_hover_lifts_the_shadow() {
        let resting = card_shadow(false);
        let lifted = card_shadow(true);
        assert!(lifted.offset.y > resting.offset.y);
        assert!(lifted.blur_radius > resting.blur_radius);
    }
}
