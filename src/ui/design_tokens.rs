// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by the landing screen, the workspace cards and the
//! toast overlay.
//!
//! ```
//! use dropdesk::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let hover = Color {
//!     a: opacity::OVERLAY_SUBTLE,
//!     ..palette::PRIMARY_100
//! };
//! assert_eq!(spacing::MD, 16.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    /// Dismiss button hover fill.
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Brand blues: hover tint, drop outline and browse link, CTA band.
    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.92, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Toast accents.
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

/// 8px grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
    /// Vertical padding of each landing section.
    pub const SECTION: f32 = 96.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    pub const TOAST_WIDTH: f32 = 320.0;
    /// Width of the workspace column holding the drop zone and composer.
    pub const CONTENT_MAX_WIDTH: f32 = 672.0;
    pub const HERO_MAX_WIDTH: f32 = 768.0;
    pub const FEATURES_MAX_WIDTH: f32 = 1152.0;

    pub const BODY_EDITOR_HEIGHT: f32 = 200.0;
    pub const DROPZONE_MIN_HEIGHT: f32 = 160.0;
}

pub mod typography {
    /// Landing hero headline.
    pub const DISPLAY: f32 = 48.0;
    pub const TITLE_LG: f32 = 30.0;
    /// Feature card titles.
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    /// File rows and toast descriptions.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Drop zone outline and toast accent.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Lift under a toast card.
    pub const MD: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);
    assert!(spacing::XXL < spacing::SECTION);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(sizing::HERO_MAX_WIDTH < sizing::FEATURES_MAX_WIDTH);
    assert!(sizing::CONTENT_MAX_WIDTH < sizing::HERO_MAX_WIDTH);

    assert!(typography::CAPTION < typography::BODY_SM);
    assert!(typography::BODY < typography::BODY_LG);
    assert!(typography::TITLE_SM < typography::TITLE_MD);
    assert!(typography::TITLE_LG < typography::DISPLAY);
};
