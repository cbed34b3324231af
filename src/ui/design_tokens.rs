// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes, including the card preview geometry
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Spring animation constants

## Examples

```
use card_composer::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a hover shade
let hover = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::GRAY_400
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.8, 0.8); // #ccc input border
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.976, 0.976); // #f9f9f9 screen

    // Brand colors (action blue)
    pub const PRIMARY_400: Color = Color::from_rgb(0.2, 0.584, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.0, 0.482, 1.0); // #007bff
    pub const PRIMARY_600: Color = Color::from_rgb(0.0, 0.4, 0.85);

    // Toast accents
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Toast glyph column.
    pub const ICON_MD: f32 = 24.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 40.0;
    pub const INPUT_HEIGHT: f32 = 80.0;

    // Component widths
    pub const CONTROLS_WIDTH: f32 = 560.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    // Card preview
    pub const PREVIEW_WIDTH: f32 = crate::media::templates::PREVIEW_WIDTH;
    pub const PREVIEW_HEIGHT: f32 = crate::media::templates::PREVIEW_HEIGHT;

    /// Side of the square box the photo is fitted into at scale 1.
    pub const PHOTO_BOX: f32 = 120.0;

    /// Font size of the heart sticker.
    pub const STICKER: f32 = 40.0;

    // Template strip
    pub const THUMBNAIL_WIDTH: f32 = 96.0;
    pub const THUMBNAIL_HEIGHT: f32 = THUMBNAIL_WIDTH * PREVIEW_HEIGHT / PREVIEW_WIDTH;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! Card text sizes come from the card itself; these sizes cover the
    //! surrounding screen chrome.

    /// Screen header
    pub const TITLE_LG: f32 = 24.0;

    /// Section headers (Preview, templates)
    pub const TITLE_MD: f32 = 22.0;

    /// Button labels
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Template titles, hints
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Toast accents
    pub const WIDTH_MD: f32 = 2.0;

    /// Thick border - Selected template thumbnail
    pub const WIDTH_LG: f32 = 3.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 10.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    /// Angular frequency of the photo spring (rad/s).
    pub const SPRING_STIFFNESS: f32 = 14.0;

    /// Frame interval while the spring is moving (~60 Hz).
    pub const FRAME_MILLIS: u64 = 16;

    /// Distance below which a translation counts as arrived (logical px).
    pub const SETTLE_DISTANCE: f32 = 0.25;

    /// Difference below which a scale counts as arrived.
    pub const SETTLE_SCALE: f32 = 0.001;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::OVERLAY_SUBTLE > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_MD < sizing::TOAST_WIDTH);
    assert!(sizing::INPUT_HEIGHT > sizing::BUTTON_HEIGHT);
    assert!(sizing::PHOTO_BOX < sizing::PREVIEW_WIDTH);
    assert!(sizing::THUMBNAIL_WIDTH * 5.0 < sizing::CONTROLS_WIDTH);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(border::WIDTH_LG > border::WIDTH_MD);

    // Motion validation
    assert!(motion::SPRING_STIFFNESS > 0.0);
    assert!(motion::FRAME_MILLIS > 0);
};
