// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use card_composer::ui::design_tokens::{opacity, palette, sizing, spacing};
    use card_composer::ui::styles::{button, container};
    use card_composer::ui::theming::{AppTheme, ThemeMode};
    use iced::widget::button::Status;
    use iced::{Background, Theme};

    #[test]
    fn all_button_styles_are_callable() {
        for theme in [Theme::Light, Theme::Dark] {
            for status in [Status::Active, Status::Hovered, Status::Pressed, Status::Disabled] {
                let _ = button::primary(&theme, status);
                let _ = button::dismiss(&theme, status);
                let _ = button::stepper(&theme, status);
                let _ = button::thumbnail(true)(&theme, status);
                let _ = button::thumbnail(false)(&theme, status);
            }
        }
    }

    #[test]
    fn disabled_primary_button_is_muted() {
        let active = button::primary(&Theme::Light, Status::Active);
        let disabled = button::primary(&Theme::Light, Status::Disabled);
        assert_ne!(active.background, disabled.background);
    }

    #[test]
    fn card_preview_ignores_theme() {
        let light = container::preview_frame(&Theme::Light);
        let dark = container::preview_frame(&Theme::Dark);
        assert_eq!(light.background, dark.background);
        assert_eq!(light.background, Some(Background::Color(palette::WHITE)));
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = palette::WARNING_500;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_SUBTLE;
        assert!(sizing::PREVIEW_WIDTH > sizing::PHOTO_BOX);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        assert!(light.surface().r > dark.surface().r);

        assert!(!light.is_dark());
        assert!(dark.is_dark());
    }
}
