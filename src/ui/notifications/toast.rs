// SPDX-License-Identifier: MPL-2.0
//! Rendering of the toasts, stacked in the bottom-right corner.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

const DISMISS_GLYPH: &str = "\u{2715}";

/// All toasts of `manager`, or an empty shrunk container when there are none.
pub fn overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    if manager.is_empty() {
        return Container::new(text("")).into();
    }

    let column = manager
        .iter()
        .fold(Column::new(), |column, toast| column.push(view(toast, i18n)))
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

/// Translated message of `toast`, with its arguments.
pub fn message_text(toast: &Notification, i18n: &I18n) -> String {
    if toast.args().is_empty() {
        return i18n.tr(toast.key());
    }

    let args: Vec<(&str, &str)> = toast
        .args()
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    i18n.tr_with_args(toast.key(), &args)
}

fn view<'a>(toast: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = toast.severity().color();

    let glyph = Text::new(toast.severity().glyph())
        .size(typography::BODY_LG)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent),
        });

    let dismiss = tooltip(
        button(Text::new(DISMISS_GLYPH).size(typography::BODY))
            .on_press(Message::Dismiss(toast.id()))
            .padding(spacing::XXS)
            .style(styles::button::dismiss),
        Container::new(Text::new(i18n.tr("notification-dismiss")).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(container::rounded_box),
        tooltip::Position::Top,
    );

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(glyph)
                .width(Length::Fixed(sizing::ICON_MD))
                .align_x(alignment::Horizontal::Center),
        )
        .push(
            Container::new(Text::new(message_text(toast, i18n)).size(typography::BODY))
                .width(Length::Fill),
        )
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::toast(accent))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Topic;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &crate::config::Config::default())
    }

    #[test]
    fn message_uses_the_fluent_arguments() {
        let toast = Notification::error(Topic::Photo, "error-photo-read").with_arg("name", "cake.png");
        assert!(message_text(&toast, &english()).contains("cake.png"));
    }

    #[test]
    fn message_without_arguments_is_translated() {
        let toast = Notification::warning(Topic::Permission, "notification-permission-denied");
        let text = message_text(&toast, &english());
        assert_ne!(text, "notification-permission-denied");
    }

    #[test]
    fn overlay_renders_with_and_without_toasts() {
        let i18n = english();
        let mut manager = Manager::new();
        let _ = overlay(&manager, &i18n);

        manager.push(Notification::error(Topic::Templates, "error-template-render"));
        let _ = overlay(&manager, &i18n);
    }
}
