// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::composer::{self, ViewContext as ComposerViewContext};
use crate::ui::notifications::{self, toast};
use iced::widget::{container, Container, Stack};
use iced::{Background, Color, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub composer: &'a composer::State,
    pub notifications: &'a notifications::Manager,
    pub surface: Color,
}

/// Renders the composer screen with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = ctx
        .composer
        .view(ComposerViewContext { i18n: ctx.i18n })
        .map(Message::Composer);

    let surface = ctx.surface;
    let base = Container::new(screen)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(surface)),
            ..Default::default()
        });

    let toasts = toast::overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(toasts)
        .into()
}
