// SPDX-License-Identifier: MPL-2.0
//! Live card preview: template, message, photo and sticker stacked in one
//! fixed-size frame.

use crate::ui::composer::gesture::PhotoLayer;
use crate::ui::composer::{Message, State, ViewContext};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, image, Canvas, Column, Space, Stack, Text};
use iced::{ContentFit, Element, Length};

use super::{card_color, card_font, section_header};

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let card = state.card();
    let width = Length::Fixed(sizing::PREVIEW_WIDTH);
    let height = Length::Fixed(sizing::PREVIEW_HEIGHT);

    let background: Element<'a, Message> =
        match state.templates().and_then(|set| set.get(card.template())) {
            Some(template) => image(template.handle.clone())
                .width(width)
                .height(height)
                .content_fit(ContentFit::Fill)
                .into(),
            // Templates are still rendering
            None => Space::new().width(width).height(height).into(),
        };

    let color = card_color(card.font_color());
    let message = Text::new(card.text())
        .size(f32::from(card.font_size().value()))
        .font(card_font(card.font_family(), card.is_bold(), card.is_italic()))
        .color(color);

    let mut stack = Stack::new()
        .width(width)
        .height(height)
        .push(background)
        .push(centered(message.into()));

    if let Some(photo) = state.photo() {
        let layer = PhotoLayer {
            photo,
            transform: state.spring().current(),
            scale: card.scale().value(),
        };
        stack = stack.push(Canvas::new(layer).width(Length::Fill).height(Length::Fill));
    }

    if let Some(decoration) = card.decoration() {
        let sticker = Text::new(decoration.glyph()).size(sizing::STICKER);
        stack = stack.push(centered(sticker.into()));
    }

    let frame = container(stack).style(styles::container::preview_frame);

    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(section_header(ctx.i18n.tr("preview-header")))
        .push(frame)
        .into()
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
