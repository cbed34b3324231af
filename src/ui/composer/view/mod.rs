// SPDX-License-Identifier: MPL-2.0
//! Composer view composition helpers.

pub mod controls;
pub mod preview;
pub mod templates;

use crate::domain::card::{FontColor, FontFamily};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::alignment::Horizontal;
use iced::font::{self, Family, Weight};
use iced::widget::{container, scrollable, Column, Text};
use iced::{Color, Element, Font, Length};

use super::{Message, State};

/// Contextual data needed to render the composer view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn render<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Text::new(ctx.i18n.tr("composer-header"))
        .size(typography::TITLE_LG)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::CONTROLS_WIDTH))
        .align_x(Horizontal::Center)
        .push(header)
        .push(preview::view(state, &ctx))
        .push(templates::view(state, &ctx))
        .push(controls::view(state, &ctx));

    scrollable(
        container(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Section title ("Preview", "Select a Template").
fn section_header<'a>(label: String) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::TITLE_MD)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        })
        .into()
}

/// Font used for the card message, in the preview and in the input.
#[must_use]
pub fn card_font(family: FontFamily, bold: bool, italic: bool) -> Font {
    let base = match family {
        FontFamily::Roboto => Font::with_name("Roboto"),
        FontFamily::Serif => Font {
            family: Family::Serif,
            ..Font::default()
        },
        FontFamily::Cursive => Font {
            family: Family::Cursive,
            ..Font::default()
        },
    };

    Font {
        weight: if bold { Weight::Bold } else { Weight::Normal },
        style: if italic {
            font::Style::Italic
        } else {
            font::Style::Normal
        },
        ..base
    }
}

#[must_use]
pub fn card_color(color: FontColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::from_rgb(r, g, b)
}
