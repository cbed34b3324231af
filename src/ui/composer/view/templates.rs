// SPDX-License-Identifier: MPL-2.0
//! Template thumbnail strip.

use crate::domain::card::TemplateIndex;
use crate::media::templates;
use crate::ui::composer::{ControlMessage, Message, State, ViewContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, image, scrollable, Column, Row, Space, Text};
use iced::{ContentFit, Element, Length};

use super::section_header;

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let selected = state.card().template();

    let strip = TemplateIndex::all().fold(Row::new().spacing(spacing::XS), |row, index| {
        row.push(thumbnail(state, index, index == selected))
    });

    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(section_header(ctx.i18n.tr("templates-header")))
        .push(
            scrollable(strip.padding(spacing::XXS))
                .direction(Direction::Horizontal(Scrollbar::new()))
                .width(Length::Fill),
        )
        .into()
}

fn thumbnail<'a>(state: &'a State, index: TemplateIndex, is_selected: bool) -> Element<'a, Message> {
    let width = Length::Fixed(sizing::THUMBNAIL_WIDTH);
    let height = Length::Fixed(sizing::THUMBNAIL_HEIGHT);

    let preview: Element<'a, Message> = match state.templates().and_then(|set| set.get(index)) {
        Some(template) => image(template.handle.clone())
            .width(width)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        None => Space::new().width(width).height(height).into(),
    };

    let content = Column::new()
        .spacing(spacing::XXS)
        .width(width)
        .align_x(Horizontal::Center)
        .push(preview)
        .push(Text::new(templates::title(index)).size(typography::CAPTION));

    button(content)
        .on_press(Message::Control(ControlMessage::TemplateSelected(
            index.value(),
        )))
        .padding(spacing::XXS)
        .style(styles::button::thumbnail(is_selected))
        .into()
}
