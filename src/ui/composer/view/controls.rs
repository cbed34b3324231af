// SPDX-License-Identifier: MPL-2.0
//! Message input and styling controls.

use crate::domain::card::{CardState, FontColor, FontFamily, FontSize};
use crate::i18n::fluent::I18n;
use crate::ui::composer::{ControlMessage, Message, State, ViewContext};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, pick_list, text_editor, Column, Row, Text};
use iced::{Border, Element, Length, Theme};
use std::fmt;

use super::{card_color, card_font};

/// Pick list entry pairing a value with its translated label.
#[derive(Debug, Clone)]
pub struct Choice<T> {
    pub value: T,
    pub label: String,
}

impl<T: PartialEq> PartialEq for Choice<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let card = state.card();

    let controls = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(message_input(state, i18n))
        .push(font_size_row(card, i18n))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(picker(
                    weight_choices(i18n),
                    card.is_bold(),
                    ControlMessage::BoldSelected,
                ))
                .push(picker(
                    style_choices(i18n),
                    card.is_italic(),
                    ControlMessage::ItalicSelected,
                )),
        )
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(picker(
                    color_choices(i18n),
                    card.font_color(),
                    ControlMessage::FontColorSelected,
                ))
                .push(picker(
                    family_choices(i18n),
                    card.font_family(),
                    ControlMessage::FontFamilySelected,
                )),
        )
        .push(action_button(
            i18n.tr("pick-image-button"),
            ControlMessage::PickImage,
        ))
        .push(action_button(
            i18n.tr("add-heart-button"),
            ControlMessage::AddHeart,
        ));

    container(controls)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

/// Multiline editor rendered in the card's own font attributes.
fn message_input<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let card = state.card();
    let color = card_color(card.font_color());

    text_editor(state.editor())
        .placeholder(i18n.tr("text-placeholder"))
        .on_action(|action| Message::Control(ControlMessage::TextEdited(action)))
        .font(card_font(card.font_family(), card.is_bold(), card.is_italic()))
        .size(f32::from(card.font_size().value()))
        .padding(spacing::SM)
        .height(Length::Fixed(sizing::INPUT_HEIGHT))
        .style(move |theme: &Theme, status| {
            let mut style = text_editor::default(theme, status);
            style.value = color;
            style.border = Border {
                color: palette::GRAY_200,
                width: 1.0,
                radius: radius::LG.into(),
            };
            style
        })
        .into()
}

fn font_size_row<'a>(card: &'a CardState, i18n: &'a I18n) -> Element<'a, Message> {
    let size = card.font_size();
    let options = font_size_choices(i18n);
    let selected = options.iter().find(|choice| choice.value == size).cloned();

    let size_picker = pick_list(options, selected, |choice| {
        Message::Control(ControlMessage::FontSizeSelected(choice.value))
    })
    .placeholder(i18n.tr("font-size-placeholder"))
    .padding(spacing::XS)
    .width(Length::Fill);

    let decrease = button(Text::new(i18n.tr("decrease-font-size")).size(typography::BODY_LG))
        .on_press_maybe(
            (!size.is_min()).then_some(Message::Control(ControlMessage::DecreaseFontSize)),
        )
        .padding(spacing::XS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::stepper);

    let increase = button(Text::new(i18n.tr("increase-font-size")).size(typography::BODY_LG))
        .on_press_maybe(
            (!size.is_max()).then_some(Message::Control(ControlMessage::IncreaseFontSize)),
        )
        .padding(spacing::XS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::stepper);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(size_picker)
        .push(decrease)
        .push(increase)
        .into()
}

fn picker<'a, T>(
    options: Vec<Choice<T>>,
    current: T,
    on_select: fn(T) -> ControlMessage,
) -> Element<'a, Message>
where
    T: PartialEq + Clone + 'a,
{
    let selected = options
        .iter()
        .find(|choice| choice.value == current)
        .cloned();

    pick_list(options, selected, move |choice: Choice<T>| {
        Message::Control(on_select(choice.value))
    })
    .padding(spacing::XS)
    .width(Length::FillPortion(1))
    .into()
}

fn action_button<'a>(label: String, message: ControlMessage) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY_LG))
        .on_press(Message::Control(message))
        .padding(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::primary)
        .into()
}

/// "Font Size: N" entries for every supported size.
#[must_use]
pub fn font_size_choices(i18n: &I18n) -> Vec<Choice<FontSize>> {
    FontSize::ALL
        .iter()
        .map(|&value| Choice {
            value,
            label: i18n.tr_with_args("font-size-option", &[("size", &value.to_string())]),
        })
        .collect()
}

#[must_use]
pub fn weight_choices(i18n: &I18n) -> Vec<Choice<bool>> {
    vec![
        Choice {
            value: true,
            label: i18n.tr("weight-bold"),
        },
        Choice {
            value: false,
            label: i18n.tr("weight-normal"),
        },
    ]
}

#[must_use]
pub fn style_choices(i18n: &I18n) -> Vec<Choice<bool>> {
    vec![
        Choice {
            value: true,
            label: i18n.tr("style-italic"),
        },
        Choice {
            value: false,
            label: i18n.tr("style-normal"),
        },
    ]
}

#[must_use]
pub fn color_choices(i18n: &I18n) -> Vec<Choice<FontColor>> {
    FontColor::ALL
        .iter()
        .map(|&value| Choice {
            value,
            label: i18n.tr(match value {
                FontColor::Red => "color-red",
                FontColor::Black => "color-black",
            }),
        })
        .collect()
}

#[must_use]
pub fn family_choices(i18n: &I18n) -> Vec<Choice<FontFamily>> {
    FontFamily::ALL
        .iter()
        .map(|&value| Choice {
            value,
            label: i18n.tr(match value {
                FontFamily::Roboto => "font-family-roboto",
                FontFamily::Serif => "font-family-serif",
                FontFamily::Cursive => "font-family-cursive",
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn font_size_labels_show_points() {
        let i18n = english();
        let labels: Vec<String> = font_size_choices(&i18n)
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(labels.len(), 7);
        assert_eq!(labels[0], "Font Size: 18");
        assert_eq!(labels[6], "Font Size: 30");
    }

    #[test]
    fn choices_compare_by_value_only() {
        let a = Choice {
            value: FontColor::Red,
            label: "Red Font".to_string(),
        };
        let b = Choice {
            value: FontColor::Red,
            label: "Police rouge".to_string(),
        };
        assert_eq!(a, b);
    }

    #[test]
    fn toggle_pickers_offer_both_states() {
        let i18n = english();
        let weights: Vec<String> = weight_choices(&i18n)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(weights, vec!["Bold", "Normal"]);

        let colors: Vec<String> = color_choices(&i18n)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(colors, vec!["Red Font", "Black Font"]);
    }
}
