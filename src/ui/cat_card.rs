// SPDX-License-Identifier: MPL-2.0
//! Cat-of-the-day card shown inside the pull-to-refresh container.

use crate::demo::CatFeed;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use chrono::{DateTime, Local};
use iced::alignment::Horizontal;
use iced::widget::{container, Column, Container, Text};
use iced::{Background, Border, Element, Length, Theme};

/// Contextual data needed to render the card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub feed: &'a CatFeed,
    pub colors: ColorScheme,
    pub refreshing: bool,
}

/// Renders the card. Non-interactive, so it fits any message type.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let cat = ctx.feed.current();
    let colors = ctx.colors;

    let title = Text::new(ctx.i18n.tr("cat-of-the-day-title"))
        .size(typography::TITLE_LG)
        .color(colors.text_primary);

    let hint_key = if ctx.refreshing {
        "refreshing-label"
    } else {
        "pull-hint"
    };
    let hint = Text::new(ctx.i18n.tr(hint_key))
        .size(typography::CAPTION)
        .color(colors.text_secondary);

    let portrait = Container::new(Text::new(cat.glyph).size(typography::PORTRAIT_GLYPH))
        .center_x(Length::Fixed(sizing::CAT_PORTRAIT))
        .center_y(Length::Fixed(sizing::CAT_PORTRAIT));

    let name = Text::new(cat.name)
        .size(typography::TITLE_MD)
        .color(colors.text_primary);

    let origin = Text::new(cat.origin)
        .size(typography::HEADLINE)
        .color(colors.accent);

    let fact = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(ctx.i18n.tr("cat-fact-label"))
                .size(typography::CAPTION)
                .color(colors.accent),
        )
        .push(
            Text::new(cat.fact)
                .size(typography::BODY)
                .color(colors.text_primary),
        );

    let footer = Text::new(footer_text(ctx.i18n, ctx.feed))
        .size(typography::CAPTION)
        .color(colors.text_secondary);

    let card_body = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(portrait)
        .push(name)
        .push(origin)
        .push(fact)
        .push(footer);

    let card = Container::new(card_body)
        .padding(spacing::LG)
        .max_width(sizing::CARD_MAX_WIDTH)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(colors.card)),
            border: Border {
                radius: radius::LG.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    let page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(title)
        .push(hint)
        .push(card);

    Container::new(page)
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(colors.surface)),
            ..container::Style::default()
        })
        .into()
}

fn footer_text(i18n: &I18n, feed: &CatFeed) -> String {
    match feed.last_refreshed() {
        Some(at) => format!(
            "{}: {} · {} {}",
            i18n.tr("last-refreshed-label"),
            format_timestamp(at),
            i18n.tr("refresh-count-label"),
            feed.refresh_count()
        ),
        None => i18n.tr("never-refreshed"),
    }
}

fn format_timestamp(at: DateTime<Local>) -> String {
    at.format("%H:%M:%S").to_string()
}
