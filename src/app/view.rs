// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::demo::CatFeed;
use crate::i18n::fluent::I18n;
use crate::ui::cat_card;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::pull_to_refresh;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub pull: &'a pull_to_refresh::State,
    pub feed: &'a CatFeed,
    pub colors: ColorScheme,
    /// i18n key of a startup warning to show above the content.
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let card = cat_card::view(cat_card::ViewContext {
        i18n: ctx.i18n,
        feed: ctx.feed,
        colors: ctx.colors,
        refreshing: ctx.pull.is_refreshing(),
    });

    let container = ctx
        .pull
        .view(pull_to_refresh::ViewContext { colors: ctx.colors }, card)
        .map(Message::Pull);

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);

    if let Some(key) = ctx.warning {
        column = column.push(
            Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(ctx.colors.accent),
            )
            .padding(spacing::XS)
            .width(Length::Fill),
        );
    }

    column.push(container).into()
}
