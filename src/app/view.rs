// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The active screen is drawn full size and the toast overlay is stacked on
//! top of it.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::composer::{self, ViewContext as ComposerViewContext};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::dropzone::{self, ViewContext as DropzoneViewContext};
use crate::ui::landing::{self, ViewContext as LandingViewContext};
use crate::ui::notifications::{self, Toast};
use iced::{
    widget::{scrollable, Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub dropzone: &'a dropzone::State,
    pub composer: &'a composer::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Landing => landing::view(LandingViewContext { i18n: ctx.i18n }).map(Message::Landing),
        Screen::Workspace => view_workspace(ctx.i18n, ctx.dropzone, ctx.composer),
    };

    let base = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(base)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_workspace<'a>(
    i18n: &'a I18n,
    dropzone_state: &'a dropzone::State,
    composer_state: &'a composer::State,
) -> Element<'a, Message> {
    let dropzone_view = dropzone::view(DropzoneViewContext {
        i18n,
        state: dropzone_state,
    })
    .map(Message::Dropzone);

    let composer_view = composer::view(ComposerViewContext {
        i18n,
        state: composer_state,
    })
    .map(Message::Composer);

    let column = Column::new()
        .spacing(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(dropzone_view)
        .push(composer_view);

    scrollable(
        Container::new(column)
            .center_x(Length::Fill)
            .padding(spacing::XL),
    )
    .into()
}
