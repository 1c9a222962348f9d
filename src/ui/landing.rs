// SPDX-License-Identifier: MPL-2.0
//! Landing screen: hero, feature cards and a closing call to action.
//!
//! Purely presentational. The two call-to-action buttons both ask the parent
//! to enter the application; "Learn more" has no effect.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, scrollable, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the landing screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the landing screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    GetStarted,
    LearnMore,
    StartBuilding,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    EnterApplication,
}

/// Process a landing message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::GetStarted | Message::StartBuilding => Event::EnterApplication,
        Message::LearnMore => Event::None,
    }
}

/// Glyph and translation key prefix of each feature card.
const FEATURES: [(&str, &str); 3] = [
    ("⚡", "landing-feature-fast"),
    ("🛡", "landing-feature-secure"),
    ("✦", "landing-feature-easy"),
];

/// Render the landing screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(build_hero(&ctx))
        .push(build_features(&ctx))
        .push(build_call_to_action(&ctx));

    scrollable(content).into()
}

fn build_hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("landing-hero-title"))
        .size(typography::DISPLAY);
    let subtitle = Text::new(ctx.i18n.tr("landing-hero-subtitle"))
        .size(typography::BODY_LG);

    let buttons = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(ctx.i18n.tr("landing-get-started")).size(typography::BODY_LG))
                .padding([spacing::SM, spacing::LG])
                .style(button::primary)
                .on_press(Message::GetStarted),
        )
        .push(
            button(Text::new(ctx.i18n.tr("landing-learn-more")).size(typography::BODY_LG))
                .padding([spacing::SM, spacing::LG])
                .style(button::secondary)
                .on_press(Message::LearnMore),
        );

    let column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(sizing::HERO_MAX_WIDTH)
        .push(title)
        .push(subtitle)
        .push(buttons);

    Container::new(column)
        .center_x(Length::Fill)
        .padding([spacing::SECTION, spacing::MD])
        .into()
}

fn build_features<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("landing-features-title"))
        .size(typography::TITLE_LG);

    let cards = FEATURES
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, &(glyph, prefix)| {
            row.push(build_feature_card(ctx, glyph, prefix))
        });

    let column = Column::new()
        .spacing(spacing::XXL)
        .align_x(Horizontal::Center)
        .max_width(sizing::FEATURES_MAX_WIDTH)
        .push(heading)
        .push(cards);

    Container::new(column)
        .center_x(Length::Fill)
        .padding([spacing::SECTION, spacing::MD])
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

fn build_feature_card<'a>(
    ctx: &ViewContext<'a>,
    glyph: &'static str,
    prefix: &str,
) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(glyph).size(sizing::ICON_LG))
        .push(Text::new(ctx.i18n.tr(&format!("{prefix}-title"))).size(typography::TITLE_MD));

    let inner = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(Text::new(ctx.i18n.tr(&format!("{prefix}-description"))).size(typography::BODY_SM))
        .push(Text::new(ctx.i18n.tr(&format!("{prefix}-body"))).size(typography::BODY));

    Container::new(inner)
        .padding(spacing::LG)
        .width(Length::FillPortion(1))
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.base.color.into()),
            border: Border {
                color: theme.extended_palette().background.strong.color,
                width: 1.0,
                radius: radius::LG.into(),
            },
            ..Default::default()
        })
        .into()
}

fn build_call_to_action<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(sizing::HERO_MAX_WIDTH)
        .push(Text::new(ctx.i18n.tr("landing-cta-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("landing-cta-subtitle")).size(typography::BODY_LG))
        .push(
            button(Text::new(ctx.i18n.tr("landing-cta-button")).size(typography::BODY_LG))
                .padding([spacing::SM, spacing::LG])
                .style(button::primary)
                .on_press(Message::StartBuilding),
        );

    Container::new(column)
        .center_x(Length::Fill)
        .padding([spacing::SECTION, spacing::MD])
        .style(|_theme: &Theme| container::Style {
            text_color: Some(palette::WHITE),
            background: Some(palette::PRIMARY_600.into()),
            ..Default::default()
        })
        .into()
}
