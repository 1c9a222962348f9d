// SPDX-License-Identifier: MPL-2.0
//! Text composer widget: a multi-line body, a recipient line and two actions.

use crate::compose::ComposerState;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, container, text_editor, text_input, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the composer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the composer widgets.
#[derive(Debug, Clone)]
pub enum Message {
    BodyEdited(text_editor::Action),
    RecipientChanged(String),
    CopyPressed,
    EmailPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    CopyRequested,
    EmailRequested,
}

/// Editor buffer plus the plain text it holds.
#[derive(Debug, Default)]
pub struct State {
    editor: text_editor::Content,
    composer: ComposerState,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::BodyEdited(action) => {
                let is_edit = action.is_edit();
                self.editor.perform(action);
                if is_edit {
                    self.composer.body = self.editor.text();
                }
                Event::None
            }
            Message::RecipientChanged(recipient) => {
                self.composer.recipient = recipient;
                Event::None
            }
            Message::CopyPressed => Event::CopyRequested,
            Message::EmailPressed => Event::EmailRequested,
        }
    }

    #[must_use]
    pub fn composer(&self) -> &ComposerState {
        &self.composer
    }
}

/// Render the composer card.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let body_editor = text_editor(&state.editor)
        .placeholder(i18n.tr("composer-body-placeholder"))
        .on_action(Message::BodyEdited)
        .height(Length::Fixed(sizing::BODY_EDITOR_HEIGHT))
        .size(typography::BODY);

    let recipient_input = text_input(
        &i18n.tr("composer-recipient-placeholder"),
        &state.composer.recipient,
    )
    .on_input(Message::RecipientChanged)
    .on_submit(Message::EmailPressed)
    .size(typography::BODY)
    .padding(spacing::XS);

    let actions = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            button(Text::new(i18n.tr("composer-copy-button")).size(typography::BODY))
                .style(button::secondary)
                .on_press(Message::CopyPressed),
        )
        .push(
            button(Text::new(i18n.tr("composer-email-button")).size(typography::BODY))
                .style(button::primary)
                .on_press(Message::EmailPressed),
        );

    let content = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(Text::new(i18n.tr("composer-body-label")).size(typography::TITLE_SM))
        .push(body_editor)
        .push(Text::new(i18n.tr("composer-recipient-label")).size(typography::BODY_LG))
        .push(recipient_input)
        .push(actions);

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.base.color.into()),
            border: Border {
                color: theme.extended_palette().background.strong.color,
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn type_text(state: &mut State, text: &str) {
        state.update(Message::BodyEdited(text_editor::Action::Edit(
            text_editor::Edit::Paste(Arc::new(text.to_string())),
        )));
    }

    #[test]
    fn recipient_changes_are_stored() {
        let mut state = State::new();
        state.update(Message::RecipientChanged("a@b.com".into()));
        assert_eq!(state.composer().recipient, "a@b.com");
    }

    #[test]
    fn actions_emit_requests() {
        let mut state = State::new();
        assert_eq!(state.update(Message::CopyPressed), Event::CopyRequested);
        assert_eq!(state.update(Message::EmailPressed), Event::EmailRequested);
    }

    #[test]
    fn editing_updates_editor_and_state() {
        let mut state = State::new();
        type_text(&mut state, "sample text");
        assert_eq!(state.composer().body, "sample text");
        assert!(state.editor.text().starts_with("sample text"));
    }

    #[test]
    fn body_and_recipient_are_independent() {
        let mut state = State::new();
        type_text(&mut state, "hello");
        state.update(Message::RecipientChanged("x@y.z".into()));
        assert_eq!(state.composer().body, "hello");

        state.update(Message::RecipientChanged(String::new()));
        assert_eq!(state.composer().body, "hello");
        assert!(state.composer().recipient.is_empty());
    }

    #[test]
    fn navigation_does_not_change_body() {
        let mut state = State::new();
        type_text(&mut state, "abc");
        state.update(Message::BodyEdited(text_editor::Action::Move(
            text_editor::Motion::Home,
        )));
        assert_eq!(state.composer().body, "abc");
    }

    #[test]
    fn composer_view_renders() {
        let i18n = I18n::default();
        let state = State::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
