// SPDX-License-Identifier: MPL-2.0
//! Drop zone accepting files dragged onto the window or picked from a dialog.
//!
//! The zone owns the staged [`FileSelection`] and keeps a [`FormField`] in
//! sync with it after every change. Window-level drag events are routed here
//! by the application while the workspace is shown.
//!
//! A drag gesture starts with a hover event. The first non-empty drop of a
//! gesture replaces the selection, later drops of the same gesture append to
//! it, so a multi-file drop ends up staged as one batch in drop order.

use crate::i18n::fluent::I18n;
use crate::staging::{scanner, DroppedFile, FileSelection, FormField};
use crate::ui::design_tokens::{border, opacity, palette, radius, sizing, spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{button, container, mouse_area, rule, text, Column, Container, Row, Text},
    Border, Color, Element, Length, Theme,
};
use std::path::PathBuf;

/// Contextual data needed to render the drop zone.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages handled by the drop zone.
#[derive(Debug, Clone)]
pub enum Message {
    FileHovered(PathBuf),
    HoverLeft,
    FileDropped(PathBuf),
    BrowseRequested,
    BrowseCompleted(Option<Vec<PathBuf>>),
    Clear,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenFileDialog,
}

/// Drop zone state.
#[derive(Debug, Clone)]
pub struct State {
    selection: FileSelection,
    field: FormField,
    hovering: bool,
    gesture_pending: bool,
}

impl State {
    pub fn new(field_name: impl Into<String>, required: bool) -> Self {
        Self {
            selection: FileSelection::new(),
            field: FormField::new(field_name, required),
            hovering: false,
            gesture_pending: false,
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FileHovered(_) => {
                self.hovering = true;
                self.gesture_pending = true;
                Event::None
            }
            Message::HoverLeft => {
                self.hovering = false;
                self.gesture_pending = false;
                Event::None
            }
            Message::FileDropped(path) => {
                self.hovering = false;
                let files = scanner::collect(&[path]);
                if self.gesture_pending {
                    if self.on_files_dropped(files) {
                        self.gesture_pending = false;
                    }
                } else if !files.is_empty() {
                    self.selection.extend(files);
                    self.sync_field();
                }
                Event::None
            }
            Message::BrowseRequested => Event::OpenFileDialog,
            Message::BrowseCompleted(Some(paths)) => {
                self.on_files_dropped(scanner::collect(&paths));
                Event::None
            }
            Message::BrowseCompleted(None) => Event::None,
            Message::Clear => {
                self.selection.clear();
                self.field.clear();
                self.gesture_pending = false;
                Event::None
            }
        }
    }

    /// Stages a complete batch of files in place of the current selection.
    ///
    /// Returns `false` and keeps the previous selection when `files` is empty.
    pub fn on_files_dropped(&mut self, files: Vec<DroppedFile>) -> bool {
        let count = files.len();
        let replaced = self.selection.replace(files);
        if replaced {
            self.sync_field();
            tracing::debug!(count, "staged files");
        }
        replaced
    }

    fn sync_field(&mut self) {
        self.field.set_files(self.selection.files());
    }

    #[must_use]
    pub fn selection(&self) -> &FileSelection {
        &self.selection
    }

    #[must_use]
    pub fn field(&self) -> &FormField {
        &self.field
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }
}

/// Render the drop zone card.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let mut content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(build_surface(i18n, state.hovering));

    if !state.selection.is_empty() {
        content = content.push(build_file_list(i18n, &state.selection));
    }
    content = content.push(build_field_summary(i18n, &state.field));

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(card_style)
        .into()
}

fn build_surface(i18n: &I18n, hovering: bool) -> Element<'_, Message> {
    let prompt: Element<'_, Message> = if hovering {
        Text::new(i18n.tr("dropzone-hovering"))
            .size(typography::BODY)
            .into()
    } else {
        Row::new()
            .spacing(spacing::XXS)
            .align_y(iced::alignment::Vertical::Center)
            .push(Text::new(i18n.tr("dropzone-prompt")).size(typography::BODY))
            .push(
                text(i18n.tr("dropzone-browse"))
                    .size(typography::BODY)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::PRIMARY_500),
                    }),
            )
            .into()
    };

    let inner = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new("⇪").size(sizing::ICON_XL))
        .push(prompt);

    let surface = Container::new(inner)
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .style(move |theme: &Theme| surface_style(theme, hovering));

    let min_height = Container::new(surface)
        .width(Length::Fill)
        .center_y(Length::Fixed(sizing::DROPZONE_MIN_HEIGHT));

    mouse_area(min_height)
        .on_press(Message::BrowseRequested)
        .interaction(iced::mouse::Interaction::Pointer)
        .into()
}

fn build_file_list<'a>(i18n: &'a I18n, selection: &'a FileSelection) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::XXS).push(
        Text::new(i18n.tr("dropzone-uploaded-heading")).size(typography::TITLE_SM),
    );

    for file in selection.iter() {
        let size = file.size_kb_display();
        let row = i18n.tr_with_args(
            "dropzone-file-row",
            &[("path", file.relative_path()), ("size", size.as_str())],
        );
        list = list.push(Text::new(row).size(typography::CAPTION));
    }

    let clear = button(Text::new(i18n.tr("dropzone-clear")).size(typography::BODY_SM))
        .style(button::secondary)
        .on_press(Message::Clear);

    Column::new()
        .spacing(spacing::SM)
        .push(rule::horizontal(1))
        .push(list)
        .push(clear)
        .into()
}

fn build_field_summary<'a>(i18n: &'a I18n, field: &'a FormField) -> Element<'a, Message> {
    let count = field.files().len().to_string();
    let summary = i18n.tr_with_args(
        "dropzone-field-summary",
        &[("name", field.name()), ("count", count.as_str())],
    );

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(summary).size(typography::CAPTION));

    if !field.is_satisfied() {
        column = column.push(
            text(i18n.tr("dropzone-field-required"))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::WARNING_500),
                }),
        );
    }

    column.into()
}

fn card_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.base.color.into()),
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

fn surface_style(_theme: &Theme, hovering: bool) -> container::Style {
    let background = if hovering {
        Some(
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_100
            }
            .into(),
        )
    } else {
        None
    };

    container::Style {
        background,
        border: Border {
            color: palette::PRIMARY_500,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn file(name: &str, size: u64) -> DroppedFile {
        DroppedFile::new(name, size, name, format!("/tmp/{name}"))
    }

    fn names(state: &State) -> Vec<String> {
        state
            .selection()
            .iter()
            .map(|f| f.name().to_string())
            .collect()
    }

    #[test]
    fn dropped_batch_is_listed_in_drop_order_and_mirrored() {
        let mut state = State::new("files", false);
        assert!(state.on_files_dropped(vec![file("z", 10), file("a", 2048)]));

        assert_eq!(names(&state), ["z", "a"]);
        assert_eq!(state.selection().files()[1].size_kb_display(), "2.00");
        assert_eq!(
            state.field().files(),
            [PathBuf::from("/tmp/z"), PathBuf::from("/tmp/a")]
        );
    }

    #[test]
    fn empty_drop_keeps_previous_selection() {
        let mut state = State::new("files", true);
        state.on_files_dropped(vec![file("kept", 1)]);

        assert!(!state.on_files_dropped(Vec::new()));
        assert_eq!(names(&state), ["kept"]);
        assert_eq!(state.field().files().len(), 1);
    }

    #[test]
    fn new_gesture_replaces_and_same_gesture_appends() {
        let dir = tempdir().expect("failed to create temp dir");
        let paths: Vec<PathBuf> = ["one.txt", "two.txt", "three.txt"]
            .iter()
            .map(|n| {
                let p = dir.path().join(n);
                fs::write(&p, n.as_bytes()).expect("write");
                p
            })
            .collect();

        let mut state = State::new("files", false);
        state.update(Message::FileHovered(paths[0].clone()));
        assert!(state.is_hovering());
        state.update(Message::FileDropped(paths[0].clone()));
        state.update(Message::FileDropped(paths[1].clone()));
        assert!(!state.is_hovering());
        assert_eq!(names(&state), ["one.txt", "two.txt"]);

        state.update(Message::FileHovered(paths[2].clone()));
        state.update(Message::FileDropped(paths[2].clone()));
        assert_eq!(names(&state), ["three.txt"]);
        assert_eq!(state.field().files(), [paths[2].clone()]);
    }

    #[test]
    fn unreadable_drop_does_not_consume_gesture() {
        let dir = tempdir().expect("failed to create temp dir");
        let real = dir.path().join("real.txt");
        fs::write(&real, b"x").expect("write");

        let mut state = State::new("files", false);
        state.on_files_dropped(vec![file("old", 1)]);
        state.update(Message::FileHovered(real.clone()));
        state.update(Message::FileDropped(dir.path().join("missing")));
        assert_eq!(names(&state), ["old"]);

        state.update(Message::FileDropped(real));
        assert_eq!(names(&state), ["real.txt"]);
    }

    #[test]
    fn hover_left_cancels_gesture() {
        let mut state = State::new("files", false);
        state.update(Message::FileHovered(PathBuf::from("/x")));
        state.update(Message::HoverLeft);
        assert!(!state.is_hovering());
        assert!(state.selection().is_empty());
    }

    #[test]
    fn browse_emits_dialog_event_and_cancel_is_noop() {
        let mut state = State::new("files", false);
        state.on_files_dropped(vec![file("a", 1)]);

        assert_eq!(state.update(Message::BrowseRequested), Event::OpenFileDialog);
        assert_eq!(state.update(Message::BrowseCompleted(None)), Event::None);
        assert_eq!(names(&state), ["a"]);
    }

    #[test]
    fn picked_files_replace_selection() {
        let dir = tempdir().expect("failed to create temp dir");
        let picked = dir.path().join("picked.bin");
        fs::write(&picked, vec![0u8; 1536]).expect("write");

        let mut state = State::new("files", false);
        state.on_files_dropped(vec![file("old", 1)]);
        state.update(Message::BrowseCompleted(Some(vec![picked])));

        assert_eq!(names(&state), ["picked.bin"]);
        assert_eq!(state.selection().files()[0].size_kb_display(), "1.50");
    }

    #[test]
    fn clear_empties_selection_and_field() {
        let mut state = State::new("attachment", true);
        state.on_files_dropped(vec![file("a", 1)]);
        assert!(state.field().is_satisfied());

        state.update(Message::Clear);
        assert!(state.selection().is_empty());
        assert!(state.field().files().is_empty());
        assert!(!state.field().is_satisfied());
    }

    #[test]
    fn dropzone_view_renders() {
        let i18n = I18n::default();
        let mut state = State::new("files", true);
        drop(view(ViewContext {
            i18n: &i18n,
            state: &state,
        }));

        state.on_files_dropped(vec![file("a", 1)]);
        drop(view(ViewContext {
            i18n: &i18n,
            state: &state,
        }));
    }
}
