//! FilePreviewModal Component
//!
//! Modal shown when a file row is tapped. The actions are decorative in
//! the fixture build.

use gpui::{
    div, prelude::*, px, App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};

use crate::components::composite::modal::Modal;
use crate::domain::entry::{EntryKind, FileEntry};
use crate::i18n::{self, Locale};
use crate::theme::colors::BikaColors;

const ACTIONS: &[(&str, &str)] = &[
    ("◌", "Comment"),
    ("↓", "Download"),
    ("×", "Delete"),
    ("↗", "Get link"),
];

#[derive(IntoElement)]
pub struct FilePreviewModal {
    entry: FileEntry,
    locale: Locale,
    on_close: Option<Box<dyn Fn(&mut App) + 'static>>,
}

impl FilePreviewModal {
    pub fn new(entry: FileEntry, locale: Locale) -> Self {
        Self {
            entry,
            locale,
            on_close: None,
        }
    }

    pub fn on_close(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for FilePreviewModal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let entry = self.entry;
        let extension: SharedString = match entry.kind {
            EntryKind::File { extension } => extension.to_uppercase().into(),
            EntryKind::Folder => "".into(),
        };

        let mut modal = Modal::new(i18n::t(self.locale, "title-preview"));
        if let Some(handler) = self.on_close {
            modal = modal.on_close(handler);
        }

        modal
            .child(
                div()
                    .w_full()
                    .h(px(160.0))
                    .rounded_md()
                    .bg(BikaColors::hero_bg())
                    .flex()
                    .flex_col()
                    .items_center()
                    .justify_center()
                    .gap_2()
                    .child(
                        div()
                            .text_size(px(32.0))
                            .text_color(BikaColors::accent_purple())
                            .child(entry.glyph()),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(BikaColors::text_muted())
                            .child(extension),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_size(px(15.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(BikaColors::text())
                            .child(SharedString::from(entry.name)),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(BikaColors::text_muted())
                            .child(SharedString::from(entry.detail)),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_2()
                    .children(ACTIONS.iter().map(|&(glyph, label)| {
                        div()
                            .flex_1()
                            .py_2()
                            .rounded_md()
                            .bg(BikaColors::surface_muted())
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap_1()
                            .child(
                                div()
                                    .text_size(px(14.0))
                                    .text_color(BikaColors::primary())
                                    .child(glyph),
                            )
                            .child(
                                div()
                                    .text_size(px(11.0))
                                    .text_color(BikaColors::text_muted())
                                    .child(label),
                            )
                    })),
            )
    }
}
