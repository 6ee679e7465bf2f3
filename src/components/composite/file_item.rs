//! FileItem Component
//!
//! List row for a file or folder entry.

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, FontWeight, InteractiveElement,
    IntoElement, ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled,
    Window,
};

use crate::components::primitives::avatar_stack::AvatarStack;
use crate::domain::entry::FileEntry;
use crate::theme::colors::BikaColors;

#[derive(IntoElement)]
pub struct FileItem {
    id: ElementId,
    entry: FileEntry,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl FileItem {
    pub fn new(id: impl Into<ElementId>, entry: FileEntry) -> Self {
        Self {
            id: id.into(),
            entry,
            on_click: None,
        }
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for FileItem {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let entry = self.entry;
        let tile_bg = if entry.is_folder() {
            BikaColors::hero_bg()
        } else {
            BikaColors::surface_muted()
        };
        let tile_color = if entry.is_folder() {
            BikaColors::accent_purple()
        } else {
            BikaColors::text_muted()
        };
        let name: SharedString = entry.name.into();
        let detail: SharedString = entry.detail.into();

        div()
            .id(self.id)
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .gap_3()
            .rounded_md()
            .cursor_pointer()
            .hover(|s| s.bg(BikaColors::surface_muted()))
            .when_some(self.on_click, |el, handler| el.on_click(handler))
            .child(
                div()
                    .size(px(40.0))
                    .rounded_md()
                    .bg(tile_bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(tile_color)
                    .text_lg()
                    .child(entry.glyph()),
            )
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_1()
                            .child(
                                div()
                                    .text_size(px(14.0))
                                    .font_weight(FontWeight::MEDIUM)
                                    .text_color(BikaColors::text())
                                    .text_ellipsis()
                                    .child(name),
                            )
                            .when(entry.starred, |el| {
                                el.child(
                                    div()
                                        .text_size(px(12.0))
                                        .text_color(BikaColors::warning())
                                        .child("★"),
                                )
                            }),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(BikaColors::text_muted())
                            .child(detail),
                    ),
            )
            .when(!entry.shared_with.is_empty(), |el| {
                el.child(AvatarStack::new(entry.shared_with.iter().copied()))
            })
            .child(
                div()
                    .text_color(BikaColors::text_inactive())
                    .text_lg()
                    .child("⋮"),
            )
    }
}
