//! FileGridItem Component
//!
//! Square tile used for pinned items on the folder screen.

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, FontWeight, InteractiveElement,
    IntoElement, ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled,
    Window,
};

use crate::theme::colors::BikaColors;

#[derive(IntoElement)]
pub struct FileGridItem {
    id: ElementId,
    name: SharedString,
    is_folder: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl FileGridItem {
    pub fn new(id: impl Into<ElementId>, name: impl Into<SharedString>, is_folder: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_folder,
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

impl RenderOnce for FileGridItem {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let glyph = if self.is_folder { "▣" } else { "≡" };
        let glyph_color = if self.is_folder {
            BikaColors::accent_purple()
        } else {
            BikaColors::text_muted()
        };

        div()
            .id(self.id)
            .flex_1()
            .p_3()
            .rounded_lg()
            .bg(BikaColors::surface())
            .border_1()
            .border_color(BikaColors::divider())
            .flex()
            .flex_col()
            .gap_2()
            .cursor_pointer()
            .hover(|s| s.bg(BikaColors::surface_muted()))
            .when_some(self.on_click, |el, handler| el.on_click(handler))
            .child(
                div()
                    .size(px(36.0))
                    .rounded_md()
                    .bg(BikaColors::hero_bg())
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(glyph_color)
                    .text_lg()
                    .child(glyph),
            )
            .child(
                div()
                    .text_size(px(13.0))
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(BikaColors::text())
                    .text_ellipsis()
                    .child(self.name),
            )
    }
}
