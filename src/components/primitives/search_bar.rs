//! SearchBar Component
//!
//! Decorative search field; the fixture screens do not filter.

use gpui::{
    div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window,
};

use crate::theme::colors::BikaColors;

#[derive(IntoElement)]
pub struct SearchBar {
    placeholder: SharedString,
}

impl SearchBar {
    pub fn new(placeholder: impl Into<SharedString>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }
}

impl RenderOnce for SearchBar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .px_4()
            .py_2()
            .rounded_lg()
            .bg(BikaColors::surface_muted())
            .border_1()
            .border_color(BikaColors::border())
            .flex()
            .items_center()
            .gap_2()
            .text_color(BikaColors::text_inactive())
            .text_size(px(14.0))
            .child("◌")
            .child(self.placeholder)
    }
}
