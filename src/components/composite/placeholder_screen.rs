//! PlaceholderScreen Component
//!
//! Centered screen body for routes that are informational only.

use gpui::{
    div, prelude::*, px, AnyElement, App, FontWeight, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window,
};

use crate::theme::colors::BikaColors;

#[derive(IntoElement)]
pub struct PlaceholderScreen {
    glyph: SharedString,
    title: SharedString,
    body: Option<SharedString>,
    children: Vec<AnyElement>,
}

impl PlaceholderScreen {
    pub fn new(glyph: impl Into<SharedString>, title: impl Into<SharedString>) -> Self {
        Self {
            glyph: glyph.into(),
            title: title.into(),
            body: None,
            children: Vec::new(),
        }
    }

    pub fn body(mut self, body: impl Into<SharedString>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Extra content rendered under the message
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl RenderOnce for PlaceholderScreen {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_2()
            .p_4()
            .child(
                div()
                    .size(px(64.0))
                    .rounded_lg()
                    .bg(BikaColors::hero_bg())
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_size(px(28.0))
                    .text_color(BikaColors::accent_purple())
                    .child(self.glyph),
            )
            .child(
                div()
                    .text_size(px(17.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(BikaColors::text())
                    .child(self.title),
            )
            .when_some(self.body, |el, body| {
                el.child(
                    div()
                        .max_w(px(320.0))
                        .text_size(px(13.0))
                        .text_color(BikaColors::text_muted())
                        .child(body),
                )
            })
            .children(self.children)
    }
}
