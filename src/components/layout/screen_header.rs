//! ScreenHeader Component
//!
//! Title row for pushed screens, with an optional back chevron and a
//! trailing slot.

use gpui::{
    div, prelude::*, px, AnyElement, App, ClickEvent, FontWeight, InteractiveElement,
    IntoElement, ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled,
    Window,
};

use crate::theme::colors::BikaColors;

#[derive(IntoElement)]
pub struct ScreenHeader {
    title: SharedString,
    on_back: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
    trailing: Option<AnyElement>,
}

impl ScreenHeader {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            on_back: None,
            trailing: None,
        }
    }

    pub fn on_back(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_back = Some(Box::new(handler));
        self
    }

    pub fn trailing(mut self, trailing: impl IntoElement) -> Self {
        self.trailing = Some(trailing.into_any_element());
        self
    }
}

impl RenderOnce for ScreenHeader {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .when_some(self.on_back, |el, handler| {
                        el.child(
                            div()
                                .id("header-back")
                                .size(px(32.0))
                                .rounded_md()
                                .flex()
                                .items_center()
                                .justify_center()
                                .text_color(BikaColors::text())
                                .text_lg()
                                .cursor_pointer()
                                .hover(|s| s.bg(BikaColors::surface_muted()))
                                .on_click(handler)
                                .child("‹"),
                        )
                    })
                    .child(
                        div()
                            .text_size(px(18.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(BikaColors::text())
                            .child(self.title),
                    ),
            )
            .when_some(self.trailing, |el, trailing| el.child(trailing))
    }
}
