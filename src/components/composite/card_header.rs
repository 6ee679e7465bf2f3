//! CardHeader Component
//!
//! Section heading with an optional trailing action link.

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, FontWeight, InteractiveElement,
    IntoElement, ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled,
    Window,
};

use crate::theme::colors::BikaColors;

#[derive(IntoElement)]
pub struct CardHeader {
    title: SharedString,
    action: Option<(ElementId, SharedString)>,
    on_action: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl CardHeader {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            action: None,
            on_action: None,
        }
    }

    pub fn action(mut self, id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        self.action = Some((id.into(), label.into()));
        self
    }

    pub fn on_action(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_action = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for CardHeader {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on_action = self.on_action;

        div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_size(px(16.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(BikaColors::text())
                    .child(self.title),
            )
            .when_some(self.action, |el, (id, label)| {
                el.child(
                    div()
                        .id(id)
                        .text_size(px(13.0))
                        .text_color(BikaColors::primary())
                        .cursor_pointer()
                        .when_some(on_action, |el, handler| el.on_click(handler))
                        .child(label),
                )
            })
    }
}
