//! Switch Component
//!
//! On/off toggle drawn as a pill with a sliding knob glyph.

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::BikaColors;

#[derive(IntoElement)]
pub struct Switch {
    id: ElementId,
    on: bool,
    on_toggle: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Switch {
    pub fn new(id: impl Into<ElementId>, on: bool) -> Self {
        Self {
            id: id.into(),
            on,
            on_toggle: None,
        }
    }

    pub fn on_toggle(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_toggle = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Switch {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let track = if self.on {
            BikaColors::primary()
        } else {
            BikaColors::progress_track()
        };
        let knob = if self.on { "  ●" } else { "●  " };

        div()
            .id(self.id)
            .w(px(44.0))
            .h(px(24.0))
            .rounded_lg()
            .bg(track)
            .flex()
            .items_center()
            .justify_center()
            .text_color(BikaColors::text_light())
            .text_sm()
            .cursor_pointer()
            .when_some(self.on_toggle, |el, handler| el.on_click(handler))
            .child(knob)
    }
}
