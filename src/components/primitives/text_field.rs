//! TextField Component
//!
//! Display-only form field used on the auth screens. The fixture build
//! does not accept keyboard input, so the field shows either a value or
//! its placeholder.

use gpui::{
    div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window,
};

use crate::theme::colors::BikaColors;

#[derive(IntoElement)]
pub struct TextField {
    label: Option<SharedString>,
    value: Option<SharedString>,
    placeholder: SharedString,
    masked: bool,
}

impl TextField {
    pub fn new(placeholder: impl Into<SharedString>) -> Self {
        Self {
            label: None,
            value: None,
            placeholder: placeholder.into(),
            masked: false,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Render the value as password dots
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }
}

impl RenderOnce for TextField {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (content, color) = match self.value {
            Some(value) if self.masked => {
                let dots: SharedString = "•".repeat(value.len()).into();
                (dots, BikaColors::text())
            }
            Some(value) => (value, BikaColors::text()),
            None => (self.placeholder, BikaColors::text_inactive()),
        };

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_1()
            .when_some(self.label, |el, label| {
                el.child(
                    div()
                        .text_size(px(13.0))
                        .text_color(BikaColors::text_muted())
                        .child(label),
                )
            })
            .child(
                div()
                    .w_full()
                    .px_4()
                    .py_2()
                    .rounded_md()
                    .bg(BikaColors::surface())
                    .border_1()
                    .border_color(BikaColors::border())
                    .text_size(px(14.0))
                    .text_color(color)
                    .child(content),
            )
    }
}
