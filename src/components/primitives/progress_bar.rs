//! ProgressBar Component

use gpui::{
    div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, Rgba, Styled, Window,
};

use crate::theme::colors::BikaColors;

/// Horizontal fill bar; the ratio is clamped to 0..=1
#[derive(IntoElement)]
pub struct ProgressBar {
    ratio: f32,
    fill: Rgba,
    track: Rgba,
    height: f32,
}

impl ProgressBar {
    pub fn new(ratio: f32) -> Self {
        Self {
            ratio: ratio.clamp(0.0, 1.0),
            fill: BikaColors::primary(),
            track: BikaColors::progress_track(),
            height: 6.0,
        }
    }

    pub fn fill(mut self, fill: Rgba) -> Self {
        self.fill = fill;
        self
    }

    pub fn track(mut self, track: Rgba) -> Self {
        self.track = track;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }
}

impl RenderOnce for ProgressBar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .h(px(self.height))
            .rounded_sm()
            .bg(self.track)
            .overflow_hidden()
            .child(
                div()
                    .h_full()
                    .w(gpui::relative(self.ratio))
                    .rounded_sm()
                    .bg(self.fill),
            )
    }
}
