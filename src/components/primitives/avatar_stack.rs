//! AvatarStack Component
//!
//! Overlapping initials badges for shared-with previews.

use gpui::{
    div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window,
};

use crate::theme::colors::BikaColors;

const BADGE_COLORS: &[u32] = &[0x5f46ff, 0x30a4f4, 0x19ac65, 0xff9f1c];

#[derive(IntoElement)]
pub struct AvatarStack {
    initials: Vec<SharedString>,
    max_visible: usize,
}

impl AvatarStack {
    pub fn new(initials: impl IntoIterator<Item = impl Into<SharedString>>) -> Self {
        Self {
            initials: initials.into_iter().map(Into::into).collect(),
            max_visible: 3,
        }
    }

    pub fn max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible;
        self
    }
}

impl RenderOnce for AvatarStack {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let overflow = self.initials.len().saturating_sub(self.max_visible);

        div()
            .flex()
            .items_center()
            .gap_1()
            .children(
                self.initials
                    .into_iter()
                    .take(self.max_visible)
                    .enumerate()
                    .map(|(i, initials)| {
                        let color = BADGE_COLORS[i % BADGE_COLORS.len()];
                        div()
                            .size(px(22.0))
                            .rounded_lg()
                            .bg(gpui::rgb(color))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(BikaColors::text_light())
                            .text_size(px(9.0))
                            .child(initials)
                    }),
            )
            .when(overflow > 0, |el| {
                el.child(
                    div()
                        .text_color(BikaColors::text_muted())
                        .text_size(px(11.0))
                        .child(format!("+{overflow}")),
                )
            })
    }
}
