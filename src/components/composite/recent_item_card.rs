//! RecentItemCard Component

use gpui::{
    div, prelude::*, px, App, ElementId, FontWeight, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, Styled, Window,
};

use crate::domain::home::RecentItem;
use crate::theme::colors::BikaColors;

/// Thumbnail card in the horizontal "Recent" strip
#[derive(IntoElement)]
pub struct RecentItemCard {
    id: ElementId,
    item: RecentItem,
}

impl RecentItemCard {
    pub fn new(item: RecentItem) -> Self {
        Self {
            id: ElementId::from(SharedString::from(format!("recent-{}", item.id))),
            item,
        }
    }
}

impl RenderOnce for RecentItemCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .id(self.id)
            .w(px(140.0))
            .flex_none()
            .rounded_lg()
            .bg(BikaColors::surface())
            .border_1()
            .border_color(BikaColors::divider())
            .overflow_hidden()
            .cursor_pointer()
            .child(
                // thumbnail stand-in
                div()
                    .w_full()
                    .h(px(80.0))
                    .bg(BikaColors::hero_bg())
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_size(px(24.0))
                    .text_color(BikaColors::accent_purple())
                    .child("▣"),
            )
            .child(
                div()
                    .p_2()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_size(px(13.0))
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(BikaColors::text())
                            .text_ellipsis()
                            .child(SharedString::from(self.item.title)),
                    )
                    .child(
                        div()
                            .text_size(px(11.0))
                            .text_color(BikaColors::text_muted())
                            .text_ellipsis()
                            .child(SharedString::from(self.item.subtitle)),
                    ),
            )
    }
}
