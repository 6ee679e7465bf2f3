//! Activity Page
//!
//! Recent account activity timeline.

use gpui::{
    div, prelude::*, px, Context, FontWeight, InteractiveElement, IntoElement, ParentElement,
    Render, Rgba, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::layout::screen_header::ScreenHeader;
use crate::i18n;
use crate::theme::colors::BikaColors;

/// Activity page component
pub struct ActivityPage {
    entities: AppEntities,
}

impl ActivityPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn timeline_row(
        &self,
        glyph: &'static str,
        glyph_color: Rgba,
        title: &'static str,
        detail: &'static str,
    ) -> impl IntoElement {
        div()
            .w_full()
            .p_3()
            .rounded_lg()
            .bg(BikaColors::surface())
            .border_1()
            .border_color(BikaColors::divider())
            .flex()
            .items_center()
            .gap_3()
            .child(
                div()
                    .size(px(36.0))
                    .rounded_md()
                    .bg(BikaColors::surface_muted())
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(glyph_color)
                    .child(glyph),
            )
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_size(px(13.0))
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(BikaColors::text())
                            .child(title),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(BikaColors::text_muted())
                            .child(detail),
                    ),
            )
    }
}

impl Render for ActivityPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale();

        div()
            .size_full()
            .bg(BikaColors::background())
            .flex()
            .flex_col()
            .child(
                ScreenHeader::new(i18n::t(locale, "title-activity")).on_back(cx.listener(
                    |this, _event, _window, cx| {
                        this.entities.nav.update(cx, |nav, cx| {
                            nav.back();
                            cx.notify();
                        });
                    },
                )),
            )
            .child(
                div()
                    .id("activity-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_4()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(self.timeline_row(
                        "↑",
                        BikaColors::primary(),
                        "You uploaded \"Q3 Report.pdf\"",
                        "2 hours ago · 4.2 MB",
                    ))
                    .child(
                        div()
                            .id("unusual-signin")
                            .cursor_pointer()
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.entities.nav.update(cx, |nav, cx| {
                                    nav.push(Route::Security);
                                    cx.notify();
                                });
                            }))
                            .child(self.timeline_row(
                                "●",
                                BikaColors::warning(),
                                "Unusual sign-in detected",
                                "Verify the activity in Security settings.",
                            )),
                    )
                    .child(self.timeline_row(
                        "↗",
                        BikaColors::success(),
                        "Lora shared \"Design\" with you",
                        "Yesterday · Folder",
                    )),
            )
    }
}
