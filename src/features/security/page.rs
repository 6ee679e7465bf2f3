//! Security Page
//!
//! Account security overview with suggested hardening tasks.

use gpui::{
    div, prelude::*, px, Context, FontWeight, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::layout::screen_header::ScreenHeader;
use crate::components::primitives::button::Button;
use crate::domain::settings_menu::SettingsMenuKey;
use crate::i18n;
use crate::theme::colors::BikaColors;

/// Security page component
pub struct SecurityPage {
    entities: AppEntities,
}

impl SecurityPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn task_row(&self, glyph: &'static str, label: &'static str) -> impl IntoElement {
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
            .child(div().text_color(BikaColors::primary()).child(glyph))
            .child(
                div()
                    .flex_1()
                    .text_size(px(13.0))
                    .text_color(BikaColors::text())
                    .child(label),
            )
            .child(div().text_color(BikaColors::text_inactive()).child("›"))
    }
}

impl Render for SecurityPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale();

        div()
            .size_full()
            .bg(BikaColors::background())
            .flex()
            .flex_col()
            .child(
                ScreenHeader::new(i18n::t(locale, "title-security")).on_back(cx.listener(
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
                    .id("security-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_4()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .child(
                        div()
                            .w_full()
                            .p_4()
                            .rounded_lg()
                            .bg(BikaColors::surface())
                            .border_1()
                            .border_color(BikaColors::divider())
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .size(px(48.0))
                                    .rounded_lg()
                                    .bg(BikaColors::surface_muted())
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .text_size(px(20.0))
                                    .text_color(BikaColors::success())
                                    .child("✓"),
                            )
                            .child(
                                div()
                                    .text_size(px(15.0))
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(BikaColors::text())
                                    .child("Security overview"),
                            )
                            .child(
                                div()
                                    .text_size(px(13.0))
                                    .text_color(BikaColors::text_muted())
                                    .child("No suspicious activity detected"),
                            ),
                    )
                    .child(self.task_row("◎", "Enable two-factor authentication"))
                    .child(self.task_row("❖", "Review third-party integrations"))
                    .child(
                        Button::ghost("security-settings", "Go to settings")
                            .full_width()
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.entities.nav.update(cx, |nav, cx| {
                                    nav.push(Route::SettingsMenu(
                                        SettingsMenuKey::Security.slug().into(),
                                    ));
                                    cx.notify();
                                });
                            })),
                    ),
            )
    }
}
