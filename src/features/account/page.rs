//! Account Page
//!
//! Profile summary, plan usage, quick cards and the settings menu grid.

use gpui::{
    div, prelude::*, px, Context, ElementId, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::primitives::button::Button;
use crate::components::primitives::progress_bar::ProgressBar;
use crate::domain::home::{self, StorageUsage};
use crate::domain::settings_menu::SettingsMenuKey;
use crate::i18n::{self, Locale};
use crate::theme::colors::BikaColors;

/// Account page component
pub struct AccountPage {
    entities: AppEntities,
}

impl AccountPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn push(&self, route: Route, cx: &mut Context<Self>) {
        self.entities.nav.update(cx, |nav, cx| {
            nav.push(route);
            cx.notify();
        });
    }

    fn sign_out(&self, cx: &mut Context<Self>) {
        self.entities.nav.update(cx, |nav, cx| {
            nav.reset(Route::Login);
            cx.notify();
        });
    }

    fn render_quick_card(
        &self,
        id: &'static str,
        glyph: &'static str,
        title: SharedString,
        value: &'static str,
        action: SharedString,
    ) -> impl IntoElement {
        div()
            .id(ElementId::from(SharedString::from(id)))
            .flex_1()
            .p_3()
            .rounded_lg()
            .bg(BikaColors::surface_muted())
            .flex()
            .flex_col()
            .gap_1()
            .cursor_pointer()
            .child(
                div()
                    .text_size(px(16.0))
                    .text_color(BikaColors::accent_purple())
                    .child(glyph),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(BikaColors::text_muted())
                    .child(title),
            )
            .child(
                div()
                    .text_size(px(15.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(BikaColors::text())
                    .child(value),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(BikaColors::primary())
                    .child(action),
            )
    }

    fn render_menu_tile(
        &self,
        key: SettingsMenuKey,
        locale: Locale,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let id: ElementId = ElementId::from(SharedString::from(format!("menu-{}", key.slug())));

        div()
            .id(id)
            .p_3()
            .rounded_lg()
            .bg(BikaColors::surface())
            .border_1()
            .border_color(BikaColors::divider())
            .flex()
            .items_center()
            .gap_2()
            .cursor_pointer()
            .hover(|s| s.bg(BikaColors::surface_muted()))
            .on_click(cx.listener(move |this, _event, _window, cx| {
                this.push(Route::SettingsMenu(key.slug().into()), cx);
            }))
            .child(
                div()
                    .text_size(px(14.0))
                    .text_color(BikaColors::accent_purple())
                    .child(key.glyph()),
            )
            .child(
                div()
                    .flex_1()
                    .text_size(px(13.0))
                    .text_color(BikaColors::text())
                    .text_ellipsis()
                    .child(i18n::t(locale, key.title_key())),
            )
            .child(
                div()
                    .text_color(BikaColors::text_inactive())
                    .text_sm()
                    .child("›"),
            )
    }
}

impl Render for AccountPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale();
        let usage = StorageUsage::current();
        let usage_line = i18n::t_with(
            locale,
            "home-usage",
            &[
                ("used", &format!("{:.1}", usage.used_gb)),
                ("total", &format!("{:.0}", usage.total_gb)),
            ],
        );

        let menu_tiles: Vec<_> = SettingsMenuKey::all()
            .iter()
            .map(|&key| self.render_menu_tile(key, locale, cx).into_any_element())
            .collect();

        div()
            .id("account-scroll")
            .size_full()
            .bg(BikaColors::background())
            .overflow_y_scroll()
            .flex()
            .flex_col()
            .gap_3()
            .p_4()
            .child(
                div()
                    .text_size(px(20.0))
                    .font_weight(FontWeight::BOLD)
                    .text_color(BikaColors::text())
                    .child(i18n::t(locale, "title-account")),
            )
            // profile card
            .child(
                div()
                    .w_full()
                    .p_4()
                    .rounded_lg()
                    .bg(BikaColors::surface())
                    .border_1()
                    .border_color(BikaColors::divider())
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(48.0))
                            .rounded_lg()
                            .bg(BikaColors::accent_purple())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(BikaColors::text_light())
                            .text_lg()
                            .child("DM"),
                    )
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .text_size(px(15.0))
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(BikaColors::text())
                                    .child(home::USER_FULL_NAME),
                            )
                            .child(
                                div()
                                    .text_size(px(12.0))
                                    .text_color(BikaColors::text_muted())
                                    .child(home::USER_EMAIL),
                            ),
                    ),
            )
            // plan card
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
                    .gap_2()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_size(px(14.0))
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(BikaColors::text())
                                    .child("Free"),
                            )
                            .child(
                                Button::ghost("upgrade-plan", i18n::t(locale, "action-upgrade"))
                                    .on_click(cx.listener(|this, _event, _window, cx| {
                                        this.push(Route::PlanDetails, cx);
                                    })),
                            ),
                    )
                    .child(ProgressBar::new(usage.ratio()))
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(BikaColors::text_muted())
                            .child(usage_line),
                    ),
            )
            // quick cards
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_2()
                    .child(self.render_quick_card(
                        "team-members",
                        "☺",
                        i18n::t(locale, "account-team-members"),
                        "3 / 10",
                        i18n::t(locale, "action-invite"),
                    ))
                    .child(self.render_quick_card(
                        "devices",
                        "▦",
                        i18n::t(locale, "account-devices"),
                        "3 / 3",
                        i18n::t(locale, "action-manage"),
                    )),
            )
            // settings menu
            .child(
                div()
                    .text_size(px(14.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(BikaColors::text())
                    .child(i18n::t(locale, "account-menu")),
            )
            .child(div().flex().flex_col().gap_2().children(menu_tiles))
            // logout
            .child(
                div()
                    .id("logout")
                    .w_full()
                    .py_2()
                    .rounded_md()
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_size(px(14.0))
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(BikaColors::danger())
                    .cursor_pointer()
                    .hover(|s| s.bg(BikaColors::surface_muted()))
                    .on_click(cx.listener(|this, _event, _window, cx| {
                        this.sign_out(cx);
                    }))
                    .child(i18n::t(locale, "action-logout")),
            )
    }
}
