//! StorageUsageCard Component
//!
//! Purple hero card on the home screen with greeting, usage meter and
//! sync status.

use gpui::{
    div, prelude::*, px, App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};

use crate::components::primitives::progress_bar::ProgressBar;
use crate::domain::home::StorageUsage;
use crate::i18n::{self, Locale};
use crate::theme::colors::BikaColors;
use crate::utils::format;

#[derive(IntoElement)]
pub struct StorageUsageCard {
    usage: StorageUsage,
    user_name: SharedString,
    locale: Locale,
}

impl StorageUsageCard {
    pub fn new(usage: StorageUsage, user_name: impl Into<SharedString>, locale: Locale) -> Self {
        Self {
            usage,
            user_name: user_name.into(),
            locale,
        }
    }
}

impl RenderOnce for StorageUsageCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let locale = self.locale;
        let usage = self.usage;

        let greeting = i18n::t_with(
            locale,
            format::greeting_key_now(),
            &[("name", self.user_name.as_ref())],
        );
        let usage_line = i18n::t_with(
            locale,
            "home-usage",
            &[
                ("used", &format!("{:.1}", usage.used_gb)),
                ("total", &format!("{:.0}", usage.total_gb)),
            ],
        );
        let files_line = i18n::t_with(
            locale,
            "home-files-count",
            &[("count", &format::format_number(i64::from(usage.files_count)))],
        );

        div()
            .w_full()
            .p_4()
            .rounded_lg()
            .bg(BikaColors::accent_purple())
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .text_size(px(18.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(BikaColors::text_light())
                    .child(greeting),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .text_size(px(12.0))
                    .text_color(gpui::rgba(0xffffffcc))
                    .child(files_line)
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_1()
                            .child(div().text_color(BikaColors::success()).child("●"))
                            .child(i18n::t(locale, "home-sync-active")),
                    ),
            )
            .child(
                ProgressBar::new(usage.ratio())
                    .fill(BikaColors::text_light())
                    .track(gpui::rgb(0x4a36cc)),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(gpui::rgba(0xffffffcc))
                    .child(usage_line),
            )
    }
}
