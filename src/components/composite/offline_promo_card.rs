//! OfflinePromoCard Component

use gpui::{
    div, prelude::*, px, App, FontWeight, IntoElement, ParentElement, RenderOnce, Styled,
    Window,
};

use crate::i18n::{self, Locale};
use crate::theme::colors::BikaColors;

/// Promo banner pitching offline access at the bottom of the home feed
#[derive(IntoElement)]
pub struct OfflinePromoCard {
    locale: Locale,
}

impl OfflinePromoCard {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl RenderOnce for OfflinePromoCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let locale = self.locale;

        div()
            .w_full()
            .p_4()
            .rounded_lg()
            .bg(BikaColors::promo_bg())
            .flex()
            .items_center()
            .gap_3()
            .child(
                div()
                    .size(px(40.0))
                    .rounded_md()
                    .bg(BikaColors::surface())
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(BikaColors::accent_purple())
                    .text_lg()
                    .child("↓"),
            )
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_size(px(14.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(BikaColors::text())
                            .child(i18n::t(locale, "home-offline")),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(BikaColors::text_muted())
                            .child(i18n::t(locale, "home-offline-promo")),
                    ),
            )
            .child(
                div()
                    .text_color(BikaColors::text_inactive())
                    .text_lg()
                    .child("›"),
            )
    }
}
