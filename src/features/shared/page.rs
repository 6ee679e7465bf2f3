//! Shared Page
//!
//! Items shared with the user plus pending access approvals. Resolving
//! an approval only removes it from the list in this fixture build.

use gpui::{
    div, prelude::*, px, Context, ElementId, FontWeight, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::card_header::CardHeader;
use crate::components::primitives::button::{Button, ButtonVariant};
use crate::domain::entry::EntryKind;
use crate::domain::shared::{self, PendingApproval, SharedItem};
use crate::i18n::{self, Locale};
use crate::theme::colors::BikaColors;

/// Shared page component
pub struct SharedPage {
    entities: AppEntities,
    resolved_approvals: Vec<&'static str>,
}

impl SharedPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            resolved_approvals: Vec::new(),
        }
    }

    fn resolve_approval(&mut self, id: &'static str, cx: &mut Context<Self>) {
        if !self.resolved_approvals.contains(&id) {
            self.resolved_approvals.push(id);
            cx.notify();
        }
    }

    fn render_shared_row(&self, item: &SharedItem) -> impl IntoElement {
        let is_folder = matches!(item.kind, EntryKind::Folder);
        let tile_color = if is_folder {
            BikaColors::accent_purple()
        } else {
            BikaColors::text_muted()
        };
        let glyph = if is_folder { "▣" } else { "≡" };

        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .gap_3()
            .rounded_md()
            .child(
                div()
                    .size(px(40.0))
                    .rounded_md()
                    .bg(BikaColors::hero_bg())
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(tile_color)
                    .text_lg()
                    .child(glyph),
            )
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_size(px(14.0))
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(BikaColors::text())
                            .child(SharedString::from(item.name)),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(BikaColors::text_muted())
                            .child(SharedString::from(item.detail)),
                    ),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(BikaColors::text_inactive())
                    .child(SharedString::from(item.shared_by)),
            )
    }

    fn render_approval(
        &self,
        approval: &PendingApproval,
        locale: Locale,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let id = approval.id;
        let approve_id: ElementId =
            ElementId::from(SharedString::from(format!("approve-{id}")));
        let decline_id: ElementId =
            ElementId::from(SharedString::from(format!("decline-{id}")));

        div()
            .w_full()
            .p_3()
            .rounded_lg()
            .bg(BikaColors::surface())
            .border_1()
            .border_color(BikaColors::divider())
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .text_size(px(14.0))
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(BikaColors::text())
                    .child(SharedString::from(approval.name)),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(BikaColors::text_muted())
                    .child(SharedString::from(format!(
                        "{} · {}",
                        approval.requested_by, approval.detail
                    ))),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_2()
                    .child(
                        Button::primary(approve_id, i18n::t(locale, "action-approve"))
                            .full_width()
                            .on_click(cx.listener(move |this, _event, _window, cx| {
                                this.resolve_approval(id, cx);
                            })),
                    )
                    .child(
                        Button::new(decline_id, i18n::t(locale, "action-decline"))
                            .variant(ButtonVariant::Secondary)
                            .full_width()
                            .on_click(cx.listener(move |this, _event, _window, cx| {
                                this.resolve_approval(id, cx);
                            })),
                    ),
            )
    }
}

impl Render for SharedPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale();

        let pending: Vec<&PendingApproval> = shared::pending_approvals()
            .iter()
            .filter(|approval| !self.resolved_approvals.contains(&approval.id))
            .collect();
        let approvals: Vec<_> = pending
            .iter()
            .map(|&approval| self.render_approval(approval, locale, cx).into_any_element())
            .collect();

        div()
            .id("shared-scroll")
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
                    .child(i18n::t(locale, "title-shared")),
            )
            .child(CardHeader::new(i18n::t(locale, "shared-with-you")))
            .children(
                shared::shared_items()
                    .iter()
                    .map(|item| self.render_shared_row(item)),
            )
            .when(!approvals.is_empty(), |el| {
                el.child(CardHeader::new(i18n::t(locale, "shared-pending")))
                    .children(approvals)
            })
            .child(
                div()
                    .w_full()
                    .p_3()
                    .rounded_lg()
                    .bg(BikaColors::promo_bg())
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_size(px(13.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(BikaColors::text())
                            .child(i18n::t(locale, "shared-notice-title")),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(BikaColors::text_muted())
                            .child(i18n::t(locale, "shared-notice-body")),
                    ),
            )
    }
}
