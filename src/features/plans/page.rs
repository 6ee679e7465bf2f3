//! Plans Page
//!
//! Plan catalog with a monthly/annual billing toggle. Prices are in
//! Rwandan francs.

use gpui::{
    div, prelude::*, px, Context, ElementId, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::layout::screen_header::ScreenHeader;
use crate::components::primitives::button::Button;
use crate::domain::plan::{self, BillingCycle, Plan};
use crate::i18n::{self, Locale};
use crate::theme::colors::BikaColors;
use crate::utils::format;

/// Plans page component
pub struct PlansPage {
    entities: AppEntities,
    cycle: BillingCycle,
    selected: &'static str,
}

impl PlansPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            cycle: BillingCycle::Monthly,
            selected: "standard",
        }
    }

    fn go_back(&self, cx: &mut Context<Self>) {
        self.entities.nav.update(cx, |nav, cx| {
            nav.back();
            cx.notify();
        });
    }

    fn render_cycle_toggle(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let cycle = self.cycle;

        let chip = |id: &'static str, target: BillingCycle, cx: &mut Context<Self>| {
            let active = cycle == target;
            div()
                .id(ElementId::from(SharedString::from(id)))
                .flex_1()
                .py_1()
                .rounded_md()
                .flex()
                .items_center()
                .justify_center()
                .text_size(px(13.0))
                .cursor_pointer()
                .bg(if active {
                    BikaColors::surface()
                } else {
                    BikaColors::progress_track()
                })
                .text_color(if active {
                    BikaColors::text()
                } else {
                    BikaColors::text_muted()
                })
                .on_click(cx.listener(move |this, _event, _window, cx| {
                    this.cycle = target;
                    cx.notify();
                }))
                .child(i18n::t(locale, target.toggle_label_key()))
        };

        div()
            .w_full()
            .p_1()
            .rounded_lg()
            .bg(BikaColors::progress_track())
            .flex()
            .flex_row()
            .gap_1()
            .child(chip("cycle-monthly", BillingCycle::Monthly, cx))
            .child(chip("cycle-annually", BillingCycle::Annually, cx))
    }

    fn render_plan_card(
        &self,
        plan: &Plan,
        locale: Locale,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let selected = self.selected == plan.id;
        let plan_id = plan.id;
        let price = format::format_rwf(plan.price_for(self.cycle));
        let period = i18n::t(locale, self.cycle.period_key());
        let billed = i18n::t(locale, self.cycle.billed_label_key());

        div()
            .id(ElementId::from(SharedString::from(format!(
                "plan-{}",
                plan.id
            ))))
            .w_full()
            .p_4()
            .rounded_lg()
            .bg(BikaColors::surface())
            .border_1()
            .border_color(if selected {
                BikaColors::primary()
            } else {
                BikaColors::divider()
            })
            .flex()
            .flex_col()
            .gap_2()
            .cursor_pointer()
            .on_click(cx.listener(move |this, _event, _window, cx| {
                this.selected = plan_id;
                cx.notify();
            }))
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_size(px(16.0))
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(BikaColors::text())
                                    .child(SharedString::from(plan.name)),
                            )
                            .when(plan.recommended, |el| {
                                el.child(
                                    div()
                                        .px_2()
                                        .py_1()
                                        .rounded_sm()
                                        .bg(BikaColors::promo_bg())
                                        .text_size(px(10.0))
                                        .text_color(BikaColors::accent_purple())
                                        .child(i18n::t(locale, "plan-recommended")),
                                )
                            }),
                    )
                    .child(
                        div()
                            .text_size(px(13.0))
                            .text_color(BikaColors::text_muted())
                            .child(SharedString::from(plan.storage)),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .child(
                        div()
                            .text_size(px(20.0))
                            .font_weight(FontWeight::BOLD)
                            .text_color(BikaColors::text())
                            .child(SharedString::from(price)),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(BikaColors::text_muted())
                            .child(SharedString::from(format!("/ {period}"))),
                    ),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(BikaColors::text_muted())
                    .child(billed),
            )
    }
}

impl Render for PlansPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale();

        let cards: Vec<_> = plan::catalog()
            .iter()
            .map(|plan| self.render_plan_card(plan, locale, cx).into_any_element())
            .collect();

        div()
            .size_full()
            .bg(BikaColors::background())
            .flex()
            .flex_col()
            .child(
                ScreenHeader::new(i18n::t(locale, "title-plans")).on_back(cx.listener(
                    |this, _event, _window, cx| {
                        this.go_back(cx);
                    },
                )),
            )
            .child(
                div()
                    .id("plans-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_4()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .child(self.render_cycle_toggle(locale, cx))
                    .children(cards),
            )
            .child(
                div().p_4().child(
                    Button::primary("plan-upgrade", i18n::t(locale, "action-upgrade"))
                        .full_width(),
                ),
            )
    }
}
