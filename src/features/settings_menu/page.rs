//! Settings Menu Page
//!
//! Generic renderer for the nine settings pages. The page content is
//! pure configuration from the domain layer; only toggles and the
//! language selection carry state.

use gpui::{
    div, prelude::*, px, Context, ElementId, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::placeholder_screen::PlaceholderScreen;
use crate::components::layout::screen_header::ScreenHeader;
use crate::components::primitives::button::Button;
use crate::components::primitives::progress_bar::ProgressBar;
use crate::components::primitives::switch::Switch;
use crate::domain::settings_menu::{MenuConfig, Section, SectionRow, SettingsMenuKey};
use crate::features::settings_menu::controller::SettingsMenuController;
use crate::i18n::{self, Locale};
use crate::theme::colors::BikaColors;

/// Settings menu page component
pub struct SettingsMenuPage {
    entities: AppEntities,
    controller: SettingsMenuController,
    slug: SharedString,
    /// Language picked on the language page but not applied yet
    pending_language: Option<Locale>,
}

impl SettingsMenuPage {
    pub fn new(entities: AppEntities, slug: SharedString, cx: &mut Context<Self>) -> Self {
        let controller = SettingsMenuController::new(entities.clone());

        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.settings, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
            slug,
            pending_language: None,
        }
    }

    fn selected_language(&self, active: Locale) -> Locale {
        self.pending_language.unwrap_or(active)
    }

    fn render_row(
        &self,
        row: &SectionRow,
        index: usize,
        locale: Locale,
        cx: &mut Context<Self>,
    ) -> gpui::AnyElement {
        match *row {
            SectionRow::Detail { label, value } => div()
                .w_full()
                .px_4()
                .py_2()
                .flex()
                .items_center()
                .justify_between()
                .child(
                    div()
                        .text_size(px(13.0))
                        .text_color(BikaColors::text_muted())
                        .child(label.resolve(locale)),
                )
                .child(
                    div()
                        .text_size(px(13.0))
                        .font_weight(FontWeight::MEDIUM)
                        .text_color(BikaColors::text())
                        .child(value.resolve(locale)),
                )
                .into_any_element(),
            SectionRow::Toggle {
                id,
                label,
                description,
                ..
            } => {
                let on = self.entities.settings.read(cx).is_on(id);
                div()
                    .w_full()
                    .px_4()
                    .py_2()
                    .flex()
                    .items_center()
                    .gap_3()
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
                                    .child(label.resolve(locale)),
                            )
                            .child(
                                div()
                                    .text_size(px(11.0))
                                    .text_color(BikaColors::text_muted())
                                    .child(description.resolve(locale)),
                            ),
                    )
                    .child(
                        Switch::new(
                            ElementId::from(SharedString::from(format!("switch-{id}"))),
                            on,
                        )
                        .on_toggle(cx.listener(
                            move |this, _event, _window, cx| {
                                this.controller.toggle(id, cx);
                            },
                        )),
                    )
                    .into_any_element()
            }
            SectionRow::Progress {
                label,
                used_gb,
                total_gb,
            } => {
                let caption = i18n::t_with(
                    locale,
                    "home-usage",
                    &[
                        ("used", &format!("{used_gb:.1}")),
                        ("total", &format!("{total_gb:.0}")),
                    ],
                );
                let ratio = if total_gb > 0.0 { used_gb / total_gb } else { 0.0 };
                div()
                    .w_full()
                    .px_4()
                    .py_2()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        div()
                            .text_size(px(13.0))
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(BikaColors::text())
                            .child(label.resolve(locale)),
                    )
                    .child(ProgressBar::new(ratio))
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(BikaColors::text_muted())
                            .child(caption),
                    )
                    .into_any_element()
            }
            SectionRow::Note { title, body } => div()
                .w_full()
                .p_3()
                .rounded_md()
                .bg(BikaColors::promo_bg())
                .flex()
                .flex_col()
                .gap_1()
                .child(
                    div()
                        .text_size(px(12.0))
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(BikaColors::text())
                        .child(title.resolve(locale)),
                )
                .child(
                    div()
                        .text_size(px(12.0))
                        .text_color(BikaColors::text_muted())
                        .child(body.resolve(locale)),
                )
                .into_any_element(),
            SectionRow::Action { label } => div()
                .id(ElementId::from(SharedString::from(format!(
                    "action-row-{index}"
                ))))
                .w_full()
                .px_4()
                .py_2()
                .flex()
                .items_center()
                .justify_between()
                .cursor_pointer()
                .hover(|s| s.bg(BikaColors::surface_muted()))
                .child(
                    div()
                        .text_size(px(13.0))
                        .text_color(BikaColors::primary())
                        .child(label.resolve(locale)),
                )
                .child(
                    div()
                        .text_color(BikaColors::text_inactive())
                        .text_sm()
                        .child("›"),
                )
                .into_any_element(),
            SectionRow::LanguageOption { locale: option } => {
                let active = self.entities.i18n.read(cx).locale();
                let selected = self.selected_language(active) == option;
                let marker = if selected { "●" } else { "○" };
                let marker_color = if selected {
                    BikaColors::primary()
                } else {
                    BikaColors::text_inactive()
                };

                div()
                    .id(ElementId::from(SharedString::from(format!(
                        "language-{}",
                        option.code()
                    ))))
                    .w_full()
                    .px_4()
                    .py_2()
                    .rounded_md()
                    .flex()
                    .items_center()
                    .justify_between()
                    .cursor_pointer()
                    .when(selected, |el| el.bg(BikaColors::selection_tint()))
                    .hover(|s| s.bg(BikaColors::surface_muted()))
                    .on_click(cx.listener(move |this, _event, _window, cx| {
                        // selecting applies right away; the CTA re-applies
                        // a pending pick after the locale changed elsewhere
                        this.pending_language = Some(option);
                        this.controller.apply_language(option, cx);
                        cx.notify();
                    }))
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .text_size(px(13.0))
                                    .font_weight(FontWeight::MEDIUM)
                                    .text_color(BikaColors::text())
                                    .child(option.native_name()),
                            )
                            .child(
                                div()
                                    .text_size(px(11.0))
                                    .text_color(BikaColors::text_muted())
                                    .child(option.label()),
                            ),
                    )
                    .child(
                        div()
                            .text_size(px(14.0))
                            .text_color(marker_color)
                            .child(marker),
                    )
                    .into_any_element()
            }
        }
    }

    fn render_section(
        &self,
        section: &Section,
        section_index: usize,
        locale: Locale,
        cx: &mut Context<Self>,
    ) -> gpui::AnyElement {
        let rows: Vec<_> = section
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| self.render_row(row, section_index * 100 + i, locale, cx))
            .collect();

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_2()
            .when_some(section.title, |el, title| {
                el.child(
                    div()
                        .text_size(px(13.0))
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(BikaColors::text())
                        .child(title.resolve(locale)),
                )
            })
            .when_some(section.description, |el, description| {
                el.child(
                    div()
                        .text_size(px(12.0))
                        .text_color(BikaColors::text_muted())
                        .child(description.resolve(locale)),
                )
            })
            .child(
                div()
                    .w_full()
                    .py_1()
                    .rounded_lg()
                    .bg(BikaColors::surface())
                    .border_1()
                    .border_color(BikaColors::divider())
                    .flex()
                    .flex_col()
                    .children(rows),
            )
            .into_any_element()
    }

    fn render_cta(
        &self,
        config: &MenuConfig,
        locale: Locale,
        cx: &mut Context<Self>,
    ) -> Option<gpui::AnyElement> {
        let label = config.cta?.resolve(locale);

        let button = if config.key == SettingsMenuKey::Language {
            let active = self.entities.i18n.read(cx).locale();
            let selection = self.selected_language(active);
            Button::primary("menu-cta", label)
                .full_width()
                .disabled(selection == active)
                .on_click(cx.listener(move |this, _event, _window, cx| {
                    this.controller.apply_language(selection, cx);
                }))
        } else {
            Button::primary("menu-cta", label).full_width()
        };

        Some(button.into_any_element())
    }
}

impl Render for SettingsMenuPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale();

        let Some(key) = SettingsMenuKey::from_slug(self.slug.as_ref()) else {
            return div()
                .size_full()
                .bg(BikaColors::background())
                .flex()
                .flex_col()
                .child(
                    ScreenHeader::new(i18n::t(locale, "menu-not-found-title")).on_back(
                        cx.listener(|this, _event, _window, cx| {
                            this.controller.go_back(cx);
                        }),
                    ),
                )
                .child(
                    PlaceholderScreen::new("❖", i18n::t(locale, "menu-not-found-title"))
                        .body(i18n::t(locale, "menu-not-found-body")),
                )
                .into_any_element();
        };

        let config = MenuConfig::for_key(key);
        let sections: Vec<_> = config
            .sections
            .iter()
            .enumerate()
            .map(|(i, section)| self.render_section(section, i, locale, cx))
            .collect();
        let cta = self.render_cta(&config, locale, cx);

        div()
            .size_full()
            .bg(BikaColors::background())
            .flex()
            .flex_col()
            .child(
                ScreenHeader::new(config.title.resolve(locale)).on_back(cx.listener(
                    |this, _event, _window, cx| {
                        this.controller.go_back(cx);
                    },
                )),
            )
            .child(
                div()
                    .id("settings-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_4()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .children(sections),
            )
            .when_some(cta, |el, cta| el.child(div().p_4().child(cta)))
            .into_any_element()
    }
}
