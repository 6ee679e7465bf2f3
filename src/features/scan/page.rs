//! Scan Page
//!
//! Camera permission gate, live viewfinder with capture controls, and
//! the capture preview.

use gpui::{
    div, prelude::*, px, Context, ElementId, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::{Button, ButtonVariant};
use crate::domain::scan::{CapturedPhoto, PermissionStatus};
use crate::features::scan::controller::ScanController;
use crate::i18n::{self, Locale};
use crate::theme::colors::BikaColors;
use crate::utils::format;

/// Scan page component
pub struct ScanPage {
    entities: AppEntities,
    controller: ScanController,
}

impl ScanPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = ScanController::new(entities.clone());

        cx.observe(&entities.scan, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
        }
    }

    fn render_permission_gate(
        &self,
        status: PermissionStatus,
        locale: Locale,
        cx: &mut Context<Self>,
    ) -> gpui::AnyElement {
        let message_key = if status == PermissionStatus::Denied {
            "scan-permission-denied"
        } else {
            "scan-permission-message"
        };

        div()
            .size_full()
            .bg(BikaColors::viewfinder_bg())
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_4()
            .p_4()
            .child(
                div()
                    .text_size(px(28.0))
                    .text_color(BikaColors::text_light())
                    .child("▣"),
            )
            .child(
                div()
                    .max_w(px(280.0))
                    .text_size(px(14.0))
                    .text_color(BikaColors::text_light())
                    .child(i18n::t(locale, message_key)),
            )
            .child(
                Button::primary("allow-camera", i18n::t(locale, "scan-permission-button"))
                    .disabled(status == PermissionStatus::Requesting)
                    .on_click(cx.listener(|this, _event, _window, cx| {
                        this.controller.request_permission(cx);
                    })),
            )
            .into_any_element()
    }

    fn render_toggle_chip(
        &self,
        id: &'static str,
        label_key: &'static str,
        hint_key: &'static str,
        on: bool,
        locale: Locale,
        on_click: impl Fn(&gpui::ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> impl IntoElement {
        let marker = if on { "✓" } else { "○" };
        let marker_color = if on {
            BikaColors::success()
        } else {
            BikaColors::text_inactive()
        };

        div()
            .id(ElementId::from(SharedString::from(id)))
            .flex_1()
            .p_2()
            .rounded_md()
            .bg(gpui::rgba(0xffffff14))
            .flex()
            .flex_col()
            .gap_1()
            .cursor_pointer()
            .on_click(on_click)
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .child(div().text_size(px(12.0)).text_color(marker_color).child(marker))
                    .child(
                        div()
                            .text_size(px(12.0))
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(BikaColors::text_light())
                            .child(i18n::t(locale, label_key)),
                    ),
            )
            .child(
                div()
                    .text_size(px(10.0))
                    .text_color(gpui::rgba(0xffffff99))
                    .child(i18n::t(locale, hint_key)),
            )
    }

    fn render_viewfinder(&self, locale: Locale, cx: &mut Context<Self>) -> gpui::AnyElement {
        let scan = self.entities.scan.read(cx);
        let flash = scan.flash();
        let edge = scan.edge_detection();
        let enhance = scan.auto_enhance();
        let capturing = scan.is_capturing();

        div()
            .size_full()
            .bg(BikaColors::viewfinder_bg())
            .flex()
            .flex_col()
            // top bar
            .child(
                div()
                    .w_full()
                    .px_4()
                    .py_2()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .id("scan-close")
                            .size(px(32.0))
                            .rounded_md()
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(BikaColors::text_light())
                            .text_lg()
                            .cursor_pointer()
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.controller.close(cx);
                            }))
                            .child("×"),
                    )
                    .child(
                        div()
                            .id("scan-flash")
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .bg(gpui::rgba(0xffffff14))
                            .flex()
                            .items_center()
                            .gap_1()
                            .cursor_pointer()
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.controller.cycle_flash(cx);
                            }))
                            .child(
                                div()
                                    .text_size(px(12.0))
                                    .text_color(BikaColors::warning())
                                    .child(flash.glyph()),
                            )
                            .child(
                                div()
                                    .text_size(px(12.0))
                                    .text_color(BikaColors::text_light())
                                    .child(i18n::t(locale, flash.label_key())),
                            ),
                    ),
            )
            // framing area with corner guides and a rule-of-thirds grid
            .child(
                div()
                    .flex_1()
                    .p_4()
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        div()
                            .w_full()
                            .h_full()
                            .border_1()
                            .border_color(gpui::rgba(0xffffff33))
                            .rounded_md()
                            .flex()
                            .flex_col()
                            .child(div().flex_1().border_b_1().border_color(gpui::rgba(0xffffff1a)))
                            .child(div().flex_1().border_b_1().border_color(gpui::rgba(0xffffff1a)))
                            .child(div().flex_1()),
                    ),
            )
            // toggles
            .child(
                div()
                    .w_full()
                    .px_4()
                    .flex()
                    .flex_row()
                    .gap_2()
                    .child(self.render_toggle_chip(
                        "edge-toggle",
                        "scan-edge-label",
                        "scan-edge-hint",
                        edge,
                        locale,
                        cx.listener(|this, _event, _window, cx| {
                            this.controller.toggle_edge_detection(cx);
                        }),
                    ))
                    .child(self.render_toggle_chip(
                        "enhance-toggle",
                        "scan-enhance-label",
                        "scan-enhance-hint",
                        enhance,
                        locale,
                        cx.listener(|this, _event, _window, cx| {
                            this.controller.toggle_auto_enhance(cx);
                        }),
                    )),
            )
            // bottom controls
            .child(
                div()
                    .w_full()
                    .px_6()
                    .py_4()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .id("scan-gallery")
                            .px_3()
                            .py_2()
                            .rounded_md()
                            .bg(gpui::rgba(0xffffff14))
                            .text_size(px(12.0))
                            .text_color(BikaColors::text_light())
                            .cursor_pointer()
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.controller.import_from_gallery(cx);
                            }))
                            .child(i18n::t(locale, "scan-gallery")),
                    )
                    .child(
                        div()
                            .id("scan-capture")
                            .size(px(64.0))
                            .rounded_lg()
                            .bg(BikaColors::surface())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_size(px(24.0))
                            .text_color(BikaColors::primary())
                            .cursor_pointer()
                            .opacity(if capturing { 0.5 } else { 1.0 })
                            .on_click(cx.listener(move |this, _event, _window, cx| {
                                if !capturing {
                                    this.controller.capture(cx);
                                }
                            }))
                            .child("●"),
                    )
                    // spacer matching the gallery chip
                    .child(div().w(px(64.0))),
            )
            .into_any_element()
    }

    fn render_preview(
        &self,
        photo: &CapturedPhoto,
        locale: Locale,
        cx: &mut Context<Self>,
    ) -> gpui::AnyElement {
        let mut meta: Vec<String> = Vec::new();
        if let Some(dimensions) = photo.dimensions_label() {
            meta.push(dimensions);
        }
        meta.push(format::format_bytes(photo.size_bytes));
        meta.push(format::format_local_datetime(&photo.taken_at));
        let meta_line: SharedString = meta.join(" · ").into();

        div()
            .size_full()
            .bg(BikaColors::viewfinder_bg())
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            .child(
                div()
                    .flex_1()
                    .rounded_lg()
                    .bg(gpui::rgba(0xffffff14))
                    .flex()
                    .flex_col()
                    .items_center()
                    .justify_center()
                    .gap_2()
                    .child(
                        div()
                            .text_size(px(40.0))
                            .text_color(BikaColors::text_light())
                            .child("▣"),
                    )
                    .child(
                        div()
                            .text_size(px(14.0))
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(BikaColors::text_light())
                            .child(SharedString::from(photo.file_name.clone())),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(gpui::rgba(0xffffff99))
                            .child(meta_line),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_2()
                    .child(
                        Button::new("scan-retake", i18n::t(locale, "scan-retake"))
                            .variant(ButtonVariant::Secondary)
                            .full_width()
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.controller.discard_preview(cx);
                            })),
                    )
                    .child(
                        Button::primary("scan-use-photo", i18n::t(locale, "scan-use-photo"))
                            .full_width()
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.controller.discard_preview(cx);
                            })),
                    ),
            )
            .into_any_element()
    }
}

impl Render for ScanPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale();
        let permission = self.entities.scan.read(cx).permission();
        let captured = self.entities.scan.read(cx).captured().cloned();

        match (permission, captured) {
            (PermissionStatus::Granted, Some(photo)) => self.render_preview(&photo, locale, cx),
            (PermissionStatus::Granted, None) => self.render_viewfinder(locale, cx),
            (status, _) => self.render_permission_gate(status, locale, cx),
        }
    }
}
