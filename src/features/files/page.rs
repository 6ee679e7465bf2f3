//! Files Page
//!
//! The My Files listing. Folder rows navigate into the folder screen;
//! file rows open the preview modal. The toolbar offers a list/grid
//! switch and a select-all checkbox; both are page-local.

use gpui::{
    div, prelude::*, px, Context, ElementId, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::composite::file_grid_item::FileGridItem;
use crate::components::composite::file_item::FileItem;
use crate::components::composite::file_preview_modal::FilePreviewModal;
use crate::components::primitives::checkbox::Checkbox;
use crate::components::primitives::search_bar::SearchBar;
use crate::domain::entry::{self, FileEntry};
use crate::i18n::{self, Locale};
use crate::theme::colors::BikaColors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    List,
    Grid,
}

/// Files page component
pub struct FilesPage {
    entities: AppEntities,
    preview: Option<FileEntry>,
    view: ViewMode,
    select_all: bool,
}

impl FilesPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            preview: None,
            view: ViewMode::List,
            select_all: false,
        }
    }

    fn open_entry(&mut self, entry: FileEntry, cx: &mut Context<Self>) {
        if entry.is_folder() {
            let route = Route::Folder(entry.id.to_string().into());
            self.entities.nav.update(cx, |nav, cx| {
                nav.push(route);
                cx.notify();
            });
        } else {
            self.preview = Some(entry);
            cx.notify();
        }
    }

    fn view_chip(
        &self,
        id: &'static str,
        glyph: &'static str,
        mode: ViewMode,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let active = self.view == mode;

        div()
            .id(ElementId::from(SharedString::from(id)))
            .size(px(26.0))
            .rounded_sm()
            .flex()
            .items_center()
            .justify_center()
            .cursor_pointer()
            .bg(if active {
                BikaColors::surface()
            } else {
                BikaColors::surface_muted()
            })
            .text_color(if active {
                BikaColors::primary()
            } else {
                BikaColors::text_inactive()
            })
            .on_click(cx.listener(move |this, _event, _window, cx| {
                this.view = mode;
                cx.notify();
            }))
            .child(glyph)
    }

    fn render_list(&self, cx: &mut Context<Self>) -> gpui::AnyElement {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .children(entry::my_files().iter().map(|&entry| {
                let id: ElementId =
                    ElementId::from(SharedString::from(format!("file-entry-{}", entry.id)));
                FileItem::new(id, entry).on_click(cx.listener(
                    move |this, _event, _window, cx| {
                        this.open_entry(entry, cx);
                    },
                ))
            }))
            .into_any_element()
    }

    fn render_grid(&self, cx: &mut Context<Self>) -> gpui::AnyElement {
        let rows = entry::my_files().chunks(3).map(|chunk| {
            div()
                .flex()
                .flex_row()
                .gap_2()
                .children(chunk.iter().map(|&entry| {
                    let id: ElementId =
                        ElementId::from(SharedString::from(format!("file-tile-{}", entry.id)));
                    FileGridItem::new(id, entry.name, entry.is_folder()).on_click(cx.listener(
                        move |this, _event, _window, cx| {
                            this.open_entry(entry, cx);
                        },
                    ))
                }))
        });

        div()
            .px_2()
            .flex()
            .flex_col()
            .gap_2()
            .children(rows)
            .into_any_element()
    }

    fn render_toolbar(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let page = cx.entity();

        div()
            .flex()
            .items_center()
            .justify_between()
            .child(
                Checkbox::new("select-all")
                    .checked(self.select_all)
                    .label(i18n::t(locale, "action-select-all"))
                    .on_change(move |checked, _window, cx| {
                        page.update(cx, |this, cx| {
                            this.select_all = checked;
                            cx.notify();
                        });
                    }),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_1()
                            .text_size(px(13.0))
                            .text_color(BikaColors::text_muted())
                            .child(i18n::t(locale, "sort-last-modified"))
                            .child("↓"),
                    )
                    .child(
                        div()
                            .p_1()
                            .rounded_md()
                            .bg(BikaColors::surface_muted())
                            .flex()
                            .flex_row()
                            .gap_1()
                            .child(self.view_chip("view-list", "▤", ViewMode::List, cx))
                            .child(self.view_chip("view-grid", "▦", ViewMode::Grid, cx)),
                    ),
            )
    }
}

impl Render for FilesPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale();
        let page = cx.entity();

        let content = match self.view {
            ViewMode::List => self.render_list(cx),
            ViewMode::Grid => self.render_grid(cx),
        };

        div()
            .size_full()
            .bg(BikaColors::background())
            .flex()
            .flex_col()
            .child(
                div()
                    .p_4()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_size(px(20.0))
                                    .font_weight(FontWeight::BOLD)
                                    .text_color(BikaColors::text())
                                    .child(i18n::t(locale, "title-files")),
                            )
                            // upload action, visual only in the fixture build
                            .child(
                                div()
                                    .id("files-upload")
                                    .size(px(32.0))
                                    .rounded_md()
                                    .bg(BikaColors::primary())
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .text_color(BikaColors::text_light())
                                    .cursor_pointer()
                                    .child("+"),
                            ),
                    )
                    .child(SearchBar::new(i18n::t(locale, "search-placeholder")))
                    .child(self.render_toolbar(locale, cx)),
            )
            .child(
                div()
                    .id("files-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .px_2()
                    .child(content),
            )
            .when_some(self.preview, |el, entry| {
                el.child(FilePreviewModal::new(entry, locale).on_close(move |cx| {
                    page.update(cx, |this, cx| {
                        this.preview = None;
                        cx.notify();
                    });
                }))
            })
    }
}
