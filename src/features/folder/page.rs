//! Folder Page
//!
//! Folder detail with hero card, pinned shortcuts and the item list.
//! Unknown folder ids land on the not-found screen.

use gpui::{
    div, prelude::*, px, Context, ElementId, FontWeight, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::{Route, Tab};
use crate::components::composite::file_grid_item::FileGridItem;
use crate::components::composite::file_item::FileItem;
use crate::components::composite::file_preview_modal::FilePreviewModal;
use crate::components::layout::screen_header::ScreenHeader;
use crate::components::primitives::avatar_stack::AvatarStack;
use crate::components::primitives::button::Button;
use crate::components::primitives::search_bar::SearchBar;
use crate::domain::entry::FileEntry;
use crate::domain::folder::{self, FolderRecord};
use crate::i18n::{self, Locale};
use crate::theme::colors::BikaColors;

/// Folder page component
pub struct FolderPage {
    entities: AppEntities,
    folder_id: SharedString,
    preview: Option<FileEntry>,
}

impl FolderPage {
    pub fn new(entities: AppEntities, folder_id: SharedString, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            folder_id,
            preview: None,
        }
    }

    fn go_back(&self, cx: &mut Context<Self>) {
        self.entities.nav.update(cx, |nav, cx| {
            nav.back();
            cx.notify();
        });
    }

    fn open_item(&mut self, entry: FileEntry, cx: &mut Context<Self>) {
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

    fn open_pinned(&mut self, id: &str, is_folder: bool, cx: &mut Context<Self>) {
        if is_folder {
            let route = Route::Folder(id.to_string().into());
            self.entities.nav.update(cx, |nav, cx| {
                nav.push(route);
                cx.notify();
            });
        } else if let Some(record) = folder::lookup(self.folder_id.as_ref()) {
            if let Some(&entry) = record.items.iter().find(|item| item.id == id) {
                self.preview = Some(entry);
                cx.notify();
            }
        }
    }

    fn render_hero(&self, record: &FolderRecord, locale: Locale) -> impl IntoElement {
        let updated = i18n::t_with(locale, "folder-updated", &[("when", record.updated)]);
        let total = i18n::t_with(
            locale,
            "folder-total-count",
            &[("count", &record.files_count.to_string())],
        );
        let path: SharedString = record.path.join(" › ").into();

        div()
            .w_full()
            .p_4()
            .rounded_lg()
            .bg(BikaColors::hero_bg())
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .text_size(px(11.0))
                    .text_color(BikaColors::text_muted())
                    .child(path),
            )
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
                            .child(SharedString::from(record.name)),
                    )
                    .child(AvatarStack::new(record.member_initials.iter().copied())),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .text_size(px(12.0))
                    .text_color(BikaColors::text_muted())
                    .child(SharedString::from(record.owner))
                    .child("·")
                    .child(updated)
                    .child("·")
                    .child(SharedString::from(record.size))
                    .child("·")
                    .child(total),
            )
    }

    fn render_found(
        &mut self,
        record: &FolderRecord,
        locale: Locale,
        cx: &mut Context<Self>,
    ) -> gpui::AnyElement {
        let folder_name: SharedString = record.name.into();
        let page = cx.entity();

        let pinned = div()
            .flex()
            .flex_row()
            .gap_2()
            .children(record.pinned.iter().map(|pin| {
                let id: ElementId =
                    ElementId::from(SharedString::from(format!("pinned-{}", pin.id)));
                let pin_id = pin.id;
                let is_folder = pin.is_folder;
                FileGridItem::new(id, pin.name, pin.is_folder).on_click(cx.listener(
                    move |this, _event, _window, cx| {
                        this.open_pinned(pin_id, is_folder, cx);
                    },
                ))
            }));

        let items = i18n::t_with(
            locale,
            "folder-items-count",
            &[("count", &record.items.len().to_string())],
        );
        let rows = record.items.iter().map(|&entry| {
            let id: ElementId =
                ElementId::from(SharedString::from(format!("folder-item-{}", entry.id)));
            FileItem::new(id, entry).on_click(cx.listener(move |this, _event, _window, cx| {
                this.open_item(entry, cx);
            }))
        });

        div()
            .size_full()
            .bg(BikaColors::background())
            .flex()
            .flex_col()
            .child(
                ScreenHeader::new(folder_name).on_back(cx.listener(
                    |this, _event, _window, cx| {
                        this.go_back(cx);
                    },
                )),
            )
            .child(
                div()
                    .id("folder-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_4()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .child(SearchBar::new(i18n::t(locale, "search-folder-placeholder")))
                    .child(self.render_hero(record, locale))
                    .child(
                        div()
                            .text_size(px(14.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(BikaColors::text())
                            .child(i18n::t(locale, "folder-pinned")),
                    )
                    .child(pinned)
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
                                    .child(i18n::t(locale, "folder-all-items")),
                            )
                            .child(
                                div()
                                    .text_size(px(12.0))
                                    .text_color(BikaColors::text_muted())
                                    .child(items),
                            ),
                    )
                    .child(div().flex().flex_col().gap_1().children(rows)),
            )
            .when_some(self.preview, |el, entry| {
                el.child(FilePreviewModal::new(entry, locale).on_close(move |cx| {
                    page.update(cx, |this, cx| {
                        this.preview = None;
                        cx.notify();
                    });
                }))
            })
            .into_any_element()
    }

    fn render_not_found(&self, locale: Locale, cx: &mut Context<Self>) -> gpui::AnyElement {
        use crate::components::composite::placeholder_screen::PlaceholderScreen;

        div()
            .size_full()
            .bg(BikaColors::background())
            .flex()
            .flex_col()
            .child(
                ScreenHeader::new(i18n::t(locale, "title-folder")).on_back(cx.listener(
                    |this, _event, _window, cx| {
                        this.go_back(cx);
                    },
                )),
            )
            .child(
                PlaceholderScreen::new("▣", i18n::t(locale, "folder-not-found-title"))
                    .body(i18n::t(locale, "folder-not-found-body"))
                    .child(
                        Button::primary(
                            "return-to-files",
                            i18n::t(locale, "action-return-files"),
                        )
                        .on_click(cx.listener(|this, _event, _window, cx| {
                            this.entities.nav.update(cx, |nav, cx| {
                                nav.select_tab(Tab::Files);
                                cx.notify();
                            });
                        })),
                    ),
            )
            .into_any_element()
    }
}

impl Render for FolderPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale();

        match folder::lookup(self.folder_id.as_ref()) {
            Some(record) => self.render_found(record, locale, cx),
            None => self.render_not_found(locale, cx),
        }
    }
}
