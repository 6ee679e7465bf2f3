//! Favourites Page
//!
//! Starred entries pulled from the My Files listing.

use gpui::{
    div, prelude::*, px, Context, ElementId, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::composite::file_item::FileItem;
use crate::components::composite::file_preview_modal::FilePreviewModal;
use crate::components::layout::screen_header::ScreenHeader;
use crate::domain::entry::{my_files, FileEntry};
use crate::i18n;
use crate::theme::colors::BikaColors;

/// Favourites page component
pub struct FavouritesPage {
    entities: AppEntities,
    preview: Option<FileEntry>,
}

impl FavouritesPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            preview: None,
        }
    }

    fn open_entry(&mut self, entry: FileEntry, cx: &mut Context<Self>) {
        if entry.is_folder() {
            self.entities.nav.update(cx, |nav, cx| {
                nav.push(Route::Folder(entry.id.into()));
                cx.notify();
            });
        } else {
            self.preview = Some(entry);
            cx.notify();
        }
    }
}

impl Render for FavouritesPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale();
        let starred: Vec<FileEntry> = my_files().iter().filter(|e| e.starred).copied().collect();

        div()
            .size_full()
            .bg(BikaColors::background())
            .flex()
            .flex_col()
            .child(
                ScreenHeader::new(i18n::t(locale, "title-favourites")).on_back(cx.listener(
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
                    .id("favourites-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_4()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        div()
                            .text_size(px(13.0))
                            .text_color(BikaColors::text_muted())
                            .child(i18n::t(locale, "favourites-hint")),
                    )
                    .children(starred.into_iter().map(|entry| {
                        let id: ElementId = ElementId::from(SharedString::from(format!(
                            "favourite-{}",
                            entry.id
                        )));
                        FileItem::new(id, entry).on_click(cx.listener(
                            move |this, _event, _window, cx| {
                                this.open_entry(entry, cx);
                            },
                        ))
                    })),
            )
            .when_some(self.preview, |el, entry| {
                let page = cx.entity();
                el.child(FilePreviewModal::new(entry, locale).on_close(move |cx| {
                    page.update(cx, |this, cx| {
                        this.preview = None;
                        cx.notify();
                    });
                }))
            })
    }
}
