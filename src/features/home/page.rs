//! Home Page
//!
//! Greeting card with storage usage, the recent strip, team folders and
//! the offline promo.

use gpui::{
    div, prelude::*, px, Context, FontWeight, InteractiveElement, IntoElement, ParentElement,
    Render, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::card_header::CardHeader;
use crate::components::composite::offline_promo_card::OfflinePromoCard;
use crate::components::composite::recent_item_card::RecentItemCard;
use crate::components::composite::storage_usage_card::StorageUsageCard;
use crate::components::composite::team_folder_card::TeamFolderCard;
use crate::components::primitives::search_bar::SearchBar;
use crate::domain::home::{self, StorageUsage};
use crate::features::home::controller::HomeController;
use crate::i18n;
use crate::theme::colors::BikaColors;

/// Home page component
pub struct HomePage {
    entities: AppEntities,
    controller: HomeController,
}

impl HomePage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = HomeController::new(entities.clone());

        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
        }
    }
}

impl Render for HomePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale();
        let usage = StorageUsage::current();

        let team_folders = div()
            .flex()
            .flex_row()
            .gap_2()
            .children(home::team_folders().iter().map(|&folder| {
                let folder_id = folder.id;
                TeamFolderCard::new(folder, locale).on_click(cx.listener(
                    move |this, _event, _window, cx| {
                        this.controller.open_folder(folder_id, cx);
                    },
                ))
            }));

        div()
            .id("home-scroll")
            .size_full()
            .bg(BikaColors::background())
            .overflow_y_scroll()
            .flex()
            .flex_col()
            .gap_4()
            .p_4()
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_size(px(18.0))
                            .font_weight(FontWeight::BOLD)
                            .text_color(BikaColors::text())
                            .child("Bika"),
                    )
                    .child(
                        div()
                            .id("home-favourites")
                            .size(px(32.0))
                            .rounded_md()
                            .bg(BikaColors::surface())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(BikaColors::text_muted())
                            .cursor_pointer()
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.controller.open_favourites(cx);
                            }))
                            .child("★"),
                    ),
            )
            .child(SearchBar::new(i18n::t(locale, "search-placeholder")))
            .child(StorageUsageCard::new(usage, home::USER_NAME, locale))
            .child(
                CardHeader::new(i18n::t(locale, "home-recent"))
                    .action("see-all-recent", i18n::t(locale, "action-see-all"))
                    .on_action(cx.listener(|this, _event, _window, cx| {
                        this.controller.open_activity(cx);
                    })),
            )
            .child(
                div()
                    .w_full()
                    .flex()
                    .flex_row()
                    .gap_2()
                    .overflow_hidden()
                    .children(home::recent_items().iter().map(|&item| RecentItemCard::new(item))),
            )
            .child(CardHeader::new(i18n::t(locale, "home-team-folders")))
            .child(team_folders)
            .child(OfflinePromoCard::new(locale))
    }
}
