//! Workspace - Main Shell with Layout and Event Pump
//!
//! The workspace owns the page cache, the bottom tab bar and the alert
//! overlay. It also runs the event pump that bridges service events to
//! UI updates.

use gpui::{
    div, prelude::*, px, App, Context, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::{Route, Tab};
use crate::components::composite::modal::Modal;
use crate::components::layout::tab_bar::TabBar;
use crate::components::primitives::button::Button;
use crate::domain::scan::PermissionStatus;
use crate::eventing::app_event::AppEvent;
use crate::features::account::page::AccountPage;
use crate::features::activity::page::ActivityPage;
use crate::features::auth::page::AuthPage;
use crate::features::favourites::page::FavouritesPage;
use crate::features::files::page::FilesPage;
use crate::features::folder::page::FolderPage;
use crate::features::home::page::HomePage;
use crate::features::plans::page::PlansPage;
use crate::features::scan::page::ScanPage;
use crate::features::security::page::SecurityPage;
use crate::features::settings_menu::page::SettingsMenuPage;
use crate::features::shared::page::SharedPage;
use crate::i18n;
use crate::state::alert_state::ActiveAlert;
use crate::theme::colors::BikaColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    // Page views, created lazily and cached
    auth_page: Option<Entity<AuthPage>>,
    home_page: Option<Entity<HomePage>>,
    shared_page: Option<Entity<SharedPage>>,
    scan_page: Option<Entity<ScanPage>>,
    files_page: Option<Entity<FilesPage>>,
    account_page: Option<Entity<AccountPage>>,
    plans_page: Option<Entity<PlansPage>>,
    activity_page: Option<Entity<ActivityPage>>,
    security_page: Option<Entity<SecurityPage>>,
    favourites_page: Option<Entity<FavouritesPage>>,
    // Keyed by the id in the route; a different id rebuilds the page
    folder_page: Option<(SharedString, Entity<FolderPage>)>,
    settings_page: Option<(SharedString, Entity<SettingsMenuPage>)>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        Self::start_event_pump(event_rx, entities.clone(), cx);

        cx.observe(&entities.nav, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.scan, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.alert, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            auth_page: None,
            home_page: None,
            shared_page: None,
            scan_page: None,
            files_page: None,
            account_page: None,
            plans_page: None,
            activity_page: None,
            security_page: None,
            favourites_page: None,
            folder_page: None,
            settings_page: None,
        }
    }

    /// Start the event pump that dispatches service events to UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }

    fn auth_page(&mut self, cx: &mut Context<Self>) -> Entity<AuthPage> {
        if let Some(page) = &self.auth_page {
            return page.clone();
        }
        let page = cx.new(|cx| AuthPage::new(self.entities.clone(), cx));
        self.auth_page = Some(page.clone());
        page
    }

    fn folder_page(&mut self, folder_id: SharedString, cx: &mut Context<Self>) -> Entity<FolderPage> {
        if let Some((id, page)) = &self.folder_page {
            if *id == folder_id {
                return page.clone();
            }
        }
        let page = cx.new(|cx| FolderPage::new(self.entities.clone(), folder_id.clone(), cx));
        self.folder_page = Some((folder_id, page.clone()));
        page
    }

    fn settings_page(&mut self, slug: SharedString, cx: &mut Context<Self>) -> Entity<SettingsMenuPage> {
        if let Some((cached, page)) = &self.settings_page {
            if *cached == slug {
                return page.clone();
            }
        }
        let page = cx.new(|cx| SettingsMenuPage::new(self.entities.clone(), slug.clone(), cx));
        self.settings_page = Some((slug, page.clone()));
        page
    }

    /// Get or create the page view for the given route
    fn get_or_create_page(&mut self, route: Route, cx: &mut Context<Self>) -> gpui::AnyElement {
        match route {
            route if route.is_auth() => self.auth_page(cx).into_any_element(),
            Route::Folder(folder_id) => self.folder_page(folder_id, cx).into_any_element(),
            Route::SettingsMenu(slug) => self.settings_page(slug, cx).into_any_element(),
            Route::Shared => {
                if let Some(page) = &self.shared_page {
                    return page.clone().into_any_element();
                }
                let page = cx.new(|cx| SharedPage::new(self.entities.clone(), cx));
                self.shared_page = Some(page.clone());
                page.into_any_element()
            }
            Route::Scan => {
                if let Some(page) = &self.scan_page {
                    return page.clone().into_any_element();
                }
                let page = cx.new(|cx| ScanPage::new(self.entities.clone(), cx));
                self.scan_page = Some(page.clone());
                page.into_any_element()
            }
            Route::Files => {
                if let Some(page) = &self.files_page {
                    return page.clone().into_any_element();
                }
                let page = cx.new(|cx| FilesPage::new(self.entities.clone(), cx));
                self.files_page = Some(page.clone());
                page.into_any_element()
            }
            Route::Account => {
                if let Some(page) = &self.account_page {
                    return page.clone().into_any_element();
                }
                let page = cx.new(|cx| AccountPage::new(self.entities.clone(), cx));
                self.account_page = Some(page.clone());
                page.into_any_element()
            }
            Route::PlanDetails => {
                if let Some(page) = &self.plans_page {
                    return page.clone().into_any_element();
                }
                let page = cx.new(|cx| PlansPage::new(self.entities.clone(), cx));
                self.plans_page = Some(page.clone());
                page.into_any_element()
            }
            Route::Activity => {
                if let Some(page) = &self.activity_page {
                    return page.clone().into_any_element();
                }
                let page = cx.new(|cx| ActivityPage::new(self.entities.clone(), cx));
                self.activity_page = Some(page.clone());
                page.into_any_element()
            }
            Route::Security => {
                if let Some(page) = &self.security_page {
                    return page.clone().into_any_element();
                }
                let page = cx.new(|cx| SecurityPage::new(self.entities.clone(), cx));
                self.security_page = Some(page.clone());
                page.into_any_element()
            }
            Route::Favourites => {
                if let Some(page) = &self.favourites_page {
                    return page.clone().into_any_element();
                }
                let page = cx.new(|cx| FavouritesPage::new(self.entities.clone(), cx));
                self.favourites_page = Some(page.clone());
                page.into_any_element()
            }
            _ => {
                if let Some(page) = &self.home_page {
                    return page.clone().into_any_element();
                }
                let page = cx.new(|cx| HomePage::new(self.entities.clone(), cx));
                self.home_page = Some(page.clone());
                page.into_any_element()
            }
        }
    }

    fn render_alert(&self, alert: ActiveAlert, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale();
        let alert_entity = self.entities.alert.clone();
        let dismiss_entity = alert_entity.clone();

        Modal::new(i18n::t(locale, alert.title_key))
            .on_close(move |cx| {
                alert_entity.update(cx, |state, cx| {
                    state.dismiss();
                    cx.notify();
                });
            })
            .child(
                div()
                    .text_size(px(14.0))
                    .text_color(BikaColors::text())
                    .child(i18n::t(locale, alert.message_key)),
            )
            .when_some(alert.detail, |modal, detail| {
                modal.child(
                    div()
                        .text_size(px(12.0))
                        .text_color(BikaColors::text_muted())
                        .child(detail),
                )
            })
            .child(
                Button::primary("alert-ok", i18n::t(locale, "action-ok"))
                    .full_width()
                    .on_click(move |_event, _window, cx| {
                        dismiss_entity.update(cx, |state, cx| {
                            state.dismiss();
                            cx.notify();
                        });
                    }),
            )
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (route, active_tab) = {
            let nav = self.entities.nav.read(cx);
            (nav.current().clone(), nav.active_tab())
        };
        let locale = self.entities.i18n.read(cx).locale();
        let scan_has_capture = self.entities.scan.read(cx).captured().is_some();
        let alert = self.entities.alert.read(cx).active().cloned();

        // The live viewfinder takes the whole screen; the bar comes back
        // for the capture preview.
        let show_tab_bar =
            route.shows_tab_bar() && (route != Route::Scan || scan_has_capture);

        let content = self.get_or_create_page(route, cx);
        let nav_entity = self.entities.nav.clone();

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(BikaColors::background())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(content),
            )
            .when(show_tab_bar, |el| {
                el.child(TabBar::new(active_tab, locale).on_select(
                    move |tab, _window, cx| {
                        nav_entity.update(cx, |nav, cx| {
                            nav.select_tab(tab);
                            cx.notify();
                        });
                    },
                ))
            })
            .when_some(alert, |el, alert| el.child(self.render_alert(alert, cx)))
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::CameraPermission { granted } => {
            let status = if granted {
                PermissionStatus::Granted
            } else {
                PermissionStatus::Denied
            };
            entities.scan.update(cx, |scan, cx| {
                scan.set_permission(status);
                cx.notify();
            });
        }
        AppEvent::CaptureReady { photo } => {
            entities.scan.update(cx, |scan, cx| {
                scan.set_captured(photo);
                cx.notify();
            });
        }
        AppEvent::CaptureFailed { detail } => {
            tracing::warn!("Capture failed: {detail}");
            entities.scan.update(cx, |scan, cx| {
                scan.capture_failed();
                cx.notify();
            });
        }
        AppEvent::Alert {
            title_key,
            message_key,
            detail,
        } => {
            entities.alert.update(cx, |alert, cx| {
                alert.show(ActiveAlert {
                    title_key,
                    message_key,
                    detail,
                });
                cx.notify();
            });
        }
        AppEvent::LanguagePersisted { locale } => {
            tracing::info!("Language preference saved: {}", locale.code());
        }
    }
}
