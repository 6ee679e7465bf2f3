//! Home Controller

use gpui::App;

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;

/// Home page controller
pub struct HomeController {
    entities: AppEntities,
}

impl HomeController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Open a team folder's detail screen
    pub fn open_folder(&self, folder_id: &str, cx: &mut App) {
        let route = Route::Folder(folder_id.to_string().into());
        self.entities.nav.update(cx, |nav, cx| {
            nav.push(route);
            cx.notify();
        });
    }

    pub fn open_favourites(&self, cx: &mut App) {
        self.entities.nav.update(cx, |nav, cx| {
            nav.push(Route::Favourites);
            cx.notify();
        });
    }

    /// "See all" on the recent strip opens the activity timeline
    pub fn open_activity(&self, cx: &mut App) {
        self.entities.nav.update(cx, |nav, cx| {
            nav.push(Route::Activity);
            cx.notify();
        });
    }
}
