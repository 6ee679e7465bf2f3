//! Auth Controller
//!
//! Screen transitions for the sign-in flow. No credentials are checked
//! in the fixture build.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::app::navigation::{Route, Tab};

/// Auth flow controller
pub struct AuthController {
    entities: AppEntities,
}

impl AuthController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Swap the visible auth screen without growing the stack
    pub fn show(&self, route: Route, cx: &mut App) {
        self.entities.nav.update(cx, |nav, cx| {
            nav.replace(route);
            cx.notify();
        });
    }

    /// Verification done; enter the app on the home tab
    pub fn complete(&self, cx: &mut App) {
        self.entities.nav.update(cx, |nav, cx| {
            nav.select_tab(Tab::Home);
            cx.notify();
        });
    }
}
