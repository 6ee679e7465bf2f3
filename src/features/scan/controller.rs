//! Scan Controller
//!
//! Bridges the scan screen to the camera and gallery services.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::app::navigation::Tab;
use crate::domain::scan::PermissionStatus;
use crate::services::service_hub::ServiceHub;

/// Scan page controller
pub struct ScanController {
    entities: AppEntities,
}

impl ScanController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Ask the system for camera access
    pub fn request_permission(&self, cx: &mut App) {
        self.entities.scan.update(cx, |scan, cx| {
            scan.set_permission(PermissionStatus::Requesting);
            cx.notify();
        });
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.request_camera_permission();
        }
    }

    pub fn cycle_flash(&self, cx: &mut App) {
        self.entities.scan.update(cx, |scan, cx| {
            scan.cycle_flash();
            cx.notify();
        });
    }

    pub fn toggle_edge_detection(&self, cx: &mut App) {
        self.entities.scan.update(cx, |scan, cx| {
            scan.toggle_edge_detection();
            cx.notify();
        });
    }

    pub fn toggle_auto_enhance(&self, cx: &mut App) {
        self.entities.scan.update(cx, |scan, cx| {
            scan.toggle_auto_enhance();
            cx.notify();
        });
    }

    /// Take a photo with the current flash mode
    pub fn capture(&self, cx: &mut App) {
        let flash = self.entities.scan.read(cx).flash();
        self.entities.scan.update(cx, |scan, cx| {
            scan.begin_capture();
            cx.notify();
        });
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.capture_photo(flash);
        }
    }

    /// Import the newest image from the photo library
    pub fn import_from_gallery(&self, cx: &mut App) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.import_from_library();
        }
    }

    /// Both preview actions discard; nothing is uploaded in the
    /// fixture build.
    pub fn discard_preview(&self, cx: &mut App) {
        self.entities.scan.update(cx, |scan, cx| {
            scan.discard_captured();
            cx.notify();
        });
    }

    /// Close the scanner and return to the home tab
    pub fn close(&self, cx: &mut App) {
        self.entities.scan.update(cx, |scan, cx| {
            scan.end_session();
            cx.notify();
        });
        self.entities.nav.update(cx, |nav, cx| {
            nav.select_tab(Tab::Home);
            cx.notify();
        });
    }
}
