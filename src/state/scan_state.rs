//! Scan session state

use crate::domain::scan::{CapturedPhoto, FlashMode, PermissionStatus};

pub struct ScanState {
    permission: PermissionStatus,
    flash: FlashMode,
    edge_detection: bool,
    auto_enhance: bool,
    capturing: bool,
    captured: Option<CapturedPhoto>,
}

impl ScanState {
    pub fn new() -> Self {
        Self {
            permission: PermissionStatus::Unknown,
            flash: FlashMode::Off,
            edge_detection: true,
            auto_enhance: true,
            capturing: false,
            captured: None,
        }
    }

    pub fn permission(&self) -> PermissionStatus {
        self.permission
    }

    pub fn set_permission(&mut self, permission: PermissionStatus) {
        self.permission = permission;
    }

    pub fn flash(&self) -> FlashMode {
        self.flash
    }

    pub fn cycle_flash(&mut self) {
        self.flash = self.flash.next();
    }

    pub fn edge_detection(&self) -> bool {
        self.edge_detection
    }

    pub fn toggle_edge_detection(&mut self) {
        self.edge_detection = !self.edge_detection;
    }

    pub fn auto_enhance(&self) -> bool {
        self.auto_enhance
    }

    pub fn toggle_auto_enhance(&mut self) {
        self.auto_enhance = !self.auto_enhance;
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn begin_capture(&mut self) {
        self.capturing = true;
    }

    pub fn capture_failed(&mut self) {
        self.capturing = false;
    }

    pub fn captured(&self) -> Option<&CapturedPhoto> {
        self.captured.as_ref()
    }

    pub fn set_captured(&mut self, photo: CapturedPhoto) {
        self.capturing = false;
        self.captured = Some(photo);
    }

    /// Retake and use-photo both return to the live viewfinder; this is
    /// a fixture app, so nothing is uploaded.
    pub fn discard_captured(&mut self) {
        self.captured = None;
    }

    /// Closing the scan screen drops the session but keeps the granted
    /// permission.
    pub fn end_session(&mut self) {
        self.capturing = false;
        self.captured = None;
        self.flash = FlashMode::Off;
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn photo() -> CapturedPhoto {
        CapturedPhoto {
            file_name: "scan-001.jpg".into(),
            width: 2480,
            height: 3508,
            size_bytes: 1_400_000,
            taken_at: Local::now(),
        }
    }

    #[test]
    fn enhancements_default_on() {
        let state = ScanState::new();
        assert!(state.edge_detection());
        assert!(state.auto_enhance());
        assert_eq!(state.flash(), FlashMode::Off);
        assert_eq!(state.permission(), PermissionStatus::Unknown);
    }

    #[test]
    fn capture_lands_in_preview_and_discard_returns() {
        let mut state = ScanState::new();
        state.begin_capture();
        assert!(state.is_capturing());

        state.set_captured(photo());
        assert!(!state.is_capturing());
        assert!(state.captured().is_some());

        state.discard_captured();
        assert!(state.captured().is_none());
    }

    #[test]
    fn ending_the_session_keeps_permission() {
        let mut state = ScanState::new();
        state.set_permission(PermissionStatus::Granted);
        state.cycle_flash();
        state.set_captured(photo());

        state.end_session();
        assert_eq!(state.permission(), PermissionStatus::Granted);
        assert_eq!(state.flash(), FlashMode::Off);
        assert!(state.captured().is_none());
    }
}
