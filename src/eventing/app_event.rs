//! Application events emitted by background services
//!
//! Services run off the UI thread and report back through a flume
//! channel. The workspace drains the channel and applies each event to
//! the global entities.

use crate::domain::scan::CapturedPhoto;
use crate::i18n::Locale;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Outcome of a camera permission request
    CameraPermission { granted: bool },
    /// A capture or library import finished
    CaptureReady { photo: CapturedPhoto },
    /// The capture pipeline failed before producing a photo
    CaptureFailed { detail: String },
    /// Show a modal alert over the current screen
    Alert {
        title_key: &'static str,
        message_key: &'static str,
        detail: Option<String>,
    },
    /// The language preference was written to disk
    LanguagePersisted { locale: Locale },
}
