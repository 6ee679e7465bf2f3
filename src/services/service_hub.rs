//! ServiceHub - Unified Service Management
//!
//! Owns the command channel into the background runtime. The UI sends
//! commands through the global hub; results come back as app events.

use std::time::Duration;

use gpui::Global;
use tracing::{info, warn};

use crate::domain::prefs::Preferences;
use crate::domain::scan::FlashMode;
use crate::eventing::app_event::AppEvent;
use crate::i18n::Locale;
use crate::services::{camera, gallery};
use crate::utils::prefs_store;

/// Commands that can be sent to services
#[derive(Debug, Clone)]
pub enum ServiceCommand {
    /// Ask the system for camera access
    RequestCameraPermission,
    /// Take a photo with the given flash mode
    CapturePhoto { flash: FlashMode },
    /// Import the newest image from the photo library
    ImportFromLibrary,
    /// Write the language preference to disk
    PersistLanguage(Locale),
}

/// ServiceHub routes commands to the background runtime
pub struct ServiceHub {
    command_tx: flume::Sender<ServiceCommand>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    /// Create a new service hub
    pub fn new(event_tx: flume::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = flume::unbounded::<ServiceCommand>();

        start_command_handler(command_rx, event_tx);

        Self { command_tx }
    }

    /// Send a command to the services
    pub fn send(&self, cmd: ServiceCommand) {
        let _ = self.command_tx.send(cmd);
    }

    pub fn request_camera_permission(&self) {
        self.send(ServiceCommand::RequestCameraPermission);
    }

    pub fn capture_photo(&self, flash: FlashMode) {
        self.send(ServiceCommand::CapturePhoto { flash });
    }

    pub fn import_from_library(&self) {
        self.send(ServiceCommand::ImportFromLibrary);
    }

    pub fn persist_language(&self, locale: Locale) {
        self.send(ServiceCommand::PersistLanguage(locale));
    }
}

/// Run the command loop on its own thread with a dedicated runtime.
fn start_command_handler(
    command_rx: flume::Receiver<ServiceCommand>,
    event_tx: flume::Sender<AppEvent>,
) {
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");

        rt.block_on(async move {
            while let Ok(cmd) = command_rx.recv_async().await {
                handle_command(cmd, &event_tx).await;
            }
        });
    });
}

async fn handle_command(cmd: ServiceCommand, event_tx: &flume::Sender<AppEvent>) {
    match cmd {
        ServiceCommand::RequestCameraPermission => {
            info!("Requesting camera permission");
            // the fixture build always grants after a short dialog delay
            tokio::time::sleep(Duration::from_millis(400)).await;
            let _ = event_tx.send(AppEvent::CameraPermission { granted: true });
        }
        ServiceCommand::CapturePhoto { flash } => match camera::capture(flash).await {
            Ok(photo) => {
                info!(file = %photo.file_name, "Capture ready");
                let _ = event_tx.send(AppEvent::CaptureReady { photo });
            }
            Err(err) => {
                warn!("Capture failed: {err}");
                let detail = err.to_string();
                let _ = event_tx.send(AppEvent::CaptureFailed {
                    detail: detail.clone(),
                });
                let _ = event_tx.send(AppEvent::Alert {
                    title_key: "alert-error-title",
                    message_key: "alert-capture-failure",
                    detail: Some(detail),
                });
            }
        },
        ServiceCommand::ImportFromLibrary => match gallery::import().await {
            Ok(photo) => {
                info!(file = %photo.file_name, "Library import ready");
                let _ = event_tx.send(AppEvent::CaptureReady { photo });
            }
            Err(err) => {
                warn!("Library import failed: {err}");
                let detail = err.to_string();
                let _ = event_tx.send(AppEvent::CaptureFailed {
                    detail: detail.clone(),
                });
                let _ = event_tx.send(AppEvent::Alert {
                    title_key: "alert-error-title",
                    message_key: "alert-gallery-failure",
                    detail: Some(detail),
                });
            }
        },
        ServiceCommand::PersistLanguage(locale) => {
            let prefs = Preferences {
                language: Some(locale.code().to_string()),
            };
            match prefs_store::save_preferences(&prefs) {
                Ok(()) => {
                    info!(locale = locale.code(), "Language preference saved");
                    let _ = event_tx.send(AppEvent::LanguagePersisted { locale });
                }
                Err(err) => {
                    warn!("Saving language preference failed: {err}");
                    let _ = event_tx.send(AppEvent::Alert {
                        title_key: "alert-error-title",
                        message_key: "alert-save-failure",
                        detail: Some(err.to_string()),
                    });
                }
            }
        }
    }
}
