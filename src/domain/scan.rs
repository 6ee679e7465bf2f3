//! Scan capture types

use chrono::{DateTime, Local};

/// Camera permission as the scan screen sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionStatus {
    #[default]
    Unknown,
    Requesting,
    Granted,
    Denied,
}

/// Flash setting, cycled by the toolbar button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashMode {
    #[default]
    Off,
    On,
    Auto,
}

impl FlashMode {
    pub fn next(&self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Auto,
            Self::Auto => Self::Off,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Off => "flash-off",
            Self::On => "flash-on",
            Self::Auto => "flash-auto",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Off => "○",
            Self::On => "●",
            Self::Auto => "◐",
        }
    }
}

/// A photo produced by the camera or imported from the library
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedPhoto {
    pub file_name: String,
    /// Zero when the source did not report dimensions
    pub width: u32,
    pub height: u32,
    pub size_bytes: u64,
    pub taken_at: DateTime<Local>,
}

impl CapturedPhoto {
    /// "2480 × 3508" when dimensions are known
    pub fn dimensions_label(&self) -> Option<String> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(format!("{} × {}", self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_cycles_off_on_auto() {
        let mut mode = FlashMode::default();
        assert_eq!(mode, FlashMode::Off);
        mode = mode.next();
        assert_eq!(mode, FlashMode::On);
        mode = mode.next();
        assert_eq!(mode, FlashMode::Auto);
        mode = mode.next();
        assert_eq!(mode, FlashMode::Off);
    }

    #[test]
    fn dimensions_hidden_when_unknown() {
        let photo = CapturedPhoto {
            file_name: "import.jpg".into(),
            width: 0,
            height: 0,
            size_bytes: 1024,
            taken_at: Local::now(),
        };
        assert_eq!(photo.dimensions_label(), None);

        let scanned = CapturedPhoto {
            width: 2480,
            height: 3508,
            ..photo
        };
        assert_eq!(scanned.dimensions_label().as_deref(), Some("2480 × 3508"));
    }
}
