//! Modal alert state

/// The alert currently covering the window, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveAlert {
    pub title_key: &'static str,
    pub message_key: &'static str,
    /// Untranslated detail line from the failing operation
    pub detail: Option<String>,
}

#[derive(Default)]
pub struct AlertState {
    active: Option<ActiveAlert>,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&ActiveAlert> {
        self.active.as_ref()
    }

    /// A new alert replaces any visible one.
    pub fn show(&mut self, alert: ActiveAlert) {
        self.active = Some(alert);
    }

    pub fn dismiss(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(message_key: &'static str) -> ActiveAlert {
        ActiveAlert {
            title_key: "alert-error-title",
            message_key,
            detail: None,
        }
    }

    #[test]
    fn latest_alert_wins() {
        let mut state = AlertState::new();
        assert!(state.active().is_none());

        state.show(alert("alert-capture-failure"));
        state.show(alert("alert-save-failure"));
        let shown = state.active().map(|a| a.message_key);
        assert_eq!(shown, Some("alert-save-failure"));

        state.dismiss();
        assert!(state.active().is_none());
    }
}
