//! Routes and bottom tabs

use gpui::SharedString;

/// Every screen the workspace can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    // Auth flow
    Login,
    Signup,
    Otp,
    Password,
    ForgotPassword,
    // Tab roots
    Home,
    Shared,
    Scan,
    Files,
    Account,
    // Pushed screens
    Folder(SharedString),
    SettingsMenu(SharedString),
    PlanDetails,
    Activity,
    Security,
    Favourites,
}

impl Route {
    /// Auth screens render without the tab bar or chrome
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Route::Login
                | Route::Signup
                | Route::Otp
                | Route::Password
                | Route::ForgotPassword
        )
    }

    /// Only the five tab roots carry the bottom bar; pushed screens use
    /// a back chevron instead. The Scan screen additionally hides the
    /// bar while the live viewfinder is up.
    pub fn shows_tab_bar(&self) -> bool {
        matches!(
            self,
            Route::Home | Route::Shared | Route::Scan | Route::Files | Route::Account
        )
    }
}

/// Bottom navigation tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Shared,
    Scan,
    Files,
    Account,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Home, Tab::Shared, Tab::Scan, Tab::Files, Tab::Account]
    }

    /// Root route shown when the tab is selected
    pub fn route(&self) -> Route {
        match self {
            Tab::Home => Route::Home,
            Tab::Shared => Route::Shared,
            Tab::Scan => Route::Scan,
            Tab::Files => Route::Files,
            Tab::Account => Route::Account,
        }
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            Tab::Home => "tab-home",
            Tab::Shared => "tab-shared",
            Tab::Scan => "tab-scan",
            Tab::Files => "tab-files",
            Tab::Account => "tab-account",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Tab::Home => "⌂",
            Tab::Shared => "⇄",
            Tab::Scan => "▣",
            Tab::Files => "≡",
            Tab::Account => "☺",
        }
    }
}
