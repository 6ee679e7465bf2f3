//! English (default and fallback table)

pub(super) const PAIRS: &[(&str, &str)] = &[
    // Tab bar
    ("tab-home", "Home"),
    ("tab-shared", "Shared"),
    ("tab-scan", "Scan"),
    ("tab-files", "My Files"),
    ("tab-account", "Account"),
    // Screen titles
    ("title-home", "Home"),
    ("title-files", "Files"),
    ("title-shared", "Shared with me"),
    ("title-account", "Account"),
    ("title-folder", "Folder"),
    ("title-preview", "Preview"),
    ("title-plans", "Choose your plan"),
    ("title-activity", "Recent activity"),
    ("title-security", "Security overview"),
    ("title-favourites", "Favourites"),
    ("favourites-hint", "Pin important files to keep them handy."),
    // Search
    ("search-placeholder", "Search in Bika"),
    ("search-folder-placeholder", "Search within this folder"),
    // Shared actions
    ("action-see-all", "See all"),
    ("action-upgrade", "Upgrade"),
    ("action-invite", "Invite"),
    ("action-manage", "Manage"),
    ("action-logout", "Logout"),
    ("action-apply", "Apply"),
    ("action-ok", "OK"),
    ("action-select-all", "Select all"),
    ("action-return-files", "Return to files"),
    ("action-approve", "Approve"),
    ("action-decline", "Decline"),
    ("sort-last-modified", "Last modified"),
    // Home
    ("home-greeting-morning", "Good morning, {name}"),
    ("home-greeting-afternoon", "Good afternoon, {name}"),
    ("home-greeting-evening", "Good evening, {name}"),
    ("home-files-count", "{count} files"),
    ("home-sync-active", "Sync active"),
    ("home-usage", "{used} GB of {total} GB used"),
    ("home-recent", "Recent"),
    ("home-team-folders", "Team folders"),
    ("home-offline", "Offline"),
    (
        "home-offline-promo",
        "Make your most important files available without internet",
    ),
    // Shared
    ("shared-with-you", "Shared with you"),
    ("shared-pending", "Pending approvals"),
    ("shared-notice-title", "Stay up to date"),
    (
        "shared-notice-body",
        "Invites and permissions changes will appear here. Enable push notifications in Settings to never miss an update.",
    ),
    // Folder
    ("folder-pinned", "Pinned"),
    ("folder-all-items", "All items"),
    ("folder-items-count", "{count} items"),
    ("folder-total-count", "{count} total"),
    ("folder-updated", "Updated {when}"),
    ("folder-not-found-title", "Folder not found"),
    (
        "folder-not-found-body",
        "The folder you are looking for might have been moved or deleted.",
    ),
    // Account
    ("account-menu", "Menu"),
    ("account-team-members", "Team members"),
    ("account-devices", "Devices"),
    // Scan
    (
        "scan-permission-message",
        "Bika needs camera access to scan documents",
    ),
    ("scan-permission-button", "Allow camera"),
    ("scan-permission-denied", "Camera access denied"),
    ("flash-off", "Flash off"),
    ("flash-on", "Flash on"),
    ("flash-auto", "Flash auto"),
    ("scan-edge-label", "Edge detection"),
    ("scan-edge-hint", "Automatically find document borders"),
    ("scan-enhance-label", "Auto enhance"),
    ("scan-enhance-hint", "Sharpen and fix lighting"),
    ("scan-gallery", "Gallery"),
    ("scan-retake", "Retake"),
    ("scan-use-photo", "Use photo"),
    // Alerts
    ("alert-error-title", "Something went wrong"),
    (
        "alert-capture-failure",
        "We could not capture the photo. Please try again.",
    ),
    (
        "alert-gallery-failure",
        "We could not import a photo from your library.",
    ),
    (
        "alert-save-failure",
        "Your language choice could not be saved to this device.",
    ),
    // Settings menus
    ("menu-not-found-title", "Menu not found"),
    (
        "menu-not-found-body",
        "We could not find the settings page you are looking for.",
    ),
    ("menu-profile", "General settings"),
    ("menu-storage", "Storage"),
    ("menu-billing", "Billing"),
    ("menu-notifications", "Notifications"),
    ("menu-referrals", "Refer a friend"),
    ("menu-language", "Language"),
    ("menu-preferences", "Application"),
    ("menu-about", "About"),
    ("menu-security", "Security"),
    ("language-section-title", "Choose your language"),
    (
        "language-section-desc",
        "The app updates immediately and your choice is saved to this device.",
    ),
    // Plans
    ("plan-billed-monthly", "Billed monthly"),
    ("plan-billed-annually", "Billed annually"),
    ("plan-per-month", "month"),
    ("plan-per-year", "year"),
    ("plan-monthly", "Monthly"),
    ("plan-annually", "Annually"),
    ("plan-recommended", "Recommended"),
];
