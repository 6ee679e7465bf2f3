//! Amharic

pub(super) const PAIRS: &[(&str, &str)] = &[
    ("tab-home", "መነሻ"),
    ("tab-shared", "የተጋሩ"),
    ("tab-scan", "ቃኝ"),
    ("tab-files", "ፋይሎቼ"),
    ("tab-account", "መለያ"),
    ("title-home", "መነሻ"),
    ("title-files", "ፋይሎች"),
    ("title-shared", "ከእኔ ጋር የተጋሩ"),
    ("title-account", "መለያ"),
    ("title-folder", "አቃፊ"),
    ("title-preview", "ቅድመ እይታ"),
    ("title-plans", "እቅድዎን ይምረጡ"),
    ("title-activity", "የቅርብ ጊዜ እንቅስቃሴ"),
    ("title-security", "የደህንነት አጠቃላይ እይታ"),
    ("title-favourites", "ተወዳጆች"),
    ("favourites-hint", "ፋይሎችን በቀላሉ ለማግኘት ይሰኩ።"),
    ("search-placeholder", "በቢካ ውስጥ ይፈልጉ"),
    ("search-folder-placeholder", "በዚህ አቃፊ ውስጥ ይፈልጉ"),
    ("action-see-all", "ሁሉንም ይመልከቱ"),
    ("action-upgrade", "አሻሽል"),
    ("action-invite", "ጋብዝ"),
    ("action-manage", "አስተዳድር"),
    ("action-logout", "ውጣ"),
    ("action-apply", "ተግብር"),
    ("action-ok", "እሺ"),
    ("action-select-all", "ሁሉንም ምረጥ"),
    ("action-return-files", "ወደ ፋይሎች ተመለስ"),
    ("action-approve", "አጽድቅ"),
    ("action-decline", "እምቢ"),
    ("sort-last-modified", "መጨረሻ የተቀየረ"),
    ("home-greeting-morning", "እንደምን አደሩ፣ {name}"),
    ("home-greeting-afternoon", "እንደምን ዋሉ፣ {name}"),
    ("home-greeting-evening", "እንደምን አመሹ፣ {name}"),
    ("home-files-count", "{count} ፋይሎች"),
    ("home-sync-active", "ማመሳሰል ነቅቷል"),
    ("home-usage", "ከ{total} GB ውስጥ {used} GB ጥቅም ላይ ውሏል"),
    ("home-recent", "የቅርብ ጊዜ"),
    ("home-team-folders", "የቡድን አቃፊዎች"),
    ("home-offline", "ከመስመር ውጭ"),
    (
        "home-offline-promo",
        "በጣም አስፈላጊ ፋይሎችዎን ያለ በይነመረብ እንዲገኙ ያድርጉ",
    ),
    ("shared-with-you", "ከእርስዎ ጋር የተጋሩ"),
    ("shared-pending", "በመጠባበቅ ላይ ያሉ ማጽደቆች"),
    ("shared-notice-title", "መረጃ ይከታተሉ"),
    (
        "shared-notice-body",
        "ግብዣዎች እና የፈቃድ ለውጦች እዚህ ይታያሉ። ማንኛውንም ዝማኔ እንዳያመልጥዎ በቅንብሮች ውስጥ ማሳወቂያዎችን ያብሩ።",
    ),
    ("folder-pinned", "የተሰኩ"),
    ("folder-all-items", "ሁሉም ንጥሎች"),
    ("folder-items-count", "{count} ንጥሎች"),
    ("folder-total-count", "በጠቅላላ {count}"),
    ("folder-updated", "{when} ተዘምኗል"),
    ("folder-not-found-title", "አቃፊ አልተገኘም"),
    (
        "folder-not-found-body",
        "የሚፈልጉት አቃፊ ተዛውሮ ወይም ተሰርዞ ሊሆን ይችላል።",
    ),
    ("account-menu", "ምናሌ"),
    ("account-team-members", "የቡድን አባላት"),
    ("account-devices", "መሣሪያዎች"),
    (
        "scan-permission-message",
        "ቢካ ሰነዶችን ለመቃኘት የካሜራ ፈቃድ ያስፈልገዋል",
    ),
    ("scan-permission-button", "ካሜራ ፍቀድ"),
    ("scan-permission-denied", "የካሜራ ፈቃድ ተከልክሏል"),
    ("flash-off", "ፍላሽ ጠፍቷል"),
    ("flash-on", "ፍላሽ በርቷል"),
    ("flash-auto", "ራስ-ሰር ፍላሽ"),
    ("scan-edge-label", "ጠርዝ ማወቅ"),
    ("scan-edge-hint", "የሰነዱን ድንበሮች በራስ-ሰር ፈልግ"),
    ("scan-enhance-label", "ራስ-ሰር ማሻሻያ"),
    ("scan-enhance-hint", "ማጥራት እና ብርሃን ማስተካከል"),
    ("scan-gallery", "ማዕከለ-ስዕላት"),
    ("scan-retake", "እንደገና አንሳ"),
    ("scan-use-photo", "ፎቶውን ተጠቀም"),
    ("alert-error-title", "የሆነ ስህተት ተከስቷል"),
    (
        "alert-capture-failure",
        "ፎቶውን ማንሳት አልተቻለም። እባክዎ እንደገና ይሞክሩ።",
    ),
    (
        "alert-gallery-failure",
        "ከማዕከለ-ስዕላትዎ ፎቶ ማምጣት አልተቻለም።",
    ),
    (
        "alert-save-failure",
        "የቋንቋ ምርጫዎ በዚህ መሣሪያ ላይ ሊቀመጥ አልቻለም።",
    ),
    ("menu-not-found-title", "ምናሌ አልተገኘም"),
    (
        "menu-not-found-body",
        "የሚፈልጉትን የቅንብሮች ገጽ ማግኘት አልቻልንም።",
    ),
    ("menu-profile", "አጠቃላይ ቅንብሮች"),
    ("menu-storage", "ማከማቻ"),
    ("menu-billing", "ክፍያ"),
    ("menu-notifications", "ማሳወቂያዎች"),
    ("menu-referrals", "ጓደኛ ጋብዝ"),
    ("menu-language", "ቋንቋ"),
    ("menu-preferences", "መተግበሪያ"),
    ("menu-about", "ስለ"),
    ("menu-security", "ደህንነት"),
    ("language-section-title", "ቋንቋዎን ይምረጡ"),
    (
        "language-section-desc",
        "መተግበሪያው ወዲያውኑ ይዘምናል እና ምርጫዎ በዚህ መሣሪያ ላይ ይቀመጣል።",
    ),
    ("plan-billed-monthly", "በወር ይከፈላል"),
    ("plan-billed-annually", "በዓመት ይከፈላል"),
    ("plan-per-month", "ወር"),
    ("plan-per-year", "ዓመት"),
    ("plan-monthly", "ወርሃዊ"),
    ("plan-annually", "ዓመታዊ"),
    ("plan-recommended", "የሚመከር"),
];
