//! Swahili

pub(super) const PAIRS: &[(&str, &str)] = &[
    ("tab-home", "Nyumbani"),
    ("tab-shared", "Zilizoshirikiwa"),
    ("tab-scan", "Skani"),
    ("tab-files", "Faili zangu"),
    ("tab-account", "Akaunti"),
    ("title-home", "Nyumbani"),
    ("title-files", "Faili"),
    ("title-shared", "Zilizoshirikiwa nami"),
    ("title-account", "Akaunti"),
    ("title-folder", "Folda"),
    ("title-preview", "Hakiki"),
    ("title-plans", "Chagua mpango wako"),
    ("title-activity", "Shughuli za hivi karibuni"),
    ("title-security", "Muhtasari wa usalama"),
    ("title-favourites", "Vipendwa"),
    ("favourites-hint", "Bandika faili muhimu ili ziwe karibu nawe."),
    ("search-placeholder", "Tafuta katika Bika"),
    ("search-folder-placeholder", "Tafuta ndani ya folda hii"),
    ("action-see-all", "Ona zote"),
    ("action-upgrade", "Boresha"),
    ("action-invite", "Alika"),
    ("action-manage", "Simamia"),
    ("action-logout", "Ondoka"),
    ("action-apply", "Tumia"),
    ("action-ok", "Sawa"),
    ("action-select-all", "Chagua zote"),
    ("action-return-files", "Rudi kwenye faili"),
    ("action-approve", "Idhinisha"),
    ("action-decline", "Kataa"),
    ("sort-last-modified", "Iliyohaririwa mwisho"),
    ("home-greeting-morning", "Habari za asubuhi, {name}"),
    ("home-greeting-afternoon", "Habari za mchana, {name}"),
    ("home-greeting-evening", "Habari za jioni, {name}"),
    ("home-files-count", "Faili {count}"),
    ("home-sync-active", "Usawazishaji unaendelea"),
    ("home-usage", "GB {used} kati ya GB {total} zimetumika"),
    ("home-recent", "Za hivi karibuni"),
    ("home-team-folders", "Folda za timu"),
    ("home-offline", "Nje ya mtandao"),
    (
        "home-offline-promo",
        "Fanya faili zako muhimu zipatikane bila intaneti",
    ),
    ("shared-with-you", "Zilizoshirikiwa nawe"),
    ("shared-pending", "Idhini zinazosubiri"),
    ("shared-notice-title", "Endelea kupata habari"),
    (
        "shared-notice-body",
        "Mialiko na mabadiliko ya ruhusa yataonekana hapa. Washa arifa katika mipangilio ili usikose sasisho lolote.",
    ),
    ("folder-pinned", "Zilizobandikwa"),
    ("folder-all-items", "Vitu vyote"),
    ("folder-items-count", "Vitu {count}"),
    ("folder-total-count", "Jumla {count}"),
    ("folder-updated", "Imesasishwa {when}"),
    ("folder-not-found-title", "Folda haikupatikana"),
    (
        "folder-not-found-body",
        "Folda unayotafuta huenda imehamishwa au imefutwa.",
    ),
    ("account-menu", "Menyu"),
    ("account-team-members", "Wanachama wa timu"),
    ("account-devices", "Vifaa"),
    (
        "scan-permission-message",
        "Bika inahitaji ruhusa ya kamera ili kuskani nyaraka",
    ),
    ("scan-permission-button", "Ruhusu kamera"),
    ("scan-permission-denied", "Ruhusa ya kamera imekataliwa"),
    ("flash-off", "Mwanga umezimwa"),
    ("flash-on", "Mwanga umewashwa"),
    ("flash-auto", "Mwanga otomatiki"),
    ("scan-edge-label", "Utambuzi wa kingo"),
    ("scan-edge-hint", "Tafuta mipaka ya nyaraka kiotomatiki"),
    ("scan-enhance-label", "Uboreshaji otomatiki"),
    ("scan-enhance-hint", "Kunoa na kurekebisha mwanga"),
    ("scan-gallery", "Picha"),
    ("scan-retake", "Piga tena"),
    ("scan-use-photo", "Tumia picha"),
    ("alert-error-title", "Hitilafu imetokea"),
    (
        "alert-capture-failure",
        "Imeshindikana kupiga picha. Tafadhali jaribu tena.",
    ),
    (
        "alert-gallery-failure",
        "Imeshindikana kuleta picha kutoka kwenye maktaba yako.",
    ),
    (
        "alert-save-failure",
        "Chaguo lako la lugha halikuweza kuhifadhiwa kwenye kifaa hiki.",
    ),
    ("menu-not-found-title", "Menyu haikupatikana"),
    (
        "menu-not-found-body",
        "Hatukupata ukurasa wa mipangilio unaoutafuta.",
    ),
    ("menu-profile", "Mipangilio ya jumla"),
    ("menu-storage", "Hifadhi"),
    ("menu-billing", "Malipo"),
    ("menu-notifications", "Arifa"),
    ("menu-referrals", "Pendekeza rafiki"),
    ("menu-language", "Lugha"),
    ("menu-preferences", "Programu"),
    ("menu-about", "Kuhusu"),
    ("menu-security", "Usalama"),
    ("language-section-title", "Chagua lugha yako"),
    (
        "language-section-desc",
        "Programu inasasishwa mara moja na chaguo lako linahifadhiwa kwenye kifaa hiki.",
    ),
    ("plan-billed-monthly", "Inalipwa kila mwezi"),
    ("plan-billed-annually", "Inalipwa kila mwaka"),
    ("plan-per-month", "mwezi"),
    ("plan-per-year", "mwaka"),
    ("plan-monthly", "Kila mwezi"),
    ("plan-annually", "Kila mwaka"),
    ("plan-recommended", "Inapendekezwa"),
];
