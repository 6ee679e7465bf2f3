//! Kinyarwanda

pub(super) const PAIRS: &[(&str, &str)] = &[
    ("tab-home", "Ahabanza"),
    ("tab-shared", "Ibyasangiwe"),
    ("tab-scan", "Sikana"),
    ("tab-files", "Dosiye zanjye"),
    ("tab-account", "Konti"),
    ("title-home", "Ahabanza"),
    ("title-files", "Dosiye"),
    ("title-shared", "Ibyo basangije nanjye"),
    ("title-account", "Konti"),
    ("title-folder", "Ububiko"),
    ("title-preview", "Kureba mbere"),
    ("title-plans", "Hitamo ifatabuguzi ryawe"),
    ("title-activity", "Ibikorwa bya vuba"),
    ("title-security", "Incamake y'umutekano"),
    ("title-favourites", "Ibikunzwe"),
    ("favourites-hint", "Shyira ku ruhande dosiye z'ingenzi kugira ngo uzibone vuba."),
    ("search-placeholder", "Shakisha muri Bika"),
    ("search-folder-placeholder", "Shakisha muri ubu bubiko"),
    ("action-see-all", "Reba byose"),
    ("action-upgrade", "Zamura"),
    ("action-invite", "Tumira"),
    ("action-manage", "Gucunga"),
    ("action-logout", "Sohoka"),
    ("action-apply", "Emeza"),
    ("action-ok", "Yego"),
    ("action-select-all", "Hitamo byose"),
    ("action-return-files", "Subira ku madosiye"),
    ("action-approve", "Emera"),
    ("action-decline", "Hakana"),
    ("sort-last-modified", "Ibyahinduwe vuba"),
    ("home-greeting-morning", "Mwaramutse, {name}"),
    ("home-greeting-afternoon", "Mwiriwe, {name}"),
    ("home-greeting-evening", "Muramuke, {name}"),
    ("home-files-count", "Dosiye {count}"),
    ("home-sync-active", "Guhuza birakora"),
    ("home-usage", "{used} GB kuri {total} GB zakoreshejwe"),
    ("home-recent", "Ibya vuba"),
    ("home-team-folders", "Ububiko bw'ikipe"),
    ("home-offline", "Nta murandasi"),
    (
        "home-offline-promo",
        "Tuma dosiye zawe z'ingenzi ziboneka nta murandasi",
    ),
    ("shared-with-you", "Ibyo basangije nawe"),
    ("shared-pending", "Ibitegereje kwemezwa"),
    ("shared-notice-title", "Guma uzi amakuru"),
    (
        "shared-notice-body",
        "Ubutumire n'impinduka z'uburenganzira bizagaragara hano. Fungura imenyesha muri igenamiterere kugira ngo utabura amakuru.",
    ),
    ("folder-pinned", "Ibyashyizwe imbere"),
    ("folder-all-items", "Ibintu byose"),
    ("folder-items-count", "Ibintu {count}"),
    ("folder-total-count", "{count} byose"),
    ("folder-updated", "Byavuguruwe {when}"),
    ("folder-not-found-title", "Ububiko ntibubonetse"),
    (
        "folder-not-found-body",
        "Ububiko ushaka bushobora kuba bwarimuwe cyangwa bwarasibwe.",
    ),
    ("account-menu", "Ibikubiyemo"),
    ("account-team-members", "Abagize ikipe"),
    ("account-devices", "Ibikoresho"),
    (
        "scan-permission-message",
        "Bika ikeneye uburenganzira bwa kamera kugira ngo isikane inyandiko",
    ),
    ("scan-permission-button", "Emera kamera"),
    ("scan-permission-denied", "Kamera yanzwe"),
    ("flash-off", "Urumuri rufunze"),
    ("flash-on", "Urumuri rufunguye"),
    ("flash-auto", "Urumuri rwikora"),
    ("scan-edge-label", "Kumenya impera"),
    ("scan-edge-hint", "Shaka impera z'inyandiko byikora"),
    ("scan-enhance-label", "Kunoza byikora"),
    ("scan-enhance-hint", "Gutyaza no gukosora urumuri"),
    ("scan-gallery", "Amafoto"),
    ("scan-retake", "Ongera ufate"),
    ("scan-use-photo", "Koresha ifoto"),
    ("alert-error-title", "Hari ikitagenze neza"),
    (
        "alert-capture-failure",
        "Ntibyakunze gufata ifoto. Ongera ugerageze.",
    ),
    (
        "alert-gallery-failure",
        "Ntibyakunze kuzana ifoto mu bubiko bwawe.",
    ),
    (
        "alert-save-failure",
        "Ururimi wahisemo ntirwashoboye kubikwa kuri iki gikoresho.",
    ),
    ("menu-not-found-title", "Ntibibonetse"),
    (
        "menu-not-found-body",
        "Ntitwabonye urupapuro rw'igenamiterere ushaka.",
    ),
    ("menu-profile", "Igenamiterere rusange"),
    ("menu-storage", "Ububiko"),
    ("menu-billing", "Kwishyura"),
    ("menu-notifications", "Imenyesha"),
    ("menu-referrals", "Tumira inshuti"),
    ("menu-language", "Ururimi"),
    ("menu-preferences", "Porogaramu"),
    ("menu-about", "Ibyerekeye"),
    ("menu-security", "Umutekano"),
    ("language-section-title", "Hitamo ururimi rwawe"),
    (
        "language-section-desc",
        "Porogaramu ihita ihinduka kandi icyo wahisemo kibikwa kuri iki gikoresho.",
    ),
    ("plan-billed-monthly", "Byishyurwa buri kwezi"),
    ("plan-billed-annually", "Byishyurwa buri mwaka"),
    ("plan-per-month", "ukwezi"),
    ("plan-per-year", "umwaka"),
    ("plan-monthly", "Buri kwezi"),
    ("plan-annually", "Buri mwaka"),
    ("plan-recommended", "Birasabwa"),
];
