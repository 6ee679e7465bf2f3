//! Hindi

pub(super) const PAIRS: &[(&str, &str)] = &[
    ("tab-home", "होम"),
    ("tab-shared", "साझा"),
    ("tab-scan", "स्कैन"),
    ("tab-files", "मेरी फ़ाइलें"),
    ("tab-account", "खाता"),
    ("title-home", "होम"),
    ("title-files", "फ़ाइलें"),
    ("title-shared", "मेरे साथ साझा"),
    ("title-account", "खाता"),
    ("title-folder", "फ़ोल्डर"),
    ("title-preview", "पूर्वावलोकन"),
    ("title-plans", "अपनी योजना चुनें"),
    ("title-activity", "हाल की गतिविधि"),
    ("title-security", "सुरक्षा अवलोकन"),
    ("title-favourites", "पसंदीदा"),
    ("favourites-hint", "महत्वपूर्ण फ़ाइलों को पिन करके पास रखें।"),
    ("search-placeholder", "Bika में खोजें"),
    ("search-folder-placeholder", "इस फ़ोल्डर में खोजें"),
    ("action-see-all", "सभी देखें"),
    ("action-upgrade", "अपग्रेड करें"),
    ("action-invite", "आमंत्रित करें"),
    ("action-manage", "प्रबंधित करें"),
    ("action-logout", "लॉग आउट"),
    ("action-apply", "लागू करें"),
    ("action-ok", "ठीक है"),
    ("action-select-all", "सभी चुनें"),
    ("action-return-files", "फ़ाइलों पर वापस जाएँ"),
    ("action-approve", "स्वीकृत करें"),
    ("action-decline", "अस्वीकार करें"),
    ("sort-last-modified", "अंतिम संशोधन"),
    ("home-greeting-morning", "सुप्रभात, {name}"),
    ("home-greeting-afternoon", "नमस्कार, {name}"),
    ("home-greeting-evening", "शुभ संध्या, {name}"),
    ("home-files-count", "{count} फ़ाइलें"),
    ("home-sync-active", "सिंक सक्रिय"),
    ("home-usage", "{total} GB में से {used} GB उपयोग में"),
    ("home-recent", "हाल की"),
    ("home-team-folders", "टीम फ़ोल्डर"),
    ("home-offline", "ऑफ़लाइन"),
    (
        "home-offline-promo",
        "अपनी सबसे महत्वपूर्ण फ़ाइलें बिना इंटरनेट के उपलब्ध रखें",
    ),
    ("shared-with-you", "आपके साथ साझा"),
    ("shared-pending", "लंबित स्वीकृतियाँ"),
    ("shared-notice-title", "अप-टू-डेट रहें"),
    (
        "shared-notice-body",
        "आमंत्रण और अनुमति परिवर्तन यहाँ दिखाई देंगे। कोई अपडेट न चूकने के लिए सेटिंग्स में पुश सूचनाएँ चालू करें।",
    ),
    ("folder-pinned", "पिन की गई"),
    ("folder-all-items", "सभी आइटम"),
    ("folder-items-count", "{count} आइटम"),
    ("folder-total-count", "कुल {count}"),
    ("folder-updated", "{when} अपडेट किया गया"),
    ("folder-not-found-title", "फ़ोल्डर नहीं मिला"),
    (
        "folder-not-found-body",
        "आप जिस फ़ोल्डर की तलाश कर रहे हैं वह स्थानांतरित या हटाया जा चुका हो सकता है।",
    ),
    ("account-menu", "मेनू"),
    ("account-team-members", "टीम सदस्य"),
    ("account-devices", "डिवाइस"),
    (
        "scan-permission-message",
        "दस्तावेज़ स्कैन करने के लिए Bika को कैमरा एक्सेस चाहिए",
    ),
    ("scan-permission-button", "कैमरे की अनुमति दें"),
    ("scan-permission-denied", "कैमरा एक्सेस अस्वीकृत"),
    ("flash-off", "फ़्लैश बंद"),
    ("flash-on", "फ़्लैश चालू"),
    ("flash-auto", "ऑटो फ़्लैश"),
    ("scan-edge-label", "किनारा पहचान"),
    ("scan-edge-hint", "दस्तावेज़ की सीमाएँ अपने आप खोजें"),
    ("scan-enhance-label", "ऑटो एन्हांस"),
    ("scan-enhance-hint", "शार्प करें और रोशनी ठीक करें"),
    ("scan-gallery", "गैलरी"),
    ("scan-retake", "फिर से लें"),
    ("scan-use-photo", "फ़ोटो उपयोग करें"),
    ("alert-error-title", "कुछ गलत हो गया"),
    (
        "alert-capture-failure",
        "फ़ोटो नहीं ली जा सकी। कृपया फिर से प्रयास करें।",
    ),
    (
        "alert-gallery-failure",
        "आपकी लाइब्रेरी से फ़ोटो आयात नहीं हो सकी।",
    ),
    (
        "alert-save-failure",
        "आपकी भाषा पसंद इस डिवाइस पर सहेजी नहीं जा सकी।",
    ),
    ("menu-not-found-title", "मेनू नहीं मिला"),
    (
        "menu-not-found-body",
        "आप जिस सेटिंग पृष्ठ की तलाश कर रहे हैं वह हमें नहीं मिला।",
    ),
    ("menu-profile", "सामान्य सेटिंग्स"),
    ("menu-storage", "स्टोरेज"),
    ("menu-billing", "बिलिंग"),
    ("menu-notifications", "सूचनाएँ"),
    ("menu-referrals", "मित्र को आमंत्रित करें"),
    ("menu-language", "भाषा"),
    ("menu-preferences", "एप्लिकेशन"),
    ("menu-about", "परिचय"),
    ("menu-security", "सुरक्षा"),
    ("language-section-title", "अपनी भाषा चुनें"),
    (
        "language-section-desc",
        "ऐप तुरंत अपडेट हो जाता है और आपकी पसंद इस डिवाइस पर सहेजी जाती है।",
    ),
    ("plan-billed-monthly", "मासिक बिलिंग"),
    ("plan-billed-annually", "वार्षिक बिलिंग"),
    ("plan-per-month", "माह"),
    ("plan-per-year", "वर्ष"),
    ("plan-monthly", "मासिक"),
    ("plan-annually", "वार्षिक"),
    ("plan-recommended", "अनुशंसित"),
];
