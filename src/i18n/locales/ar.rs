//! Arabic (right-to-left)

pub(super) const PAIRS: &[(&str, &str)] = &[
    ("tab-home", "الرئيسية"),
    ("tab-shared", "المشاركة"),
    ("tab-scan", "مسح"),
    ("tab-files", "ملفاتي"),
    ("tab-account", "الحساب"),
    ("title-home", "الرئيسية"),
    ("title-files", "الملفات"),
    ("title-shared", "تمت مشاركته معي"),
    ("title-account", "الحساب"),
    ("title-folder", "المجلد"),
    ("title-preview", "معاينة"),
    ("title-plans", "اختر خطتك"),
    ("title-activity", "النشاط الأخير"),
    ("title-security", "نظرة عامة على الأمان"),
    ("title-favourites", "المفضلة"),
    ("favourites-hint", "ثبّت الملفات المهمة لتبقى في متناول يدك."),
    ("search-placeholder", "ابحث في بيكا"),
    ("search-folder-placeholder", "ابحث داخل هذا المجلد"),
    ("action-see-all", "عرض الكل"),
    ("action-upgrade", "ترقية"),
    ("action-invite", "دعوة"),
    ("action-manage", "إدارة"),
    ("action-logout", "تسجيل الخروج"),
    ("action-apply", "تطبيق"),
    ("action-ok", "حسنًا"),
    ("action-select-all", "تحديد الكل"),
    ("action-return-files", "العودة إلى الملفات"),
    ("action-approve", "موافقة"),
    ("action-decline", "رفض"),
    ("sort-last-modified", "آخر تعديل"),
    ("home-greeting-morning", "صباح الخير، {name}"),
    ("home-greeting-afternoon", "مساء الخير، {name}"),
    ("home-greeting-evening", "مساء الخير، {name}"),
    ("home-files-count", "{count} ملفًا"),
    ("home-sync-active", "المزامنة نشطة"),
    ("home-usage", "تم استخدام {used} جيجابايت من {total} جيجابايت"),
    ("home-recent", "الأحدث"),
    ("home-team-folders", "مجلدات الفريق"),
    ("home-offline", "دون اتصال"),
    (
        "home-offline-promo",
        "اجعل أهم ملفاتك متاحة من دون إنترنت",
    ),
    ("shared-with-you", "تمت مشاركته معك"),
    ("shared-pending", "موافقات معلقة"),
    ("shared-notice-title", "ابق على اطلاع"),
    (
        "shared-notice-body",
        "ستظهر الدعوات وتغييرات الأذونات هنا. فعّل الإشعارات من الإعدادات حتى لا يفوتك أي تحديث.",
    ),
    ("folder-pinned", "المثبتة"),
    ("folder-all-items", "كل العناصر"),
    ("folder-items-count", "{count} عنصرًا"),
    ("folder-total-count", "{count} إجمالاً"),
    ("folder-updated", "آخر تحديث {when}"),
    ("folder-not-found-title", "المجلد غير موجود"),
    (
        "folder-not-found-body",
        "ربما تم نقل المجلد الذي تبحث عنه أو حذفه.",
    ),
    ("account-menu", "القائمة"),
    ("account-team-members", "أعضاء الفريق"),
    ("account-devices", "الأجهزة"),
    (
        "scan-permission-message",
        "تحتاج بيكا إلى الوصول إلى الكاميرا لمسح المستندات",
    ),
    ("scan-permission-button", "السماح بالكاميرا"),
    ("scan-permission-denied", "تم رفض الوصول إلى الكاميرا"),
    ("flash-off", "الفلاش مطفأ"),
    ("flash-on", "الفلاش مضاء"),
    ("flash-auto", "فلاش تلقائي"),
    ("scan-edge-label", "اكتشاف الحواف"),
    ("scan-edge-hint", "العثور على حدود المستند تلقائيًا"),
    ("scan-enhance-label", "تحسين تلقائي"),
    ("scan-enhance-hint", "زيادة الحدة وتصحيح الإضاءة"),
    ("scan-gallery", "المعرض"),
    ("scan-retake", "إعادة الالتقاط"),
    ("scan-use-photo", "استخدام الصورة"),
    ("alert-error-title", "حدث خطأ ما"),
    (
        "alert-capture-failure",
        "تعذر التقاط الصورة. يرجى المحاولة مرة أخرى.",
    ),
    (
        "alert-gallery-failure",
        "تعذر استيراد صورة من مكتبتك.",
    ),
    (
        "alert-save-failure",
        "تعذر حفظ اللغة التي اخترتها على هذا الجهاز.",
    ),
    ("menu-not-found-title", "القائمة غير موجودة"),
    (
        "menu-not-found-body",
        "لم نتمكن من العثور على صفحة الإعدادات التي تبحث عنها.",
    ),
    ("menu-profile", "الإعدادات العامة"),
    ("menu-storage", "التخزين"),
    ("menu-billing", "الفوترة"),
    ("menu-notifications", "الإشعارات"),
    ("menu-referrals", "دعوة صديق"),
    ("menu-language", "اللغة"),
    ("menu-preferences", "التطبيق"),
    ("menu-about", "حول"),
    ("menu-security", "الأمان"),
    ("language-section-title", "اختر لغتك"),
    (
        "language-section-desc",
        "يتم تحديث التطبيق فورًا ويُحفظ اختيارك على هذا الجهاز.",
    ),
    ("plan-billed-monthly", "فوترة شهرية"),
    ("plan-billed-annually", "فوترة سنوية"),
    ("plan-per-month", "شهر"),
    ("plan-per-year", "سنة"),
    ("plan-monthly", "شهريًا"),
    ("plan-annually", "سنويًا"),
    ("plan-recommended", "موصى بها"),
];
