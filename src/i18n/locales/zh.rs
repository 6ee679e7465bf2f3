//! Chinese (Simplified)

pub(super) const PAIRS: &[(&str, &str)] = &[
    ("tab-home", "首页"),
    ("tab-shared", "共享"),
    ("tab-scan", "扫描"),
    ("tab-files", "我的文件"),
    ("tab-account", "账户"),
    ("title-home", "首页"),
    ("title-files", "文件"),
    ("title-shared", "与我共享"),
    ("title-account", "账户"),
    ("title-folder", "文件夹"),
    ("title-preview", "预览"),
    ("title-plans", "选择套餐"),
    ("title-activity", "最近活动"),
    ("title-security", "安全概览"),
    ("title-favourites", "收藏"),
    ("favourites-hint", "固定重要文件，方便随时取用。"),
    ("search-placeholder", "在 Bika 中搜索"),
    ("search-folder-placeholder", "在此文件夹中搜索"),
    ("action-see-all", "查看全部"),
    ("action-upgrade", "升级"),
    ("action-invite", "邀请"),
    ("action-manage", "管理"),
    ("action-logout", "退出登录"),
    ("action-apply", "应用"),
    ("action-ok", "确定"),
    ("action-select-all", "全选"),
    ("action-return-files", "返回文件"),
    ("action-approve", "批准"),
    ("action-decline", "拒绝"),
    ("sort-last-modified", "最近修改"),
    ("home-greeting-morning", "早上好，{name}"),
    ("home-greeting-afternoon", "下午好，{name}"),
    ("home-greeting-evening", "晚上好，{name}"),
    ("home-files-count", "{count} 个文件"),
    ("home-sync-active", "同步已开启"),
    ("home-usage", "已使用 {used} GB / {total} GB"),
    ("home-recent", "最近"),
    ("home-team-folders", "团队文件夹"),
    ("home-offline", "离线"),
    ("home-offline-promo", "让最重要的文件在没有网络时也可用"),
    ("shared-with-you", "与你共享"),
    ("shared-pending", "待审批"),
    ("shared-notice-title", "保持关注"),
    (
        "shared-notice-body",
        "邀请和权限变更将显示在这里。在设置中开启推送通知，不错过任何更新。",
    ),
    ("folder-pinned", "已固定"),
    ("folder-all-items", "全部项目"),
    ("folder-items-count", "{count} 个项目"),
    ("folder-total-count", "共 {count} 项"),
    ("folder-updated", "更新于 {when}"),
    ("folder-not-found-title", "未找到文件夹"),
    ("folder-not-found-body", "你要找的文件夹可能已被移动或删除。"),
    ("account-menu", "菜单"),
    ("account-team-members", "团队成员"),
    ("account-devices", "设备"),
    ("scan-permission-message", "Bika 需要相机权限来扫描文档"),
    ("scan-permission-button", "允许使用相机"),
    ("scan-permission-denied", "相机权限已被拒绝"),
    ("flash-off", "闪光灯关"),
    ("flash-on", "闪光灯开"),
    ("flash-auto", "自动闪光"),
    ("scan-edge-label", "边缘检测"),
    ("scan-edge-hint", "自动识别文档边框"),
    ("scan-enhance-label", "自动增强"),
    ("scan-enhance-hint", "锐化并校正光线"),
    ("scan-gallery", "相册"),
    ("scan-retake", "重拍"),
    ("scan-use-photo", "使用照片"),
    ("alert-error-title", "出错了"),
    ("alert-capture-failure", "无法拍摄照片，请重试。"),
    ("alert-gallery-failure", "无法从相册导入照片。"),
    ("alert-save-failure", "无法将语言选择保存到此设备。"),
    ("menu-not-found-title", "未找到菜单"),
    ("menu-not-found-body", "我们找不到你要访问的设置页面。"),
    ("menu-profile", "通用设置"),
    ("menu-storage", "存储"),
    ("menu-billing", "账单"),
    ("menu-notifications", "通知"),
    ("menu-referrals", "推荐好友"),
    ("menu-language", "语言"),
    ("menu-preferences", "应用"),
    ("menu-about", "关于"),
    ("menu-security", "安全"),
    ("language-section-title", "选择你的语言"),
    ("language-section-desc", "应用会立即更新，你的选择会保存到此设备。"),
    ("plan-billed-monthly", "按月计费"),
    ("plan-billed-annually", "按年计费"),
    ("plan-per-month", "月"),
    ("plan-per-year", "年"),
    ("plan-monthly", "按月"),
    ("plan-annually", "按年"),
    ("plan-recommended", "推荐"),
];
