//! French

pub(super) const PAIRS: &[(&str, &str)] = &[
    ("tab-home", "Accueil"),
    ("tab-shared", "Partagés"),
    ("tab-scan", "Scanner"),
    ("tab-files", "Mes fichiers"),
    ("tab-account", "Compte"),
    ("title-home", "Accueil"),
    ("title-files", "Fichiers"),
    ("title-shared", "Partagés avec moi"),
    ("title-account", "Compte"),
    ("title-folder", "Dossier"),
    ("title-preview", "Aperçu"),
    ("title-plans", "Choisissez votre forfait"),
    ("title-activity", "Activité récente"),
    ("title-security", "Aperçu de la sécurité"),
    ("title-favourites", "Favoris"),
    ("favourites-hint", "Épinglez vos fichiers importants pour les garder à portée de main."),
    ("search-placeholder", "Rechercher dans Bika"),
    ("search-folder-placeholder", "Rechercher dans ce dossier"),
    ("action-see-all", "Tout voir"),
    ("action-upgrade", "Mettre à niveau"),
    ("action-invite", "Inviter"),
    ("action-manage", "Gérer"),
    ("action-logout", "Déconnexion"),
    ("action-apply", "Appliquer"),
    ("action-ok", "OK"),
    ("action-select-all", "Tout sélectionner"),
    ("action-return-files", "Retour aux fichiers"),
    ("action-approve", "Approuver"),
    ("action-decline", "Refuser"),
    ("sort-last-modified", "Dernière modification"),
    ("home-greeting-morning", "Bonjour, {name}"),
    ("home-greeting-afternoon", "Bon après-midi, {name}"),
    ("home-greeting-evening", "Bonsoir, {name}"),
    ("home-files-count", "{count} fichiers"),
    ("home-sync-active", "Synchronisation active"),
    ("home-usage", "{used} Go sur {total} Go utilisés"),
    ("home-recent", "Récents"),
    ("home-team-folders", "Dossiers d'équipe"),
    ("home-offline", "Hors ligne"),
    (
        "home-offline-promo",
        "Rendez vos fichiers les plus importants disponibles sans internet",
    ),
    ("shared-with-you", "Partagés avec vous"),
    ("shared-pending", "Approbations en attente"),
    ("shared-notice-title", "Restez informé"),
    (
        "shared-notice-body",
        "Les invitations et les changements de permissions apparaîtront ici. Activez les notifications push dans les paramètres pour ne rien manquer.",
    ),
    ("folder-pinned", "Épinglés"),
    ("folder-all-items", "Tous les éléments"),
    ("folder-items-count", "{count} éléments"),
    ("folder-total-count", "{count} au total"),
    ("folder-updated", "Mis à jour {when}"),
    ("folder-not-found-title", "Dossier introuvable"),
    (
        "folder-not-found-body",
        "Le dossier que vous cherchez a peut-être été déplacé ou supprimé.",
    ),
    ("account-menu", "Menu"),
    ("account-team-members", "Membres de l'équipe"),
    ("account-devices", "Appareils"),
    (
        "scan-permission-message",
        "Bika a besoin d'accéder à la caméra pour scanner des documents",
    ),
    ("scan-permission-button", "Autoriser la caméra"),
    ("scan-permission-denied", "Accès à la caméra refusé"),
    ("flash-off", "Flash désactivé"),
    ("flash-on", "Flash activé"),
    ("flash-auto", "Flash auto"),
    ("scan-edge-label", "Détection des bords"),
    ("scan-edge-hint", "Trouver automatiquement les bords du document"),
    ("scan-enhance-label", "Amélioration auto"),
    ("scan-enhance-hint", "Accentuer et corriger l'éclairage"),
    ("scan-gallery", "Galerie"),
    ("scan-retake", "Reprendre"),
    ("scan-use-photo", "Utiliser la photo"),
    ("alert-error-title", "Une erreur est survenue"),
    (
        "alert-capture-failure",
        "Impossible de capturer la photo. Veuillez réessayer.",
    ),
    (
        "alert-gallery-failure",
        "Impossible d'importer une photo depuis votre bibliothèque.",
    ),
    (
        "alert-save-failure",
        "Votre choix de langue n'a pas pu être enregistré sur cet appareil.",
    ),
    ("menu-not-found-title", "Menu introuvable"),
    (
        "menu-not-found-body",
        "Nous n'avons pas trouvé la page de paramètres que vous cherchez.",
    ),
    ("menu-profile", "Paramètres généraux"),
    ("menu-storage", "Stockage"),
    ("menu-billing", "Facturation"),
    ("menu-notifications", "Notifications"),
    ("menu-referrals", "Parrainer un ami"),
    ("menu-language", "Langue"),
    ("menu-preferences", "Application"),
    ("menu-about", "À propos"),
    ("menu-security", "Sécurité"),
    ("language-section-title", "Choisissez votre langue"),
    (
        "language-section-desc",
        "L'application se met à jour immédiatement et votre choix est enregistré sur cet appareil.",
    ),
    ("plan-billed-monthly", "Facturé mensuellement"),
    ("plan-billed-annually", "Facturé annuellement"),
    ("plan-per-month", "mois"),
    ("plan-per-year", "an"),
    ("plan-monthly", "Mensuel"),
    ("plan-annually", "Annuel"),
    ("plan-recommended", "Recommandé"),
];
