//! Home screen fixtures

/// Display name of the signed-in user
pub const USER_NAME: &str = "Digne";
pub const USER_FULL_NAME: &str = "Digne Mellow";
pub const USER_EMAIL: &str = "cnrukundo@gmail.com";

/// A recently opened item on the home screen
#[derive(Debug, Clone, Copy)]
pub struct RecentItem {
    pub id: &'static str,
    pub title: &'static str,
    /// Location breadcrumb, e.g. "Bika > Camera Upload"
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TeamFolder {
    pub id: &'static str,
    pub name: &'static str,
    pub files_count: u32,
    pub member_initials: &'static [&'static str],
}

/// Storage consumption shown on the hero card and the account screen
#[derive(Debug, Clone, Copy)]
pub struct StorageUsage {
    pub used_gb: f32,
    pub total_gb: f32,
    pub files_count: u32,
}

impl StorageUsage {
    pub fn current() -> Self {
        Self {
            used_gb: 4.5,
            total_gb: 15.0,
            files_count: 5126,
        }
    }

    /// Fill ratio clamped to 0..=1 for the progress bar
    pub fn ratio(&self) -> f32 {
        if self.total_gb <= 0.0 {
            return 0.0;
        }
        (self.used_gb / self.total_gb).clamp(0.0, 1.0)
    }
}

pub fn recent_items() -> &'static [RecentItem] {
    &[
        RecentItem {
            id: "r1",
            title: "Gilley Aguilar",
            subtitle: "Bika > Camera Upload",
        },
        RecentItem {
            id: "r2",
            title: "Patrick Federi",
            subtitle: "Bika > Company",
        },
        RecentItem {
            id: "r3",
            title: "Marek Piwnicki",
            subtitle: "Bika Photos",
        },
    ]
}

pub fn team_folders() -> &'static [TeamFolder] {
    &[
        TeamFolder {
            id: "1",
            name: "Documents",
            files_count: 24,
            member_initials: &["DM", "PF", "LK"],
        },
        TeamFolder {
            id: "2",
            name: "Design",
            files_count: 52,
            member_initials: &["LK", "MP", "GA"],
        },
        TeamFolder {
            id: "4",
            name: "Legals",
            files_count: 11,
            member_initials: &["DM"],
        },
        TeamFolder {
            id: "16",
            name: "Marketing",
            files_count: 38,
            member_initials: &["GA", "MP"],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_clamped() {
        let usage = StorageUsage::current();
        assert!((usage.ratio() - 0.3).abs() < 1e-6);

        let over = StorageUsage {
            used_gb: 20.0,
            total_gb: 15.0,
            files_count: 0,
        };
        assert_eq!(over.ratio(), 1.0);

        let empty = StorageUsage {
            used_gb: 1.0,
            total_gb: 0.0,
            files_count: 0,
        };
        assert_eq!(empty.ratio(), 0.0);
    }
}
