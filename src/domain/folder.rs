//! Folder detail records

use super::entry::FileEntry;

/// A pinned shortcut shown at the top of a folder screen
#[derive(Debug, Clone, Copy)]
pub struct PinnedItem {
    pub id: &'static str,
    pub name: &'static str,
    pub is_folder: bool,
}

/// Everything the folder detail screen needs for one folder
#[derive(Debug, Clone, Copy)]
pub struct FolderRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub owner: &'static str,
    /// Relative phrase, e.g. "1 hour ago"
    pub updated: &'static str,
    pub size: &'static str,
    pub files_count: u32,
    /// Breadcrumb segments from the workspace root
    pub path: &'static [&'static str],
    pub member_initials: &'static [&'static str],
    pub pinned: &'static [PinnedItem],
    pub items: &'static [FileEntry],
}

/// Looks up a folder by id. Only the two top-level folders carry
/// records; ids referenced by their sub-items resolve to `None` and
/// the caller shows the not-found screen.
pub fn lookup(id: &str) -> Option<&'static FolderRecord> {
    directory().iter().find(|record| record.id == id)
}

pub fn directory() -> &'static [FolderRecord] {
    use super::entry::EntryKind;

    &[
        FolderRecord {
            id: "1",
            name: "Documents",
            owner: "Digne",
            updated: "1 hour ago",
            size: "2.1 GB",
            files_count: 24,
            path: &["Workspace", "Shared", "Documents"],
            member_initials: &["DM", "PF", "LK"],
            pinned: &[
                PinnedItem {
                    id: "5",
                    name: "Construct contract.docx",
                    is_folder: false,
                },
                PinnedItem {
                    id: "9",
                    name: "Press Kit",
                    is_folder: true,
                },
            ],
            items: &[
                FileEntry {
                    id: "5",
                    name: "Construct contract.docx",
                    detail: "1.8 MB · Edited yesterday",
                    kind: EntryKind::File { extension: "docx" },
                    shared_with: &["PF"],
                    starred: true,
                },
                FileEntry {
                    id: "9",
                    name: "Press Kit",
                    detail: "Folder · Updated 3 days ago",
                    kind: EntryKind::Folder,
                    shared_with: &[],
                    starred: false,
                },
                FileEntry {
                    id: "10",
                    name: "HR Policies.pdf",
                    detail: "3.4 MB · Updated 4 days ago",
                    kind: EntryKind::File { extension: "pdf" },
                    shared_with: &["DM"],
                    starred: false,
                },
                FileEntry {
                    id: "11",
                    name: "Company Handbook",
                    detail: "Folder · Updated last week",
                    kind: EntryKind::Folder,
                    shared_with: &[],
                    starred: false,
                },
            ],
        },
        FolderRecord {
            id: "2",
            name: "Design",
            owner: "Lora",
            updated: "Yesterday",
            size: "7.8 GB",
            files_count: 52,
            path: &["Workspace", "Creative", "Design"],
            member_initials: &["LK", "MP", "GA", "DM"],
            pinned: &[
                PinnedItem {
                    id: "12",
                    name: "Brand Kit",
                    is_folder: true,
                },
                PinnedItem {
                    id: "13",
                    name: "Marketing Header.fig",
                    is_folder: false,
                },
            ],
            items: &[
                FileEntry {
                    id: "12",
                    name: "Brand Kit",
                    detail: "Folder · Updated 2 hours ago",
                    kind: EntryKind::Folder,
                    shared_with: &["MP"],
                    starred: false,
                },
                FileEntry {
                    id: "13",
                    name: "Marketing Header.fig",
                    detail: "26 MB · Updated today",
                    kind: EntryKind::File { extension: "fig" },
                    shared_with: &[],
                    starred: true,
                },
                FileEntry {
                    id: "14",
                    name: "Product Illustrations",
                    detail: "Folder · Updated 2 days ago",
                    kind: EntryKind::Folder,
                    shared_with: &[],
                    starred: false,
                },
                FileEntry {
                    id: "15",
                    name: "Hero Graphic.png",
                    detail: "4.6 MB · Updated 3 days ago",
                    kind: EntryKind::File { extension: "png" },
                    shared_with: &["GA"],
                    starred: false,
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve() {
        let documents = lookup("1").map(|record| record.name);
        assert_eq!(documents, Some("Documents"));
        let design = lookup("2").map(|record| record.name);
        assert_eq!(design, Some("Design"));
    }

    #[test]
    fn sub_folder_ids_are_intentionally_missing() {
        // Nested folders navigate but have no record of their own.
        for id in ["9", "11", "12", "14"] {
            assert!(lookup(id).is_none(), "expected no record for id {id}");
        }
        assert!(lookup("unknown").is_none());
    }
}
