//! File and folder entries for the My Files listing

/// What a listing row points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    File {
        /// Lowercase extension, e.g. "pdf"
        extension: &'static str,
    },
}

/// A row in a file listing
#[derive(Debug, Clone, Copy)]
pub struct FileEntry {
    pub id: &'static str,
    pub name: &'static str,
    /// Secondary line, e.g. "1.8 MB · 08 Jun. 2025, 16:04"
    pub detail: &'static str,
    pub kind: EntryKind,
    /// Initials of people the entry is shared with
    pub shared_with: &'static [&'static str],
    pub starred: bool,
}

impl FileEntry {
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, EntryKind::Folder)
    }

    /// Glyph shown in list rows and grid tiles
    pub fn glyph(&self) -> &'static str {
        match self.kind {
            EntryKind::Folder => "▣",
            EntryKind::File { .. } => "≡",
        }
    }
}

/// The My Files listing fixture
pub fn my_files() -> &'static [FileEntry] {
    &[
        FileEntry {
            id: "1",
            name: "Documents",
            detail: "Folder · Updated 1 hour ago",
            kind: EntryKind::Folder,
            shared_with: &["DM", "PF"],
            starred: true,
        },
        FileEntry {
            id: "2",
            name: "Design",
            detail: "Shared folder · Updated yesterday",
            kind: EntryKind::Folder,
            shared_with: &["LK", "MP", "GA"],
            starred: false,
        },
        FileEntry {
            id: "3",
            name: "Development",
            detail: "Folder · Updated 12 Jun. 2025",
            kind: EntryKind::Folder,
            shared_with: &[],
            starred: false,
        },
        FileEntry {
            id: "4",
            name: "Legals",
            detail: "Folder · Updated 10 Jun. 2025",
            kind: EntryKind::Folder,
            shared_with: &["DM"],
            starred: false,
        },
        FileEntry {
            id: "5",
            name: "Construct contract.docx",
            detail: "1.8 MB · 08 Jun. 2025, 16:04",
            kind: EntryKind::File { extension: "docx" },
            shared_with: &["PF"],
            starred: true,
        },
        FileEntry {
            id: "6",
            name: "Salary Sheet.xlsx",
            detail: "2.4 MB · 06 Jun. 2025, 11:22",
            kind: EntryKind::File { extension: "xlsx" },
            shared_with: &[],
            starred: false,
        },
        FileEntry {
            id: "7",
            name: "Brand Assets",
            detail: "Folder · Updated last week",
            kind: EntryKind::Folder,
            shared_with: &["GA", "MP"],
            starred: false,
        },
        FileEntry {
            id: "8",
            name: "Project Brief.pdf",
            detail: "1.2 MB · 03 Jun. 2025, 14:32",
            kind: EntryKind::File { extension: "pdf" },
            shared_with: &[],
            starred: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_has_eight_rows_with_unique_ids() {
        let entries = my_files();
        assert_eq!(entries.len(), 8);

        let mut ids: Vec<&str> = entries.iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn folders_come_before_the_first_file() {
        let entries = my_files();
        assert!(entries[0].is_folder());
        assert!(!entries[4].is_folder());
        assert_eq!(entries[4].kind, EntryKind::File { extension: "docx" });
    }
}
