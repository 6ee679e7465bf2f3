//! Shared tab fixtures

use super::entry::EntryKind;

/// Something a teammate shared into this account
#[derive(Debug, Clone, Copy)]
pub struct SharedItem {
    pub id: &'static str,
    pub name: &'static str,
    pub detail: &'static str,
    pub shared_by: &'static str,
    pub kind: EntryKind,
}

/// An access request waiting on the user
#[derive(Debug, Clone, Copy)]
pub struct PendingApproval {
    pub id: &'static str,
    pub name: &'static str,
    pub requested_by: &'static str,
    pub detail: &'static str,
}

pub fn shared_items() -> &'static [SharedItem] {
    &[
        SharedItem {
            id: "s1",
            name: "Q3 Report.pdf",
            detail: "4.2 MB · Shared 2 hours ago",
            shared_by: "Patrick Federi",
            kind: EntryKind::File { extension: "pdf" },
        },
        SharedItem {
            id: "s2",
            name: "Design",
            detail: "Folder · Shared yesterday",
            shared_by: "Lora Kimathi",
            kind: EntryKind::Folder,
        },
        SharedItem {
            id: "s3",
            name: "Launch Checklist.xlsx",
            detail: "860 KB · Shared 3 days ago",
            shared_by: "Gilley Aguilar",
            kind: EntryKind::File { extension: "xlsx" },
        },
    ]
}

pub fn pending_approvals() -> &'static [PendingApproval] {
    &[
        PendingApproval {
            id: "p1",
            name: "Legals",
            requested_by: "Marek Piwnicki",
            detail: "Requested edit access · 1 day ago",
        },
        PendingApproval {
            id: "p2",
            name: "Brand Assets",
            requested_by: "Gilley Aguilar",
            detail: "Requested view access · 4 days ago",
        },
    ]
}
