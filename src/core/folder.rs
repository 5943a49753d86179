//! Folder names tasks can be filed under.

use serde::{Deserialize, Serialize};

/// One of the fixed folders a task lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderType {
    /// Unprocessed captures.
    Inbox,
    /// Next actions.
    Next,
    /// Waiting on someone else.
    Wait,
    /// Project tasks.
    Proj,
    /// Someday/maybe.
    Someday,
    /// Short form of someday, kept as its own folder.
    Some,
}

impl FolderType {
    /// Every folder, in enumeration order.
    pub const ALL: [Self; 6] = [
        Self::Inbox,
        Self::Next,
        Self::Wait,
        Self::Proj,
        Self::Someday,
        Self::Some,
    ];

    /// Canonical lower-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Next => "next",
            Self::Wait => "wait",
            Self::Proj => "proj",
            Self::Someday => "someday",
            Self::Some => "some",
        }
    }

    /// Look up a folder by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|folder| folder.as_str() == wanted)
    }

    /// Folder names comma-joined in enumeration order, for messages.
    #[must_use]
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl std::fmt::Display for FolderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
