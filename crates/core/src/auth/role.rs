//! Group roles.

use serde::{Deserialize, Serialize};

/// Organizational position of a member within the group.
///
/// `Member` is the least-privileged role and the fallback for anything
/// that cannot be recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Chairs the group; oversees finances and membership.
    Chairman,
    /// Runs the system; full access except keying in finances.
    OverallAdmin,
    /// Keeps the books.
    Treasurer,
    /// Registers members and sends notices.
    Secretary,
    /// Ordinary contributor.
    #[default]
    Member,
}

impl UserRole {
    /// Every role, in display order.
    pub const ALL: [Self; 5] = [
        Self::Chairman,
        Self::OverallAdmin,
        Self::Treasurer,
        Self::Secretary,
        Self::Member,
    ];

    /// Parses a role identifier such as `overall_admin`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "chairman" => Some(Self::Chairman),
            "overall_admin" => Some(Self::OverallAdmin),
            "treasurer" => Some(Self::Treasurer),
            "secretary" => Some(Self::Secretary),
            "member" => Some(Self::Member),
            _ => None,
        }
    }

    /// Resolves a possibly missing or unknown role identifier.
    ///
    /// Fails closed: anything unrecognized becomes `Member`.
    #[must_use]
    pub fn resolve(s: Option<&str>) -> Self {
        s.and_then(Self::parse).unwrap_or_default()
    }

    /// Returns the identifier used in stored data.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chairman => "chairman",
            Self::OverallAdmin => "overall_admin",
            Self::Treasurer => "treasurer",
            Self::Secretary => "secretary",
            Self::Member => "member",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Chairman => "Chairman",
            Self::OverallAdmin => "Overall Admin",
            Self::Treasurer => "Treasurer",
            Self::Secretary => "Secretary",
            Self::Member => "Member",
        }
    }

    /// Every role except `Member` gets the admin dashboard.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        !matches!(self, Self::Member)
    }

    /// Roles trusted with the group's money.
    ///
    /// An explicit allow-list; it is not derived from the permission flags.
    #[must_use]
    pub const fn is_financial_admin(&self) -> bool {
        matches!(self, Self::Chairman | Self::OverallAdmin | Self::Treasurer)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
