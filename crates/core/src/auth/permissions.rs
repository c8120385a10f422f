//! Role to permission resolution.
//!
//! The table is built once and never mutated. Callers hold a
//! `PermissionTable` (usually `PermissionTable::STANDARD`) and resolve
//! roles against it; the resulting `Capabilities` is the single value the
//! rest of the system consults.

use serde::{Deserialize, Serialize};

use super::error::AuthError;
use super::role::UserRole;

/// A single guarded capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// See the whole group's balance.
    ViewTotalBalance,
    /// Approve or reject pending transactions.
    ApproveTransactions,
    /// Change transaction amounts.
    EditTransactions,
    /// Register new members.
    RegisterMembers,
    /// Record contributions and other transactions.
    KeyInFinances,
    /// Broadcast notifications.
    SendNotifications,
    /// Reset PINs, edit and deactivate members.
    ManageMembers,
}

impl Capability {
    /// Human-readable description used in error messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::ViewTotalBalance => "view the total group balance",
            Self::ApproveTransactions => "approve transactions",
            Self::EditTransactions => "edit transactions",
            Self::RegisterMembers => "register members",
            Self::KeyInFinances => "key in finances",
            Self::SendNotifications => "send notifications",
            Self::ManageMembers => "manage members",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

/// The seven capability flags granted to a role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionSet {
    /// See the whole group's balance.
    pub can_view_total_balance: bool,
    /// Approve or reject pending transactions.
    pub can_approve_transactions: bool,
    /// Change transaction amounts.
    pub can_edit_transactions: bool,
    /// Register new members.
    pub can_register_members: bool,
    /// Record contributions and other transactions.
    pub can_key_in_finances: bool,
    /// Broadcast notifications.
    pub can_send_notifications: bool,
    /// Reset PINs, edit and deactivate members.
    pub can_manage_members: bool,
}

impl PermissionSet {
    /// A set with every flag off.
    pub const NONE: Self = Self {
        can_view_total_balance: false,
        can_approve_transactions: false,
        can_edit_transactions: false,
        can_register_members: false,
        can_key_in_finances: false,
        can_send_notifications: false,
        can_manage_members: false,
    };

    /// Returns whether the given capability is granted.
    #[must_use]
    pub const fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::ViewTotalBalance => self.can_view_total_balance,
            Capability::ApproveTransactions => self.can_approve_transactions,
            Capability::EditTransactions => self.can_edit_transactions,
            Capability::RegisterMembers => self.can_register_members,
            Capability::KeyInFinances => self.can_key_in_finances,
            Capability::SendNotifications => self.can_send_notifications,
            Capability::ManageMembers => self.can_manage_members,
        }
    }
}

/// Immutable role to permission table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionTable {
    chairman: PermissionSet,
    overall_admin: PermissionSet,
    treasurer: PermissionSet,
    secretary: PermissionSet,
    member: PermissionSet,
}

impl PermissionTable {
    /// The group's fixed permission table.
    pub const STANDARD: Self = Self {
        chairman: PermissionSet {
            can_view_total_balance: true,
            can_approve_transactions: true,
            can_edit_transactions: true,
            can_register_members: false,
            can_key_in_finances: false,
            can_send_notifications: true,
            can_manage_members: true,
        },
        overall_admin: PermissionSet {
            can_view_total_balance: true,
            can_approve_transactions: true,
            can_edit_transactions: true,
            can_register_members: true,
            can_key_in_finances: false,
            can_send_notifications: true,
            can_manage_members: true,
        },
        treasurer: PermissionSet {
            can_view_total_balance: true,
            can_approve_transactions: true,
            can_edit_transactions: true,
            can_register_members: false,
            can_key_in_finances: true,
            can_send_notifications: true,
            can_manage_members: false,
        },
        secretary: PermissionSet {
            can_view_total_balance: false,
            can_approve_transactions: false,
            can_edit_transactions: false,
            can_register_members: true,
            can_key_in_finances: false,
            can_send_notifications: true,
            can_manage_members: false,
        },
        member: PermissionSet::NONE,
    };

    /// Returns the permission set for a role.
    #[must_use]
    pub const fn resolve(&self, role: UserRole) -> PermissionSet {
        match role {
            UserRole::Chairman => self.chairman,
            UserRole::OverallAdmin => self.overall_admin,
            UserRole::Treasurer => self.treasurer,
            UserRole::Secretary => self.secretary,
            UserRole::Member => self.member,
        }
    }

    /// Resolves a raw role identifier, failing closed to `Member`.
    #[must_use]
    pub fn resolve_identifier(&self, role: Option<&str>) -> PermissionSet {
        self.resolve(UserRole::resolve(role))
    }

    /// Builds the capability value object for a role.
    #[must_use]
    pub const fn capabilities(&self, role: UserRole) -> Capabilities {
        Capabilities {
            role,
            permissions: self.resolve(role),
            is_admin: role.is_admin(),
            is_financial_admin: role.is_financial_admin(),
        }
    }
}

impl Default for PermissionTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Resolves a role against the standard table.
#[must_use]
pub const fn resolve(role: UserRole) -> PermissionSet {
    PermissionTable::STANDARD.resolve(role)
}

/// Everything a caller is allowed to see and do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// The role these capabilities were resolved from.
    pub role: UserRole,
    /// The role's permission flags.
    pub permissions: PermissionSet,
    /// `role != member`.
    pub is_admin: bool,
    /// `role` is chairman, overall admin or treasurer.
    pub is_financial_admin: bool,
}

impl Capabilities {
    /// Capabilities of a caller whose role is not (yet) known.
    #[must_use]
    pub const fn anonymous(table: &PermissionTable) -> Self {
        table.capabilities(UserRole::Member)
    }

    /// Returns whether the given capability is granted.
    #[must_use]
    pub const fn allows(&self, capability: Capability) -> bool {
        self.permissions.allows(capability)
    }

    /// Fails with `AuthError::Forbidden` unless the capability is granted.
    pub fn require(&self, capability: Capability) -> Result<(), AuthError> {
        if self.allows(capability) {
            Ok(())
        } else {
            Err(AuthError::Forbidden {
                role: self.role,
                capability,
            })
        }
    }

    /// Fails with `AuthError::AdminOnly` for plain members.
    pub fn require_admin(&self) -> Result<(), AuthError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(AuthError::AdminOnly { role: self.role })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CAPABILITIES: [Capability; 7] = [
        Capability::ViewTotalBalance,
        Capability::ApproveTransactions,
        Capability::EditTransactions,
        Capability::RegisterMembers,
        Capability::KeyInFinances,
        Capability::SendNotifications,
        Capability::ManageMembers,
    ];

    fn flags(set: PermissionSet) -> [bool; 7] {
        ALL_CAPABILITIES.map(|c| set.allows(c))
    }

    #[test]
    fn test_chairman_permissions() {
        assert_eq!(
            flags(resolve(UserRole::Chairman)),
            [true, true, true, false, false, true, true]
        );
    }

    #[test]
    fn test_overall_admin_permissions() {
        assert_eq!(
            flags(resolve(UserRole::OverallAdmin)),
            [true, true, true, true, false, true, true]
        );
    }

    #[test]
    fn test_treasurer_permissions() {
        assert_eq!(
            flags(resolve(UserRole::Treasurer)),
            [true, true, true, false, true, true, false]
        );
    }

    #[test]
    fn test_secretary_permissions() {
        assert_eq!(
            flags(resolve(UserRole::Secretary)),
            [false, false, false, true, false, true, false]
        );
    }

    #[test]
    fn test_member_has_no_permissions() {
        assert_eq!(resolve(UserRole::Member), PermissionSet::NONE);
    }

    #[test]
    fn test_unknown_identifier_resolves_to_member() {
        let table = PermissionTable::STANDARD;
        assert_eq!(
            table.resolve_identifier(Some("root")),
            table.resolve(UserRole::Member)
        );
        assert_eq!(
            table.resolve_identifier(None),
            table.resolve(UserRole::Member)
        );
        assert_eq!(
            table.resolve_identifier(Some("treasurer")),
            table.resolve(UserRole::Treasurer)
        );
    }

    #[test]
    fn test_capabilities_carry_derived_flags() {
        let caps = PermissionTable::STANDARD.capabilities(UserRole::Secretary);
        assert!(caps.is_admin);
        assert!(!caps.is_financial_admin);
        assert!(caps.allows(Capability::RegisterMembers));
    }

    #[test]
    fn test_anonymous_capabilities_are_least_privileged() {
        let caps = Capabilities::anonymous(&PermissionTable::STANDARD);
        assert_eq!(caps.role, UserRole::Member);
        assert!(!caps.is_admin);
        assert_eq!(caps.permissions, PermissionSet::NONE);
    }

    #[test]
    fn test_require_reports_role_and_capability() {
        let caps = PermissionTable::STANDARD.capabilities(UserRole::Chairman);
        assert!(caps.require(Capability::ManageMembers).is_ok());

        let err = caps.require(Capability::KeyInFinances).unwrap_err();
        assert!(matches!(
            err,
            AuthError::Forbidden {
                role: UserRole::Chairman,
                capability: Capability::KeyInFinances
            }
        ));
    }

    #[test]
    fn test_require_admin() {
        for role in UserRole::ALL {
            let caps = PermissionTable::STANDARD.capabilities(role);
            assert_eq!(caps.require_admin().is_ok(), role != UserRole::Member);
        }
    }

    #[test]
    fn test_financial_admin_is_not_approval_flag() {
        // Both happen to agree for the standard table; the allow-list stays authoritative.
        for role in UserRole::ALL {
            let caps = PermissionTable::STANDARD.capabilities(role);
            assert_eq!(
                caps.is_financial_admin,
                matches!(
                    role,
                    UserRole::Chairman | UserRole::OverallAdmin | UserRole::Treasurer
                )
            );
        }
    }
}
