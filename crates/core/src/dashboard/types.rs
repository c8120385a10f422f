//! Dashboard data types.

use chama_shared::types::{MemberCode, Money};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::Capability;
use crate::ledger::Transaction;

/// Shown instead of a posting date when nothing has been approved.
pub const NO_TRANSACTIONS: &str = "No transactions yet";

/// A tab on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    /// Group ledger; always present.
    Ledger,
    /// Member registration.
    Register,
    /// Finance entry.
    Finance,
    /// Member management.
    Members,
    /// Notification composer.
    Notifications,
}

impl DashboardTab {
    /// Tabs in display order.
    pub const ALL: [Self; 5] = [
        Self::Ledger,
        Self::Register,
        Self::Finance,
        Self::Members,
        Self::Notifications,
    ];

    /// Capability that unlocks the tab, `None` if always shown.
    #[must_use]
    pub const fn required_capability(&self) -> Option<Capability> {
        match self {
            Self::Ledger => None,
            Self::Register => Some(Capability::RegisterMembers),
            Self::Finance => Some(Capability::KeyInFinances),
            Self::Members => Some(Capability::ManageMembers),
            Self::Notifications => Some(Capability::SendNotifications),
        }
    }
}

/// Ledger table with the row actions the viewer may use.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerView {
    /// Whether amounts can be edited.
    pub can_edit: bool,
    /// Whether pending rows can be approved or rejected.
    pub can_approve: bool,
    /// Transactions in insertion order.
    pub transactions: Vec<Transaction>,
}

/// Dashboard for any non-member role.
#[derive(Debug, Clone, Serialize)]
pub struct AdminDashboard {
    /// e.g. `Welcome back, John`.
    pub greeting: String,
    /// Display label of the viewer's role.
    pub role_label: &'static str,
    /// Total group balance; `None` unless the role may see it.
    pub group_balance: Option<Money>,
    /// Number of active members.
    pub active_members: usize,
    /// Pending transactions across the group.
    pub pending_count: usize,
    /// Approved transactions across the group.
    pub approved_count: usize,
    /// Notifications the viewer has not read.
    pub unread_notifications: usize,
    /// Visible tabs in display order.
    pub tabs: Vec<DashboardTab>,
    /// The ledger tab.
    pub ledger: LedgerView,
}

/// Dashboard for an ordinary member.
#[derive(Debug, Clone, Serialize)]
pub struct MemberDashboard {
    /// e.g. `Welcome, Grace!`.
    pub greeting: String,
    /// The member's login code.
    pub member_code: MemberCode,
    /// The member's own balance.
    pub balance: Money,
    /// Approved transactions.
    pub approved_count: usize,
    /// Pending transactions.
    pub pending_count: usize,
    /// Latest posting time, if any.
    pub last_posted: Option<DateTime<Utc>>,
    /// Formatted posting time or [`NO_TRANSACTIONS`].
    pub last_posted_label: String,
    /// Notifications the member has not read.
    pub unread_notifications: usize,
    /// Own transactions in insertion order.
    pub history: Vec<Transaction>,
}

/// The dashboard shown after login.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Dashboard {
    /// Admin view.
    Admin(AdminDashboard),
    /// Member view.
    Member(MemberDashboard),
}
