//! Builds dashboards from a session and the current ledger.

use chama_shared::types::{Currency, Money};
use chrono::{DateTime, Utc};

use super::types::{
    AdminDashboard, Dashboard, DashboardTab, LedgerView, MemberDashboard, NO_TRANSACTIONS,
};
use crate::auth::{Capability, Session};
use crate::ledger::{LedgerAggregator, LedgerError, LedgerScope, Transaction};
use crate::notifications::{Notification, NotificationService};

/// Inputs shared by both dashboards.
#[derive(Debug, Clone, Copy)]
pub struct DashboardContext<'a> {
    /// All transactions in insertion order.
    pub transactions: &'a [Transaction],
    /// All notifications.
    pub notifications: &'a [Notification],
    /// Number of active members.
    pub active_members: usize,
    /// Currency the group keeps its books in.
    pub currency: Currency,
}

/// Stateless dashboard builder.
pub struct DashboardService;

impl DashboardService {
    /// Picks the admin or member dashboard for the session.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Overflow` if the ledger totals cannot be computed.
    pub fn build(session: &Session, ctx: &DashboardContext<'_>) -> Result<Dashboard, LedgerError> {
        Ok(if session.capabilities.is_admin {
            Dashboard::Admin(Self::admin(session, ctx)?)
        } else {
            Dashboard::Member(Self::member(session, ctx)?)
        })
    }

    /// Group-wide view. The balance is only filled in for roles that may see it.
    pub fn admin(
        session: &Session,
        ctx: &DashboardContext<'_>,
    ) -> Result<AdminDashboard, LedgerError> {
        let caps = &session.capabilities;
        let summary = LedgerAggregator::aggregate(ctx.transactions, &LedgerScope::All)?;

        let group_balance = caps
            .allows(Capability::ViewTotalBalance)
            .then(|| Money::new(summary.balance, ctx.currency));

        Ok(AdminDashboard {
            greeting: format!("Welcome back, {}", session.member.first_name()),
            role_label: caps.role.label(),
            group_balance,
            active_members: ctx.active_members,
            pending_count: summary.pending_count,
            approved_count: summary.approved_count,
            unread_notifications: NotificationService::unread_count(
                ctx.notifications,
                session.member.id,
            ),
            tabs: Self::tabs(session),
            ledger: LedgerView {
                can_edit: caps.allows(Capability::EditTransactions),
                can_approve: caps.allows(Capability::ApproveTransactions),
                transactions: ctx.transactions.to_vec(),
            },
        })
    }

    /// The member's own view, scoped to their code.
    pub fn member(
        session: &Session,
        ctx: &DashboardContext<'_>,
    ) -> Result<MemberDashboard, LedgerError> {
        let member = &session.member;
        let scope = LedgerScope::Member(member.member_code.clone());
        let summary = LedgerAggregator::aggregate(ctx.transactions, &scope)?;

        Ok(MemberDashboard {
            greeting: format!("Welcome, {}!", member.first_name()),
            member_code: member.member_code.clone(),
            balance: Money::new(summary.balance, ctx.currency),
            approved_count: summary.approved_count,
            pending_count: summary.pending_count,
            last_posted: summary.last_posted,
            last_posted_label: summary
                .last_posted
                .map_or_else(|| NO_TRANSACTIONS.to_string(), format_posted),
            unread_notifications: NotificationService::unread_count(ctx.notifications, member.id),
            history: LedgerAggregator::scoped(ctx.transactions, &scope)
                .into_iter()
                .cloned()
                .collect(),
        })
    }

    /// Admin tabs the session may open, in display order.
    #[must_use]
    pub fn tabs(session: &Session) -> Vec<DashboardTab> {
        DashboardTab::ALL
            .into_iter()
            .filter(|tab| {
                tab.required_capability()
                    .is_none_or(|cap| session.capabilities.allows(cap))
            })
            .collect()
    }
}

/// e.g. `15 Jan 2024, 10:30`.
fn format_posted(at: DateTime<Utc>) -> String {
    at.format("%-d %b %Y, %H:%M").to_string()
}
