//! Group operations on behalf of a logged-in member.
//!
//! Every call that reads another member's data or changes anything takes
//! the caller's `Session`; capability checks happen in the core against the
//! capabilities resolved at login.

use chama_core::auth::{
    Capabilities, Capability, LoginRequest, PermissionTable, Session, UserRole,
};
use chama_core::dashboard::{Dashboard, DashboardContext, DashboardService};
use chama_core::ledger::{LedgerScope, LedgerSummary, Transaction};
use chama_core::members::{Member, MemberService, MemberUpdate, Registration, RegistrationForm};
use chama_core::notifications::{Notification, NotificationDraft, NotificationService};
use chama_core::workflow::FinanceEntry;
use chama_shared::types::{NotificationId, PageRequest, PageResponse, TransactionId};
use chama_shared::{AppConfig, AppResult};
use rust_decimal::Decimal;
use tracing::info;

use crate::Store;
use crate::auth::Authenticator;
use crate::directory::TransactionSource;

/// Entry point for everything a member can do.
#[derive(Debug, Clone)]
pub struct GroupService {
    store: Store,
    config: AppConfig,
    table: PermissionTable,
}

impl GroupService {
    /// Creates a service over a store with the standard permission table.
    #[must_use]
    pub fn new(store: Store, config: AppConfig) -> Self {
        Self {
            store,
            config,
            table: PermissionTable::STANDARD,
        }
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Loaded configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Logs a member in.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank fields and an unauthorized error
    /// for credentials that match no active member.
    pub async fn login(&self, request: &LoginRequest) -> AppResult<Session> {
        let authenticator = Authenticator::new(
            self.store.members.clone(),
            self.table.clone(),
            self.store.latency(),
        );
        Ok(authenticator.login(request).await?)
    }

    /// Dashboard for the session's role.
    ///
    /// # Errors
    ///
    /// Returns a business rule error if the ledger totals overflow.
    pub async fn dashboard(&self, session: &Session) -> AppResult<Dashboard> {
        let transactions = self.store.transactions.transactions().await;
        let notifications = self.store.notifications.all().await;
        let ctx = DashboardContext {
            transactions: &transactions,
            notifications: &notifications,
            active_members: self.store.members.active_count().await,
            currency: self.config.group.currency,
        };
        Ok(DashboardService::build(session, &ctx)?)
    }

    /// Summary for a scope. Anything beyond the caller's own ledger requires
    /// view-total-balance.
    ///
    /// # Errors
    ///
    /// Returns a forbidden error if the caller may not see the scope.
    pub async fn summary(&self, session: &Session, scope: &LedgerScope) -> AppResult<LedgerSummary> {
        let own = matches!(scope, LedgerScope::Member(code) if *code == session.member.member_code);
        if !own {
            session.capabilities.require(Capability::ViewTotalBalance)?;
        }
        Ok(self.store.transactions.summary(scope).await?)
    }

    /// Ledger rows matching a search term. Committee roles only.
    ///
    /// # Errors
    ///
    /// Returns a forbidden error for plain members.
    pub async fn search_ledger(&self, session: &Session, term: &str) -> AppResult<Vec<Transaction>> {
        session.capabilities.require_admin()?;
        Ok(self.store.transactions.search(term).await)
    }

    /// One page of the ledger search, in insertion order. Committee roles only.
    ///
    /// # Errors
    ///
    /// Returns a forbidden error for plain members.
    pub async fn ledger_page(
        &self,
        session: &Session,
        term: &str,
        page: PageRequest,
    ) -> AppResult<PageResponse<Transaction>> {
        Ok(page.paginate(&self.search_ledger(session, term).await?))
    }

    /// Members matching a search term.
    ///
    /// # Errors
    ///
    /// Returns a forbidden error unless the caller may manage members.
    pub async fn search_members(&self, session: &Session, term: &str) -> AppResult<Vec<Member>> {
        session.capabilities.require(Capability::ManageMembers)?;
        Ok(self.store.members.search(term).await)
    }

    /// Registers a new member and returns the temporary PIN.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller may not register members or the form is invalid.
    pub async fn register_member(
        &self,
        session: &Session,
        form: RegistrationForm,
    ) -> AppResult<Registration> {
        let registration = self
            .store
            .members
            .register(form, &session.capabilities, &self.config.security)
            .await?;
        info!(
            member_code = %registration.member.member_code,
            registered_by = %session.member.member_code,
            "Member registered"
        );
        Ok(registration)
    }

    /// Issues a new temporary PIN.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller may not manage members or the code is unknown.
    pub async fn reset_pin(&self, session: &Session, member_code: &str) -> AppResult<String> {
        let (pin, member) = self
            .store
            .members
            .update(member_code, |m| {
                MemberService::reset_pin(m, &session.capabilities, &self.config.security)
            })
            .await?;
        info!(member_code = %member.member_code, "PIN reset");
        Ok(pin)
    }

    /// Changes a member's role.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller may not manage members or the code is unknown.
    pub async fn update_role(
        &self,
        session: &Session,
        member_code: &str,
        role: UserRole,
    ) -> AppResult<Member> {
        let ((), member) = self
            .store
            .members
            .update(member_code, |m| {
                MemberService::update_role(m, role, &session.capabilities)
            })
            .await?;
        info!(member_code = %member.member_code, %role, "Role updated");
        Ok(member)
    }

    /// Edits a member's details.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller may not manage members, a field is blank or the code is unknown.
    pub async fn update_member_details(
        &self,
        session: &Session,
        member_code: &str,
        update: MemberUpdate,
    ) -> AppResult<Member> {
        let ((), member) = self
            .store
            .members
            .update(member_code, |m| {
                MemberService::update_details(m, update, &session.capabilities)
            })
            .await?;
        Ok(member)
    }

    /// Deactivates a member. Their transactions stay on the ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller may not manage members or the code is unknown.
    pub async fn deactivate_member(&self, session: &Session, member_code: &str) -> AppResult<Member> {
        let ((), member) = self
            .store
            .members
            .update(member_code, |m| MemberService::deactivate(m, &session.capabilities))
            .await?;
        info!(member_code = %member.member_code, "Member deactivated");
        Ok(member)
    }

    /// Records a pending transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller may not key in finances or the entry is invalid.
    pub async fn record_transaction(
        &self,
        session: &Session,
        entry: FinanceEntry,
    ) -> AppResult<Transaction> {
        let directory = self.store.members.all().await;
        let tx = self
            .store
            .transactions
            .record(entry, &directory, &session.capabilities)
            .await?;
        info!(
            transaction_id = %tx.id,
            member_code = %tx.member_code,
            amount = %tx.amount,
            kind = %tx.transaction_type,
            "Transaction recorded"
        );
        Ok(tx)
    }

    /// Approves a pending transaction in the caller's name.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller may not approve, or the transaction is unknown or not pending.
    pub async fn approve_transaction(
        &self,
        session: &Session,
        id: TransactionId,
    ) -> AppResult<Transaction> {
        let tx = self
            .store
            .transactions
            .approve(id, &session.member.name, &session.capabilities)
            .await?;
        info!(transaction_id = %id, approved_by = %session.member.member_code, "Transaction approved");
        Ok(tx)
    }

    /// Rejects a pending transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller may not approve, or the transaction is unknown or not pending.
    pub async fn reject_transaction(
        &self,
        session: &Session,
        id: TransactionId,
    ) -> AppResult<Transaction> {
        let tx = self
            .store
            .transactions
            .reject(id, &session.capabilities)
            .await?;
        info!(transaction_id = %id, rejected_by = %session.member.member_code, "Transaction rejected");
        Ok(tx)
    }

    /// Changes a transaction's amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller may not edit, the amount is invalid or the transaction is unknown.
    pub async fn edit_transaction_amount(
        &self,
        session: &Session,
        id: TransactionId,
        amount: Decimal,
    ) -> AppResult<Transaction> {
        let tx = self
            .store
            .transactions
            .edit_amount(id, amount, &session.capabilities)
            .await?;
        info!(transaction_id = %id, %amount, "Transaction amount edited");
        Ok(tx)
    }

    /// Composes and publishes a notification to every member.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller may not send notifications or the draft is blank.
    pub async fn send_notification(
        &self,
        session: &Session,
        draft: NotificationDraft,
    ) -> AppResult<Notification> {
        let notification =
            NotificationService::compose(draft, session.member.id, &session.capabilities)?;
        self.store.notifications.publish(notification.clone()).await;
        info!(notification_id = %notification.id, kind = %notification.kind, "Notification sent");
        Ok(notification)
    }

    /// The notification board, newest first.
    pub async fn notifications(&self) -> Vec<Notification> {
        self.store.notifications.board().await
    }

    /// Marks a notification read for the caller.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id.
    pub async fn mark_notification_read(
        &self,
        session: &Session,
        id: NotificationId,
    ) -> AppResult<bool> {
        Ok(self
            .store
            .notifications
            .mark_read(id, session.member.id)
            .await?)
    }

    /// Capabilities of an optional session.
    #[must_use]
    pub fn capabilities_of(&self, session: Option<&Session>) -> Capabilities {
        Session::capabilities_of(session, &self.table)
    }
}
