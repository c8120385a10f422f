//! Workflow service for recording and transitioning transactions.
//!
//! Only pending transactions can be decided. Approval and rejection are
//! terminal; amounts stay editable by anyone holding the edit capability.

use chama_shared::types::{Money, TransactionId};
use chrono::Utc;
use rust_decimal::Decimal;

use crate::auth::{Capabilities, Capability};
use crate::ledger::{Transaction, TransactionStatus};
use crate::members::Member;
use crate::workflow::error::WorkflowError;
use crate::workflow::types::{FinanceEntry, WorkflowAction};

const MISSING_FIELDS: &str = "Please fill in all required fields";

/// Largest amount a single transaction may carry (one billion).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Stateless service for the transaction workflow.
pub struct WorkflowService;

impl WorkflowService {
    /// Records a new pending transaction.
    ///
    /// # Arguments
    /// * `entry` - The keyed-in finance entry
    /// * `directory` - Members the entry may refer to
    /// * `actor` - Capabilities of the person keying in
    ///
    /// # Returns
    /// * `Ok(Transaction)` in `pending` status
    /// * `Err(WorkflowError::Auth)` without key-in-finances
    /// * `Err(WorkflowError::Validation)` for blank fields or an amount outside `(0, MAX_AMOUNT]`
    /// * `Err(WorkflowError::MemberNotFound)` if no active member has the code
    pub fn record(
        entry: FinanceEntry,
        directory: &[Member],
        actor: &Capabilities,
    ) -> Result<Transaction, WorkflowError> {
        actor.require(Capability::KeyInFinances)?;

        let description = entry.description.trim();
        if entry.member_code.is_blank() || description.is_empty() {
            return Err(WorkflowError::Validation(MISSING_FIELDS.to_string()));
        }
        Self::validate_amount(entry.amount)?;

        let member = directory
            .iter()
            .find(|m| m.is_active && m.member_code == entry.member_code)
            .ok_or(WorkflowError::MemberNotFound(entry.member_code))?;

        Ok(Transaction {
            id: TransactionId::new(),
            member_code: member.member_code.clone(),
            member_name: member.name.clone(),
            amount: entry.amount,
            transaction_type: entry.transaction_type,
            description: description.to_string(),
            status: TransactionStatus::Pending,
            created_at: Utc::now(),
            approved_by: None,
            approved_at: None,
        })
    }

    /// Approves a pending transaction.
    ///
    /// # Returns
    /// * `Ok(WorkflowAction::Approve)` stamped with the approver and time
    /// * `Err(WorkflowError::Auth)` without approve-transactions
    /// * `Err(WorkflowError::InvalidTransition)` if not pending
    pub fn approve(
        tx: &Transaction,
        approved_by: &str,
        actor: &Capabilities,
    ) -> Result<WorkflowAction, WorkflowError> {
        actor.require(Capability::ApproveTransactions)?;

        match tx.status {
            TransactionStatus::Pending => Ok(WorkflowAction::Approve {
                approved_by: approved_by.to_string(),
                approved_at: Utc::now(),
            }),
            from => Err(WorkflowError::InvalidTransition {
                from,
                to: TransactionStatus::Approved,
            }),
        }
    }

    /// Rejects a pending transaction.
    pub fn reject(tx: &Transaction, actor: &Capabilities) -> Result<WorkflowAction, WorkflowError> {
        actor.require(Capability::ApproveTransactions)?;

        match tx.status {
            TransactionStatus::Pending => Ok(WorkflowAction::Reject),
            from => Err(WorkflowError::InvalidTransition {
                from,
                to: TransactionStatus::Rejected,
            }),
        }
    }

    /// Produces an amount change. Any status may be edited, and the amount
    /// may equal the current one.
    pub fn edit_amount(
        amount: Decimal,
        actor: &Capabilities,
    ) -> Result<WorkflowAction, WorkflowError> {
        actor.require(Capability::EditTransactions)?;
        Self::validate_amount(amount)?;
        Ok(WorkflowAction::EditAmount { amount })
    }

    /// Check if a status transition is valid.
    ///
    /// Valid transitions:
    /// - Pending → Approved (approve)
    /// - Pending → Rejected (reject)
    #[must_use]
    pub fn is_valid_transition(from: TransactionStatus, to: TransactionStatus) -> bool {
        matches!(
            (from, to),
            (
                TransactionStatus::Pending,
                TransactionStatus::Approved | TransactionStatus::Rejected
            )
        )
    }

    /// Finds a transaction for mutation or reports `TransactionNotFound`.
    pub fn require_mut(
        transactions: &mut [Transaction],
        id: TransactionId,
    ) -> Result<&mut Transaction, WorkflowError> {
        transactions
            .iter_mut()
            .find(|tx| tx.id == id)
            .ok_or(WorkflowError::TransactionNotFound(id))
    }

    fn validate_amount(amount: Decimal) -> Result<(), WorkflowError> {
        if amount <= Decimal::ZERO {
            return Err(WorkflowError::Validation(
                "Amount must be greater than zero".to_string(),
            ));
        }
        if amount > MAX_AMOUNT {
            return Err(WorkflowError::Validation(format!(
                "Amount must not exceed {}",
                Money::format_amount(MAX_AMOUNT)
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthError, PermissionTable, UserRole};
    use crate::ledger::TransactionType;
    use chama_shared::types::MemberCode;
    use rust_decimal_macros::dec;

    fn caps(role: UserRole) -> Capabilities {
        PermissionTable::STANDARD.capabilities(role)
    }

    fn directory() -> Vec<Member> {
        vec![
            Member::fixture("mem001", "Grace Jepkosgei", UserRole::Member),
            Member::fixture("treas001", "Mary Chebet", UserRole::Treasurer),
        ]
    }

    fn entry() -> FinanceEntry {
        FinanceEntry {
            member_code: MemberCode::new("MEM001"),
            amount: dec!(5000),
            transaction_type: TransactionType::Contribution,
            description: " Monthly contribution ".to_string(),
        }
    }

    fn pending() -> Transaction {
        Transaction::fixture(
            "mem001",
            dec!(5000),
            TransactionType::Contribution,
            TransactionStatus::Pending,
        )
    }

    #[test]
    fn test_record_creates_pending_transaction() {
        let tx = WorkflowService::record(entry(), &directory(), &caps(UserRole::Treasurer)).unwrap();
        assert_eq!(tx.status, TransactionStatus::Pending);
        assert_eq!(tx.member_code.as_str(), "mem001");
        assert_eq!(tx.member_name, "Grace Jepkosgei");
        assert_eq!(tx.description, "Monthly contribution");
        assert!(tx.approved_by.is_none());
    }

    #[test]
    fn test_record_requires_key_in_finances() {
        for role in [UserRole::Chairman, UserRole::OverallAdmin, UserRole::Secretary, UserRole::Member] {
            let err = WorkflowService::record(entry(), &directory(), &caps(role)).unwrap_err();
            assert!(matches!(err, WorkflowError::Auth(AuthError::Forbidden { .. })));
        }
    }

    #[test]
    fn test_record_validation() {
        let treasurer = caps(UserRole::Treasurer);

        let err = WorkflowService::record(
            FinanceEntry { description: "  ".into(), ..entry() },
            &directory(),
            &treasurer,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all required fields");

        let err = WorkflowService::record(
            FinanceEntry { amount: dec!(0), ..entry() },
            &directory(),
            &treasurer,
        )
        .unwrap_err();
        assert!(matches!(err, WorkflowError::Validation(_)));

        let err = WorkflowService::record(
            FinanceEntry { member_code: MemberCode::new("ghost"), ..entry() },
            &directory(),
            &treasurer,
        )
        .unwrap_err();
        assert!(matches!(err, WorkflowError::MemberNotFound(_)));
    }

    #[test]
    fn test_amounts_are_bounded() {
        let treasurer = caps(UserRole::Treasurer);
        assert_eq!(MAX_AMOUNT, dec!(1000000000));

        let tx = WorkflowService::record(
            FinanceEntry { amount: MAX_AMOUNT, ..entry() },
            &directory(),
            &treasurer,
        )
        .unwrap();
        assert_eq!(tx.amount, MAX_AMOUNT);

        for amount in [dec!(1000000000.01), Decimal::MAX] {
            let err = WorkflowService::record(
                FinanceEntry { amount, ..entry() },
                &directory(),
                &treasurer,
            )
            .unwrap_err();
            assert_eq!(err.to_string(), "Amount must not exceed 1,000,000,000");

            assert!(matches!(
                WorkflowService::edit_amount(amount, &treasurer),
                Err(WorkflowError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_record_rejects_inactive_member() {
        let mut members = directory();
        members[0].is_active = false;
        let err = WorkflowService::record(entry(), &members, &caps(UserRole::Treasurer)).unwrap_err();
        assert!(matches!(err, WorkflowError::MemberNotFound(_)));
    }

    #[test]
    fn test_approve_from_pending() {
        let action = WorkflowService::approve(&pending(), "John Kiprop", &caps(UserRole::Chairman)).unwrap();
        assert_eq!(action.new_status(), Some(TransactionStatus::Approved));
        assert!(matches!(action, WorkflowAction::Approve { ref approved_by, .. } if approved_by == "John Kiprop"));
    }

    #[test]
    fn test_approve_requires_capability() {
        let err = WorkflowService::approve(&pending(), "Peter Kiptoo", &caps(UserRole::Secretary)).unwrap_err();
        assert!(matches!(err, WorkflowError::Auth(_)));
    }

    #[test]
    fn test_decided_transactions_are_final() {
        let treasurer = caps(UserRole::Treasurer);
        for status in [TransactionStatus::Approved, TransactionStatus::Rejected] {
            let mut tx = pending();
            tx.status = status;

            assert!(matches!(
                WorkflowService::approve(&tx, "Mary Chebet", &treasurer),
                Err(WorkflowError::InvalidTransition { .. })
            ));
            assert!(matches!(
                WorkflowService::reject(&tx, &treasurer),
                Err(WorkflowError::InvalidTransition { .. })
            ));
        }
    }

    #[test]
    fn test_reject_then_apply() {
        let mut tx = pending();
        WorkflowService::reject(&tx, &caps(UserRole::OverallAdmin))
            .unwrap()
            .apply(&mut tx);
        assert_eq!(tx.status, TransactionStatus::Rejected);
    }

    #[test]
    fn test_edit_amount() {
        let treasurer = caps(UserRole::Treasurer);
        let mut tx = pending();
        tx.status = TransactionStatus::Approved;

        WorkflowService::edit_amount(dec!(4500), &treasurer)
            .unwrap()
            .apply(&mut tx);
        assert_eq!(tx.amount, dec!(4500));
        assert_eq!(tx.status, TransactionStatus::Approved);

        assert!(WorkflowService::edit_amount(dec!(-1), &treasurer).is_err());
        assert!(WorkflowService::edit_amount(dec!(4500), &treasurer).is_ok());
        assert!(WorkflowService::edit_amount(dec!(1), &caps(UserRole::Secretary)).is_err());
    }

    #[test]
    fn test_is_valid_transition() {
        assert!(WorkflowService::is_valid_transition(TransactionStatus::Pending, TransactionStatus::Approved));
        assert!(WorkflowService::is_valid_transition(TransactionStatus::Pending, TransactionStatus::Rejected));
        assert!(!WorkflowService::is_valid_transition(TransactionStatus::Approved, TransactionStatus::Pending));
        assert!(!WorkflowService::is_valid_transition(TransactionStatus::Rejected, TransactionStatus::Approved));
    }

    #[test]
    fn test_require_mut() {
        let mut txs = vec![pending()];
        let id = txs[0].id;
        assert!(WorkflowService::require_mut(&mut txs, id).is_ok());
        assert!(matches!(
            WorkflowService::require_mut(&mut txs, TransactionId::new()),
            Err(WorkflowError::TransactionNotFound(_))
        ));
    }
}
