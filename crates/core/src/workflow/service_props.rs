//! Property-based tests for WorkflowService.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::auth::{PermissionTable, UserRole};
use crate::ledger::{Transaction, TransactionStatus, TransactionType};
use crate::workflow::error::WorkflowError;
use crate::workflow::service::WorkflowService;

fn arb_status() -> impl Strategy<Value = TransactionStatus> {
    prop_oneof![
        Just(TransactionStatus::Pending),
        Just(TransactionStatus::Approved),
        Just(TransactionStatus::Rejected),
    ]
}

fn arb_role() -> impl Strategy<Value = UserRole> {
    proptest::sample::select(UserRole::ALL.to_vec())
}

fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn transaction(status: TransactionStatus) -> Transaction {
    Transaction::fixture("mem001", Decimal::new(500_000, 2), TransactionType::Contribution, status)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Approve and reject succeed exactly when the status is pending and the
    /// role may approve.
    #[test]
    fn prop_decisions_follow_status_and_role(status in arb_status(), role in arb_role()) {
        let caps = PermissionTable::STANDARD.capabilities(role);
        let tx = transaction(status);
        let allowed = caps.permissions.can_approve_transactions;

        let approve = WorkflowService::approve(&tx, "approver", &caps);
        let reject = WorkflowService::reject(&tx, &caps);

        let expected = allowed && status == TransactionStatus::Pending;
        prop_assert_eq!(approve.is_ok(), expected);
        prop_assert_eq!(reject.is_ok(), expected);

        if !allowed {
            prop_assert!(matches!(approve, Err(WorkflowError::Auth(_))), "missing capability is reported first");
        }
    }

    /// An applied action always lands on a valid transition.
    #[test]
    fn prop_applied_actions_are_valid_transitions(status in arb_status(), approve in any::<bool>()) {
        let caps = PermissionTable::STANDARD.capabilities(UserRole::Treasurer);
        let mut tx = transaction(status);
        let result = if approve {
            WorkflowService::approve(&tx, "Mary Chebet", &caps)
        } else {
            WorkflowService::reject(&tx, &caps)
        };

        if let Ok(action) = result {
            let before = tx.status;
            action.apply(&mut tx);
            prop_assert!(WorkflowService::is_valid_transition(before, tx.status));
            prop_assert_eq!(tx.approved_at.is_some(), tx.status == TransactionStatus::Approved);
        }
    }

    /// Edited amounts are always positive.
    #[test]
    fn prop_edit_keeps_amounts_positive(amount in arb_amount(), status in arb_status()) {
        let caps = PermissionTable::STANDARD.capabilities(UserRole::Chairman);
        let mut tx = transaction(status);
        if let Ok(action) = WorkflowService::edit_amount(amount, &caps) {
            action.apply(&mut tx);
        }
        prop_assert!(tx.amount > Decimal::ZERO);
        prop_assert_eq!(tx.status, status);
    }
}
