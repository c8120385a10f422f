//! Property-based tests for ledger aggregation.

use chama_shared::types::{MemberCode, TransactionId};
use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::balance::{LedgerScope, aggregate};
use super::transaction::Transaction;
use super::types::{TransactionStatus, TransactionType};

fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn transaction_type() -> impl Strategy<Value = TransactionType> {
    prop_oneof![
        Just(TransactionType::Contribution),
        Just(TransactionType::Withdrawal),
        Just(TransactionType::Expense),
        Just(TransactionType::Loan),
    ]
}

fn status() -> impl Strategy<Value = TransactionStatus> {
    prop_oneof![
        Just(TransactionStatus::Pending),
        Just(TransactionStatus::Approved),
        Just(TransactionStatus::Rejected),
    ]
}

fn member_code() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("mem001"), Just("chair001"), Just("treas001")]
}

fn epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(1_704_067_200, 0).unwrap_or_default()
}

fn transaction() -> impl Strategy<Value = Transaction> {
    (
        member_code(),
        positive_amount(),
        transaction_type(),
        status(),
        0i64..100_000,
        proptest::option::of(0i64..100_000),
    )
        .prop_map(|(code, amount, kind, status, created, approved)| Transaction {
            id: TransactionId::new(),
            member_code: MemberCode::new(code),
            member_name: code.to_string(),
            amount,
            transaction_type: kind,
            description: "generated".to_string(),
            status,
            created_at: epoch() + Duration::minutes(created),
            approved_by: None,
            approved_at: approved.map(|m| epoch() + Duration::minutes(m)),
        })
}

fn ledger() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(transaction(), 0..40)
}

proptest! {
    /// Adding rejected transactions never changes a summary.
    #[test]
    fn prop_rejected_is_inert(
        txs in ledger(),
        extra in prop::collection::vec(transaction(), 0..10),
    ) {
        let before = aggregate(&txs, &LedgerScope::All).unwrap();

        let mut with_rejected = txs.clone();
        with_rejected.extend(extra.into_iter().map(|mut tx| {
            tx.status = TransactionStatus::Rejected;
            tx
        }));

        prop_assert_eq!(aggregate(&with_rejected, &LedgerScope::All).unwrap(), before);
    }

    /// Scoping to a member equals aggregating the pre-filtered list.
    #[test]
    fn prop_scope_matches_prefilter(txs in ledger(), code in member_code()) {
        let filtered: Vec<Transaction> = txs
            .iter()
            .filter(|tx| tx.member_code.matches(code))
            .cloned()
            .collect();

        prop_assert_eq!(
            aggregate(&txs, &LedgerScope::member(code)).unwrap(),
            aggregate(&filtered, &LedgerScope::All).unwrap()
        );
    }

    /// Member balances add up to the group balance.
    #[test]
    fn prop_member_balances_sum_to_group(txs in ledger()) {
        let total: Decimal = ["mem001", "chair001", "treas001"]
            .iter()
            .map(|code| aggregate(&txs, &LedgerScope::member(code)).unwrap().balance)
            .sum();
        prop_assert_eq!(total, aggregate(&txs, &LedgerScope::All).unwrap().balance);
    }

    /// Aggregation is a pure function of its input.
    #[test]
    fn prop_idempotent(txs in ledger()) {
        let first = aggregate(&txs, &LedgerScope::All).unwrap();
        let second = aggregate(&txs, &LedgerScope::All).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Order of transactions does not affect the summary.
    #[test]
    fn prop_order_independent(txs in ledger()) {
        let mut reversed = txs.clone();
        reversed.reverse();
        prop_assert_eq!(
            aggregate(&txs, &LedgerScope::All).unwrap(),
            aggregate(&reversed, &LedgerScope::All).unwrap()
        );
    }

    /// Counts partition the non-rejected transactions.
    #[test]
    fn prop_counts_partition(txs in ledger()) {
        let summary = aggregate(&txs, &LedgerScope::All).unwrap();
        let live = txs.iter().filter(|tx| tx.status != TransactionStatus::Rejected).count();
        prop_assert_eq!(summary.approved_count + summary.pending_count, live);
        prop_assert!(summary.pending_amount >= Decimal::ZERO);
    }

    /// `last_posted` is the maximum posting time of approved transactions.
    #[test]
    fn prop_last_posted_is_max(txs in ledger()) {
        let expected = txs
            .iter()
            .filter(|tx| tx.is_approved())
            .map(Transaction::posted_at)
            .max();
        let summary = aggregate(&txs, &LedgerScope::All).unwrap();
        prop_assert_eq!(summary.last_posted, expected);
        prop_assert_eq!(summary.last_posted.is_none(), summary.approved_count == 0);
    }
}
