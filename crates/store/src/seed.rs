//! Demo group used by the console and in tests.

use chama_core::auth::{AuthError, UserRole, hash_pin};
use chama_core::ledger::{Transaction, TransactionStatus, TransactionType};
use chama_core::members::Member;
use chama_shared::types::{MemberCode, MemberId, TransactionId};
use chama_shared::{AppError, AppResult};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use tracing::info;

use crate::Store;

/// `(code, name, id number, phone, pin, role)`.
pub const DEMO_MEMBERS: [(&str, &str, &str, &str, &str, UserRole); 5] = [
    ("admin001", "System Administrator", "00000000", "0700000000", "1234", UserRole::OverallAdmin),
    ("chair001", "John Kiprop", "12345678", "0712345678", "5678", UserRole::Chairman),
    ("treas001", "Mary Chebet", "23456789", "0723456789", "9012", UserRole::Treasurer),
    ("sec001", "Peter Kiptoo", "34567890", "0734567890", "3456", UserRole::Secretary),
    ("mem001", "Grace Jepkosgei", "45678901", "0745678901", "7890", UserRole::Member),
];

struct DemoTransaction {
    code: &'static str,
    name: &'static str,
    amount: i64,
    description: &'static str,
    created: (u32, u32, u32, u32),
    approved: Option<(&'static str, (u32, u32, u32, u32))>,
}

const DEMO_TRANSACTIONS: [DemoTransaction; 5] = [
    DemoTransaction {
        code: "mem001",
        name: "Grace Jepkosgei",
        amount: 5000,
        description: "Monthly contribution - January",
        created: (1, 15, 10, 30),
        approved: Some(("Mary Chebet", (1, 15, 11, 0))),
    },
    DemoTransaction {
        code: "mem001",
        name: "Grace Jepkosgei",
        amount: 5000,
        description: "Monthly contribution - February",
        created: (2, 15, 9, 0),
        approved: Some(("Mary Chebet", (2, 15, 9, 30))),
    },
    DemoTransaction {
        code: "chair001",
        name: "John Kiprop",
        amount: 10000,
        description: "Monthly contribution - January",
        created: (1, 10, 8, 0),
        approved: Some(("Mary Chebet", (1, 10, 8, 30))),
    },
    DemoTransaction {
        code: "treas001",
        name: "Mary Chebet",
        amount: 7500,
        description: "Monthly contribution - January",
        created: (1, 12, 14, 0),
        approved: Some(("John Kiprop", (1, 12, 14, 30))),
    },
    DemoTransaction {
        code: "mem001",
        name: "Grace Jepkosgei",
        amount: 5000,
        description: "Monthly contribution - March",
        created: (3, 15, 14, 0),
        approved: None,
    },
];

/// A time in 2024, the year the demo ledger covers.
fn at((month, day, hour, minute): (u32, u32, u32, u32)) -> AppResult<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2024, month, day, hour, minute, 0)
        .single()
        .ok_or_else(|| AppError::Internal(format!("invalid demo date 2024-{month}-{day}")))
}

/// Fills an empty store with the demo group: five members, one per role,
/// and five contributions of which one is still pending.
///
/// # Errors
///
/// Returns an error if a PIN cannot be hashed.
pub async fn seed_demo_data(store: &Store) -> AppResult<()> {
    let created_at = Utc::now();

    for (code, name, id_number, phone_number, pin, role) in DEMO_MEMBERS {
        let pin_hash = hash_pin(pin).map_err(AuthError::from)?;
        store
            .members
            .insert(Member {
                id: MemberId::new(),
                member_code: MemberCode::new(code),
                name: name.to_string(),
                id_number: id_number.to_string(),
                phone_number: phone_number.to_string(),
                pin_hash,
                role,
                passport_photo: None,
                document_photo: None,
                created_at,
                is_active: true,
            })
            .await;
    }

    for demo in DEMO_TRANSACTIONS {
        let (status, approved_by, approved_at) = match demo.approved {
            Some((by, when)) => (TransactionStatus::Approved, Some(by.to_string()), Some(at(when)?)),
            None => (TransactionStatus::Pending, None, None),
        };

        store
            .transactions
            .insert(Transaction {
                id: TransactionId::new(),
                member_code: MemberCode::new(demo.code),
                member_name: demo.name.to_string(),
                amount: Decimal::from(demo.amount),
                transaction_type: TransactionType::Contribution,
                description: demo.description.to_string(),
                status,
                created_at: at(demo.created)?,
                approved_by,
                approved_at,
            })
            .await;
    }

    info!(
        members = DEMO_MEMBERS.len(),
        transactions = DEMO_TRANSACTIONS.len(),
        "Seeded demo group"
    );
    Ok(())
}
