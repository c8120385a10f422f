//! Property-based tests for role resolution.

use proptest::prelude::*;

use super::permissions::{PermissionTable, resolve};
use super::role::UserRole;

/// Strategy for generating random UserRole values.
fn arb_user_role() -> impl Strategy<Value = UserRole> {
    prop_oneof![
        Just(UserRole::Chairman),
        Just(UserRole::OverallAdmin),
        Just(UserRole::Treasurer),
        Just(UserRole::Secretary),
        Just(UserRole::Member),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any string that is not a role identifier resolves to member permissions.
    #[test]
    fn prop_unknown_identifiers_fail_closed(raw in "[a-z_]{0,16}") {
        prop_assume!(UserRole::parse(&raw).is_none());
        let table = PermissionTable::STANDARD;
        prop_assert_eq!(
            table.resolve_identifier(Some(&raw)),
            table.resolve(UserRole::Member)
        );
    }

    /// Resolution is a pure function of the role.
    #[test]
    fn prop_resolution_is_deterministic(role in arb_user_role()) {
        prop_assert_eq!(resolve(role), resolve(role));
        prop_assert_eq!(
            PermissionTable::STANDARD.capabilities(role),
            PermissionTable::default().capabilities(role)
        );
    }

    /// is_admin is exactly "not a plain member".
    #[test]
    fn prop_is_admin_iff_not_member(role in arb_user_role()) {
        let caps = PermissionTable::STANDARD.capabilities(role);
        prop_assert_eq!(caps.is_admin, role != UserRole::Member);
    }

    /// Financial admins always see the total balance; others never do.
    #[test]
    fn prop_financial_admins_see_total_balance(role in arb_user_role()) {
        let caps = PermissionTable::STANDARD.capabilities(role);
        prop_assert_eq!(caps.is_financial_admin, caps.permissions.can_view_total_balance);
    }
}
