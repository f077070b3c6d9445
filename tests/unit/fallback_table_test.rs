// Fallback table consistency
//
// Degraded-mode figures must be plausible: the all-time totals and counts in
// the built-in table equal what the live path computes from the seed data.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use property_revenue::revenue::{FallbackFigures, FallbackTable};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_fallback_totals_match_seed_data() {
    let table = FallbackTable::builtin();
    let seed = seed_reservations();

    for tenant_id in table.tenant_ids() {
        for (property_id, figures) in table.entries_for(tenant_id) {
            let rows: Vec<_> = seed
                .iter()
                .filter(|r| r.tenant_id == tenant_id && r.property_id == property_id)
                .collect();
            let total: Decimal = rows.iter().map(|r| r.total_amount).sum();

            assert_eq!(
                figures.total, total,
                "total for {}/{} diverges from seed",
                tenant_id, property_id
            );
            assert_eq!(
                figures.reservation_count,
                rows.len() as i64,
                "count for {}/{} diverges from seed",
                tenant_id, property_id
            );
        }
    }
}

#[test]
fn test_every_seeded_pair_has_fallback_entry() {
    let table = FallbackTable::builtin();

    for res in seed_reservations() {
        assert!(
            table.lookup(&res.tenant_id, &res.property_id).is_some(),
            "no fallback entry for {}/{}",
            res.tenant_id,
            res.property_id
        );
    }
}

#[test]
fn test_shared_property_id_is_not_aliased() {
    let table = FallbackTable::builtin();

    let a = table.resolve(TENANT_A, "prop-001");
    let b = table.resolve(TENANT_B, "prop-001");

    assert_eq!(a.total, dec!(2250.000));
    assert_eq!(b.total, dec!(0.000));
    assert_ne!(a, b);
}

#[test]
fn test_monthly_figures() {
    let table = FallbackTable::builtin();

    assert_eq!(table.resolve(TENANT_A, "prop-001").monthly_total, dec!(333.333));
    assert_eq!(table.resolve(TENANT_A, "prop-002").monthly_total, dec!(1243.875));
    assert_eq!(table.resolve(TENANT_A, "prop-003").monthly_total, dec!(3050.250));
    assert_eq!(table.resolve(TENANT_B, "prop-004").monthly_total, dec!(444.125));
    assert_eq!(table.resolve(TENANT_B, "prop-005").monthly_total, dec!(1085.333));
}

#[test]
fn test_unknown_pairs_resolve_to_absent() {
    let table = FallbackTable::builtin();

    assert_eq!(table.resolve("tenant-c", "prop-001"), FallbackFigures::absent());
    assert_eq!(table.resolve(TENANT_B, "prop-002"), FallbackFigures::absent());
    assert_eq!(FallbackFigures::absent().total.to_string(), "0.000");
}
