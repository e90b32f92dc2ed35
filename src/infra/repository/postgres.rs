//! Postgres schema definitions for ledger persistence (schema-only; DB I/O
//! is wired by the integration layer).

/// SQL migrations for the availability, allocation, and risk tables. Value
/// collections are stored as jsonb, matching how the aggregates serialize.
pub struct PostgresSchema;

impl PostgresSchema {
    /// Returns SQL migration statements for the ledger tables.
    #[must_use]
    pub const fn migrations() -> &'static [&'static str] {
        &[
            r"
CREATE TABLE IF NOT EXISTS resource_availability (
    id UUID PRIMARY KEY,
    resource_id UUID NOT NULL,
    from_date TIMESTAMPTZ NOT NULL,
    to_date TIMESTAMPTZ NOT NULL,
    owner_id UUID,
    status TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_resource_availability_resource ON resource_availability (resource_id);
",
            r"
CREATE TABLE IF NOT EXISTS project_allocations (
    project_id UUID PRIMARY KEY,
    allocations JSONB NOT NULL,
    demands JSONB NOT NULL,
    from_date TIMESTAMPTZ,
    to_date TIMESTAMPTZ
);
",
            r"
CREATE TABLE IF NOT EXISTS project_risk_sagas (
    saga_id UUID PRIMARY KEY,
    project_id UUID NOT NULL UNIQUE,
    missing_demands JSONB NOT NULL,
    earnings BIGINT,
    deadline TIMESTAMPTZ,
    version BIGINT NOT NULL
);
",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::PostgresSchema;

    #[test]
    fn migrations_cover_all_three_tables() {
        let combined = PostgresSchema::migrations().join("\n");
        for table in [
            "resource_availability",
            "project_allocations",
            "project_risk_sagas",
        ] {
            assert!(combined.contains(table), "missing table {table}");
        }
    }
}
