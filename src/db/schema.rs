pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS people (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    name     TEXT NOT NULL UNIQUE CHECK(length(trim(name)) > 0),
    category TEXT NOT NULL DEFAULT 'client'
);

CREATE TABLE IF NOT EXISTS payments (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    date          TEXT NOT NULL,
    person        TEXT NOT NULL,
    amount        TEXT NOT NULL,
    txn_type      TEXT NOT NULL,
    method        TEXT NOT NULL,
    cheque_status TEXT NOT NULL DEFAULT 'none',
    status        TEXT NOT NULL DEFAULT 'completed',
    description   TEXT NOT NULL DEFAULT '',
    created_at    TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_payments_date ON payments(date);
CREATE INDEX IF NOT EXISTS idx_payments_person ON payments(person);

"#;

pub(crate) const CURRENT_VERSION: i32 = 1;

/// Migrations from version N to N+1.
/// Each entry is (from_version, sql).
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[
    // Future migrations go here:
    // (1, "ALTER TABLE payments ADD COLUMN reference TEXT NOT NULL DEFAULT '';"),
];
