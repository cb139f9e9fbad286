mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::*;

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        // Check if schema_version table exists
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database - apply full schema
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        // Existing database - check version and apply migrations
        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    // ── Payments ──────────────────────────────────────────────

    pub(crate) fn insert_payment(&self, payment: &Payment) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO payments (date, person, amount, txn_type, method, cheque_status, status, description, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                payment.date,
                payment.person,
                payment.amount.to_string(),
                payment.txn_type.as_str(),
                payment.method.as_str(),
                payment.cheque_status.as_str(),
                payment.status.as_str(),
                payment.description,
                payment.created_at,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub(crate) fn insert_payments_batch(&mut self, payments: &[Payment]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        for payment in payments {
            tx.execute(
                "INSERT INTO payments (date, person, amount, txn_type, method, cheque_status, status, description, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    payment.date,
                    payment.person,
                    payment.amount.to_string(),
                    payment.txn_type.as_str(),
                    payment.method.as_str(),
                    payment.cheque_status.as_str(),
                    payment.status.as_str(),
                    payment.description,
                    payment.created_at,
                ],
            )?;
        }
        tx.commit()?;
        Ok(payments.len())
    }

    /// The full ledger in entry order (date, then insertion id). This is the
    /// order the filter engine preserves.
    pub(crate) fn get_payments(&self) -> Result<Vec<Payment>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, person, amount, txn_type, method, cheque_status, status, description, created_at
             FROM payments ORDER BY date ASC, id ASC",
        )?;
        let rows = stmt.query_map([], payment_from_row)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn payment_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM payments", [], |row| row.get(0))?)
    }

    pub(crate) fn delete_payment(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM payments WHERE id = ?1", params![id])?;
        Ok(())
    }

    pub(crate) fn update_cheque_status(&self, id: i64, status: ChequeStatus) -> Result<()> {
        self.conn.execute(
            "UPDATE payments SET cheque_status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )?;
        Ok(())
    }

    pub(crate) fn update_status(&self, id: i64, status: Status) -> Result<()> {
        self.conn.execute(
            "UPDATE payments SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )?;
        Ok(())
    }

    // ── People ────────────────────────────────────────────────

    /// Names are trimmed, must be non-empty, and are unique without regard
    /// to case, matching how the engine compares persons.
    pub(crate) fn insert_person(&self, person: &Person) -> Result<i64> {
        let name = person.name.trim();
        if name.is_empty() {
            anyhow::bail!("person name cannot be empty");
        }
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM people WHERE LOWER(name) = LOWER(?1))",
            params![name],
            |row| row.get(0),
        )?;
        if exists {
            anyhow::bail!("'{name}' is already registered");
        }
        self.conn.execute(
            "INSERT INTO people (name, category) VALUES (?1, ?2)",
            params![name, person.category.as_str()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub(crate) fn get_people(&self) -> Result<Vec<Person>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, category FROM people ORDER BY name")?;
        let rows = stmt.query_map([], |row| {
            let category: String = row.get(2)?;
            Ok(Person {
                id: Some(row.get(0)?),
                name: row.get(1)?,
                category: PersonCategory::parse(&category).unwrap_or(PersonCategory::Client),
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn delete_person(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM people WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// A person with recorded payments cannot be deleted.
    pub(crate) fn person_has_payments(&self, name: &str) -> Result<bool> {
        Ok(self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM payments WHERE LOWER(person) = LOWER(?1))",
            params![name],
            |row| row.get(0),
        )?)
    }
}

fn payment_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Payment> {
    let amount_str: String = row.get(3)?;
    let txn_type: String = row.get(4)?;
    let method: String = row.get(5)?;
    let cheque_status: String = row.get(6)?;
    let status: String = row.get(7)?;
    Ok(Payment {
        id: Some(row.get(0)?),
        date: row.get(1)?,
        person: row.get(2)?,
        amount: Decimal::from_str(&amount_str).unwrap_or_default(),
        txn_type: TxnType::parse(&txn_type).ok_or_else(|| bad_column(4, &txn_type))?,
        method: PayMethod::parse(&method).ok_or_else(|| bad_column(5, &method))?,
        cheque_status: ChequeStatus::parse(&cheque_status)
            .ok_or_else(|| bad_column(6, &cheque_status))?,
        status: Status::parse(&status).ok_or_else(|| bad_column(7, &status))?,
        description: row.get(8)?,
        created_at: row.get(9)?,
    })
}

fn bad_column(index: usize, value: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        index,
        rusqlite::types::Type::Text,
        format!("unrecognized value '{value}'").into(),
    )
}
