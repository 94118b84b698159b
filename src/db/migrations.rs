use anyhow::Context;
use rusqlite::Connection;

// Embedded so tests against :memory: databases work regardless of cwd.
const MIGRATIONS: &[(&str, &str)] = &[(
    "0001_init.sql",
    include_str!("../../migrations/0001_init.sql"),
)];

pub fn run_migrations(conn: &Connection) -> anyhow::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS _migrations (
            name TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )
    .context("failed to create migrations table")?;

    for (name, sql) in MIGRATIONS {
        let already_applied: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM _migrations WHERE name = ?1",
                [name],
                |row| row.get(0),
            )
            .context("failed to check migration status")?;

        if already_applied {
            continue;
        }

        conn.execute_batch(sql)
            .with_context(|| format!("failed to apply migration: {name}"))?;

        conn.execute("INSERT INTO _migrations (name) VALUES (?1)", [name])
            .with_context(|| format!("failed to record migration: {name}"))?;

        tracing::info!("applied migration: {name}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::db;

    #[test]
    fn test_migrations_seed_seven_weekdays() {
        let conn = db::init_db(":memory:").unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM business_hours", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 7);

        let sunday_closed: bool = conn
            .query_row(
                "SELECT closed FROM business_hours WHERE weekday = 'sunday'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(sunday_closed);
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let conn = db::init_db(":memory:").unwrap();
        // Re-running against the same connection must be a no-op.
        db::migrations::run_migrations(&conn).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM business_hours", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 7);
    }
}
