//! SQL query constants
//!
//! Contains all SQL statements used by the application.

/// Connectivity check
pub const PING: &str = "SELECT 1";

/// Idempotent DDL run once at startup
pub const CREATE_RECORDS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS records (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL
    )
"#;

/// List all records (no ordering guaranteed)
pub const LIST_RECORDS: &str = "SELECT id, name, email FROM records";

/// Insert a record and hand back the generated id
pub const INSERT_RECORD: &str = r#"
    INSERT INTO records (name, email)
    VALUES ($1, $2)
    RETURNING id
"#;

pub const UPDATE_RECORD: &str = "UPDATE records SET name = $1, email = $2 WHERE id = $3";

pub const DELETE_RECORD: &str = "DELETE FROM records WHERE id = $1";
