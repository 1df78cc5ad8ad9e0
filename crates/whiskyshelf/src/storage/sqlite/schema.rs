//! SQLite schema definition and SQL statement constants.
//!
//! All SQL used by the SQLite repository lives here as parameterized
//! statements; ids never get spliced into query text.

/// SQL statement to create the whiskies table.
pub const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS whiskies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    origin TEXT NOT NULL
)
"#;

pub const INSERT_WHISKY: &str = r#"
INSERT INTO whiskies (name, origin)
VALUES (?1, ?2)
"#;

pub const SELECT_ALL_WHISKIES: &str = r#"
SELECT id, name, origin
FROM whiskies
ORDER BY id ASC
"#;

pub const SELECT_WHISKY_BY_ID: &str = r#"
SELECT id, name, origin
FROM whiskies
WHERE id = ?1
"#;

pub const UPDATE_WHISKY: &str = r#"
UPDATE whiskies
SET name = ?2, origin = ?3
WHERE id = ?1
"#;

pub const DELETE_WHISKY: &str = r#"
DELETE FROM whiskies
WHERE id = ?1
"#;
