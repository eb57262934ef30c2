//! SQL DDL for the content store.
//! Base tables carry the columns of the first release; later columns are
//! listed in [`OPTIONAL_COLUMNS`] and added in place on existing files.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT on every table
/// - `users.username` UNIQUE (the only uniqueness constraint)
/// - `password` stored verbatim
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS services (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    icon TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS team (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    title TEXT NOT NULL,
    image TEXT NOT NULL
);
"#;

/// A column introduced after the initial release.
#[derive(Debug, Clone, Copy)]
pub struct OptionalColumn {
    pub table: &'static str,
    pub column: &'static str,
    /// Type and default clause as used in `ALTER TABLE ... ADD COLUMN`.
    pub definition: &'static str,
}

impl OptionalColumn {
    pub fn alter_statement(&self) -> String {
        format!(
            "ALTER TABLE {} ADD COLUMN {} {}",
            self.table, self.column, self.definition
        )
    }
}

pub const OPTIONAL_COLUMNS: &[OptionalColumn] = &[
    OptionalColumn {
        table: "users",
        column: "role",
        definition: "TEXT DEFAULT 'editor'",
    },
    OptionalColumn {
        table: "services",
        column: "file_url",
        definition: "TEXT",
    },
    OptionalColumn {
        table: "team",
        column: "icon",
        definition: "TEXT",
    },
];
