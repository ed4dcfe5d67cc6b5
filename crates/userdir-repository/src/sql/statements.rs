//! SQL text for the `users` table, per dialect.
//!
//! PostgreSQL takes numbered `$n` placeholders, MySQL and SQLite take `?`.
//! MySQL has no `RETURNING`, so its insert reads `last_insert_id` instead.

use userdir_config::DatabaseDialect;

#[derive(Debug)]
pub(crate) struct UserStatements {
    pub create_table: &'static str,
    pub select_by_id: &'static str,
    pub select_all: &'static str,
    pub insert: &'static str,
    pub insert_returns_id: bool,
    pub update: &'static str,
    pub delete: &'static str,
}

const SELECT_ALL: &str = "SELECT id, first_name, last_name, email FROM users ORDER BY id";

static MYSQL: UserStatements = UserStatements {
    create_table: r"
        CREATE TABLE IF NOT EXISTS users (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL
        )",
    select_by_id: "SELECT id, first_name, last_name, email FROM users WHERE id = ?",
    select_all: SELECT_ALL,
    insert: "INSERT INTO users (first_name, last_name, email) VALUES (?, ?, ?)",
    insert_returns_id: false,
    update: "UPDATE users SET first_name = ?, last_name = ?, email = ? WHERE id = ?",
    delete: "DELETE FROM users WHERE id = ?",
};

static POSTGRES: UserStatements = UserStatements {
    create_table: r"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL
        )",
    select_by_id: "SELECT id, first_name, last_name, email FROM users WHERE id = $1",
    select_all: SELECT_ALL,
    insert: "INSERT INTO users (first_name, last_name, email) VALUES ($1, $2, $3) RETURNING id",
    insert_returns_id: true,
    update: "UPDATE users SET first_name = $1, last_name = $2, email = $3 WHERE id = $4",
    delete: "DELETE FROM users WHERE id = $1",
};

// AUTOINCREMENT keeps SQLite from handing out the id of a deleted row again.
static SQLITE: UserStatements = UserStatements {
    create_table: r"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL
        )",
    select_by_id: "SELECT id, first_name, last_name, email FROM users WHERE id = ?",
    select_all: SELECT_ALL,
    insert: "INSERT INTO users (first_name, last_name, email) VALUES (?, ?, ?) RETURNING id",
    insert_returns_id: true,
    update: "UPDATE users SET first_name = ?, last_name = ?, email = ? WHERE id = ?",
    delete: "DELETE FROM users WHERE id = ?",
};

impl UserStatements {
    pub(crate) fn for_dialect(dialect: DatabaseDialect) -> &'static Self {
        match dialect {
            DatabaseDialect::Mysql => &MYSQL,
            DatabaseDialect::Postgres => &POSTGRES,
            DatabaseDialect::Sqlite => &SQLITE,
        }
    }
}
