//! SQL dialect selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The SQL backend the directory talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseDialect {
    /// MySQL / MariaDB.
    #[serde(alias = "mariadb")]
    Mysql,
    /// PostgreSQL.
    #[serde(alias = "postgresql")]
    Postgres,
    /// SQLite file or in-memory database.
    #[default]
    Sqlite,
}

impl DatabaseDialect {
    /// URL scheme understood by the sqlx driver for this dialect.
    #[must_use]
    pub const fn scheme(self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
        }
    }

    /// Port used when none is configured.
    #[must_use]
    pub const fn default_port(self) -> Option<u16> {
        match self {
            Self::Mysql => Some(3306),
            Self::Postgres => Some(5432),
            Self::Sqlite => None,
        }
    }
}

impl fmt::Display for DatabaseDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

impl FromStr for DatabaseDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Self::Mysql),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(format!("Unsupported database dialect: {other}")),
        }
    }
}
