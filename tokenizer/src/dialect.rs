/// SQL dialect selection.
///
/// Only lexical differences matter here: quoting characters, comment
/// syntax, and string escape style. Grammar-level dialect behavior is
/// out of scope.
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    #[default]
    Ansi,
    Postgres,
    MySql,
    BigQuery,
    DuckDb,
}

impl Dialect {
    /// Does `quote` open a quoted identifier in this dialect?
    ///
    /// Double quotes delimit identifiers everywhere; MySQL and BigQuery
    /// additionally use backticks.
    pub fn is_ident_quote(self, quote: char) -> bool {
        match quote {
            '"' => true,
            '`' => matches!(self, Self::MySql | Self::BigQuery),
            _ => false,
        }
    }

    /// Are `# …` line comments recognized?
    pub fn hash_comments(self) -> bool {
        matches!(self, Self::MySql | Self::BigQuery)
    }

    /// Do backslashes escape the next character inside string literals?
    /// (Everywhere else only the doubled `''` escape applies.)
    pub fn backslash_escapes(self) -> bool {
        matches!(self, Self::MySql | Self::BigQuery)
    }

    /// Do block comments nest? Postgres is the odd one out.
    pub fn nested_comments(self) -> bool {
        matches!(self, Self::Postgres)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ansi => "ansi",
            Self::Postgres => "postgres",
            Self::MySql => "mysql",
            Self::BigQuery => "bigquery",
            Self::DuckDb => "duckdb",
        };
        write!(f, "{}", name)
    }
}

/// Error returned when a dialect name is not recognized.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownDialect {
    pub name: String,
}

impl std::fmt::Display for UnknownDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown dialect: {}", self.name)
    }
}

impl std::error::Error for UnknownDialect {}

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" | "ansi" => Ok(Self::Ansi),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "mysql" => Ok(Self::MySql),
            "bigquery" => Ok(Self::BigQuery),
            "duckdb" => Ok(Self::DuckDb),
            _ => Err(UnknownDialect {
                name: s.to_string(),
            }),
        }
    }
}
