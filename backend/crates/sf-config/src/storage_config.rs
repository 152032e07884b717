use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Where shipping addresses are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressBackend {
    /// Users, sessions and addresses in the SQLite database
    #[default]
    Sqlite,
    /// Process-local map keyed by token; lost on restart
    Memory,
}

impl AddressBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Memory => "memory",
        }
    }
}

impl FromStr for AddressBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown address backend '{}'", other)),
        }
    }
}

impl fmt::Display for AddressBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub address_backend: AddressBackend,
}
