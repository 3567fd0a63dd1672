//! Three-way watched/unwatched/all partition of the record list.

use std::fmt;
use std::str::FromStr;

use watchlist_core::record::MovieRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Watched,
    ToWatch,
}

impl Filter {
    pub fn matches(self, record: &MovieRecord) -> bool {
        match self {
            Self::All => true,
            Self::Watched => record.watched,
            Self::ToWatch => !record.watched,
        }
    }

    /// The records passing this filter, in list order.
    pub fn apply(self, records: &[MovieRecord]) -> Vec<&MovieRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Watched => "watched",
            Self::ToWatch => "toWatch",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "all" => Ok(Self::All),
            "watched" => Ok(Self::Watched),
            "towatch" => Ok(Self::ToWatch),
            _ => Err(format!(
                "unknown filter '{s}' (expected all, watched or toWatch)"
            )),
        }
    }
}
