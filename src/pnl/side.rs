use crate::error::JournalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//position direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Side {
    Long,
    Short,
}

impl Side {
    //signed price movement in the position's favour
    pub fn price_diff(&self, entry_price: f64, exit_price: f64) -> f64 {
        match self {
            Side::Long => exit_price - entry_price,
            Side::Short => entry_price - exit_price,
        }
    }
}

impl FromStr for Side {
    type Err = JournalError;

    //buy/sell are accepted as long/short
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "long" | "buy" => Ok(Side::Long),
            "short" | "sell" => Ok(Side::Short),
            _ => Err(JournalError::InvalidSide(s.to_string())),
        }
    }
}

impl TryFrom<String> for Side {
    type Error = JournalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Long => write!(f, "LONG"),
            Side::Short => write!(f, "SHORT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("LONG".parse::<Side>().unwrap(), Side::Long);
        assert_eq!(" short ".parse::<Side>().unwrap(), Side::Short);
        assert_eq!("Buy".parse::<Side>().unwrap(), Side::Long);
        assert_eq!("sell".parse::<Side>().unwrap(), Side::Short);
        assert!(matches!("flat".parse::<Side>(), Err(JournalError::InvalidSide(_))));
    }

    #[test]
    fn serializes_upper_case() {
        assert_eq!(serde_json::to_string(&Side::Short).unwrap(), "\"SHORT\"");
        let side: Side = serde_json::from_str("\"long\"").unwrap();
        assert_eq!(side, Side::Long);
    }

    #[test]
    fn price_diff_follows_direction() {
        assert_eq!(Side::Long.price_diff(100.0, 110.0), 10.0);
        assert_eq!(Side::Short.price_diff(100.0, 110.0), -10.0);
    }
}
