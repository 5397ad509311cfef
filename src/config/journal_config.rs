use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

//journal configuration, cli flags override these values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    //account balance before any trade or transaction
    pub starting_balance: f64,

    //commission applied to manually entered trades when none is given
    pub default_commission: f64,

    //display currency
    pub currency: String,

    //journal trades csv
    pub trades_path: Option<PathBuf>,

    //deposits and withdrawals csv
    pub transactions_path: Option<PathBuf>,
}

impl Default for JournalConfig {
    fn default() -> Self {
        JournalConfig {
            starting_balance: 50000.0,
            default_commission: 0.0,
            currency: "USD".to_string(),
            trades_path: None,
            transactions_path: None,
        }
    }
}

impl JournalConfig {
    //load configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: JournalConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    //save configuration to a JSON file
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
