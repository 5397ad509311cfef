pub mod journal_config;

pub use journal_config::JournalConfig;
