use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use famfin_core::{TransactionType, local_date, parse_timezone};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::ensure_famfin_home;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub quick_add: QuickAddSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuickAddSection {
    /// Used when no keyword decides income vs expense
    #[serde(default = "default_type")]
    pub default_type: TransactionType,
    /// IANA timezone for the default transaction date
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogSection {
    /// tracing filter directive; RUST_LOG wins when set
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_type() -> TransactionType {
    TransactionType::Expense
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for QuickAddSection {
    fn default() -> Self {
        Self {
            default_type: default_type(),
            timezone: default_timezone(),
        }
    }
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        parse_timezone(&self.quick_add.timezone).context("[quick_add] timezone")?;
        Ok(())
    }

    /// Transaction date from CLI flags: `--date` wins, then "today" in
    /// `--tz`, then "today" in `[quick_add] timezone`.
    pub fn transaction_date(&self, date: Option<NaiveDate>, tz: Option<&str>) -> Result<NaiveDate> {
        self.transaction_date_at(date, tz, Utc::now())
    }

    fn transaction_date_at(
        &self,
        date: Option<NaiveDate>,
        tz: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<NaiveDate> {
        match date {
            Some(d) => Ok(d),
            None => local_date(now, tz.unwrap_or(&self.quick_add.timezone)),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_famfin_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    let cfg: Config = toml::from_str(&s).context("parse config.toml")?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn save_config(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    init_config_at(&config_path()?)?;
    Ok(())
}

/// Writes defaults unless a file is already there. Never parses an
/// existing file, so a broken config can't block `famfin init`.
pub fn init_config_at(p: &Path) -> Result<bool> {
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(false);
    }
    save_config(&Config::default(), p)?;
    println!("Wrote {}", p.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
[quick_add]
timezone = "Asia/Ho_Chi_Minh"
"#,
        )
        .unwrap();
        assert_eq!(cfg.quick_add.timezone, "Asia/Ho_Chi_Minh");
        assert_eq!(cfg.quick_add.default_type, TransactionType::Expense);
        assert_eq!(cfg.log.level, "warn");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_default_type_round_trips() {
        let mut cfg = Config::default();
        cfg.quick_add.default_type = TransactionType::Income;
        let s = toml::to_string_pretty(&cfg).unwrap();
        assert!(s.contains(r#"default_type = "INCOME""#), "{s}");
        assert_eq!(toml::from_str::<Config>(&s).unwrap(), cfg);
    }

    #[test]
    fn test_bad_timezone_rejected() {
        let cfg: Config = toml::from_str("[quick_add]\ntimezone = \"Nowhere/City\"\n").unwrap();
        assert!(cfg.validate().is_err());
    }

    fn evening_utc() -> DateTime<Utc> {
        use chrono::TimeZone;
        // already the 21st in Saigon (UTC+7)
        Utc.with_ymd_and_hms(2026, 2, 20, 20, 0, 0).unwrap()
    }

    #[test]
    fn test_date_flag_beats_tz_flag() {
        let cfg = Config::default();
        let d = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(
            cfg.transaction_date_at(Some(d), Some("Asia/Ho_Chi_Minh"), evening_utc()).unwrap(),
            d
        );
        // an explicit date never looks at the timezone
        assert_eq!(
            cfg.transaction_date_at(Some(d), Some("Nowhere/City"), evening_utc()).unwrap(),
            d
        );
    }

    #[test]
    fn test_tz_flag_beats_configured_timezone() {
        let cfg = Config::default();
        assert_eq!(cfg.quick_add.timezone, "UTC");
        assert_eq!(
            cfg.transaction_date_at(None, Some("Asia/Ho_Chi_Minh"), evening_utc()).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 21).unwrap()
        );
        assert_eq!(
            cfg.transaction_date_at(None, None, evening_utc()).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 20).unwrap()
        );
    }

    #[test]
    fn test_configured_timezone_used_without_flags() {
        let mut cfg = Config::default();
        cfg.quick_add.timezone = "Asia/Ho_Chi_Minh".to_string();
        assert_eq!(
            cfg.transaction_date_at(None, None, evening_utc()).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 21).unwrap()
        );
        assert!(cfg.transaction_date_at(None, Some("Nowhere/City"), evening_utc()).is_err());
    }

    #[test]
    fn test_init_ignores_corrupt_config() {
        let p = std::env::temp_dir().join(format!("famfin-corrupt-{}.toml", std::process::id()));
        fs::write(&p, "[quick_add\ndefault_type = ").unwrap();

        assert!(load_config_from(&p).is_err());
        assert!(!init_config_at(&p).unwrap());
        // left untouched
        assert_eq!(fs::read_to_string(&p).unwrap(), "[quick_add\ndefault_type = ");

        fs::remove_file(&p).unwrap();
    }

    #[test]
    fn test_init_writes_defaults() {
        let p = std::env::temp_dir().join(format!("famfin-init-{}.toml", std::process::id()));
        let _ = fs::remove_file(&p);

        assert!(init_config_at(&p).unwrap());
        assert_eq!(load_config_from(&p).unwrap(), Config::default());

        fs::remove_file(&p).unwrap();
    }

    #[test]
    fn test_missing_file_is_default() {
        let p = std::env::temp_dir().join("famfin-no-such-config.toml");
        assert_eq!(load_config_from(&p).unwrap(), Config::default());
    }
}
