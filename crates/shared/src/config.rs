//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Company identity used on printed documents when the store holds no
    /// overriding settings.
    #[serde(default)]
    pub company: CompanyConfig,
    /// Report defaults.
    #[serde(default)]
    pub report: ReportConfig,
    /// Backup/export configuration.
    #[serde(default)]
    pub backup: BackupConfig,
}

/// Company identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyConfig {
    /// Company display name.
    #[serde(default = "default_company_name")]
    pub name: String,
    /// Tagline printed under the name.
    #[serde(default)]
    pub tagline: String,
    /// Logo URL or data URI.
    #[serde(default)]
    pub logo: String,
}

fn default_company_name() -> String {
    "Sanad".to_string()
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            name: default_company_name(),
            tagline: String::new(),
            logo: String::new(),
        }
    }
}

/// Report defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Default rows per ledger page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Default currency code for records without one.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_per_page() -> u32 {
    20
}

fn default_currency() -> String {
    "IQD".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            currency: default_currency(),
        }
    }
}

/// Backup/export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BackupConfig {
    /// Directory backup artifacts are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_output_dir() -> String {
    "backups".to_string()
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SANAD").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.company.name, "Sanad");
        assert_eq!(cfg.report.per_page, 20);
        assert_eq!(cfg.report.currency, "IQD");
        assert_eq!(cfg.backup.output_dir, "backups");
    }
}
