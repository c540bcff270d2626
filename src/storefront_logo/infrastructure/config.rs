use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::domain::font::FontInfo;

const CONFIG_PATH_ENV: &str = "LOGO_CONFIG";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    // 空なら任意の Origin を許可
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    pub max_entries: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    pub history: HistoryConfig,
    #[serde(default = "default_fonts")]
    pub fonts: Vec<FontInfo>,
}

impl AppConfig {
    /// Defaults, then `config/default.toml`, then the file named by
    /// `LOGO_CONFIG`, then `LOGO__SECTION__KEY` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false));

        if let Some(path) = Self::override_path() {
            builder = builder.add_source(File::with_name(&path));
        }

        builder
            .add_source(
                Environment::with_prefix("LOGO")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Extra config file named by `LOGO_CONFIG`, if any.
    pub fn override_path() -> Option<String> {
        env::var(CONFIG_PATH_ENV).ok().filter(|path| !path.is_empty())
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3300)?
            .set_default("logging.level", "storefront_logo=info,tower_http=info")?
            .set_default("history.max_entries", 20)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn default_fonts() -> Vec<FontInfo> {
    vec![
        FontInfo::new("Arial", "sans-serif", &[400, 700]),
        FontInfo::new("Helvetica", "sans-serif", &[300, 400, 700]),
        FontInfo::new("Roboto", "sans-serif", &[100, 300, 400, 500, 700, 900]),
        FontInfo::new("Georgia", "serif", &[400, 700]),
        FontInfo::new("Courier New", "monospace", &[400, 700]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults_deserialize() {
        let config: AppConfig = AppConfig::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:3300");
        assert_eq!(config.history.max_entries, 20);
        assert!(config.cors.allowed_origins.is_empty());
        assert!(config.fonts.iter().any(|f| f.name == "Arial"));
    }

    #[test]
    fn test_bundled_file_keeps_builtin_font_catalog() {
        let config: AppConfig = AppConfig::defaults()
            .unwrap()
            .add_source(File::with_name("config/default").required(true))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 3300);
        assert_eq!(config.fonts, default_fonts());
    }

    #[test]
    fn test_override_path_reads_env() {
        env::set_var(CONFIG_PATH_ENV, "/etc/storefront/logo.toml");
        assert_eq!(
            AppConfig::override_path().as_deref(),
            Some("/etc/storefront/logo.toml")
        );

        env::set_var(CONFIG_PATH_ENV, "");
        assert_eq!(AppConfig::override_path(), None);

        env::remove_var(CONFIG_PATH_ENV);
        assert_eq!(AppConfig::override_path(), None);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
            [server]
            port = 8080

            [cors]
            allowed_origins = ["https://shop.example.com"]

            [[fonts]]
            name = "Noto Sans JP"
            family = "sans-serif"
            weights = [400, 700]
        "#;

        let config: AppConfig = AppConfig::defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.cors.allowed_origins, vec!["https://shop.example.com"]);
        assert_eq!(config.fonts, vec![FontInfo::new("Noto Sans JP", "sans-serif", &[400, 700])]);
    }
}
