use crate::domain::model::DistanceUnit;
use crate::utils::error::{RestaurantError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Optional settings file. Every value may also come from the command line,
/// which takes precedence.
///
/// ```toml
/// [google]
/// api_key = "${GOOGLE_API_KEY}"
/// timeout_seconds = 10
///
/// [search]
/// radius = 2.5
/// unit = "miles"
/// open_now = true
/// max_price = "$$"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub google: Option<GoogleConfig>,
    pub search: Option<SearchConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoogleConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    pub zip_code: Option<String>,
    pub radius: Option<f64>,
    pub unit: Option<DistanceUnit>,
    pub open_now: Option<bool>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid regex"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RestaurantError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GOOGLE_API_KEY})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn google(&self) -> GoogleConfig {
        self.google.clone().unwrap_or_default()
    }

    pub fn search(&self) -> SearchConfig {
        self.search.clone().unwrap_or_default()
    }
}

/// True when a value still carries an unresolved `${VAR}` placeholder.
pub fn has_unresolved_placeholder(value: &str) -> bool {
    env_var_pattern().is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[google]
api_key = "abc123"
base_url = "http://localhost:9000"
timeout_seconds = 3

[search]
zip_code = "94103"
radius = 2.5
unit = "meters"
open_now = true
min_price = "$"
max_price = "$$$"
"#,
        )
        .unwrap();

        assert_eq!(config.google().api_key.as_deref(), Some("abc123"));
        assert_eq!(config.google().timeout_seconds, Some(3));
        let search = config.search();
        assert_eq!(search.radius, Some(2.5));
        assert_eq!(search.unit, Some(DistanceUnit::Meters));
        assert_eq!(search.open_now, Some(true));
        assert_eq!(search.max_price.as_deref(), Some("$$$"));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.google().api_key.is_none());
        assert!(config.search().radius.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RANDOM_RESTAURANT_TEST_KEY", "from-env");
        let config = TomlConfig::from_toml_str(
            r#"
[google]
api_key = "${RANDOM_RESTAURANT_TEST_KEY}"
base_url = "${RANDOM_RESTAURANT_UNSET_VAR}"
"#,
        )
        .unwrap();

        assert_eq!(config.google().api_key.as_deref(), Some("from-env"));
        let base_url = config.google().base_url.unwrap();
        assert_eq!(base_url, "${RANDOM_RESTAURANT_UNSET_VAR}");
        assert!(has_unresolved_placeholder(&base_url));
    }

    #[test]
    fn test_invalid_toml_reports_config_error() {
        let err = TomlConfig::from_toml_str("[search]\nradius = \"far\"").unwrap_err();
        assert!(matches!(err, RestaurantError::ConfigValidationError { .. }));

        let err = TomlConfig::from_toml_str("[search]\nunit = \"furlongs\"").unwrap_err();
        assert!(matches!(err, RestaurantError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[search]\nzip_code = \"10001\"\nradius = 1.0").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.search().zip_code.as_deref(), Some("10001"));
        assert_eq!(config.search().radius, Some(1.0));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, RestaurantError::IoError(_)));
    }
}
