use super::prompt::Prompter;
use super::toml_config::TomlConfig;
use super::{Settings, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::domain::model::DistanceUnit;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use clap::Parser;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "random-restaurant")]
#[command(about = "Pick a random restaurant near a ZIP code using Google Maps")]
pub struct CliConfig {
    /// ZIP / postal code to search around (prompted when omitted)
    #[arg(long)]
    pub zip_code: Option<String>,

    /// Search radius (prompted when omitted)
    #[arg(long)]
    pub radius: Option<f64>,

    /// Unit of --radius [default: miles]
    #[arg(long, value_enum)]
    pub unit: Option<DistanceUnit>,

    /// Lowest price range, "$" to "$$$$"; empty for no limit
    #[arg(long)]
    pub min_price: Option<String>,

    /// Highest price range, "$" to "$$$$"; empty for no limit
    #[arg(long)]
    pub max_price: Option<String>,

    /// Only restaurants open right now
    #[arg(long)]
    pub open_now: bool,

    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Google Maps web service root [default: https://maps.googleapis.com/maps/api]
    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 合併命令列與設定檔，缺少的郵遞區號與半徑改用互動輸入
    pub fn resolve<R: BufRead, W: Write>(
        &self,
        file: &TomlConfig,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Settings> {
        let google = file.google();
        let search = file.search();

        let api_key = self.api_key.clone().or(google.api_key);
        let api_key =
            validate_required_field("api_key (--api-key or GOOGLE_API_KEY)", &api_key)?.clone();

        let unit = self.unit.or(search.unit).unwrap_or_default();

        let postal_code = match self.zip_code.clone().or(search.zip_code) {
            Some(code) => code,
            None => prompter.ask("zip_code", "Enter your ZIP code: ")?,
        };

        let radius = match self.radius.or(search.radius) {
            Some(radius) => radius,
            None => prompter.ask_f64("radius", &format!("Enter radius in {}: ", unit.label()))?,
        };

        Ok(Settings {
            api_key,
            base_url: self
                .base_url
                .clone()
                .or(google.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_seconds: self
                .timeout_seconds
                .or(google.timeout_seconds)
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            postal_code,
            radius,
            unit,
            open_now: self.open_now || search.open_now.unwrap_or(false),
            min_price: self.min_price.clone().or(search.min_price).unwrap_or_default(),
            max_price: self.max_price.clone().or(search.max_price).unwrap_or_default(),
        })
    }
}
