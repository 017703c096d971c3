use thiserror::Error;

pub const INVALID_LOCATION_MESSAGE: &str = "Invalid ZIP code or API Error.";
pub const NO_RESTAURANTS_MESSAGE: &str = "No restaurants found in the given radius.";

#[derive(Error, Debug)]
pub enum RestaurantError {
    #[error("Location not found for query '{query}'")]
    LocationNotFound { query: String },

    #[error("No restaurants found within {radius_meters:.2} meters")]
    NoCandidates { radius_meters: f64 },

    #[error("Invalid price tier '{value}': {reason}")]
    InvalidPriceTier { value: String, reason: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Input,
    Configuration,
    Network,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依嚴重程度決定 CLI 結束碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl RestaurantError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RestaurantError::LocationNotFound { .. } | RestaurantError::NoCandidates { .. } => {
                ErrorCategory::Lookup
            }
            RestaurantError::InvalidPriceTier { .. } => ErrorCategory::Input,
            RestaurantError::ApiError(_) => ErrorCategory::Network,
            RestaurantError::IoError(_) | RestaurantError::SerializationError(_) => {
                ErrorCategory::System
            }
            RestaurantError::MissingConfigError { .. }
            | RestaurantError::InvalidConfigValueError { .. }
            | RestaurantError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 查無結果是正常答案，不是程式錯誤
            ErrorCategory::Lookup => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            RestaurantError::LocationNotFound { .. } => INVALID_LOCATION_MESSAGE.to_string(),
            RestaurantError::NoCandidates { .. } => NO_RESTAURANTS_MESSAGE.to_string(),
            RestaurantError::InvalidPriceTier { value, .. } => {
                format!("'{}' is not a valid price range", value)
            }
            RestaurantError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
            RestaurantError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            RestaurantError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            RestaurantError::ApiError(_) => "Could not reach the Google Maps API".to_string(),
            RestaurantError::IoError(e) => format!("I/O failure: {}", e),
            RestaurantError::SerializationError(_) => {
                "Unexpected response format from the Google Maps API".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RestaurantError::LocationNotFound { .. } => {
                "Check the ZIP code and that the API key has the Geocoding API enabled"
            }
            RestaurantError::NoCandidates { .. } => {
                "Try a larger radius or relax the price and open-now filters"
            }
            RestaurantError::InvalidPriceTier { .. } => {
                "Use between one and four '$' characters, or leave it empty for no limit"
            }
            RestaurantError::MissingConfigError { .. } => {
                "Pass the value on the command line or set it in the TOML config file"
            }
            RestaurantError::InvalidConfigValueError { .. }
            | RestaurantError::ConfigValidationError { .. } => {
                "Fix the configuration value and run again"
            }
            RestaurantError::ApiError(_) => "Check the network connection and the --base-url",
            RestaurantError::IoError(_) => "Check file paths and permissions",
            RestaurantError::SerializationError(_) => "Verify the --base-url points to the Google Maps API",
        }
    }
}

pub type Result<T> = std::result::Result<T, RestaurantError>;
