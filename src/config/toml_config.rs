use crate::app::session::ViewMode;
use crate::core::highlights::DEFAULT_HIGHLIGHT_LIMIT;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{
    validate_one_of, validate_path, validate_positive_number, validate_required_field, Validate,
};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub directory: DirectorySection,
    pub data: Option<DataConfig>,
    pub display: Option<DisplayConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectorySection {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    pub default_view: Option<String>,
    pub highlight_limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl DirectoryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DirectoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${POKER_ROOMS_DATA})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(data) = &self.data {
            let path = validate_required_field("data.path", &data.path)?;
            validate_path("data.path", path)?;
        }

        if let Some(display) = &self.display {
            if let Some(view) = &display.default_view {
                validate_one_of("display.default_view", view, &ViewMode::NAMES)?;
            }
            if let Some(limit) = display.highlight_limit {
                validate_positive_number("display.highlight_limit", limit, 1)?;
            }
        }

        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        self.directory.name.as_deref().unwrap_or("Poker Rooms")
    }

    pub fn data_path(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.path.as_deref())
    }

    pub fn default_view(&self) -> Result<ViewMode> {
        match self.display.as_ref().and_then(|d| d.default_view.as_deref()) {
            Some(view) => view.parse(),
            None => Ok(ViewMode::default()),
        }
    }

    pub fn highlight_limit(&self) -> usize {
        self.display
            .as_ref()
            .and_then(|d| d.highlight_limit)
            .unwrap_or(DEFAULT_HIGHLIGHT_LIMIT)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for DirectoryConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
