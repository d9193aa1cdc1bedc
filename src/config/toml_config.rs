use crate::core::codec::Format;
use crate::utils::error::{Result, XalError};
use crate::utils::validation::{validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings read from `xal.toml` (or the file given with `--config`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when the output path does not name one.
    pub format: Option<String>,
    pub pretty: Option<bool>,
}

impl ToolConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| XalError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Loads `path` when given, otherwise `xal.toml` in the working directory
    /// if it exists, otherwise the defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// 替換環境變數 (例如 ${XAL_FORMAT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| XalError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(format) = &self.output.format {
            let allowed: Vec<&str> = Format::ALL.iter().map(|f| f.extension()).collect();
            validate_one_of("output.format", format, &allowed)?;
        }
        Ok(())
    }

    pub fn output_format(&self) -> Result<Format> {
        match &self.output.format {
            Some(format) => format.parse(),
            None => Ok(Format::Json),
        }
    }

    pub fn pretty(&self) -> bool {
        self.output.pretty.unwrap_or(false)
    }
}

impl Validate for ToolConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

pub const DEFAULT_CONFIG_FILE: &str = "xal.toml";
