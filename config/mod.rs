use crate::error::{KdError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// kdplane 配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KdPlaneConfig {
    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,

    /// 树结构导出配置
    #[serde(default)]
    pub export: ExportConfig,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别：trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 日志输出：stdout, file
    #[serde(default = "default_log_output")]
    pub output: String,

    /// 日志文件路径（当 output = file 时）
    pub log_file: Option<PathBuf>,
}

/// 树结构 JSON 导出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// 是否输出带缩进的 JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

// ============================================================================
// 默认值函数
// ============================================================================

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_output() -> String {
    "stdout".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            output: default_log_output(),
            log_file: None,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

// ============================================================================
// 实现
// ============================================================================

impl KdPlaneConfig {
    /// 从文件加载配置
    ///
    /// 配置加载顺序（优先级从低到高）：
    /// 1. 默认配置（内嵌的 default.toml）
    /// 2. 用户配置文件（可选，不存在不报错）
    /// 3. 环境变量（KDPLANE__ 前缀，使用双下划线分隔嵌套）
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use kdplane::config::KdPlaneConfig;
    ///
    /// let config = KdPlaneConfig::from_file("kdplane.toml").unwrap();
    /// ```
    pub fn from_file(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                include_str!("default.toml"),
                config::FileFormat::Toml,
            ))
            .add_source(config::File::new(path, config::FileFormat::Toml).required(false))
            .add_source(config::Environment::with_prefix("KDPLANE").separator("__"))
            .build()
            .map_err(|e| KdError::Config(format!("Failed to load config: {}", e)))?;

        settings
            .try_deserialize()
            .map_err(|e| KdError::Config(format!("Failed to parse config: {}", e)))
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// 验证配置
    ///
    /// 检查日志级别、日志输出方式，以及输出到文件时是否给出了路径
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(KdError::Config(format!(
                    "Invalid log level: '{}'. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                )))
            }
        }

        match self.logging.output.as_str() {
            "stdout" => {}
            "file" if self.logging.log_file.is_none() => {
                return Err(KdError::Config(
                    "Log output is 'file' but log_file path is not specified".to_string(),
                ))
            }
            "file" => {}
            other => {
                return Err(KdError::Config(format!(
                    "Invalid log output: '{}'. Must be one of: stdout, file",
                    other
                )))
            }
        }

        Ok(())
    }
}
