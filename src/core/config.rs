//! 配置管理模块
//!
//! 支持从 TOML 配置文件加载，也支持命令行参数覆盖。
//!
//! # 配置文件格式 (mesh_mean.toml)
//!
//! ```toml
//! [logging]
//! level = "info"      # trace, debug, info, warn, error
//! file_output = false
//! log_file = "mesh_mean.log"
//!
//! [report]
//! precision = 6
//! list_skipped = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, Result};

/// 浮点数在十进制下有意义的最大位数
const MAX_PRECISION: usize = 17;

/// 程序配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,

    /// 结果输出配置
    #[serde(default)]
    pub report: ReportConfig,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// 是否输出到文件
    #[serde(default = "default_file_output")]
    pub file_output: bool,

    /// 日志文件路径
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

/// 结果输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// 均值输出的小数位数
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// 是否逐条列出被跳过的顶点行
    #[serde(default = "default_list_skipped")]
    pub list_skipped: bool,
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

// 默认值函数
fn default_log_level() -> LogLevel { LogLevel::Info }
fn default_file_output() -> bool { false }
fn default_log_file() -> String { "mesh_mean.log".to_string() }
fn default_precision() -> usize { 6 }
fn default_list_skipped() -> bool { true }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_output: default_file_output(),
            log_file: default_log_file(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            list_skipped: default_list_skipped(),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!("unknown log level '{}'", other),
            }),
        }
    }
}

impl Config {
    /// 从配置文件加载
    ///
    /// ```no_run
    /// use mesh_mean::core::Config;
    ///
    /// let config = Config::from_file("mesh_mean.toml")?;
    /// # Ok::<(), mesh_mean::core::MeshMeanError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let contents = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path_str.clone()))?;

        Self::from_toml_str(&contents)
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()).into())
    }

    /// 从配置文件加载，如果文件不存在或无法解析则使用默认配置
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file(path).unwrap_or_default()
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// 从命令行参数覆盖配置
    ///
    /// 支持的参数：
    /// - `--log-level <level>`: 日志级别
    /// - `--precision <n>`: 均值输出的小数位数
    /// - `--log-file <path>`: 同时把日志写入文件
    /// - `--quiet-skipped`: 不逐条列出被跳过的行
    ///
    /// 无法解析的值会返回错误，而不是被静默忽略。
    pub fn apply_args<I>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

        if let Some(value) = flag_value(&args, "--log-level") {
            self.logging.level = value.parse()?;
        }

        if let Some(value) = flag_value(&args, "--precision") {
            self.report.precision = value.parse().map_err(|_| ConfigError::InvalidValue {
                field: "report.precision".to_string(),
                reason: format!("'{}' is not a non-negative integer", value),
            })?;
        }

        if let Some(value) = flag_value(&args, "--log-file") {
            self.logging.file_output = true;
            self.logging.log_file = value.to_string();
        }

        if args.iter().any(|a| a == "--quiet-skipped") {
            self.report.list_skipped = false;
        }

        Ok(())
    }

    /// 取出命令行中的配置文件路径（`--config <path>`）
    pub fn config_path(args: &[String]) -> Option<&str> {
        flag_value(args, "--config")
    }

    /// 取出命令行中导出配置的目标路径（`--write-config <path>`）
    pub fn write_config_path(args: &[String]) -> Option<&str> {
        flag_value(args, "--write-config")
    }

    /// 取出命令行中第一个位置参数作为输入文件路径
    ///
    /// 第一个元素视为程序名，带值的选项会连同其值一起跳过。
    pub fn input_path(args: &[String]) -> Option<&str> {
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--log-level" | "--precision" | "--log-file" | "--config" | "--write-config" => {
                    iter.next();
                }
                flag if flag.starts_with("--") => {}
                path => return Some(path),
            }
        }
        None
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.report.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidValue {
                field: "report.precision".to_string(),
                reason: format!("precision must be at most {}", MAX_PRECISION),
            }
            .into());
        }

        if self.logging.file_output && self.logging.log_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.log_file".to_string(),
                reason: "log file path must not be empty when file output is enabled".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|idx| args.get(idx + 1))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::MeshMeanError;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(!config.logging.file_output);
        assert_eq!(config.report.precision, 6);
        assert!(config.report.list_skipped);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = Config::from_toml_str("[report]\nprecision = 3\n").unwrap();
        assert_eq!(config.report.precision, 3);
        assert!(config.report.list_skipped);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = Config::from_toml_str("[logging]\nlevel = \"loud\"\n");
        assert!(matches!(
            result,
            Err(MeshMeanError::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_missing_config_falls_back_to_default() {
        let config = Config::from_file_or_default("definitely/not/here/mesh_mean.toml");
        assert_eq!(config.report.precision, 6);
    }

    #[test]
    fn test_save_and_reload() {
        let path = std::env::temp_dir().join(format!(
            "mesh_mean_config_{}.toml",
            std::process::id()
        ));
        let mut config = Config::default();
        config.logging.level = LogLevel::Debug;
        config.report.precision = 9;
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.logging.level, LogLevel::Debug);
        assert_eq!(loaded.report.precision, 9);
    }

    #[test]
    fn test_apply_args() {
        let mut config = Config::default();
        config
            .apply_args(args(&[
                "mesh_mean",
                "car.obj",
                "--log-level",
                "warn",
                "--precision",
                "3",
                "--quiet-skipped",
            ]))
            .unwrap();

        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.report.precision, 3);
        assert!(!config.report.list_skipped);
    }

    #[test]
    fn test_apply_args_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.apply_args(args(&["mesh_mean", "--precision", "-1"])).is_err());
        assert!(config.apply_args(args(&["mesh_mean", "--log-level", "loud"])).is_err());
    }

    #[test]
    fn test_input_path_skips_options() {
        let list = args(&["mesh_mean", "--precision", "3", "--quiet-skipped", "wheel.obj"]);
        assert_eq!(Config::input_path(&list), Some("wheel.obj"));

        let list = args(&["mesh_mean", "--config", "custom.toml"]);
        assert_eq!(Config::input_path(&list), None);
        assert_eq!(Config::config_path(&list), Some("custom.toml"));

        let list = args(&["mesh_mean", "--write-config", "out.toml"]);
        assert_eq!(Config::input_path(&list), None);
        assert_eq!(Config::write_config_path(&list), Some("out.toml"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.report.precision = 40;
        assert!(config.validate().is_err());

        config.report.precision = 6;
        config.logging.file_output = true;
        config.logging.log_file = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
