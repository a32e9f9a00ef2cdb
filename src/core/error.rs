//! 错误处理模块
//!
//! 定义了 mesh_mean 中使用的统一错误类型。
//!
//! # 错误分类
//!
//! - `ScanError`：终止一次扫描的错误（文件无法打开、读取中途失败、没有顶点）
//! - `VertexLineError`：单行顶点声明解析失败，只跳过该行，不终止扫描
//! - `ConfigError`：配置文件加载或校验失败

use std::fmt;
use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

/// 统一的 Result 类型
pub type Result<T> = std::result::Result<T, MeshMeanError>;

/// mesh_mean 的顶层错误类型
#[derive(Debug)]
pub enum MeshMeanError {
    /// 配置错误
    Config(ConfigError),

    /// 网格扫描错误
    Scan(ScanError),

    /// IO 错误
    Io(io::Error),
}

/// 配置相关的错误
#[derive(Debug)]
pub enum ConfigError {
    /// 配置文件未找到
    FileNotFound(String),

    /// 配置文件解析失败
    ParseError(String),

    /// 配置值无效
    InvalidValue { field: String, reason: String },
}

/// 终止一次扫描的错误
///
/// 任何一种都意味着调用方拿不到均值。
#[derive(Debug)]
pub enum ScanError {
    /// 文件无法打开（不存在、无权限等）
    MissingFile { path: PathBuf, source: io::Error },

    /// 逐行读取时发生的其他错误（IO 错误、非 UTF-8 内容）
    ReadFailure {
        source_name: String,
        line_number: usize,
        source: io::Error,
    },

    /// 扫描正常结束但没有解析出任何顶点
    NoVerticesFound { source_name: String },
}

/// 一行以 `v ` 开头但无法解析的顶点声明
#[derive(Debug)]
pub struct VertexLineError {
    /// 行号（从 1 开始）
    pub line_number: usize,

    /// 去掉首尾空白后的行内容
    pub content: String,

    pub kind: VertexLineErrorKind,
}

#[derive(Debug)]
pub enum VertexLineErrorKind {
    /// 坐标字段缺失，`index` 为缺失字段的位置（1..=3）
    MissingField { index: usize },

    /// 坐标字段不是合法的浮点数
    InvalidNumber {
        index: usize,
        value: String,
        source: ParseFloatError,
    },
}

impl fmt::Display for MeshMeanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshMeanError::Config(e) => write!(f, "Configuration error: {}", e),
            MeshMeanError::Scan(e) => write!(f, "Scan error: {}", e),
            MeshMeanError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::MissingFile { path, source } => {
                if source.kind() == io::ErrorKind::NotFound {
                    write!(f, "file '{}' does not exist", path.display())
                } else {
                    write!(f, "cannot open '{}': {}", path.display(), source)
                }
            }
            ScanError::ReadFailure {
                source_name,
                line_number,
                source,
            } => write!(
                f,
                "unexpected error while reading '{}' at line {}: {}",
                source_name, line_number, source
            ),
            ScanError::NoVerticesFound { source_name } => {
                write!(f, "no vertices found in '{}'", source_name)
            }
        }
    }
}

impl fmt::Display for VertexLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {} '{}': {}",
            self.line_number, self.content, self.kind
        )
    }
}

impl fmt::Display for VertexLineErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexLineErrorKind::MissingField { index } => {
                write!(f, "missing coordinate field {}", index)
            }
            VertexLineErrorKind::InvalidNumber {
                index,
                value,
                source,
            } => write!(f, "field {} ({:?}) is not a number: {}", index, value, source),
        }
    }
}

impl std::error::Error for MeshMeanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeshMeanError::Config(e) => Some(e),
            MeshMeanError::Scan(e) => Some(e),
            MeshMeanError::Io(e) => Some(e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::MissingFile { source, .. } => Some(source),
            ScanError::ReadFailure { source, .. } => Some(source),
            ScanError::NoVerticesFound { .. } => None,
        }
    }
}

impl std::error::Error for VertexLineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            VertexLineErrorKind::InvalidNumber { source, .. } => Some(source),
            VertexLineErrorKind::MissingField { .. } => None,
        }
    }
}

// 实现 From trait 以便于错误转换
impl From<io::Error> for MeshMeanError {
    fn from(err: io::Error) -> Self {
        MeshMeanError::Io(err)
    }
}

impl From<ConfigError> for MeshMeanError {
    fn from(err: ConfigError) -> Self {
        MeshMeanError::Config(err)
    }
}

impl From<ScanError> for MeshMeanError {
    fn from(err: ScanError) -> Self {
        MeshMeanError::Scan(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_message() {
        let err = ScanError::MissingFile {
            path: PathBuf::from("model.obj"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "file 'model.obj' does not exist");
    }

    #[test]
    fn test_vertex_line_error_message() {
        let err = VertexLineError {
            line_number: 7,
            content: "v 1 1".to_string(),
            kind: VertexLineErrorKind::MissingField { index: 3 },
        };
        assert_eq!(err.to_string(), "line 7 'v 1 1': missing coordinate field 3");
    }

    #[test]
    fn test_scan_error_converts_and_chains() {
        let err: MeshMeanError = ScanError::NoVerticesFound {
            source_name: "empty.obj".to_string(),
        }
        .into();
        assert!(matches!(err, MeshMeanError::Scan(_)));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "Scan error: no vertices found in 'empty.obj'");
    }
}
