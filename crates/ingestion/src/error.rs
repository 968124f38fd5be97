//! Ingestion 错误类型

use thiserror::Error;

/// Ingestion 错误
#[derive(Debug, Error)]
pub enum IngestionError {
    /// 源文件无法读取
    #[error("failed to read '{path}': {source}")]
    Io {
        /// 文件路径 (reader 输入时为 `<stream>`)
        path: String,
        /// 底层 IO 错误
        #[source]
        source: std::io::Error,
    },

    /// 数据行宽度不一致
    #[error("line {line}: expected {expected} fields, found {found}")]
    InconsistentWidth {
        /// 物理行号 (0-based)
        line: usize,
        /// 首个数据行的宽度
        expected: usize,
        /// 当前行的宽度
        found: usize,
    },

    /// 数据区出现非数值字段
    #[error("line {line}, field {column}: '{token}' is not a number")]
    NonNumeric {
        /// 物理行号 (0-based)
        line: usize,
        /// 字段序号 (0-based)
        column: usize,
        /// 原始字段
        token: String,
    },
}

impl IngestionError {
    /// Short kind label used for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            IngestionError::Io { .. } => "io",
            IngestionError::InconsistentWidth { .. } | IngestionError::NonNumeric { .. } => "parse",
        }
    }

    /// True for data-region parse failures
    pub fn is_parse(&self) -> bool {
        self.kind() == "parse"
    }
}

/// Ingestion Result 类型别名
pub type Result<T> = std::result::Result<T, IngestionError>;
