//! # Dispatcher
//!
//! 数据分发模块。
//!
//! 负责：
//! - 接收合并后的 `NumericTable`
//! - 依次写入多个 sinks (分隔文本文件 / 日志)
//! - 单个 sink 失败不影响其他 sink

pub mod dispatcher;
pub mod error;
pub mod format;
pub mod sinks;

pub use contracts::{NumericTable, TableSink};
pub use dispatcher::{create_dispatcher, create_sink, DispatchReport, Dispatcher};
pub use error::DispatcherError;
pub use format::{format_table, write_table, DEFAULT_PRECISION};
pub use sinks::{FileSink, FileSinkConfig, LogSink};
