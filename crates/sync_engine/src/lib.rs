//! # Sync Engine
//!
//! 双流对齐引擎。
//!
//! 负责：
//! - 由时间戳列估计采样频率 (诊断用)
//! - 按行重复/截断把低频表对齐到高频表
//! - 输出合并后的 `NumericTable`
//!
//! ## 使用示例
//!
//! ```ignore
//! use sync_engine::{estimate_frequency, merge};
//! use contracts::TimeUnit;
//!
//! let imu_hz = estimate_frequency(&imu, 0, TimeUnit::S)?;
//! let truth_hz = estimate_frequency(&truth, 0, TimeUnit::S)?;
//!
//! // imu must be the longer table
//! let merged = merge(imu, truth)?;
//! ```

mod aligner;
mod error;
mod frequency;

// Re-exports
pub use aligner::{align, merge, repetition_ratio, Alignment, AlignmentReport};
pub use error::{Result, SyncError};
pub use frequency::{estimate_frequency, interval_stats, IntervalStats};

// Re-export contracts types
pub use contracts::{NumericTable, TimeUnit};
