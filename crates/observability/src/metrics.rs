//! 合并流水线指标模块
//!
//! 通过 `metrics` facade 记录各阶段指标；本 crate 不安装 exporter，
//! 由宿主程序自行选择 recorder。

use metrics::{counter, gauge, histogram};

/// 记录一次成功的表格导入 (source = 数据流名称，而非文件路径)
pub fn record_ingestion(source: &str, rows: usize, header_lines: usize) {
    counter!("sensor_merge_rows_ingested_total", "source" => source.to_string())
        .increment(rows as u64);
    gauge!("sensor_merge_header_lines", "source" => source.to_string()).set(header_lines as f64);
}

/// 记录导入失败 (kind = "io" | "parse")
pub fn record_ingest_failure(kind: &str) {
    counter!("sensor_merge_ingest_failures_total", "kind" => kind.to_string()).increment(1);
}

/// 记录采样频率估计值 (Hz)
pub fn record_frequency(stream: &str, hz: f64) {
    gauge!("sensor_merge_frequency_hz", "stream" => stream.to_string()).set(hz);
}

/// 记录一次对齐：倍率、补齐行数、截断行数
pub fn record_alignment(ratio: usize, padded_rows: usize, truncated_rows: usize) {
    counter!("sensor_merge_alignments_total").increment(1);
    histogram!("sensor_merge_alignment_ratio").record(ratio as f64);
    if padded_rows > 0 {
        counter!("sensor_merge_rows_padded_total").increment(padded_rows as u64);
    }
    if truncated_rows > 0 {
        counter!("sensor_merge_rows_truncated_total").increment(truncated_rows as u64);
    }
}

/// 记录 sink 写入结果
pub fn record_sink_write(sink_name: &str, success: bool) {
    let status = if success { "success" } else { "failure" };
    counter!(
        "sensor_merge_sink_writes_total",
        "sink" => sink_name.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// 统计摘要
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsSummary {
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl From<&RunningStats> for StatsSummary {
    fn from(stats: &RunningStats) -> Self {
        Self {
            count: stats.count,
            min: stats.min,
            max: stats.max,
            mean: stats.mean(),
            std_dev: stats.std_dev(),
        }
    }
}

impl std::fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.count == 0 {
            write!(f, "N/A")
        } else {
            write!(
                f,
                "min={:.6}, max={:.6}, mean={:.6}, std={:.6} (n={})",
                self.min, self.max, self.mean, self.std_dev, self.count
            )
        }
    }
}

/// 在线统计计算器 (Welford's algorithm)
#[derive(Debug, Clone, Default)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl RunningStats {
    /// 添加新值
    pub fn push(&mut self, value: f64) {
        self.count += 1;

        if self.count == 1 {
            self.min = value;
            self.max = value;
            self.mean = value;
            self.m2 = 0.0;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);

            let delta = value - self.mean;
            self.mean += delta / self.count as f64;
            let delta2 = value - self.mean;
            self.m2 += delta * delta2;
        }
    }

    /// 样本数量
    pub fn count(&self) -> u64 {
        self.count
    }

    /// 均值
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.mean
        }
    }

    /// 样本方差
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn summary(&self) -> StatsSummary {
        StatsSummary::from(self)
    }
}

impl FromIterator<f64> for RunningStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = RunningStats::default();
        for value in iter {
            stats.push(value);
        }
        stats
    }
}
