//! # Integration Tests
//!
//! 集成测试与端到端测试。
//!
//! 负责：
//! - 合约快照测试
//! - 文件 -> 解析 -> 频率估计 -> 合并 -> 输出 -> 再解析 的 e2e 测试

#[cfg(test)]
mod contract_tests {
    use contracts::{FloatKind, NumericTable, TimeUnit};

    #[test]
    fn test_contracts_compile() {
        let _ = contracts::ConfigVersion::V1;
        assert_eq!(TimeUnit::default(), TimeUnit::S);
        assert_eq!(FloatKind::default(), FloatKind::F64);
        assert_eq!(NumericTable::empty().shape(), (0, 0));
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::collections::HashMap;
    use std::fs;
    use std::path::Path;

    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::{FloatKind, NumericTable, SinkConfig, SinkType, TimeUnit};
    use dispatcher::{create_dispatcher, format_table, DEFAULT_PRECISION};
    use ingestion::{ingest_path, ingest_str, IngestOptions};
    use sync_engine::{align, estimate_frequency, merge, SyncError};

    /// IMU-like stream: timestamp in ns, 6 channels
    fn imu_text(rows: usize) -> String {
        let mut text = String::from("#timestamp [ns] w_x w_y w_z a_x a_y a_z\n");
        for i in 0..rows {
            let t = 1_403_636_579_758_555_392u64 + i as u64 * 5_000_000;
            text.push_str(&format!(
                "{} {} {} {} {} {} {}\n",
                t,
                0.001 * i as f64,
                -0.002 * i as f64,
                0.5,
                9.81,
                0.1 * (i % 7) as f64,
                -0.25
            ));
        }
        text
    }

    /// Ground-truth-like stream: timestamp in ns, position + quaternion
    fn truth_text(rows: usize) -> String {
        let mut text = String::from("#timestamp p_x p_y p_z q_w q_x q_y q_z\n");
        for i in 0..rows {
            let t = 1_403_636_579_758_555_392u64 + i as u64 * 10_000_000;
            text.push_str(&format!(
                "{} {} {} {} 1 0 0 0\n",
                t,
                i as f64,
                2.0 * i as f64,
                -(i as f64)
            ));
        }
        text
    }

    fn write(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }

    /// End-to-end: files -> ingest -> estimate -> align -> file sink -> re-ingest
    #[test]
    fn test_e2e_file_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        let imu_path = write(dir.path(), "imu.txt", &imu_text(200));
        let truth_path = write(dir.path(), "truth.txt", &truth_text(97));

        let options = IngestOptions::new(' ').with_header(true);
        let imu = ingest_path(&imu_path, &options);
        let truth = ingest_path(&truth_path, &options);
        assert!(imu.failure.is_none(), "imu failed: {:?}", imu.failure);
        assert!(truth.failure.is_none(), "truth failed: {:?}", truth.failure);
        assert_eq!(imu.header.line_count, 1);
        let imu_labels = imu.header.labels.as_deref().unwrap_or_default();
        assert_eq!(imu_labels.first().map(String::as_str), Some("timestamp"));

        let imu_hz = estimate_frequency(&imu.table, 0, TimeUnit::Ns).unwrap();
        let truth_hz = estimate_frequency(&truth.table, 0, TimeUnit::Ns).unwrap();
        assert!((imu_hz - 200.0).abs() < 1e-3, "imu {imu_hz}");
        assert!((truth_hz - 100.0).abs() < 1e-3, "truth {truth_hz}");

        let right_last = truth.table.row(96).to_vec();
        let alignment = align(imu.table, truth.table).unwrap();
        assert_eq!(alignment.report.ratio, 2);
        assert_eq!(alignment.report.padded_rows, 6);
        let merged = alignment.table;
        assert_eq!(merged.shape(), (200, 15));
        for i in 194..200 {
            assert_eq!(&merged.row(i)[7..], right_last.as_slice());
        }

        let out = dir.path().join("out").join("merged.csv");
        let sinks = vec![SinkConfig {
            name: "csv".into(),
            sink_type: SinkType::File,
            params: HashMap::from([
                ("path".to_string(), out.display().to_string()),
                ("precision".to_string(), "3".to_string()),
            ]),
        }];
        let labels: Vec<String> = (0..15).map(|i| format!("c{i}")).collect();
        let report = create_dispatcher(&sinks).unwrap().dispatch(&merged, &labels);
        assert!(report.all_succeeded(), "{:?}", report.failed);

        let back = ingest_path(&out, &IngestOptions::new(';').with_header(true));
        assert!(back.failure.is_none(), "{:?}", back.failure);
        assert_eq!(back.header.line_count, 1);
        assert_eq!(back.header.labels.as_ref(), Some(&labels));
        assert_eq!(back.table.shape(), (200, 15));
        // precision 3 is exact for the position columns
        for i in 0..200 {
            let row = back.table.row(i);
            let orig = merged.row(i);
            assert_eq!(row[8], orig[8], "row {i}");
        }
    }

    #[test]
    fn test_header_detection_counts_leading_lines() {
        for k in 0..4 {
            let mut text = String::new();
            for j in 0..k {
                text.push_str(&format!("note {j};1.0\n"));
            }
            text.push_str("1;2\n3;4\n");
            let ingested = ingest_str(&text, &IngestOptions::default()).unwrap();
            assert_eq!(ingested.header.line_count, k, "k = {k}");
            assert_eq!(ingested.table.rows(), 2);
        }
    }

    #[test]
    fn test_format_then_ingest_round_trip() {
        let table = NumericTable::from_rows(
            &[[0.0, 1.25, -3.5], [0.005, 2.125, 7.0], [0.01, -0.0625, 1e-3]],
            FloatKind::F64,
        )
        .unwrap();
        let labels = vec!["t".to_string(), "x".to_string(), "y".to_string()];
        let text = format_table(&table, &labels, ';', DEFAULT_PRECISION);

        let back = ingest_str(&text, &IngestOptions::default().with_header(true)).unwrap();
        assert_eq!(back.header.labels, Some(labels));
        assert_eq!(back.table.shape(), table.shape());
        for (a, b) in back.table.as_slice().iter().zip(table.as_slice()) {
            assert!((a - b).abs() < 1e-6, "{a} vs {b}");
        }
    }

    #[test]
    fn test_frequency_examples() {
        let seconds = NumericTable::from_rows(&[[0.0], [1.0], [2.0], [3.0]], FloatKind::F64).unwrap();
        assert_eq!(estimate_frequency(&seconds, 0, TimeUnit::S).unwrap(), 1.0);

        let millis = NumericTable::from_rows(&[[0.0], [500.0], [1000.0]], FloatKind::F64).unwrap();
        let hz = estimate_frequency(&millis, 0, TimeUnit::Ms).unwrap();
        assert!((hz - 2.0).abs() < 1e-12, "got {hz}");

        let single = NumericTable::from_rows(&[[42.0]], FloatKind::F64).unwrap();
        assert!(matches!(
            estimate_frequency(&single, 0, TimeUnit::S),
            Err(SyncError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_merge_shape_and_precondition() {
        let left_rows: Vec<[f64; 3]> = (0..100).map(|i| [i as f64, 0.0, 1.0]).collect();
        let right_rows: Vec<[f64; 2]> = (0..10).map(|i| [i as f64, -(i as f64)]).collect();
        let left = NumericTable::from_rows(left_rows.as_slice(), FloatKind::F64).unwrap();
        let right = NumericTable::from_rows(right_rows.as_slice(), FloatKind::F64).unwrap();

        let merged = merge(left.clone(), right.clone()).unwrap();
        assert_eq!(merged.shape(), (100, 5));
        for i in 90..100 {
            assert_eq!(&merged.row(i)[3..], right.row(9));
        }

        // not commutative: the longer table must come first
        assert!(matches!(
            merge(right, left),
            Err(SyncError::UnsupportedShape { .. })
        ));
    }

    #[test]
    fn test_failed_ingest_blocks_merge() {
        let missing = ingest_path(Path::new("/nonexistent/imu.txt"), &IngestOptions::default());
        assert!(missing.is_empty());
        assert!(missing.failure.is_some());

        let right = NumericTable::from_rows(&[[1.0]], FloatKind::F64).unwrap();
        assert!(matches!(
            merge(missing.table, right),
            Err(SyncError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_blueprint_drives_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "imu.txt", &imu_text(30));
        write(dir.path(), "truth.txt", &truth_text(10));

        let config = format!(
            r#"
[left]
name = "imu"
path = "{dir}/imu.txt"
separator = " "
unit = "ns"

[right]
name = "truth"
path = "{dir}/truth.txt"
separator = " "
unit = "ns"

[[sinks]]
name = "log"
sink_type = "log"
"#,
            dir = dir.path().display().to_string().replace('\\', "/")
        );
        let bp = ConfigLoader::load_from_str(&config, ConfigFormat::Toml).unwrap();

        let left = ingest_path(&bp.left.path, &IngestOptions::from(&bp.left));
        let right = ingest_path(&bp.right.path, &IngestOptions::from(&bp.right));
        let merged = merge(left.table, right.table).unwrap();
        assert_eq!(merged.shape(), (30, 15));

        let report = create_dispatcher(&bp.sinks).unwrap().dispatch(&merged, &[]);
        assert_eq!(report.succeeded, vec!["log".to_string()]);
    }
}
