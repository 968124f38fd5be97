//! 配置校验模块
//!
//! 校验规则：
//! - stream name 非空且互不相同
//! - separator 不能与数值字符冲突
//! - labels (若提供) 不能为空字符串
//! - sink name 非空且唯一；file sink 必须提供 path
//! - precision (若提供) 为 0..=17 的整数

use std::collections::HashSet;

use contracts::{ContractError, MergeBlueprint, SinkType, StreamConfig};

/// Largest fixed-point precision that still carries information for f64
pub const MAX_PRECISION: usize = 17;

/// 校验 MergeBlueprint 配置
///
/// 返回第一个遇到的错误，或 Ok(())。
pub fn validate(blueprint: &MergeBlueprint) -> Result<(), ContractError> {
    validate_stream("left", &blueprint.left)?;
    validate_stream("right", &blueprint.right)?;
    validate_stream_names(blueprint)?;
    validate_sinks(blueprint)?;
    Ok(())
}

/// A separator that can appear inside a number would split or glue numeric tokens.
pub fn is_ambiguous_separator(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E' | '\n' | '\r')
}

fn validate_stream(side: &str, stream: &StreamConfig) -> Result<(), ContractError> {
    if stream.name.trim().is_empty() {
        return Err(ContractError::config_validation(
            format!("{side}.name"),
            "stream name cannot be empty",
        ));
    }

    if is_ambiguous_separator(stream.separator) {
        return Err(ContractError::config_validation(
            format!("{side}.separator"),
            format!(
                "separator {:?} conflicts with numeric tokens",
                stream.separator
            ),
        ));
    }

    if let Some(labels) = &stream.labels {
        if let Some(idx) = labels.iter().position(|l| l.trim().is_empty()) {
            return Err(ContractError::config_validation(
                format!("{side}.labels[{idx}]"),
                "label cannot be empty",
            ));
        }
    }

    Ok(())
}

/// 校验 stream name 唯一性
fn validate_stream_names(blueprint: &MergeBlueprint) -> Result<(), ContractError> {
    if blueprint.left.name == blueprint.right.name {
        return Err(ContractError::config_validation(
            "right.name",
            format!("duplicate stream name '{}'", blueprint.right.name),
        ));
    }
    Ok(())
}

/// 校验 sink 配置
fn validate_sinks(blueprint: &MergeBlueprint) -> Result<(), ContractError> {
    let mut seen = HashSet::new();
    for (idx, sink) in blueprint.sinks.iter().enumerate() {
        if sink.name.is_empty() {
            return Err(ContractError::config_validation(
                format!("sinks[{}].name", idx),
                "sink name cannot be empty",
            ));
        }
        if !seen.insert(&sink.name) {
            return Err(ContractError::config_validation(
                format!("sinks[name={}]", sink.name),
                "duplicate sink name",
            ));
        }

        if sink.sink_type == SinkType::File
            && sink.params.get("path").map_or(true, |p| p.is_empty())
        {
            return Err(ContractError::config_validation(
                format!("sinks[{}].params.path", idx),
                "file sink requires a 'path' param",
            ));
        }

        if let Some(precision) = sink.params.get("precision") {
            match precision.parse::<usize>() {
                Ok(p) if p <= MAX_PRECISION => {}
                _ => {
                    return Err(ContractError::config_validation(
                        format!("sinks[{}].params.precision", idx),
                        format!("precision must be an integer in 0..={MAX_PRECISION}, got '{precision}'"),
                    ))
                }
            }
        }
    }
    Ok(())
}
