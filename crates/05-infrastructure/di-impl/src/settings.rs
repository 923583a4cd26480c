//! 容器设置加载

use crate::logging::LoggingConfig;
use di_abstractions::ContainerConfig;
use di_common::ConfigResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// 上下文设置：容器配置与日志配置
///
/// ```toml
/// [container]
/// duplicate_names = "reject"
/// fail_on_empty_scan = true
///
/// [logging]
/// level = "debug"
/// json_format = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextSettings {
    /// 容器配置
    pub container: ContainerConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

impl ContextSettings {
    /// 从 TOML 字符串加载
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 从 JSON 字符串加载
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// 从文件加载，`.json` 按 JSON 解析，其他按 TOML 解析
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        info!("加载容器设置: {}", path.display());
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }
}
