//! 错误类型定义

use std::fmt;
use thiserror::Error;

/// 装箱的通用错误类型，用于构造函数失败等场景
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 一次 Bean 查找的描述，出现在 `NoSuchBean` / `NoUniqueBean` 错误中
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeanQuery {
    /// 按类型查找
    ByType {
        /// 请求的类型
        type_name: &'static str,
    },
    /// 按名称查找
    ByName {
        /// 请求的 Bean 名称
        name: String,
        /// 请求的类型
        type_name: &'static str,
    },
    /// 为某个 Bean 的注入槽位查找依赖
    Slot {
        /// 拥有该槽位的 Bean 名称
        bean: String,
        /// 槽位标识
        slot: &'static str,
        /// 槽位需要的类型
        type_name: &'static str,
    },
}

impl fmt::Display for BeanQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByType { type_name } => write!(f, "类型 '{}'", type_name),
            Self::ByName { name, type_name } => {
                write!(f, "名称 '{}' (类型 '{}')", name, type_name)
            }
            Self::Slot {
                bean,
                slot,
                type_name,
            } => write!(f, "Bean '{}' 的槽位 '{}' (类型 '{}')", bean, slot, type_name),
        }
    }
}

/// Bean 容器错误类型
#[derive(Error, Debug)]
pub enum BeanError {
    #[error("找不到匹配的 Bean: {query}")]
    NoSuchBean { query: BeanQuery },

    #[error("匹配的 Bean 不唯一: {query}, 候选: {candidates:?}")]
    NoUniqueBean {
        query: BeanQuery,
        candidates: Vec<String>,
    },

    #[error("Bean '{name}' 的类型 '{actual}' 不能作为 '{required}' 使用")]
    BeanNotOfRequiredType {
        name: String,
        required: &'static str,
        actual: &'static str,
    },

    #[error("Bean 名称重复: {name}")]
    DuplicateBean { name: String },

    #[error("Bean 名称不能为空: {type_name}")]
    EmptyBeanName { type_name: &'static str },

    #[error("Bean 实例化失败: {bean} ({type_name}), 原因: {source}")]
    InstantiationFailed {
        bean: String,
        type_name: &'static str,
        source: BoxError,
    },

    #[error("无效的扫描范围: '{scope}'")]
    InvalidScope { scope: String },

    #[error("扫描范围内没有发现 Bean: {scope}")]
    EmptyScan { scope: String },

    #[error("Bean '{bean}' 的槽位 '{slot}' 无法访问，描述符与实例类型不一致")]
    SlotUnavailable { bean: String, slot: &'static str },

    #[error("Bean '{bean}' 的槽位 '{slot}' 已经注入过")]
    SlotAlreadyWired { bean: String, slot: &'static str },

    #[error("配置错误: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}

impl BeanError {
    /// 按名称查找失败
    pub fn no_such_bean_named(name: impl Into<String>, type_name: &'static str) -> Self {
        Self::NoSuchBean {
            query: BeanQuery::ByName {
                name: name.into(),
                type_name,
            },
        }
    }

    /// 是否为 `NoSuchBean`
    pub fn is_no_such_bean(&self) -> bool {
        matches!(self, Self::NoSuchBean { .. })
    }

    /// 是否为 `NoUniqueBean`
    pub fn is_no_unique_bean(&self) -> bool {
        matches!(self, Self::NoUniqueBean { .. })
    }
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("TOML 配置解析失败: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },

    #[error("JSON 配置解析失败: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("日志初始化失败: {message}")]
    Logging { message: String },
}

/// 结果类型别名
pub type BeanResult<T> = Result<T, BeanError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
