//! 容器查找接口与配置

use di_common::BeanResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Bean 查找接口
///
/// 构建完成后的只读视图，`T` 可以是具体类型或 `dyn Trait`
pub trait BeanFactory: Send + Sync {
    /// 按类型获取唯一的 Bean
    ///
    /// 没有匹配时返回 `NoSuchBean`，多于一个时返回 `NoUniqueBean`
    fn get_bean<T: ?Sized + 'static>(&self) -> BeanResult<Arc<T>>;

    /// 按名称获取 Bean 并转换为指定类型
    ///
    /// 名称不存在时返回 `NoSuchBean`，类型不匹配时返回 `BeanNotOfRequiredType`
    fn get_bean_by_name<T: ?Sized + 'static>(&self, name: &str) -> BeanResult<Arc<T>>;

    /// 获取所有可以作为指定类型使用的 Bean，键为 Bean 名称
    fn get_all_beans<T: ?Sized + 'static>(&self) -> HashMap<String, Arc<T>>;

    /// 是否存在指定名称的 Bean
    fn contains_bean(&self, name: &str) -> bool;

    /// 所有 Bean 名称，按名称排序
    fn bean_names(&self) -> Vec<String>;

    /// Bean 数量
    fn bean_count(&self) -> usize;
}

/// 重名策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateNamePolicy {
    /// 后注册的覆盖先注册的，记录警告
    #[default]
    Overwrite,
    /// 拒绝重名，返回 `DuplicateBean`
    Reject,
}

/// 容器配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// 重名策略
    pub duplicate_names: DuplicateNamePolicy,
    /// 扫描结果为空时是否失败
    pub fail_on_empty_scan: bool,
}

impl ContainerConfig {
    /// 严格配置：拒绝重名，空扫描失败
    pub fn strict() -> Self {
        Self {
            duplicate_names: DuplicateNamePolicy::Reject,
            fail_on_empty_scan: true,
        }
    }
}
