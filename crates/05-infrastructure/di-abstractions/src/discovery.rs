//! Bean 发现抽象接口

use di_common::{BeanDescriptor, BeanError, BeanResult};

/// Bean 发现器 trait
///
/// 在扫描范围内枚举候选描述符
pub trait BeanDiscovery: Send + Sync {
    /// 发现扫描范围内的描述符
    fn discover(&self, scope: &str) -> BeanResult<Vec<BeanDescriptor>>;

    /// 获取发现器名称
    fn name(&self) -> &str;
}

/// 校验扫描范围
///
/// 范围是 Rust 模块路径，去掉首尾空白后不能为空，也不能以 `::` 开头或结尾
pub fn validate_scope(scope: &str) -> BeanResult<&str> {
    let trimmed = scope.trim();
    if trimmed.is_empty() || trimmed.starts_with("::") || trimmed.ends_with("::") {
        return Err(BeanError::InvalidScope {
            scope: scope.to_string(),
        });
    }
    Ok(trimmed)
}
