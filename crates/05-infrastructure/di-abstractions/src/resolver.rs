//! 依赖注入器抽象接口

use crate::registry::BeanRegistry;
use di_common::BeanResult;

/// 依赖注入器 trait
///
/// 为注册表中每个条目的每个注入槽位找到唯一匹配的 Bean 并写入。
/// 只修改槽位，不增删条目。
pub trait DependencyResolver: Send + Sync {
    /// 执行注入，返回写入的槽位数量
    fn resolve(&self, registry: &dyn BeanRegistry) -> BeanResult<usize>;
}
