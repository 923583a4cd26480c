//! Bean 注册表抽象接口

use di_common::{BeanEntry, BeanResult, TypeInfo};
use std::collections::BTreeMap;

/// Bean 注册表 trait
///
/// 名称到条目的映射，名称在注册表内唯一
pub trait BeanRegistry: Send + Sync {
    /// 注册条目
    ///
    /// 同名条目已存在时按重名策略覆盖或拒绝，覆盖时返回被替换的条目
    fn register(&mut self, entry: BeanEntry) -> BeanResult<Option<BeanEntry>>;

    /// 查找所有可以作为指定类型使用的条目，按名称排序
    fn find_by_type(&self, type_info: TypeInfo) -> BTreeMap<&str, &BeanEntry>;

    /// 按名称精确查找
    fn find_by_name(&self, name: &str) -> Option<&BeanEntry>;

    /// 所有条目，按名称排序
    fn entries(&self) -> Vec<&BeanEntry>;

    /// 条目数量
    fn len(&self) -> usize;

    /// 是否为空
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
