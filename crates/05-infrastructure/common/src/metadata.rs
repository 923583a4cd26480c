//! 类型元数据
//!
//! 提供按 `TypeId` 比较、按类型名展示的类型信息

use std::any::TypeId;
use std::fmt;

/// 类型信息
///
/// 相等性与哈希只看 `id`，`name` 仅用于日志和错误信息。
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    /// 类型ID
    pub id: TypeId,
    /// 完整类型名称（含模块路径）
    pub name: &'static str,
}

impl TypeInfo {
    /// 从类型获取类型信息，支持 `dyn Trait`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 获取简短的类型名称（不包含模块路径和泛型参数）
    pub fn short_name(&self) -> &'static str {
        short_type_name(self.name)
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl std::hash::Hash for TypeInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// 从完整类型名中截取简短名称
///
/// `app::beans::MessageService` -> `MessageService`，
/// `app::Wrapper<app::Inner>` -> `Wrapper`，
/// `dyn app::CustomService` -> `CustomService`
pub fn short_type_name(full_name: &'static str) -> &'static str {
    let without_generics = full_name.split('<').next().unwrap_or(full_name);
    let without_dyn = without_generics
        .strip_prefix("dyn ")
        .unwrap_or(without_generics);
    without_dyn.rsplit("::").next().unwrap_or(without_dyn)
}
