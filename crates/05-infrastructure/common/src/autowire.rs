//! 注入槽位
//!
//! `Autowired<T>` 是只写一次的单元，容器通过 [`AutowireSlot`] 把依赖写入，
//! 业务代码只能读取。

use crate::entry::BeanEntry;
use crate::metadata::TypeInfo;
use once_cell::sync::OnceCell;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// 写入槽位失败的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    /// 候选 Bean 不能转换为槽位需要的类型
    Incompatible,
    /// 槽位已经注入过
    AlreadyWired,
}

/// 可由容器注入的槽位
pub trait AutowireSlot: Send + Sync {
    /// 槽位需要的类型
    fn slot_type() -> TypeInfo
    where
        Self: Sized;

    /// 槽位需要的类型
    fn required_type(&self) -> TypeInfo;

    /// 是否已经注入
    fn is_wired(&self) -> bool;

    /// 把候选 Bean 写入槽位，只能成功一次
    fn wire(&self, candidate: &BeanEntry) -> Result<(), WireError>;
}

/// 自动注入的依赖
///
/// `T` 可以是具体类型，也可以是 `dyn Trait`。
pub struct Autowired<T: ?Sized + Send + Sync + 'static> {
    cell: OnceCell<Arc<T>>,
}

impl<T: ?Sized + Send + Sync + 'static> Autowired<T> {
    /// 创建未注入的槽位
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// 获取已注入的依赖
    pub fn get(&self) -> Option<&Arc<T>> {
        self.cell.get()
    }
}

impl<T: ?Sized + Send + Sync + 'static> Default for Autowired<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + Send + Sync + 'static> Deref for Autowired<T> {
    type Target = T;

    /// # Panics
    ///
    /// 在容器完成注入之前解引用会 panic。容器返回的实例总是已注入的。
    fn deref(&self) -> &T {
        match self.cell.get() {
            Some(value) => value.as_ref(),
            None => panic!("依赖 '{}' 尚未注入", std::any::type_name::<T>()),
        }
    }
}

impl<T: ?Sized + Send + Sync + 'static> fmt::Debug for Autowired<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Autowired")
            .field("type", &std::any::type_name::<T>())
            .field("wired", &self.cell.get().is_some())
            .finish()
    }
}

impl<T: ?Sized + Send + Sync + 'static> AutowireSlot for Autowired<T> {
    fn slot_type() -> TypeInfo {
        TypeInfo::of::<T>()
    }

    fn required_type(&self) -> TypeInfo {
        TypeInfo::of::<T>()
    }

    fn is_wired(&self) -> bool {
        self.cell.get().is_some()
    }

    fn wire(&self, candidate: &BeanEntry) -> Result<(), WireError> {
        let value = candidate.cast::<T>().ok_or(WireError::Incompatible)?;
        self.cell.set(value).map_err(|_| WireError::AlreadyWired)
    }
}
