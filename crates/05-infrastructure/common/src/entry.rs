//! 注册表中的 Bean 条目

use crate::component::{BeanDescriptor, SharedInstance, SlotDescriptor};
use crate::metadata::TypeInfo;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Bean 条目：名称、实例和描述符
#[derive(Clone)]
pub struct BeanEntry {
    name: String,
    descriptor: Arc<BeanDescriptor>,
    instance: SharedInstance,
}

impl BeanEntry {
    /// 创建新的条目
    pub fn new(name: impl Into<String>, descriptor: BeanDescriptor, instance: SharedInstance) -> Self {
        Self {
            name: name.into(),
            descriptor: Arc::new(descriptor),
            instance,
        }
    }

    /// Bean 名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 描述符
    pub fn descriptor(&self) -> &BeanDescriptor {
        &self.descriptor
    }

    /// 具体类型
    pub fn type_info(&self) -> TypeInfo {
        self.descriptor.type_info
    }

    /// 注入槽位
    pub fn slots(&self) -> &[SlotDescriptor] {
        &self.descriptor.slots
    }

    /// 实例
    pub fn instance(&self) -> &SharedInstance {
        &self.instance
    }

    /// 实例是否可以作为指定类型使用
    pub fn is_assignable_to(&self, type_info: TypeInfo) -> bool {
        self.descriptor.provides(type_info)
    }

    /// 把实例转换为 `Arc<T>`
    ///
    /// `T` 必须是具体类型或描述符登记过的能力，否则返回 `None`。
    pub fn cast<T: ?Sized + 'static>(&self) -> Option<Arc<T>> {
        let target = TypeInfo::of::<T>();
        let capability = self
            .descriptor
            .capabilities
            .iter()
            .find(|capability| capability.type_info == target)?;
        let boxed: Box<dyn Any> = capability.cast(Arc::clone(&self.instance))?;
        boxed.downcast::<Arc<T>>().ok().map(|value| *value)
    }
}

impl fmt::Debug for BeanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanEntry")
            .field("name", &self.name)
            .field("type", &self.descriptor.type_info.name)
            .finish()
    }
}
