//! Bean 描述符定义
//!
//! 描述符是编译期生成（或手工构造）的能力表：构造函数、可转换的能力类型、
//! 注入槽位。容器只依赖描述符工作，不需要运行时反射。

use crate::autowire::AutowireSlot;
use crate::errors::BoxError;
use crate::metadata::TypeInfo;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 容器中保存的实例类型
pub type SharedInstance = Arc<dyn Any + Send + Sync>;

/// 零参数构造函数
pub type ConstructorFn = fn() -> Result<SharedInstance, BoxError>;

/// 能力转换函数：把实例转换为 `Box<Arc<T>>`，失败返回 `None`
pub type CastFn = fn(SharedInstance) -> Option<Box<dyn Any>>;

/// 槽位访问函数：从实例中取出注入槽位
pub type SlotAccessorFn = fn(&(dyn Any + Send + Sync)) -> Option<&dyn AutowireSlot>;

/// 可注册 Bean trait
///
/// 通常由 `#[derive(Bean)]` 生成。
pub trait Bean: Any + Send + Sync + Sized {
    /// 获取该类型的描述符
    fn descriptor() -> BeanDescriptor;
}

/// Bean 能力
///
/// 表示实例可以作为 `type_info` 所描述的类型被查找，
/// 具体类型本身或它实现的 `dyn Trait`。
#[derive(Clone, Copy)]
pub struct Capability {
    /// 能力类型
    pub type_info: TypeInfo,
    cast: CastFn,
}

impl Capability {
    /// 创建新的能力
    pub fn new(type_info: TypeInfo, cast: CastFn) -> Self {
        Self { type_info, cast }
    }

    /// 具体类型自身的能力
    pub fn of<T: Any + Send + Sync>() -> Self {
        Self::new(TypeInfo::of::<T>(), cast_to_self::<T>)
    }

    /// 执行转换
    pub fn cast(&self, instance: SharedInstance) -> Option<Box<dyn Any>> {
        (self.cast)(instance)
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability")
            .field("type_info", &self.type_info)
            .field("cast", &"<function>")
            .finish()
    }
}

fn cast_to_self<T: Any + Send + Sync>(instance: SharedInstance) -> Option<Box<dyn Any>> {
    let concrete: Arc<T> = instance.downcast::<T>().ok()?;
    let boxed: Box<dyn Any> = Box::new(concrete);
    Some(boxed)
}

/// 注入槽位描述符
#[derive(Clone, Copy)]
pub struct SlotDescriptor {
    /// 槽位标识（字段名）
    pub id: &'static str,
    /// 槽位需要的类型
    pub required: TypeInfo,
    accessor: SlotAccessorFn,
}

impl SlotDescriptor {
    /// 创建新的槽位描述符
    pub fn new(id: &'static str, required: TypeInfo, accessor: SlotAccessorFn) -> Self {
        Self {
            id,
            required,
            accessor,
        }
    }

    /// 从实例中取出槽位
    pub fn access<'a>(&self, instance: &'a (dyn Any + Send + Sync)) -> Option<&'a dyn AutowireSlot> {
        (self.accessor)(instance)
    }
}

impl fmt::Debug for SlotDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotDescriptor")
            .field("id", &self.id)
            .field("required", &self.required)
            .finish()
    }
}

/// Bean 描述符
#[derive(Clone)]
pub struct BeanDescriptor {
    /// 具体类型信息
    pub type_info: TypeInfo,
    /// 简单类型名
    pub simple_name: &'static str,
    /// 显式指定的 Bean 名称
    pub explicit_name: Option<&'static str>,
    /// 声明所在的模块路径，用于扫描范围匹配
    pub module_path: &'static str,
    /// 零参数构造函数
    pub constructor: ConstructorFn,
    /// 能力列表，第一个总是具体类型自身
    pub capabilities: Vec<Capability>,
    /// 注入槽位，按声明顺序
    pub slots: Vec<SlotDescriptor>,
}

impl BeanDescriptor {
    /// 创建新的 Bean 描述符
    pub fn new(
        type_info: TypeInfo,
        simple_name: &'static str,
        module_path: &'static str,
        constructor: ConstructorFn,
    ) -> Self {
        Self {
            type_info,
            simple_name,
            explicit_name: None,
            module_path,
            constructor,
            capabilities: Vec::new(),
            slots: Vec::new(),
        }
    }

    /// 为具体类型创建描述符，使用 `Default` 构造，并登记自身能力
    pub fn of<T: Any + Send + Sync + Default>(module_path: &'static str) -> Self {
        let type_info = TypeInfo::of::<T>();
        Self::new(
            type_info,
            type_info.short_name(),
            module_path,
            construct_default::<T>,
        )
        .with_capability(Capability::of::<T>())
    }

    /// 设置显式名称
    pub fn with_explicit_name(mut self, name: Option<&'static str>) -> Self {
        self.explicit_name = name;
        self
    }

    /// 设置显式名称
    pub fn named(self, name: &'static str) -> Self {
        self.with_explicit_name(Some(name))
    }

    /// 替换构造函数
    pub fn with_constructor(mut self, constructor: ConstructorFn) -> Self {
        self.constructor = constructor;
        self
    }

    /// 添加能力
    pub fn with_capability(mut self, capability: Capability) -> Self {
        if !self.provides(capability.type_info) {
            self.capabilities.push(capability);
        }
        self
    }

    /// 添加注入槽位
    pub fn with_slot(mut self, slot: SlotDescriptor) -> Self {
        self.slots.push(slot);
        self
    }

    /// 检查是否提供指定能力
    pub fn provides(&self, type_info: TypeInfo) -> bool {
        self.capabilities.iter().any(|c| c.type_info == type_info)
    }

    /// 检查描述符是否位于扫描范围内
    ///
    /// 模块路径等于范围，或以 `范围::` 开头
    pub fn in_scope(&self, scope: &str) -> bool {
        match self.module_path.strip_prefix(scope) {
            Some(rest) => rest.is_empty() || rest.starts_with("::"),
            None => false,
        }
    }
}

impl fmt::Debug for BeanDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanDescriptor")
            .field("type_info", &self.type_info)
            .field("simple_name", &self.simple_name)
            .field("explicit_name", &self.explicit_name)
            .field("module_path", &self.module_path)
            .field("capabilities", &self.capabilities)
            .field("slots", &self.slots)
            .finish()
    }
}

fn construct_default<T: Any + Send + Sync + Default>() -> Result<SharedInstance, BoxError> {
    let instance: SharedInstance = Arc::new(T::default());
    Ok(instance)
}
