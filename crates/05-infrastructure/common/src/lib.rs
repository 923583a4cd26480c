//! # DI Common
//!
//! Bean 容器的公共类型。
//!
//! ## 核心组件
//!
//! - [`Bean`] - 可注册 Bean trait，通常由 `#[derive(Bean)]` 实现
//! - [`BeanDescriptor`] - 类型描述符：构造函数、能力、注入槽位
//! - [`BeanEntry`] - 注册表中的条目
//! - [`Autowired`] - 只写一次的注入槽位
//! - [`BeanError`] - 容器错误类型
//!
//! 描述符在程序启动时登记到全局目录，扫描时按模块路径过滤。

pub mod autowire;
pub mod component;
pub mod entry;
pub mod errors;
pub mod metadata;

pub use autowire::*;
pub use component::*;
pub use entry::*;
pub use errors::*;
pub use metadata::*;

/// 全局 Bean 描述符目录
static GLOBAL_BEAN_CATALOG: once_cell::sync::Lazy<parking_lot::RwLock<Vec<BeanDescriptor>>> =
    once_cell::sync::Lazy::new(|| parking_lot::RwLock::new(Vec::new()));

/// 登记 Bean 描述符
///
/// 由 `#[derive(Bean)]` 生成的启动函数调用。同一类型重复登记时保留第一次的描述符。
pub fn register_bean_descriptor(descriptor: BeanDescriptor) {
    let mut catalog = GLOBAL_BEAN_CATALOG.write();
    if catalog
        .iter()
        .any(|existing| existing.type_info == descriptor.type_info)
    {
        tracing::debug!("Bean 描述符已登记，忽略重复登记: {}", descriptor.type_info.name);
        return;
    }
    tracing::debug!(
        "登记 Bean 描述符: {} ({})",
        descriptor.type_info.name,
        descriptor.module_path
    );
    catalog.push(descriptor);
}

/// 获取所有已登记的描述符
pub fn bean_descriptors() -> Vec<BeanDescriptor> {
    GLOBAL_BEAN_CATALOG.read().clone()
}

/// 获取指定模块路径下的描述符
pub fn bean_descriptors_in(scope: &str) -> Vec<BeanDescriptor> {
    GLOBAL_BEAN_CATALOG
        .read()
        .iter()
        .filter(|descriptor| descriptor.in_scope(scope))
        .cloned()
        .collect()
}
