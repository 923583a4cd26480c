//! # DI Abstractions
//!
//! Bean 容器抽象层，定义扫描、注册、注入和查找的核心接口。
//!
//! ## 核心接口
//!
//! - [`BeanDiscovery`] - 在扫描范围内发现 Bean 描述符
//! - [`BeanRegistry`] - Bean 注册表接口
//! - [`DependencyResolver`] - 依赖注入器接口
//! - [`BeanFactory`] - 查找接口
//! - [`ContainerConfig`] - 容器配置

pub mod container;
pub mod discovery;
pub mod registry;
pub mod resolver;

pub use container::*;
pub use discovery::*;
pub use registry::*;
pub use resolver::*;
