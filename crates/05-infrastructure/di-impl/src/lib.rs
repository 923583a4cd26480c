//! # DI Impl
//!
//! Bean 容器的具体实现：注册表、名称解析、实例化、按类型注入和应用上下文。
//!
//! ```ignore
//! use di_abstractions::BeanFactory;
//! use di_impl::ApplicationContext;
//!
//! let context = ApplicationContext::new("my_app::beans")?;
//! let service = context.get_bean::<MessageService>()?;
//! ```

pub mod autowirer;
pub mod context;
pub mod discovery;
pub mod instantiator;
pub mod logging;
pub mod naming;
pub mod registry;
pub mod settings;

pub use autowirer::*;
pub use context::*;
pub use discovery::*;
pub use instantiator::*;
pub use logging::*;
pub use naming::*;
pub use registry::*;
pub use settings::*;
