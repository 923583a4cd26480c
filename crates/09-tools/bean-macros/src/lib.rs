//! # Bean Macros
//!
//! 为结构体生成 Bean 描述符，并在程序启动时登记到全局描述符目录。
//!
//! ## 使用示例
//!
//! ```ignore
//! use bean_macros::Bean;
//! use di_common::Autowired;
//!
//! pub trait CustomService: Send + Sync {}
//!
//! #[derive(Default, Bean)]
//! #[bean(provides(dyn CustomService))]
//! pub struct MessageService;
//!
//! #[derive(Default, Bean)]
//! #[bean("printer-bean", provides(dyn CustomService))]
//! pub struct PrinterService {
//!     #[autowire]
//!     message_service: Autowired<MessageService>,
//! }
//! ```
//!
//! 生成的代码引用 `::di_common` 和 `::ctor`，使用方需要依赖这两个 crate。

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod bean;
mod utils;

/// Bean 派生宏
///
/// # 类型属性
///
/// - `#[bean("name")]` 或 `#[bean(name = "name")]` - 显式 Bean 名称
/// - `#[bean(provides(dyn TraitA, dyn TraitB))]` - 可以按这些 trait 对象类型查找
/// - `#[bean(constructor = path::to::fn)]` - 零参数构造函数，返回 `Result<Self, E>`，
///   默认使用 `Default::default()`
///
/// # 字段属性
///
/// - `#[autowire]` - 注入槽位，字段类型为 `Autowired<T>`
#[proc_macro_derive(Bean, attributes(bean, autowire))]
pub fn derive_bean(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    bean::derive_bean_impl(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
