//! 宏工具函数

use proc_macro2::Span;
use syn::{Attribute, Field, Ident, Type};

/// 将驼峰命名转换为蛇形命名
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() && i > 0 {
            let prev_is_lower = chars.get(i - 1).map_or(false, |c| c.is_lowercase());
            let next_is_lower = chars.get(i + 1).map_or(false, |c| c.is_lowercase());

            if prev_is_lower || next_is_lower {
                result.push('_');
            }
        }
        result.extend(ch.to_lowercase());
    }

    result
}

/// 生成带前缀的内部标识符，例如 `__register_bean_message_service`
pub fn hidden_ident(prefix: &str, name: &str) -> Ident {
    Ident::new(&format!("__{}_{}", prefix, to_snake_case(name)), Span::call_site())
}

/// 检查属性列表中是否有指定属性
pub fn has_attribute(attrs: &[Attribute], attr_name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(attr_name))
}

/// 检查类型是否为 `Autowired<..>`
pub fn is_autowired_type(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map_or(false, |segment| segment.ident == "Autowired"),
        Type::Group(group) => is_autowired_type(&group.elem),
        Type::Paren(paren) => is_autowired_type(&paren.elem),
        _ => false,
    }
}

/// 检查字段是否为注入槽位
///
/// 标注了 `#[autowire]` 或类型为 `Autowired<..>` 的字段都是槽位
pub fn is_autowire_field(field: &Field) -> bool {
    has_attribute(&field.attrs, "autowire") || is_autowired_type(&field.ty)
}
