//! Bean 名称解析

use di_common::{BeanDescriptor, BeanError, BeanResult};

/// 解析 Bean 名称
///
/// 显式名称去掉首尾空白后非空时原样使用；否则取简单类型名并把首字母小写，
/// 例如 `MessageService` -> `messageService`。
pub fn resolve_bean_name(descriptor: &BeanDescriptor) -> String {
    match descriptor.explicit_name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => decapitalize(descriptor.simple_name),
    }
}

/// 解析名称并拒绝空名称
pub fn checked_bean_name(descriptor: &BeanDescriptor) -> BeanResult<String> {
    let name = resolve_bean_name(descriptor);
    if name.is_empty() {
        return Err(BeanError::EmptyBeanName {
            type_name: descriptor.type_info.name,
        });
    }
    Ok(name)
}

/// 首字母小写，其余字符不变
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
