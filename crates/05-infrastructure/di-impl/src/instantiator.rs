//! Bean 实例化

use crate::naming::checked_bean_name;
use di_common::{BeanDescriptor, BeanEntry, BeanError, BeanResult};
use std::any::Any;
use tracing::debug;

/// 调用零参数构造函数创建实例
///
/// 构造失败时返回 `InstantiationFailed`
pub fn instantiate(descriptor: &BeanDescriptor) -> BeanResult<BeanEntry> {
    let name = checked_bean_name(descriptor)?;
    let instance = (descriptor.constructor)().map_err(|source| BeanError::InstantiationFailed {
        bean: name.clone(),
        type_name: descriptor.type_info.name,
        source,
    })?;

    // 构造函数必须产出描述符声明的具体类型
    if Any::type_id(&*instance) != descriptor.type_info.id {
        return Err(BeanError::InstantiationFailed {
            bean: name,
            type_name: descriptor.type_info.name,
            source: "构造函数返回的实例类型与描述符不一致".into(),
        });
    }

    debug!("实例化 Bean: {} ({})", name, descriptor.type_info.name);
    Ok(BeanEntry::new(name, descriptor.clone(), instance))
}

/// 按顺序实例化所有描述符，遇到第一个失败即返回
pub fn instantiate_all(descriptors: &[BeanDescriptor]) -> BeanResult<Vec<BeanEntry>> {
    descriptors.iter().map(instantiate).collect()
}
