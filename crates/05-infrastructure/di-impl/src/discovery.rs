//! Bean 发现实现

use di_abstractions::{validate_scope, BeanDiscovery};
use di_common::{bean_descriptors_in, BeanDescriptor, BeanResult};
use tracing::debug;

/// 基于全局描述符目录的发现器
///
/// `#[derive(Bean)]` 在程序启动时把描述符登记到目录，这里按模块路径过滤
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogDiscovery;

impl CatalogDiscovery {
    /// 创建新的发现器
    pub fn new() -> Self {
        Self
    }
}

impl BeanDiscovery for CatalogDiscovery {
    fn discover(&self, scope: &str) -> BeanResult<Vec<BeanDescriptor>> {
        let scope = validate_scope(scope)?;
        let mut found = bean_descriptors_in(scope);
        found.sort_by(|a, b| a.module_path.cmp(b.module_path).then(a.simple_name.cmp(b.simple_name)));
        debug!("在 {} 中发现 {} 个 Bean 描述符", scope, found.len());
        Ok(found)
    }

    fn name(&self) -> &str {
        "catalog"
    }
}

/// 固定描述符列表的发现器
#[derive(Debug, Default, Clone)]
pub struct StaticDiscovery {
    descriptors: Vec<BeanDescriptor>,
}

impl StaticDiscovery {
    /// 创建空的发现器
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加描述符
    pub fn add(mut self, descriptor: BeanDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }
}

impl BeanDiscovery for StaticDiscovery {
    fn discover(&self, scope: &str) -> BeanResult<Vec<BeanDescriptor>> {
        let scope = validate_scope(scope)?;
        Ok(self
            .descriptors
            .iter()
            .filter(|descriptor| descriptor.in_scope(scope))
            .cloned()
            .collect())
    }

    fn name(&self) -> &str {
        "static"
    }
}
