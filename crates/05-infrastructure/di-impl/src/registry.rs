//! 默认 Bean 注册表

use di_abstractions::{BeanRegistry, DuplicateNamePolicy};
use di_common::{BeanEntry, BeanError, BeanResult, TypeInfo};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// 默认 Bean 注册表
#[derive(Debug, Default)]
pub struct DefaultBeanRegistry {
    entries: HashMap<String, BeanEntry>,
    policy: DuplicateNamePolicy,
}

impl DefaultBeanRegistry {
    /// 创建新的注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定重名策略创建注册表
    pub fn with_policy(policy: DuplicateNamePolicy) -> Self {
        Self {
            entries: HashMap::new(),
            policy,
        }
    }
}

impl BeanRegistry for DefaultBeanRegistry {
    fn register(&mut self, entry: BeanEntry) -> BeanResult<Option<BeanEntry>> {
        if entry.name().is_empty() {
            return Err(BeanError::EmptyBeanName {
                type_name: entry.type_info().name,
            });
        }

        if let Some(existing) = self.entries.get(entry.name()) {
            match self.policy {
                DuplicateNamePolicy::Reject => {
                    return Err(BeanError::DuplicateBean {
                        name: entry.name().to_string(),
                    });
                }
                DuplicateNamePolicy::Overwrite => {
                    warn!(
                        "Bean 名称重复，覆盖已注册的 Bean: {} ({} -> {})",
                        entry.name(),
                        existing.type_info().name,
                        entry.type_info().name
                    );
                }
            }
        }

        debug!("注册 Bean: {} ({})", entry.name(), entry.type_info().name);
        Ok(self.entries.insert(entry.name().to_string(), entry))
    }

    fn find_by_type(&self, type_info: TypeInfo) -> BTreeMap<&str, &BeanEntry> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.is_assignable_to(type_info))
            .map(|(name, entry)| (name.as_str(), entry))
            .collect()
    }

    fn find_by_name(&self, name: &str) -> Option<&BeanEntry> {
        self.entries.get(name)
    }

    fn entries(&self) -> Vec<&BeanEntry> {
        let mut entries: Vec<&BeanEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        entries
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
