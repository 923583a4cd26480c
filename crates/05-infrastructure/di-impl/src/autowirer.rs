//! 按类型自动注入

use di_abstractions::{BeanRegistry, DependencyResolver};
use di_common::{BeanEntry, BeanError, BeanQuery, BeanResult, WireError};
use std::collections::BTreeMap;
use tracing::debug;

/// 默认依赖注入器
///
/// 条目按名称顺序访问，槽位按声明顺序访问，第一个失败即中止
#[derive(Debug, Default, Clone, Copy)]
pub struct Autowirer;

impl Autowirer {
    /// 创建新的注入器
    pub fn new() -> Self {
        Self
    }

    fn wire_entry(&self, registry: &dyn BeanRegistry, entry: &BeanEntry) -> BeanResult<usize> {
        for slot in entry.slots() {
            let query = BeanQuery::Slot {
                bean: entry.name().to_string(),
                slot: slot.id,
                type_name: slot.required.name,
            };
            let candidate = select_unique(registry.find_by_type(slot.required), query)?;

            let target = slot
                .access(&**entry.instance())
                .ok_or_else(|| BeanError::SlotUnavailable {
                    bean: entry.name().to_string(),
                    slot: slot.id,
                })?;

            target.wire(candidate).map_err(|e| match e {
                WireError::Incompatible => BeanError::BeanNotOfRequiredType {
                    name: candidate.name().to_string(),
                    required: slot.required.name,
                    actual: candidate.type_info().name,
                },
                WireError::AlreadyWired => BeanError::SlotAlreadyWired {
                    bean: entry.name().to_string(),
                    slot: slot.id,
                },
            })?;

            debug!(
                "注入依赖: {}.{} <- {}",
                entry.name(),
                slot.id,
                candidate.name()
            );
        }
        Ok(entry.slots().len())
    }
}

impl DependencyResolver for Autowirer {
    fn resolve(&self, registry: &dyn BeanRegistry) -> BeanResult<usize> {
        let mut wired = 0;
        for entry in registry.entries() {
            wired += self.wire_entry(registry, entry)?;
        }
        Ok(wired)
    }
}

/// 从候选集合中选出唯一的条目
///
/// 没有候选返回 `NoSuchBean`，多于一个返回 `NoUniqueBean`
pub fn select_unique<'a>(
    candidates: BTreeMap<&'a str, &'a BeanEntry>,
    query: BeanQuery,
) -> BeanResult<&'a BeanEntry> {
    let mut values = candidates.values();
    match (values.next(), values.next()) {
        (Some(entry), None) => Ok(*entry),
        (None, _) => Err(BeanError::NoSuchBean { query }),
        _ => Err(BeanError::NoUniqueBean {
            query,
            candidates: candidates.keys().map(|name| name.to_string()).collect(),
        }),
    }
}
