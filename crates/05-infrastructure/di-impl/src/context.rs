//! 应用上下文
//!
//! 扫描 -> 实例化 -> 注册 -> 注入，一次线性构建。构建成功后注册表被冻结在
//! `Arc` 中，之后的查找都是无锁只读操作；构建失败时不会返回任何上下文。

use crate::autowirer::{select_unique, Autowirer};
use crate::discovery::CatalogDiscovery;
use crate::instantiator::instantiate_all;
use crate::registry::DefaultBeanRegistry;
use crate::settings::ContextSettings;
use di_abstractions::{BeanDiscovery, BeanFactory, BeanRegistry, ContainerConfig, DependencyResolver};
use di_common::{BeanDescriptor, BeanError, BeanQuery, BeanResult, TypeInfo};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

/// 容器构建状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContextState {
    /// 尚未开始
    Uninitialized,
    /// 扫描描述符
    Scanning,
    /// 创建实例
    Instantiating,
    /// 注入依赖
    Resolving,
    /// 可以查找
    Ready,
    /// 构建失败
    Failed,
}

impl fmt::Display for ContextState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Uninitialized => "Uninitialized",
            Self::Scanning => "Scanning",
            Self::Instantiating => "Instantiating",
            Self::Resolving => "Resolving",
            Self::Ready => "Ready",
            Self::Failed => "Failed",
        };
        f.write_str(label)
    }
}

/// 应用上下文构建器
pub struct ApplicationContextBuilder {
    scopes: Vec<String>,
    discovery: Box<dyn BeanDiscovery>,
    config: ContainerConfig,
    state: ContextState,
}

impl ApplicationContextBuilder {
    /// 创建新的构建器，默认使用全局描述符目录
    pub fn new() -> Self {
        Self {
            scopes: Vec::new(),
            discovery: Box::new(CatalogDiscovery::new()),
            config: ContainerConfig::default(),
            state: ContextState::Uninitialized,
        }
    }

    /// 添加扫描范围（模块路径），可以多次调用
    pub fn scan<S: Into<String>>(mut self, scope: S) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// 替换发现器
    pub fn discovery<D: BeanDiscovery + 'static>(mut self, discovery: D) -> Self {
        self.discovery = Box::new(discovery);
        self
    }

    /// 设置容器配置
    pub fn config(mut self, config: ContainerConfig) -> Self {
        self.config = config;
        self
    }

    /// 应用上下文设置中的容器配置
    pub fn settings(self, settings: &ContextSettings) -> Self {
        self.config(settings.container.clone())
    }

    /// 构建上下文
    pub fn build(mut self) -> BeanResult<ApplicationContext> {
        info!(
            "开始构建应用上下文，扫描范围: {:?}，发现器: {}",
            self.scopes,
            self.discovery.name()
        );

        match self.run() {
            Ok(context) => {
                self.transition(ContextState::Ready);
                info!(
                    "应用上下文构建完成: {} 个 Bean, {} 个依赖",
                    context.registry.len(),
                    context.wired_slots
                );
                Ok(context)
            }
            Err(e) => {
                self.transition(ContextState::Failed);
                error!("应用上下文构建失败: {}", e);
                Err(e)
            }
        }
    }

    fn run(&mut self) -> BeanResult<ApplicationContext> {
        self.transition(ContextState::Scanning);
        let descriptors = self.scan_descriptors()?;

        self.transition(ContextState::Instantiating);
        let mut registry = DefaultBeanRegistry::with_policy(self.config.duplicate_names);
        for entry in instantiate_all(&descriptors)? {
            registry.register(entry)?;
        }

        self.transition(ContextState::Resolving);
        let wired_slots = Autowirer::new().resolve(&registry)?;

        Ok(ApplicationContext {
            registry: Arc::new(registry),
            wired_slots,
        })
    }

    fn scan_descriptors(&self) -> BeanResult<Vec<BeanDescriptor>> {
        if self.scopes.is_empty() {
            return Err(BeanError::InvalidScope {
                scope: String::new(),
            });
        }

        let mut seen: HashSet<TypeInfo> = HashSet::new();
        let mut descriptors = Vec::new();
        for scope in &self.scopes {
            for descriptor in self.discovery.discover(scope)? {
                if seen.insert(descriptor.type_info) {
                    descriptors.push(descriptor);
                }
            }
        }

        if descriptors.is_empty() && self.config.fail_on_empty_scan {
            return Err(BeanError::EmptyScan {
                scope: self.scopes.join(", "),
            });
        }
        Ok(descriptors)
    }

    fn transition(&mut self, next: ContextState) {
        debug!("容器状态: {} -> {}", self.state, next);
        self.state = next;
    }
}

impl Default for ApplicationContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 应用上下文
///
/// 只读的 Bean 查找入口，可以在线程间自由克隆和共享
#[derive(Clone)]
pub struct ApplicationContext {
    registry: Arc<DefaultBeanRegistry>,
    wired_slots: usize,
}

impl ApplicationContext {
    /// 扫描指定模块路径并构建上下文
    pub fn new<S: Into<String>>(scope: S) -> BeanResult<Self> {
        Self::builder().scan(scope).build()
    }

    /// 创建构建器
    pub fn builder() -> ApplicationContextBuilder {
        ApplicationContextBuilder::new()
    }

    /// 构建时写入的槽位数量
    pub fn wired_slots(&self) -> usize {
        self.wired_slots
    }
}

impl BeanFactory for ApplicationContext {
    fn get_bean<T: ?Sized + 'static>(&self) -> BeanResult<Arc<T>> {
        let target = TypeInfo::of::<T>();
        let entry = select_unique(
            self.registry.find_by_type(target),
            BeanQuery::ByType {
                type_name: target.name,
            },
        )?;
        entry.cast::<T>().ok_or_else(|| BeanError::BeanNotOfRequiredType {
            name: entry.name().to_string(),
            required: target.name,
            actual: entry.type_info().name,
        })
    }

    fn get_bean_by_name<T: ?Sized + 'static>(&self, name: &str) -> BeanResult<Arc<T>> {
        let target = TypeInfo::of::<T>();
        let entry = self
            .registry
            .find_by_name(name)
            .ok_or_else(|| BeanError::no_such_bean_named(name, target.name))?;
        entry.cast::<T>().ok_or_else(|| BeanError::BeanNotOfRequiredType {
            name: name.to_string(),
            required: target.name,
            actual: entry.type_info().name,
        })
    }

    fn get_all_beans<T: ?Sized + 'static>(&self) -> HashMap<String, Arc<T>> {
        self.registry
            .find_by_type(TypeInfo::of::<T>())
            .into_iter()
            .filter_map(|(name, entry)| entry.cast::<T>().map(|bean| (name.to_string(), bean)))
            .collect()
    }

    fn contains_bean(&self, name: &str) -> bool {
        self.registry.find_by_name(name).is_some()
    }

    fn bean_names(&self) -> Vec<String> {
        self.registry
            .entries()
            .into_iter()
            .map(|entry| entry.name().to_string())
            .collect()
    }

    fn bean_count(&self) -> usize {
        self.registry.len()
    }
}

impl fmt::Debug for ApplicationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationContext")
            .field("beans", &self.bean_names())
            .field("wired_slots", &self.wired_slots)
            .finish()
    }
}
