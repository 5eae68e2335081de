//! # 依赖注入具体实现
//!
//! 提供具体的组件容器、类型目录和名称生成器实现

use async_trait::async_trait;
use di_abstractions::{ComponentDefinition, ComponentRegistry};
use infrastructure_common::{DependencyError, TypeInfo};
use parking_lot::RwLock;
use std::any::TypeId;
use std::collections::HashMap;
use tracing::{debug, info, warn};

pub mod catalog;
pub mod naming;

pub use catalog::TypeCatalog;
pub use naming::{ConventionNameGenerator, NameCase};

/// 容器配置
#[derive(Debug, Clone, Default)]
pub struct ContainerConfig {
    /// 是否允许同名组件覆盖已有注册（默认拒绝）
    pub allow_name_override: bool,
}

/// 按注册顺序保存的组件定义
#[derive(Debug, Default)]
struct Registrations {
    ordered: Vec<ComponentDefinition>,
    by_name: HashMap<String, usize>,
}

impl Registrations {
    fn insert(
        &mut self,
        config: &ContainerConfig,
        definition: ComponentDefinition,
    ) -> Result<(), DependencyError> {
        if definition.name.trim().is_empty() {
            return Err(DependencyError::RegistrationFailed {
                name: definition.name,
                message: "组件名称不能为空".to_string(),
            });
        }

        match self.by_name.get(&definition.name) {
            Some(&index) if config.allow_name_override => {
                warn!(
                    "覆盖已注册组件: {} ({} -> {})",
                    definition.name, self.ordered[index].type_info, definition.type_info
                );
                self.ordered[index] = definition;
                Ok(())
            }
            Some(&index) => Err(DependencyError::DuplicateName {
                name: definition.name.clone(),
                existing: self.ordered[index].type_info.to_string(),
                incoming: definition.type_info.to_string(),
            }),
            None => {
                self.by_name
                    .insert(definition.name.clone(), self.ordered.len());
                self.ordered.push(definition);
                Ok(())
            }
        }
    }
}

/// 具体的组件容器实现
///
/// 名称唯一；按注册顺序保存组件定义，不负责实例化
#[derive(Debug, Default)]
pub struct DiContainerImpl {
    config: ContainerConfig,
    registrations: RwLock<Registrations>,
}

impl DiContainerImpl {
    /// 创建新的容器
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定配置创建容器
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            config,
            registrations: RwLock::new(Registrations::default()),
        }
    }

    /// 创建容器构建器
    pub fn builder() -> DiContainerBuilder {
        DiContainerBuilder::new()
    }

    /// 获取容器配置
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// 按注册顺序获取所有组件定义
    pub fn definitions(&self) -> Vec<ComponentDefinition> {
        self.registrations.read().ordered.clone()
    }
}

#[async_trait]
impl ComponentRegistry for DiContainerImpl {
    async fn register_component(
        &self,
        name: &str,
        type_info: &TypeInfo,
    ) -> Result<(), DependencyError> {
        info!("注册组件: {} ({})", name, type_info.type_name);

        let definition = ComponentDefinition::new(name, type_info.clone());
        self.registrations.write().insert(&self.config, definition)
    }

    fn has_component(&self, name: &str) -> bool {
        self.registrations.read().by_name.contains_key(name)
    }

    fn get_component(&self, name: &str) -> Option<ComponentDefinition> {
        let registrations = self.registrations.read();
        registrations
            .by_name
            .get(name)
            .map(|&index| registrations.ordered[index].clone())
    }

    fn find_by_type(&self, type_id: TypeId) -> Vec<ComponentDefinition> {
        self.registrations
            .read()
            .ordered
            .iter()
            .filter(|definition| definition.type_info.id == type_id)
            .cloned()
            .collect()
    }

    fn find_by_marker(&self, marker: TypeId) -> Vec<ComponentDefinition> {
        self.registrations
            .read()
            .ordered
            .iter()
            .filter(|definition| definition.type_info.implements(marker))
            .cloned()
            .collect()
    }

    fn component_names(&self) -> Vec<String> {
        self.registrations
            .read()
            .ordered
            .iter()
            .map(|definition| definition.name.clone())
            .collect()
    }

    fn len(&self) -> usize {
        self.registrations.read().ordered.len()
    }
}

/// 容器构建器
///
/// 可以预先注册外部定义的组件
#[derive(Debug, Default)]
pub struct DiContainerBuilder {
    config: ContainerConfig,
    registrations: Vec<ComponentDefinition>,
}

impl DiContainerBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置是否允许同名覆盖
    pub fn allow_name_override(mut self, allow: bool) -> Self {
        self.config.allow_name_override = allow;
        self
    }

    /// 添加组件注册
    pub fn register_component(mut self, name: impl Into<String>, type_info: TypeInfo) -> Self {
        self.registrations
            .push(ComponentDefinition::new(name, type_info));
        self
    }

    /// 构建容器
    pub fn build(self) -> Result<DiContainerImpl, DependencyError> {
        let mut registrations = Registrations::default();
        let registration_count = self.registrations.len();

        for definition in self.registrations {
            debug!("预注册组件: {}", definition.name);
            registrations.insert(&self.config, definition)?;
        }

        info!("构建容器完成，预注册了 {} 个组件", registration_count);
        Ok(DiContainerImpl {
            config: self.config,
            registrations: RwLock::new(registrations),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infrastructure_common::{MarkerInfo, Namespace};

    trait Command {}
    struct PingCommand;
    struct EchoCommand;

    fn command_marker() -> MarkerInfo {
        MarkerInfo::of::<dyn Command>()
    }

    fn ping() -> TypeInfo {
        TypeInfo::of::<PingCommand>()
            .in_namespace(Namespace::parse("svc.commands").unwrap())
            .implementing_marker(command_marker())
    }

    fn echo() -> TypeInfo {
        TypeInfo::of::<EchoCommand>()
            .in_namespace(Namespace::parse("svc.commands").unwrap())
            .implementing_marker(command_marker())
    }

    #[tokio::test]
    async fn test_register_and_lookup() {
        let container = DiContainerImpl::new();
        container.register_component("ping", &ping()).await.unwrap();
        container.register_component("echo", &echo()).await.unwrap();

        assert!(container.has_component("ping"));
        assert!(!container.has_component("pong"));
        assert_eq!(container.len(), 2);
        assert_eq!(container.component_names(), vec!["ping", "echo"]);

        let definition = container.get_component("echo").unwrap();
        assert_eq!(definition.type_info.id, TypeId::of::<EchoCommand>());

        let by_type = container.find_by_type(TypeId::of::<PingCommand>());
        assert_eq!(by_type.len(), 1);
        assert_eq!(by_type[0].name, "ping");

        let by_marker = container.find_by_marker(TypeId::of::<dyn Command>());
        assert_eq!(by_marker.len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_name_is_rejected() {
        let container = DiContainerImpl::new();
        container.register_component("ping", &ping()).await.unwrap();

        let err = container
            .register_component("ping", &echo())
            .await
            .unwrap_err();
        assert!(matches!(err, DependencyError::DuplicateName { ref name, .. } if name == "ping"));
        assert_eq!(
            container.get_component("ping").unwrap().type_info.id,
            TypeId::of::<PingCommand>()
        );
    }

    #[tokio::test]
    async fn test_override_when_allowed() {
        let container = DiContainerImpl::builder()
            .allow_name_override(true)
            .build()
            .unwrap();
        container.register_component("ping", &ping()).await.unwrap();
        container.register_component("ping", &echo()).await.unwrap();

        assert_eq!(container.len(), 1);
        assert_eq!(
            container.get_component("ping").unwrap().type_info.id,
            TypeId::of::<EchoCommand>()
        );
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected() {
        let container = DiContainerImpl::new();
        let err = container.register_component(" ", &ping()).await.unwrap_err();
        assert!(matches!(err, DependencyError::RegistrationFailed { .. }));
        assert!(container.is_empty());
    }

    #[test]
    fn test_builder_rejects_duplicate_preregistration() {
        let result = DiContainerImpl::builder()
            .register_component("ping", ping())
            .register_component("ping", echo())
            .build();
        assert!(result.is_err());
    }
}
