//! 跨 crate 的组件扫描注册集成测试
use async_trait::async_trait;
use di_abstractions::{
    ComponentDefinition, ComponentRegistry, ScanDirective, TypeFilter, TypeFilterProvider,
    TypeFilterSet,
};
use di_impl::{ContainerConfig, DiContainerImpl, NameCase, ConventionNameGenerator, TypeCatalog};
use infrastructure_common::{
    ComponentError, DependencyError, Discoverable, Marker, MarkerInfo, Namespace, TypeInfo,
    Visibility,
};
use infrastructure_composition::{
    ComponentRegistrar, DirectiveLoader, DispatchTable, DispatchTableHook,
};
use parking_lot::Mutex;
use std::any::TypeId;
use std::io::Write;

/// 命令处理器标记
trait Command {}

impl Marker for dyn Command {
    fn marker_info() -> MarkerInfo {
        MarkerInfo::of::<dyn Command>().in_namespace(ns("app.commands"))
    }
}

struct PingCommand;
struct EchoCommand;
struct ShutdownCommand;

impl Discoverable for PingCommand {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>()
            .in_namespace(ns("app.commands"))
            .implementing::<dyn Command>()
    }
}

impl Discoverable for EchoCommand {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>()
            .in_namespace(ns("app.commands.text"))
            .implementing::<dyn Command>()
            .with_visibility(Visibility::Crate)
    }
}

impl Discoverable for ShutdownCommand {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>()
            .in_namespace(ns("app.admin"))
            .implementing::<dyn Command>()
    }
}

/// 只声明过滤器的注册器类型
struct CommandRegistrar;

impl TypeFilterProvider for CommandRegistrar {
    fn type_filters(&self) -> TypeFilterSet {
        TypeFilterSet::new().with(TypeFilter::transitive::<dyn Command>())
    }
}

/// 记录每次注册调用的容器包装
struct RecordingRegistry {
    inner: DiContainerImpl,
    calls: Mutex<Vec<String>>,
}

impl RecordingRegistry {
    fn new() -> Self {
        Self {
            inner: DiContainerImpl::new(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ComponentRegistry for RecordingRegistry {
    async fn register_component(
        &self,
        name: &str,
        type_info: &TypeInfo,
    ) -> Result<(), DependencyError> {
        self.calls.lock().push(name.to_string());
        self.inner.register_component(name, type_info).await
    }

    fn has_component(&self, name: &str) -> bool {
        self.inner.has_component(name)
    }

    fn get_component(&self, name: &str) -> Option<ComponentDefinition> {
        self.inner.get_component(name)
    }

    fn find_by_type(&self, type_id: TypeId) -> Vec<ComponentDefinition> {
        self.inner.find_by_type(type_id)
    }

    fn find_by_marker(&self, marker: TypeId) -> Vec<ComponentDefinition> {
        self.inner.find_by_marker(marker)
    }

    fn component_names(&self) -> Vec<String> {
        self.inner.component_names()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

fn ns(raw: &str) -> Namespace {
    Namespace::parse(raw).unwrap()
}

fn catalog() -> TypeCatalog {
    TypeCatalog::new()
        .with::<PingCommand>()
        .with::<EchoCommand>()
        .with::<ShutdownCommand>()
}

#[tokio::test]
async fn test_registrar_type_drives_full_pass() -> anyhow::Result<()> {
    let table = DispatchTable::new();
    let registrar = ComponentRegistrar::builder()
        .with_filters(&CommandRegistrar)
        .with_enumerator(catalog())
        .with_hook(DispatchTableHook::new(table.clone()))
        .build()?;
    let registry = RecordingRegistry::new();

    // 来源命名空间之外的 app.admin 不会被扫描，标记所在的 app.commands 会被合并进来
    let directive = ScanDirective::new().with_origin("app.text");
    let result = registrar.register(&directive, &registry).await?;

    assert_eq!(result.names(), vec!["ping", "echo"]);
    assert_eq!(*registry.calls.lock(), vec!["ping", "echo"]);
    assert_eq!(
        registry.find_by_marker(TypeId::of::<dyn Command>()).len(),
        2
    );
    assert_eq!(
        result.get("echo").map(|d| d.visibility()),
        Some(Visibility::Crate)
    );
    assert_eq!(table.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_directive_from_config_file() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "[scan]\nexplicit_roots = [\"app.admin\"]")?;

    let directive = DirectiveLoader::new().add_file(file.path(), 0)?.load()?;
    let registrar = ComponentRegistrar::builder()
        .with_filters(&CommandRegistrar)
        .with_enumerator(catalog())
        .build()?;
    let container = DiContainerImpl::new();

    let result = registrar.register(&directive, &container).await?;

    assert_eq!(result.names(), vec!["shutdown", "ping", "echo"]);
    assert_eq!(
        container.get_component("shutdown").map(|d| d.type_info.id),
        Some(TypeId::of::<ShutdownCommand>())
    );
    Ok(())
}

#[tokio::test]
async fn test_snake_case_names_with_custom_generator() -> anyhow::Result<()> {
    let registrar = ComponentRegistrar::builder()
        .with_filters(&CommandRegistrar)
        .with_enumerator(catalog())
        .with_name_generator(ConventionNameGenerator::new().with_case(NameCase::Snake))
        .build()?;
    let container = DiContainerImpl::new();

    registrar
        .register(&ScanDirective::new().with_root("app"), &container)
        .await?;

    assert_eq!(
        container.component_names(),
        vec!["ping_command", "echo_command", "shutdown_command"]
    );
    Ok(())
}

#[tokio::test]
async fn test_second_pass_into_same_container_is_rejected() -> anyhow::Result<()> {
    let registrar = ComponentRegistrar::builder()
        .with_filters(&CommandRegistrar)
        .with_enumerator(catalog())
        .build()?;
    let container = DiContainerImpl::new();
    let directive = ScanDirective::new().with_root("app.commands");

    registrar.register(&directive, &container).await?;
    let err = registrar
        .register(&directive, &container)
        .await
        .expect_err("名称在容器中已存在");

    assert!(matches!(
        err,
        ComponentError::ContainerRejected {
            source: DependencyError::DuplicateName { .. },
            ..
        }
    ));
    Ok(())
}

#[tokio::test]
async fn test_container_override_allows_second_pass() -> anyhow::Result<()> {
    let registrar = ComponentRegistrar::builder()
        .with_filters(&CommandRegistrar)
        .with_enumerator(catalog())
        .build()?;
    let container = DiContainerImpl::with_config(ContainerConfig {
        allow_name_override: true,
    });
    let directive = ScanDirective::new().with_root("app.commands");

    registrar.register(&directive, &container).await?;
    registrar.register(&directive, &container).await?;

    assert_eq!(container.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_inaccessible_namespace_fails_pass() -> anyhow::Result<()> {
    let registrar = ComponentRegistrar::builder()
        .with_filters(&CommandRegistrar)
        .with_enumerator(catalog().deny(ns("app.admin")))
        .build()?;
    let registry = RecordingRegistry::new();

    let err = registrar
        .register(&ScanDirective::new().with_root("app"), &registry)
        .await
        .expect_err("app 与不可访问的 app.admin 重叠");

    assert!(matches!(err, ComponentError::Scan { .. }));
    assert!(registry.calls.lock().is_empty());
    Ok(())
}
