//! 注册协调器
//!
//! 一次注册过程：解析扫描根 → 扫描 → 逐个注册到容器 → 执行扩展钩子。
//! 任何阶段失败都会中止本次过程，后续阶段不再执行。

use crate::builder::RegistrarBuilder;
use crate::roots::PackageRootResolver;
use di_abstractions::{
    ComponentRegistry, ComponentScanner, RegistrationHook, RegistrationResult, ResolvedRoots,
    ScanDirective, TypeFilterSet,
};
use infrastructure_common::{ComponentError, ComponentResult, PassState};
use parking_lot::Mutex;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

/// 组件注册器
///
/// 持有固定的过滤器、扫描器和扩展钩子，可以针对不同的扫描指令和容器多次执行注册过程。
pub struct ComponentRegistrar {
    filters: TypeFilterSet,
    resolver: PackageRootResolver,
    scanner: Box<dyn ComponentScanner>,
    hook: Box<dyn RegistrationHook>,
    state: Mutex<PassState>,
}

impl ComponentRegistrar {
    pub(crate) fn new(
        filters: TypeFilterSet,
        scanner: Box<dyn ComponentScanner>,
        hook: Box<dyn RegistrationHook>,
    ) -> Self {
        Self {
            filters,
            resolver: PackageRootResolver::new(),
            scanner,
            hook,
            state: Mutex::new(PassState::Idle),
        }
    }

    /// 创建构建器
    pub fn builder() -> RegistrarBuilder {
        RegistrarBuilder::new()
    }

    /// 获取类型过滤器
    pub fn filters(&self) -> &TypeFilterSet {
        &self.filters
    }

    /// 最近一次注册过程的状态
    pub fn last_state(&self) -> PassState {
        self.state.lock().clone()
    }

    /// 只解析扫描根，不扫描也不注册
    pub fn resolve_roots(&self, directive: &ScanDirective) -> ComponentResult<ResolvedRoots> {
        self.resolver.resolve_roots(directive, &self.filters)
    }

    /// 执行一次注册过程
    ///
    /// 成功时返回本次注册的全部组件。容器拒绝某个组件时，之前已注册的组件保留在容器中，
    /// 扩展钩子不会执行；扩展钩子失败时错误被包装为 [`ComponentError::Registration`]。
    pub async fn register(
        &self,
        directive: &ScanDirective,
        registry: &dyn ComponentRegistry,
    ) -> ComponentResult<RegistrationResult> {
        let pass_id = Uuid::new_v4();
        let span = info_span!("component_registration", %pass_id, scanner = self.scanner.name());
        self.run_pass(pass_id, directive, registry)
            .instrument(span)
            .await
    }

    async fn run_pass(
        &self,
        pass_id: Uuid,
        directive: &ScanDirective,
        registry: &dyn ComponentRegistry,
    ) -> ComponentResult<RegistrationResult> {
        *self.state.lock() = PassState::Idle;

        let roots = self.record(self.resolve_roots(directive))?;
        self.advance();
        match serde_json::to_string_pretty(&roots) {
            Ok(json) => info!("组件扫描路径:\n{}", json),
            Err(e) => warn!("扫描路径序列化失败: {}", e),
        }

        let descriptors = self.record(self.scanner.scan(&roots, &self.filters))?;
        self.advance();
        info!("扫描完成，共发现 {} 个组件", descriptors.len());

        for descriptor in &descriptors {
            let outcome = registry
                .register_component(&descriptor.name, &descriptor.type_info)
                .await
                .map_err(|source| ComponentError::ContainerRejected {
                    name: descriptor.name.clone(),
                    source,
                });
            self.record(outcome)?;
        }
        self.advance();

        let result = RegistrationResult::new(pass_id, roots, descriptors);
        debug!("执行扩展钩子: {}", self.hook.name());
        let hooked = self
            .hook
            .process(registry, &result)
            .await
            .map_err(ComponentError::registration);
        self.record(hooked)?;
        self.advance();

        info!("组件注册完成，共注册 {} 个组件", result.len());
        Ok(result)
    }

    fn record<T>(&self, outcome: ComponentResult<T>) -> ComponentResult<T> {
        outcome.map_err(|e| {
            let stage = e.stage();
            error!(%stage, "组件注册过程失败: {}", e);
            *self.state.lock() = PassState::fail(stage, &e);
            e
        })
    }

    fn advance(&self) {
        let mut state = self.state.lock();
        if let Some(next) = state.advance() {
            debug!("注册过程状态: {:?} -> {:?}", *state, next);
            *state = next;
        }
    }
}

impl std::fmt::Debug for ComponentRegistrar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistrar")
            .field("filters", &self.filters)
            .field("scanner", &self.scanner.name())
            .field("hook", &self.hook.name())
            .field("state", &*self.state.lock())
            .finish()
    }
}
