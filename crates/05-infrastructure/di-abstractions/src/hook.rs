//! 注册后扩展钩子
//!
//! 所有组件注册完成后执行一次，可以观察完整的注册结果，
//! 例如构建名称到类型的分发表。

use crate::directive::ResolvedRoots;
use crate::registry::ComponentRegistry;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use infrastructure_common::{BoxError, ComponentDescriptor, TypeInfo};
use uuid::Uuid;

/// 注册结果
///
/// 一次注册过程中成功注册的组件，按发现顺序排列
#[derive(Debug, Clone)]
pub struct RegistrationResult {
    /// 注册过程ID
    pub pass_id: Uuid,
    /// 本次扫描的根
    pub roots: ResolvedRoots,
    /// 已注册的组件描述符
    pub components: Vec<ComponentDescriptor>,
    /// 完成时间
    pub completed_at: DateTime<Utc>,
}

impl RegistrationResult {
    /// 创建新的注册结果
    pub fn new(pass_id: Uuid, roots: ResolvedRoots, components: Vec<ComponentDescriptor>) -> Self {
        Self {
            pass_id,
            roots,
            components,
            completed_at: Utc::now(),
        }
    }

    /// 组件数量
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// 按发现顺序遍历组件描述符
    pub fn iter(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.components.iter()
    }

    /// 按发现顺序遍历（名称，类型）
    pub fn entries(&self) -> impl Iterator<Item = (&str, &TypeInfo)> {
        self.components
            .iter()
            .map(|descriptor| (descriptor.name.as_str(), &descriptor.type_info))
    }

    /// 按发现顺序获取组件名称
    pub fn names(&self) -> Vec<&str> {
        self.components
            .iter()
            .map(|descriptor| descriptor.name.as_str())
            .collect()
    }

    /// 按名称查找组件描述符
    pub fn get(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.components
            .iter()
            .find(|descriptor| descriptor.name == name)
    }
}

/// 注册后扩展钩子 trait
///
/// 钩子返回的错误会被包装成 `ComponentError::Registration`
#[async_trait]
pub trait RegistrationHook: Send + Sync {
    /// 处理注册结果
    async fn process(
        &self,
        registry: &dyn ComponentRegistry,
        result: &RegistrationResult,
    ) -> Result<(), BoxError>;

    /// 获取钩子名称
    fn name(&self) -> &str {
        "anonymous"
    }
}

/// 空钩子
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHook;

#[async_trait]
impl RegistrationHook for NoopHook {
    async fn process(
        &self,
        _registry: &dyn ComponentRegistry,
        _result: &RegistrationResult,
    ) -> Result<(), BoxError> {
        Ok(())
    }

    fn name(&self) -> &str {
        "NoopHook"
    }
}

/// 闭包钩子包装器
pub struct FnHook<F> {
    name: String,
    hook_fn: F,
}

impl<F> FnHook<F>
where
    F: Fn(&dyn ComponentRegistry, &RegistrationResult) -> Result<(), BoxError> + Send + Sync,
{
    /// 创建新的闭包钩子
    pub fn new(name: impl Into<String>, hook_fn: F) -> Self {
        Self {
            name: name.into(),
            hook_fn,
        }
    }
}

impl<F> std::fmt::Debug for FnHook<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnHook")
            .field("name", &self.name)
            .field("hook_fn", &"<function>")
            .finish()
    }
}

#[async_trait]
impl<F> RegistrationHook for FnHook<F>
where
    F: Fn(&dyn ComponentRegistry, &RegistrationResult) -> Result<(), BoxError> + Send + Sync,
{
    async fn process(
        &self,
        registry: &dyn ComponentRegistry,
        result: &RegistrationResult,
    ) -> Result<(), BoxError> {
        (self.hook_fn)(registry, result)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
