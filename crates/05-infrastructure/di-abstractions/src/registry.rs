//! 组件注册表抽象接口
//!
//! 注册表就是外部容器：按名称唯一地保存组件定义，供后续按名称或类型解析。

use async_trait::async_trait;
use infrastructure_common::{DependencyError, TypeInfo};
use std::any::TypeId;
use std::sync::Arc;

/// 组件定义
///
/// 容器保存的一条注册记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDefinition {
    /// 组件名称
    pub name: String,
    /// 组件类型信息
    pub type_info: TypeInfo,
}

impl ComponentDefinition {
    /// 创建新的组件定义
    pub fn new(name: impl Into<String>, type_info: TypeInfo) -> Self {
        Self {
            name: name.into(),
            type_info,
        }
    }
}

/// 组件注册表 trait
///
/// 提供组件注册和查找的核心接口。注册可能挂起（例如远程注册中心），
/// 查找是同步的。
#[async_trait]
pub trait ComponentRegistry: Send + Sync {
    /// 以指定名称注册组件
    async fn register_component(
        &self,
        name: &str,
        type_info: &TypeInfo,
    ) -> Result<(), DependencyError>;

    /// 检查名称是否已注册
    fn has_component(&self, name: &str) -> bool;

    /// 按名称获取组件定义
    fn get_component(&self, name: &str) -> Option<ComponentDefinition>;

    /// 按具体类型查找组件定义
    fn find_by_type(&self, type_id: TypeId) -> Vec<ComponentDefinition>;

    /// 查找实现了指定标记（包括通过父标记间接实现）的组件定义
    fn find_by_marker(&self, marker: TypeId) -> Vec<ComponentDefinition>;

    /// 按注册顺序获取所有组件名称
    fn component_names(&self) -> Vec<String>;

    /// 已注册组件数量
    fn len(&self) -> usize;

    /// 是否没有任何组件
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl<R: ComponentRegistry + ?Sized> ComponentRegistry for Arc<R> {
    async fn register_component(
        &self,
        name: &str,
        type_info: &TypeInfo,
    ) -> Result<(), DependencyError> {
        (**self).register_component(name, type_info).await
    }

    fn has_component(&self, name: &str) -> bool {
        (**self).has_component(name)
    }

    fn get_component(&self, name: &str) -> Option<ComponentDefinition> {
        (**self).get_component(name)
    }

    fn find_by_type(&self, type_id: TypeId) -> Vec<ComponentDefinition> {
        (**self).find_by_type(type_id)
    }

    fn find_by_marker(&self, marker: TypeId) -> Vec<ComponentDefinition> {
        (**self).find_by_marker(marker)
    }

    fn component_names(&self) -> Vec<String> {
        (**self).component_names()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
