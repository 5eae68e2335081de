//! 内置扩展钩子

use async_trait::async_trait;
use di_abstractions::{ComponentRegistry, RegistrationHook, RegistrationResult};
use infrastructure_common::{BoxError, DependencyError, Marker, TypeInfo};
use parking_lot::RwLock;
use std::any::TypeId;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// 分发表构建错误
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("分发表中已存在名称: {name}")]
    DuplicateRoute { name: String },

    #[error("本次注册没有发现任何组件")]
    Empty,
}

/// 名称到组件类型的分发表
///
/// 可以克隆共享，克隆出的句柄看到同一张表
#[derive(Debug, Clone, Default)]
pub struct DispatchTable {
    routes: Arc<RwLock<Vec<(String, TypeInfo)>>>,
}

impl DispatchTable {
    /// 创建空的分发表
    pub fn new() -> Self {
        Self::default()
    }

    /// 按名称查找组件类型
    pub fn route(&self, name: &str) -> Option<TypeInfo> {
        self.routes
            .read()
            .iter()
            .find(|(route, _)| route == name)
            .map(|(_, type_info)| type_info.clone())
    }

    /// 按加入顺序获取所有名称
    pub fn names(&self) -> Vec<String> {
        self.routes.read().iter().map(|(name, _)| name.clone()).collect()
    }

    /// 路由数量
    pub fn len(&self) -> usize {
        self.routes.read().len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.routes.read().is_empty()
    }
}

/// 构建分发表的扩展钩子
///
/// 把注册结果中的组件按名称加入分发表。加入前会确认每个组件都已经在容器里，
/// 缺失时返回 [`DependencyError::ComponentNotRegistered`]；任何一项失败时分发表保持不变。
#[derive(Debug, Clone, Default)]
pub struct DispatchTableHook {
    table: DispatchTable,
    marker: Option<TypeId>,
    require_components: bool,
}

impl DispatchTableHook {
    /// 创建写入指定分发表的钩子
    pub fn new(table: DispatchTable) -> Self {
        Self {
            table,
            marker: None,
            require_components: false,
        }
    }

    /// 只收录实现了标记 `M` 的组件
    pub fn only<M: Marker + ?Sized>(mut self) -> Self {
        self.marker = Some(M::marker_info().id);
        self
    }

    /// 没有发现任何组件时报错
    pub fn require_components(mut self, require: bool) -> Self {
        self.require_components = require;
        self
    }

    /// 获取分发表句柄
    pub fn table(&self) -> DispatchTable {
        self.table.clone()
    }
}

#[async_trait]
impl RegistrationHook for DispatchTableHook {
    async fn process(
        &self,
        registry: &dyn ComponentRegistry,
        result: &RegistrationResult,
    ) -> Result<(), BoxError> {
        let mut incoming = Vec::with_capacity(result.len());
        for (name, type_info) in result.entries() {
            if let Some(marker) = self.marker {
                if !type_info.implements(marker) {
                    debug!("组件未实现分发标记，跳过: {}", name);
                    continue;
                }
            }
            if !registry.has_component(name) {
                return Err(DependencyError::ComponentNotRegistered {
                    name: name.to_string(),
                }
                .into());
            }
            incoming.push((name.to_string(), type_info.clone()));
        }

        if self.require_components && incoming.is_empty() {
            return Err(DispatchError::Empty.into());
        }

        let mut routes = self.table.routes.write();
        if let Some((name, _)) = incoming
            .iter()
            .find(|(name, _)| routes.iter().any(|(existing, _)| existing == name))
        {
            return Err(DispatchError::DuplicateRoute { name: name.clone() }.into());
        }

        info!("分发表新增 {} 个路由", incoming.len());
        routes.extend(incoming);
        Ok(())
    }

    fn name(&self) -> &str {
        "DispatchTableHook"
    }
}
