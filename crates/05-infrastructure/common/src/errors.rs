//! 错误类型定义

use crate::lifecycle::PassStage;
use thiserror::Error;

/// 装箱的任意错误，用于携带扩展钩子抛出的原始原因
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 类型枚举错误
///
/// 由外部类型枚举原语返回
#[derive(Error, Debug)]
pub enum EnumerationError {
    #[error("命名空间不可访问: {namespace}")]
    Inaccessible { namespace: String },

    #[error("类型枚举失败: {namespace}, 原因: {message}")]
    Failed { namespace: String, message: String },
}

impl EnumerationError {
    /// 创建命名空间不可访问错误
    pub fn inaccessible(namespace: impl Into<String>) -> Self {
        Self::Inaccessible {
            namespace: namespace.into(),
        }
    }
}

/// 容器错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("组件未注册: {name}")]
    ComponentNotRegistered { name: String },

    #[error("组件名称已被占用: {name}, 已注册类型: {existing}, 新类型: {incoming}")]
    DuplicateName {
        name: String,
        existing: String,
        incoming: String,
    },

    #[error("组件注册失败: {name}, 原因: {message}")]
    RegistrationFailed { name: String, message: String },
}

/// 组件扫描注册错误类型
///
/// 除 [`ComponentError::Registration`] 外，各阶段的错误都原样向上传播；
/// 只有扩展钩子的失败会被重新包装。
#[derive(Error, Debug)]
pub enum ComponentError {
    #[error("扫描配置无效: {message}")]
    Configuration { message: String },

    #[error("组件扫描失败: {namespace}, 原因: {source}")]
    Scan {
        namespace: String,
        #[source]
        source: EnumerationError,
    },

    #[error("组件名称冲突: {name}, 冲突类型: {first} 与 {second}")]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },

    #[error("容器拒绝注册组件: {name}, 原因: {source}")]
    ContainerRejected {
        name: String,
        #[source]
        source: DependencyError,
    },

    #[error("注册后处理失败: {source}")]
    Registration {
        #[source]
        source: BoxError,
    },
}

impl ComponentError {
    /// 创建配置错误
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// 创建扫描错误
    pub fn scan(namespace: impl Into<String>, source: EnumerationError) -> Self {
        Self::Scan {
            namespace: namespace.into(),
            source,
        }
    }

    /// 包装扩展钩子的失败
    pub fn registration(source: impl Into<BoxError>) -> Self {
        Self::Registration {
            source: source.into(),
        }
    }

    /// 错误发生的阶段
    pub fn stage(&self) -> PassStage {
        match self {
            Self::Configuration { .. } => PassStage::ResolveRoots,
            Self::Scan { .. } | Self::NameCollision { .. } => PassStage::Scan,
            Self::ContainerRejected { .. } => PassStage::Register,
            Self::Registration { .. } => PassStage::Hook,
        }
    }
}

/// 结果类型别名
pub type ComponentResult<T> = Result<T, ComponentError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type EnumerationResult<T> = Result<T, EnumerationError>;
