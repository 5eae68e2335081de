//! 注册过程生命周期
//!
//! 一次注册过程（pass）依次经过：解析扫描根 → 扫描 → 注册 → 后处理钩子。
//! 任何阶段失败都进入 `Failed`，不会自动重试。

use serde::Serialize;
use std::fmt;

/// 注册过程的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PassStage {
    /// 解析扫描根
    ResolveRoots,
    /// 扫描组件
    Scan,
    /// 注册到容器
    Register,
    /// 执行扩展钩子
    Hook,
}

impl fmt::Display for PassStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ResolveRoots => "resolve-roots",
            Self::Scan => "scan",
            Self::Register => "register",
            Self::Hook => "hook",
        };
        f.write_str(name)
    }
}

/// 注册过程状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PassState {
    /// 尚未开始
    #[default]
    Idle,
    /// 扫描根已解析
    RootsResolved,
    /// 扫描完成
    Scanned,
    /// 全部组件已注册
    Registered,
    /// 钩子已执行（成功终态）
    HookApplied,
    /// 失败终态
    Failed {
        /// 失败的阶段
        stage: PassStage,
        /// 失败原因
        cause: String,
    },
}

impl PassState {
    /// 当前状态下即将执行的阶段，终态返回 `None`
    pub fn pending_stage(&self) -> Option<PassStage> {
        match self {
            Self::Idle => Some(PassStage::ResolveRoots),
            Self::RootsResolved => Some(PassStage::Scan),
            Self::Scanned => Some(PassStage::Register),
            Self::Registered => Some(PassStage::Hook),
            Self::HookApplied | Self::Failed { .. } => None,
        }
    }

    /// 当前阶段成功后的下一个状态
    pub fn advance(&self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::RootsResolved),
            Self::RootsResolved => Some(Self::Scanned),
            Self::Scanned => Some(Self::Registered),
            Self::Registered => Some(Self::HookApplied),
            Self::HookApplied | Self::Failed { .. } => None,
        }
    }

    /// 进入失败状态
    pub fn fail(stage: PassStage, cause: impl fmt::Display) -> Self {
        Self::Failed {
            stage,
            cause: cause.to_string(),
        }
    }

    /// 是否为终态
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::HookApplied | Self::Failed { .. })
    }
}
