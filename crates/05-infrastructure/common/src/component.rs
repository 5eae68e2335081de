//! 组件基础定义
//!
//! 可被发现的类型、标记以及扫描产出的组件描述符

use crate::metadata::{MarkerInfo, Namespace, TypeInfo, Visibility};
use std::any::TypeId;

/// 标记 trait
///
/// 为标记类型（通常是 `dyn Trait`）提供元数据：
///
/// ```rust
/// use infrastructure_common::{Marker, MarkerInfo};
///
/// pub trait Command {}
///
/// impl Marker for dyn Command {
///     fn marker_info() -> MarkerInfo {
///         MarkerInfo::of::<dyn Command>()
///     }
/// }
/// ```
pub trait Marker: 'static {
    /// 获取标记元数据
    fn marker_info() -> MarkerInfo;
}

/// 可发现的组件类型
///
/// 类型自行描述自己的命名空间、标记和可选的组件名称，
/// 由类型目录收集后交给扫描器枚举。
pub trait Discoverable: 'static {
    /// 获取类型元数据
    fn type_info() -> TypeInfo;
}

impl TypeInfo {
    /// 声明实现了标记 `M`
    pub fn implementing<M: Marker + ?Sized>(self) -> Self {
        self.implementing_marker(M::marker_info())
    }
}

/// 组件描述符
///
/// 一个被发现的具体类型及其生成的注册名称
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    /// 组件名称
    pub name: String,
    /// 组件类型信息
    pub type_info: TypeInfo,
    /// 发现该组件的扫描根
    pub origin: Namespace,
}

impl ComponentDescriptor {
    /// 创建新的组件描述符
    pub fn new(name: impl Into<String>, type_info: TypeInfo, origin: Namespace) -> Self {
        Self {
            name: name.into(),
            type_info,
            origin,
        }
    }

    /// 组件类型ID
    pub fn type_id(&self) -> TypeId {
        self.type_info.id
    }

    /// 组件类型可见性
    pub fn visibility(&self) -> Visibility {
        self.type_info.visibility
    }

    /// 组件所在命名空间
    pub fn namespace(&self) -> &Namespace {
        &self.type_info.namespace
    }
}
