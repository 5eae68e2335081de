//! 元数据定义
//!
//! 提供命名空间、标记和类型的元数据信息。扫描过程只依赖这里的显式元数据，
//! 不做运行时反射。

use crate::errors::ComponentError;
use serde::{Deserialize, Serialize};
use std::any::TypeId;
use std::fmt;

/// 命名空间
///
/// 以 `.` 分隔的非空段序列，例如 `svc.commands`。Rust 模块路径
/// （`svc::commands`）会被规范化为点分形式。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Namespace(String);

impl Namespace {
    /// 解析命名空间
    pub fn parse(raw: &str) -> Result<Self, ComponentError> {
        let normalized = raw.trim().replace("::", ".");
        if normalized.is_empty() {
            return Err(ComponentError::configuration("命名空间不能为空"));
        }

        let invalid = normalized
            .split('.')
            .any(|segment| segment.is_empty() || segment.chars().any(char::is_whitespace));
        if invalid {
            return Err(ComponentError::configuration(format!(
                "命名空间格式无效: {raw}"
            )));
        }

        Ok(Self(normalized))
    }

    /// 从完整类型名称推导所在命名空间
    ///
    /// `my_app::svc::PingCommand` 得到 `my_app.svc`；没有路径的类型返回 `None`。
    pub fn of_type_name(type_name: &str) -> Option<Self> {
        let (path, _) = split_type_name(type_name);
        path.and_then(|path| Self::parse(path).ok())
    }

    /// 获取字符串表示
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 获取各个段
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// 获取父命名空间
    pub fn parent(&self) -> Option<Self> {
        self.0
            .rsplit_once('.')
            .map(|(parent, _)| Self(parent.to_string()))
    }

    /// 检查 `other` 是否位于当前命名空间之下（包含自身）
    ///
    /// 按段比较：`a.b.c` 位于 `a.b` 之下，`a.bc` 不是。
    pub fn contains(&self, other: &Self) -> bool {
        match other.0.strip_prefix(&self.0) {
            Some(rest) => rest.is_empty() || rest.starts_with('.'),
            None => false,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Namespace {
    type Error = ComponentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Namespace> for String {
    fn from(namespace: Namespace) -> Self {
        namespace.0
    }
}

impl std::str::FromStr for Namespace {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// 拆分完整类型名称为（路径，简短名称）
///
/// 会去掉 `dyn ` 前缀和泛型参数。
pub fn split_type_name(type_name: &str) -> (Option<&str>, &str) {
    let name = type_name.trim_start_matches("dyn ");
    let name = name.split('<').next().unwrap_or(name);
    let name = name.split(" + ").next().unwrap_or(name);

    match name.rsplit_once("::") {
        Some((path, simple)) => (Some(path), simple),
        None => (None, name),
    }
}

fn default_namespace(type_name: &str) -> Namespace {
    Namespace::of_type_name(type_name).unwrap_or_else(|| Namespace("crate".to_string()))
}

/// 标记信息
///
/// 描述一个标记 trait 或标记"注解"。`extends` 记录它所扩展的父标记，
/// 传递匹配时沿着这条链向上检查。
#[derive(Debug, Clone)]
pub struct MarkerInfo {
    /// 标记类型ID
    pub id: TypeId,
    /// 完整类型名称
    pub type_name: &'static str,
    /// 简短名称
    pub name: String,
    /// 标记所在命名空间
    pub namespace: Namespace,
    /// 父标记
    pub extends: Vec<MarkerInfo>,
}

impl MarkerInfo {
    /// 从标记类型创建标记信息，通常传入 `dyn Trait`
    pub fn of<M: ?Sized + 'static>() -> Self {
        let type_name = std::any::type_name::<M>();
        let (_, simple) = split_type_name(type_name);
        Self {
            id: TypeId::of::<M>(),
            type_name,
            name: simple.to_string(),
            namespace: default_namespace(type_name),
            extends: Vec::new(),
        }
    }

    /// 覆盖标记所在命名空间
    pub fn in_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = namespace;
        self
    }

    /// 添加父标记
    pub fn extends(mut self, parent: MarkerInfo) -> Self {
        self.extends.push(parent);
        self
    }

    /// 检查当前标记是否就是 `id`，或者直接/间接扩展了 `id`
    pub fn is_or_extends(&self, id: TypeId) -> bool {
        self.id == id || self.extends.iter().any(|parent| parent.is_or_extends(id))
    }
}

impl PartialEq for MarkerInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MarkerInfo {}

/// 类型可见性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Visibility {
    /// 公开类型
    #[default]
    Public,
    /// 仅在 crate 内可见
    Crate,
}

/// 类型种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TypeKind {
    /// 具体类型，可以作为组件
    #[default]
    Concrete,
    /// 抽象类型（trait 或其他不可直接实例化的条目），扫描时跳过
    Abstract,
}

/// 类型信息
#[derive(Debug, Clone)]
pub struct TypeInfo {
    /// 类型ID
    pub id: TypeId,
    /// 完整类型名称
    pub type_name: &'static str,
    /// 简短名称
    pub name: String,
    /// 所在命名空间
    pub namespace: Namespace,
    /// 可见性
    pub visibility: Visibility,
    /// 类型种类
    pub kind: TypeKind,
    /// 直接声明的标记
    pub markers: Vec<MarkerInfo>,
    /// 显式指定的组件名称
    pub component_name: Option<String>,
}

impl TypeInfo {
    /// 从类型获取类型信息
    pub fn of<T: ?Sized + 'static>() -> Self {
        let type_name = std::any::type_name::<T>();
        let (_, simple) = split_type_name(type_name);
        Self {
            id: TypeId::of::<T>(),
            type_name,
            name: simple.to_string(),
            namespace: default_namespace(type_name),
            visibility: Visibility::Public,
            kind: TypeKind::Concrete,
            markers: Vec::new(),
            component_name: None,
        }
    }

    /// 覆盖所在命名空间
    pub fn in_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = namespace;
        self
    }

    /// 声明实现了某个标记
    pub fn implementing_marker(mut self, marker: MarkerInfo) -> Self {
        if !self.markers.contains(&marker) {
            self.markers.push(marker);
        }
        self
    }

    /// 设置可见性
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// 标记为抽象类型
    pub fn abstract_type(mut self) -> Self {
        self.kind = TypeKind::Abstract;
        self
    }

    /// 显式指定组件名称
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.component_name = Some(name.into());
        self
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &str {
        &self.name
    }

    /// 是否为具体类型
    pub fn is_concrete(&self) -> bool {
        self.kind == TypeKind::Concrete
    }

    /// 是否直接声明了指定标记
    pub fn declares(&self, marker: TypeId) -> bool {
        self.markers.iter().any(|m| m.id == marker)
    }

    /// 是否直接或通过父标记间接实现了指定标记
    pub fn implements(&self, marker: TypeId) -> bool {
        self.markers.iter().any(|m| m.is_or_extends(marker))
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl std::hash::Hash for TypeInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}
