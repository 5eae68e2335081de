//! 类型过滤器
//!
//! 决定哪些类型算作可发现的组件

use infrastructure_common::{Marker, MarkerInfo, Namespace, TypeInfo};

/// 包含模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InclusionMode {
    /// 只匹配直接声明了标记的类型
    Direct,
    /// 同时匹配声明了子标记的类型
    #[default]
    Transitive,
}

/// 类型过滤器
#[derive(Debug, Clone)]
pub struct TypeFilter {
    /// 匹配的标记
    pub marker: MarkerInfo,
    /// 包含模式
    pub mode: InclusionMode,
}

impl TypeFilter {
    /// 创建新的类型过滤器
    pub fn new(marker: MarkerInfo, mode: InclusionMode) -> Self {
        Self { marker, mode }
    }

    /// 只匹配直接声明了标记 `M` 的类型
    pub fn direct<M: Marker + ?Sized>() -> Self {
        Self::new(M::marker_info(), InclusionMode::Direct)
    }

    /// 匹配直接或间接实现了标记 `M` 的类型
    pub fn transitive<M: Marker + ?Sized>() -> Self {
        Self::new(M::marker_info(), InclusionMode::Transitive)
    }

    /// 检查类型是否匹配
    pub fn matches(&self, type_info: &TypeInfo) -> bool {
        match self.mode {
            InclusionMode::Direct => type_info.declares(self.marker.id),
            InclusionMode::Transitive => type_info.implements(self.marker.id),
        }
    }
}

/// 有序的类型过滤器集合
///
/// 类型只要匹配其中任意一个过滤器即被保留；空集合匹配所有类型。
#[derive(Debug, Clone, Default)]
pub struct TypeFilterSet {
    filters: Vec<TypeFilter>,
}

impl TypeFilterSet {
    /// 创建空的过滤器集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加过滤器
    pub fn with(mut self, filter: TypeFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// 添加过滤器
    pub fn push(&mut self, filter: TypeFilter) {
        self.filters.push(filter);
    }

    /// 按声明顺序遍历过滤器
    pub fn iter(&self) -> impl Iterator<Item = &TypeFilter> {
        self.filters.iter()
    }

    /// 过滤器数量
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// 检查类型是否匹配任意过滤器
    pub fn matches(&self, type_info: &TypeInfo) -> bool {
        self.filters.is_empty() || self.filters.iter().any(|filter| filter.matches(type_info))
    }

    /// 按声明顺序获取各个标记所在的命名空间
    pub fn marker_namespaces(&self) -> impl Iterator<Item = &Namespace> {
        self.filters.iter().map(|filter| &filter.marker.namespace)
    }

    /// 按声明顺序获取各个标记的简短名称
    pub fn marker_names(&self) -> Vec<String> {
        self.filters
            .iter()
            .map(|filter| filter.marker.name.clone())
            .collect()
    }
}

impl FromIterator<TypeFilter> for TypeFilterSet {
    fn from_iter<I: IntoIterator<Item = TypeFilter>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

/// 类型过滤器提供者 trait
///
/// 具体的注册器实现它来声明"什么算组件"。过滤器在编译期固定，运行时不变。
pub trait TypeFilterProvider: Send + Sync {
    /// 获取类型过滤器
    fn type_filters(&self) -> TypeFilterSet;
}

impl TypeFilterProvider for TypeFilterSet {
    fn type_filters(&self) -> TypeFilterSet {
        self.clone()
    }
}
