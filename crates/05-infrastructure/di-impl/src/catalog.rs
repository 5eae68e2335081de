//! 类型目录
//!
//! 显式登记的类型清单，作为类型枚举原语使用。Rust 没有类路径扫描，
//! 应用在启动时把可发现的类型登记到目录里，扫描器再按命名空间枚举。

use di_abstractions::TypeEnumerator;
use infrastructure_common::{Discoverable, EnumerationError, Namespace, TypeInfo};
use tracing::debug;

/// 类型目录
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    /// 按登记顺序保存的类型
    entries: Vec<TypeInfo>,
    /// 不可访问的命名空间
    inaccessible: Vec<Namespace>,
}

impl TypeCatalog {
    /// 创建空目录
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一个可发现类型
    pub fn with<T: Discoverable>(mut self) -> Self {
        self.register(T::type_info());
        self
    }

    /// 登记类型信息
    pub fn with_type(mut self, type_info: TypeInfo) -> Self {
        self.register(type_info);
        self
    }

    /// 将命名空间标记为不可访问，枚举与之重叠的命名空间会失败
    pub fn deny(mut self, namespace: Namespace) -> Self {
        self.inaccessible.push(namespace);
        self
    }

    /// 登记类型信息，同一类型只保留第一次登记
    pub fn register(&mut self, type_info: TypeInfo) {
        if self.entries.contains(&type_info) {
            debug!("类型已登记，忽略重复登记: {}", type_info.type_name);
            return;
        }
        debug!("登记类型: {} -> {}", type_info.type_name, type_info.namespace);
        self.entries.push(type_info);
    }

    /// 登记一个可发现类型
    pub fn register_type<T: Discoverable>(&mut self) {
        self.register(T::type_info());
    }

    /// 已登记类型数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按登记顺序遍历类型
    pub fn iter(&self) -> impl Iterator<Item = &TypeInfo> {
        self.entries.iter()
    }
}

impl TypeEnumerator for TypeCatalog {
    fn list_types_under(&self, namespace: &Namespace) -> Result<Vec<TypeInfo>, EnumerationError> {
        let denied = self
            .inaccessible
            .iter()
            .any(|denied| denied.contains(namespace) || namespace.contains(denied));
        if denied {
            return Err(EnumerationError::inaccessible(namespace.as_str()));
        }

        Ok(self
            .entries
            .iter()
            .filter(|type_info| namespace.contains(&type_info.namespace))
            .cloned()
            .collect())
    }
}
