//! 类型枚举抽象接口
//!
//! 枚举原语负责列出某个命名空间下可达的所有类型，相当于类路径扫描。

use infrastructure_common::{EnumerationError, Namespace, TypeInfo};
use std::sync::Arc;

/// 类型枚举器 trait
///
/// 同步调用，可能较慢；返回的顺序即发现顺序。
/// 结果包含 `namespace` 本身及其所有子命名空间下的类型。
pub trait TypeEnumerator: Send + Sync {
    /// 列出命名空间下的所有类型
    fn list_types_under(&self, namespace: &Namespace) -> Result<Vec<TypeInfo>, EnumerationError>;
}

impl<E: TypeEnumerator + ?Sized> TypeEnumerator for Arc<E> {
    fn list_types_under(&self, namespace: &Namespace) -> Result<Vec<TypeInfo>, EnumerationError> {
        (**self).list_types_under(namespace)
    }
}
