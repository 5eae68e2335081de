//! 组件扫描器抽象接口
//!
//! 提供在扫描根下发现组件的能力

use crate::directive::ResolvedRoots;
use crate::filter::TypeFilterSet;
use infrastructure_common::{ComponentDescriptor, ComponentError};

/// 组件扫描器 trait
///
/// 在扫描根下查找匹配过滤器的具体类型，并为每个类型生成唯一名称。
/// 任何一个扫描根失败都会使整个扫描失败，不返回部分结果。
pub trait ComponentScanner: Send + Sync {
    /// 扫描组件
    fn scan(
        &self,
        roots: &ResolvedRoots,
        filters: &TypeFilterSet,
    ) -> Result<Vec<ComponentDescriptor>, ComponentError>;

    /// 获取扫描器名称
    fn name(&self) -> &str;
}
