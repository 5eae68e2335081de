//! 组件命名抽象接口

use infrastructure_common::TypeInfo;

/// 组件名称生成器 trait
///
/// 必须是纯函数：同一类型在同一进程内总是得到同一名称。
/// 唯一性由扫描器在一次注册过程内检查。
pub trait NameGenerator: Send + Sync {
    /// 生成组件名称
    fn generate_name(&self, type_info: &TypeInfo) -> String;
}

impl<F> NameGenerator for F
where
    F: Fn(&TypeInfo) -> String + Send + Sync,
{
    fn generate_name(&self, type_info: &TypeInfo) -> String {
        self(type_info)
    }
}
