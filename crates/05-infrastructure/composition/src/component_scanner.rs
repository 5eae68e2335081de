//! 组件扫描和发现功能
//!
//! 按扫描根顺序枚举类型，保留匹配过滤器的具体类型，并为每个类型生成唯一名称。

use di_abstractions::{ComponentScanner, NameGenerator, ResolvedRoots, TypeEnumerator, TypeFilterSet};
use infrastructure_common::{ComponentDescriptor, ComponentError, TypeInfo};
use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, error, info};

/// 组件扫描器实现
///
/// 发现顺序：扫描根的顺序，同一根内按枚举器返回的顺序。
/// 同一类型出现在多个根下时只保留第一次。
pub struct ComponentScannerImpl {
    /// 类型枚举原语
    enumerator: Arc<dyn TypeEnumerator>,
    /// 名称生成器
    name_generator: Arc<dyn NameGenerator>,
}

impl ComponentScannerImpl {
    /// 创建新的组件扫描器
    pub fn new(enumerator: Arc<dyn TypeEnumerator>, name_generator: Arc<dyn NameGenerator>) -> Self {
        Self {
            enumerator,
            name_generator,
        }
    }
}

impl std::fmt::Debug for ComponentScannerImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentScannerImpl")
            .field("enumerator", &"<dyn TypeEnumerator>")
            .field("name_generator", &"<dyn NameGenerator>")
            .finish()
    }
}

impl ComponentScanner for ComponentScannerImpl {
    fn scan(
        &self,
        roots: &ResolvedRoots,
        filters: &TypeFilterSet,
    ) -> Result<Vec<ComponentDescriptor>, ComponentError> {
        let mut seen: HashSet<TypeId> = HashSet::new();
        let mut names: HashMap<String, &'static str> = HashMap::new();
        let mut descriptors = Vec::new();

        for root in roots.iter() {
            debug!("扫描命名空间: {}", root);
            let types = self.enumerator.list_types_under(root).map_err(|e| {
                error!("枚举命名空间 {} 失败: {}", root, e);
                ComponentError::scan(root.as_str(), e)
            })?;

            let mut found = 0usize;
            for type_info in types {
                if !is_candidate(&type_info, filters) {
                    continue;
                }
                if !seen.insert(type_info.id) {
                    debug!("类型已在之前的扫描根中发现，跳过: {}", type_info.type_name);
                    continue;
                }

                let name = self.name_generator.generate_name(&type_info);
                if let Some(first) = names.get(name.as_str()) {
                    error!(
                        "组件名称冲突: {} ({} 与 {})",
                        name, first, type_info.type_name
                    );
                    return Err(ComponentError::NameCollision {
                        name,
                        first: first.to_string(),
                        second: type_info.type_name.to_string(),
                    });
                }

                debug!("发现组件: {} -> {}", name, type_info.type_name);
                names.insert(name.clone(), type_info.type_name);
                descriptors.push(ComponentDescriptor::new(name, type_info, root.clone()));
                found += 1;
            }

            info!("命名空间 {} 扫描完成，发现 {} 个组件", root, found);
        }

        Ok(descriptors)
    }

    fn name(&self) -> &str {
        "ComponentScannerImpl"
    }
}

/// 只有具体类型才是候选组件
fn is_candidate(type_info: &TypeInfo, filters: &TypeFilterSet) -> bool {
    if !type_info.is_concrete() {
        debug!("跳过抽象类型: {}", type_info.type_name);
        return false;
    }
    filters.matches(type_info)
}
