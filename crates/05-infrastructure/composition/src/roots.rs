//! 扫描根解析
//!
//! 显式扫描根优先；没有显式扫描根时使用指令来源的命名空间。
//! 之后追加每个过滤器标记所在的命名空间，使得和标记放在一起的实现也能被扫描到。

use di_abstractions::{ResolvedRoots, ScanDirective, TypeFilterSet};
use infrastructure_common::{ComponentError, Namespace};
use tracing::debug;

/// 扫描根解析器
///
/// 纯函数：同样的输入总是得到同样顺序的扫描根
#[derive(Debug, Default, Clone, Copy)]
pub struct PackageRootResolver;

impl PackageRootResolver {
    /// 创建新的解析器
    pub fn new() -> Self {
        Self
    }

    /// 解析扫描根
    ///
    /// 顺序：显式扫描根（或来源命名空间），然后按过滤器声明顺序追加标记命名空间，
    /// 重复项只保留第一次出现。空白的显式扫描根会被忽略。
    pub fn resolve_roots(
        &self,
        directive: &ScanDirective,
        filters: &TypeFilterSet,
    ) -> Result<ResolvedRoots, ComponentError> {
        let explicit: Vec<&str> = directive
            .explicit_roots
            .iter()
            .map(|root| root.trim())
            .filter(|root| !root.is_empty())
            .collect();

        let mut roots = Vec::with_capacity(explicit.len().max(1) + filters.len());
        if explicit.is_empty() {
            let origin = directive.origin().ok_or_else(|| {
                ComponentError::configuration("未指定扫描根，且无法确定指令来源命名空间")
            })?;
            debug!("未指定扫描根，使用来源命名空间: {}", origin);
            roots.push(Namespace::parse(origin)?);
        } else {
            for root in explicit {
                roots.push(Namespace::parse(root)?);
            }
        }

        roots.extend(filters.marker_namespaces().cloned());
        ResolvedRoots::new(roots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use di_abstractions::{InclusionMode, TypeFilter};
    use infrastructure_common::MarkerInfo;

    trait Command {}
    trait Handler {}

    fn ns(raw: &str) -> Namespace {
        Namespace::parse(raw).unwrap()
    }

    fn filters() -> TypeFilterSet {
        TypeFilterSet::new()
            .with(TypeFilter::new(
                MarkerInfo::of::<dyn Command>().in_namespace(ns("nsb.commands")),
                InclusionMode::Transitive,
            ))
            .with(TypeFilter::new(
                MarkerInfo::of::<dyn Handler>().in_namespace(ns("nsb.handlers")),
                InclusionMode::Transitive,
            ))
    }

    fn as_strings(roots: &ResolvedRoots) -> Vec<&str> {
        roots.iter().map(Namespace::as_str).collect()
    }

    #[test]
    fn test_fallback_to_origin_namespace() {
        let directive = ScanDirective::new().with_origin("app.feature");
        let roots = PackageRootResolver::new()
            .resolve_roots(&directive, &TypeFilterSet::new())
            .unwrap();
        assert_eq!(as_strings(&roots), vec!["app.feature"]);
    }

    #[test]
    fn test_filter_namespaces_are_unioned_after_explicit_roots() {
        let directive = ScanDirective::new()
            .with_root("web.api")
            .with_root("web.admin")
            .with_origin("ignored.origin");
        let roots = PackageRootResolver::new()
            .resolve_roots(&directive, &filters())
            .unwrap();
        assert_eq!(
            as_strings(&roots),
            vec!["web.api", "web.admin", "nsb.commands", "nsb.handlers"]
        );
    }

    #[test]
    fn test_duplicates_are_removed() {
        let directive = ScanDirective::new()
            .with_root("nsb.commands")
            .with_root("nsb.commands");
        let roots = PackageRootResolver::new()
            .resolve_roots(&directive, &filters())
            .unwrap();
        assert_eq!(as_strings(&roots), vec!["nsb.commands", "nsb.handlers"]);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let directive = ScanDirective::new().with_origin("svc");
        let resolver = PackageRootResolver::new();
        let first = resolver.resolve_roots(&directive, &filters()).unwrap();
        let second = resolver.resolve_roots(&directive, &filters()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_origin_is_configuration_error() {
        let directive = ScanDirective::new().with_root("  ");
        let err = PackageRootResolver::new()
            .resolve_roots(&directive, &filters())
            .unwrap_err();
        assert!(matches!(err, ComponentError::Configuration { .. }));
    }

    #[test]
    fn test_invalid_explicit_root_is_configuration_error() {
        let directive = ScanDirective::new().with_root("web..api");
        let err = PackageRootResolver::new()
            .resolve_roots(&directive, &TypeFilterSet::new())
            .unwrap_err();
        assert!(matches!(err, ComponentError::Configuration { .. }));
    }
}
