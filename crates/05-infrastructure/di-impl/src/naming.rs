//! 组件名称生成器实现

use di_abstractions::{NameGenerator, TypeFilterSet};
use infrastructure_common::{NamingConventions, TypeInfo};

/// 名称大小写风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameCase {
    /// 首字母小写驼峰，`PingCommand` -> `pingCommand`
    #[default]
    LowerCamel,
    /// 蛇形，`PingCommand` -> `ping_command`
    Snake,
}

/// 基于约定的名称生成器
///
/// 类型显式指定了组件名称时直接使用；否则取简短类型名，去掉匹配的标记后缀，
/// 再按大小写风格转换。
#[derive(Debug, Clone, Default)]
pub struct ConventionNameGenerator {
    suffixes: Vec<String>,
    case: NameCase,
}

impl ConventionNameGenerator {
    /// 创建不去后缀的生成器
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用过滤器中各标记的名称作为后缀
    ///
    /// 过滤 `Command` 标记时，`PingCommand` 得到 `ping`。
    pub fn from_filters(filters: &TypeFilterSet) -> Self {
        Self {
            suffixes: filters.marker_names(),
            case: NameCase::default(),
        }
    }

    /// 添加要去掉的后缀
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffixes.push(suffix.into());
        self
    }

    /// 设置大小写风格
    pub fn with_case(mut self, case: NameCase) -> Self {
        self.case = case;
        self
    }
}

impl NameGenerator for ConventionNameGenerator {
    fn generate_name(&self, type_info: &TypeInfo) -> String {
        if let Some(name) = type_info
            .component_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
        {
            return name.to_string();
        }

        let base = NamingConventions::strip_suffix(type_info.short_name(), &self.suffixes);
        match self.case {
            NameCase::LowerCamel => NamingConventions::lower_camel(base),
            NameCase::Snake => NamingConventions::to_snake_case(base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use di_abstractions::TypeFilter;
    use infrastructure_common::MarkerInfo;

    trait Command {}
    struct PingCommand;
    struct PingV2Command;
    struct HttpServer;

    #[test]
    fn test_default_policy_is_lower_camel() {
        let generator = ConventionNameGenerator::new();
        assert_eq!(generator.generate_name(&TypeInfo::of::<HttpServer>()), "httpServer");
        assert_eq!(generator.generate_name(&TypeInfo::of::<PingCommand>()), "pingCommand");
    }

    #[test]
    fn test_marker_suffix_is_stripped() {
        let filters = TypeFilterSet::new().with(TypeFilter::new(
            MarkerInfo::of::<dyn Command>(),
            Default::default(),
        ));
        let generator = ConventionNameGenerator::from_filters(&filters);
        assert_eq!(generator.generate_name(&TypeInfo::of::<PingCommand>()), "ping");
        assert_eq!(generator.generate_name(&TypeInfo::of::<PingV2Command>()), "pingV2");
        assert_eq!(generator.generate_name(&TypeInfo::of::<HttpServer>()), "httpServer");
    }

    #[test]
    fn test_explicit_name_wins() {
        let generator = ConventionNameGenerator::new().with_suffix("Command");
        let info = TypeInfo::of::<PingV2Command>().named("ping");
        assert_eq!(generator.generate_name(&info), "ping");
    }

    #[test]
    fn test_snake_case() {
        let generator = ConventionNameGenerator::new()
            .with_suffix("Command")
            .with_case(NameCase::Snake);
        assert_eq!(generator.generate_name(&TypeInfo::of::<PingV2Command>()), "ping_v2");
    }
}
