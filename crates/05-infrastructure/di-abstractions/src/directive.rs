//! 扫描指令与扫描根

use infrastructure_common::{ComponentError, Namespace};
use serde::{Deserialize, Deserializer, Serialize};

/// 扫描指令
///
/// 声明在哪里扫描。由外部的元数据或配置适配器构造，核心逻辑从不直接读取注解。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanDirective {
    /// 显式指定的扫描根，可以为空
    ///
    /// 反序列化时既接受列表，也接受逗号分隔的字符串（来自环境变量）
    #[serde(deserialize_with = "roots_from_list_or_joined")]
    pub explicit_roots: Vec<String>,
    /// 携带该指令的类型所在的命名空间
    pub origin_namespace: Option<String>,
}

impl ScanDirective {
    /// 创建空的扫描指令
    pub fn new() -> Self {
        Self::default()
    }

    /// 以类型 `T` 的所在模块作为来源命名空间
    pub fn for_type<T: ?Sized + 'static>() -> Self {
        Self {
            explicit_roots: Vec::new(),
            origin_namespace: Namespace::of_type_name(std::any::type_name::<T>())
                .map(String::from),
        }
    }

    /// 添加显式扫描根
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.explicit_roots.push(root.into());
        self
    }

    /// 设置来源命名空间
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin_namespace = Some(origin.into());
        self
    }

    /// 获取非空的来源命名空间
    pub fn origin(&self) -> Option<&str> {
        self.origin_namespace
            .as_deref()
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RootList {
    Joined(String),
    Items(Vec<String>),
}

fn roots_from_list_or_joined<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RootList::deserialize(deserializer)? {
        RootList::Joined(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|root| !root.is_empty())
            .map(String::from)
            .collect(),
        RootList::Items(items) => items,
    })
}

/// 解析后的扫描根
///
/// 去重、有序且非空
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedRoots(Vec<Namespace>);

impl ResolvedRoots {
    /// 创建扫描根，保留首次出现的顺序
    pub fn new(roots: impl IntoIterator<Item = Namespace>) -> Result<Self, ComponentError> {
        let mut unique: Vec<Namespace> = Vec::new();
        for root in roots {
            if !unique.contains(&root) {
                unique.push(root);
            }
        }

        if unique.is_empty() {
            return Err(ComponentError::configuration("没有可扫描的命名空间"));
        }

        Ok(Self(unique))
    }

    /// 按顺序遍历扫描根
    pub fn iter(&self) -> impl Iterator<Item = &Namespace> {
        self.0.iter()
    }

    /// 获取切片
    pub fn as_slice(&self) -> &[Namespace] {
        &self.0
    }

    /// 扫描根数量
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 始终为 `false`，扫描根不会为空
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 是否包含指定命名空间
    pub fn contains(&self, namespace: &str) -> bool {
        self.0.iter().any(|root| root.as_str() == namespace)
    }
}
