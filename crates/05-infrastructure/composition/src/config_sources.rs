//! 扫描指令配置源
//!
//! 从配置文件和环境变量加载 [`ScanDirective`]，作为注解元数据之外的另一种指令来源。
//!
//! ```toml
//! [scan]
//! explicit_roots = ["svc.commands", "svc.admin"]
//! origin_namespace = "svc"
//! ```
//!
//! 环境变量 `COMPONENT_SCAN__EXPLICIT_ROOTS=svc.commands,svc.admin` 会覆盖文件中的同名配置。

use config::{Config, ConfigError, Environment, File, FileFormat};
use di_abstractions::ScanDirective;
use infrastructure_common::ComponentError;
use std::path::Path;
use tracing::{debug, info, warn};

/// 默认配置节点
pub const DEFAULT_SECTION: &str = "scan";

/// 默认环境变量前缀
pub const DEFAULT_ENV_PREFIX: &str = "COMPONENT";

/// 配置源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSourceType {
    /// TOML 文件
    Toml,
    /// JSON 文件
    Json,
    /// YAML 文件
    Yaml,
    /// 环境变量
    Environment,
}

impl ConfigSourceType {
    /// 按文件扩展名推断配置源类型
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    fn file_format(self) -> Option<FileFormat> {
        match self {
            Self::Toml => Some(FileFormat::Toml),
            Self::Json => Some(FileFormat::Json),
            Self::Yaml => Some(FileFormat::Yaml),
            Self::Environment => None,
        }
    }
}

/// 配置源描述
#[derive(Debug, Clone)]
pub struct ConfigSourceDescriptor {
    /// 配置源类型
    pub source_type: ConfigSourceType,
    /// 文件路径或环境变量前缀
    pub location: String,
    /// 优先级（数字越小优先级越高）
    pub priority: u32,
    /// 文件不存在时是否报错
    pub required: bool,
}

/// 扫描指令加载器
#[derive(Debug, Clone)]
pub struct DirectiveLoader {
    /// 配置源描述列表
    sources: Vec<ConfigSourceDescriptor>,
    /// 配置节点
    section: String,
}

impl DirectiveLoader {
    /// 创建新的加载器
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            section: DEFAULT_SECTION.to_string(),
        }
    }

    /// 设置配置节点
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into().to_ascii_lowercase();
        self
    }

    /// 添加必需的配置文件，格式按扩展名推断
    pub fn add_file<P: AsRef<Path>>(self, path: P, priority: u32) -> Result<Self, ComponentError> {
        self.push_file(path.as_ref(), priority, true)
    }

    /// 添加可选的配置文件，文件不存在时忽略
    pub fn add_optional_file<P: AsRef<Path>>(
        self,
        path: P,
        priority: u32,
    ) -> Result<Self, ComponentError> {
        self.push_file(path.as_ref(), priority, false)
    }

    /// 添加环境变量配置源
    pub fn add_environment(mut self, prefix: impl Into<String>, priority: u32) -> Self {
        let prefix = prefix.into();
        debug!("添加环境变量配置源: {}", prefix);
        self.sources.push(ConfigSourceDescriptor {
            source_type: ConfigSourceType::Environment,
            location: prefix,
            priority,
            required: false,
        });
        self
    }

    /// 获取配置源列表
    pub fn sources(&self) -> &[ConfigSourceDescriptor] {
        &self.sources
    }

    fn push_file(mut self, path: &Path, priority: u32, required: bool) -> Result<Self, ComponentError> {
        let source_type = ConfigSourceType::from_path(path).ok_or_else(|| {
            ComponentError::configuration(format!("不支持的配置文件格式: {}", path.display()))
        })?;

        debug!("添加 {:?} 配置源: {}", source_type, path.display());
        self.sources.push(ConfigSourceDescriptor {
            source_type,
            location: path.to_string_lossy().to_string(),
            priority,
            required,
        });
        Ok(self)
    }

    /// 加载扫描指令
    ///
    /// 高优先级的配置源覆盖低优先级的；没有任何配置时返回空指令。
    pub fn load(&self) -> Result<ScanDirective, ComponentError> {
        let mut ordered: Vec<&ConfigSourceDescriptor> = self.sources.iter().collect();
        // 后添加的源覆盖先添加的源，所以优先级最高的放在最后
        ordered.sort_by(|a, b| b.priority.cmp(&a.priority));

        let mut builder = Config::builder();
        for descriptor in ordered {
            match descriptor.source_type.file_format() {
                Some(format) => {
                    builder = builder.add_source(
                        File::new(&descriptor.location, format).required(descriptor.required),
                    );
                }
                None => {
                    builder = builder.add_source(
                        Environment::with_prefix(&descriptor.location)
                            .prefix_separator("_")
                            .separator("__"),
                    );
                }
            }
        }

        let config = builder
            .build()
            .map_err(|e| ComponentError::configuration(format!("加载扫描配置失败: {}", e)))?;

        match config.get::<ScanDirective>(&self.section) {
            Ok(directive) => {
                info!(
                    "已加载扫描指令: 显式扫描根 {:?}, 来源命名空间 {:?}",
                    directive.explicit_roots, directive.origin_namespace
                );
                Ok(directive)
            }
            Err(ConfigError::NotFound(_)) => {
                warn!("配置中没有 [{}] 节点，使用空扫描指令", self.section);
                Ok(ScanDirective::default())
            }
            Err(e) => Err(ComponentError::configuration(format!(
                "扫描配置格式无效: {}",
                e
            ))),
        }
    }
}

impl Default for DirectiveLoader {
    fn default() -> Self {
        Self::new().add_environment(DEFAULT_ENV_PREFIX, 0)
    }
}
