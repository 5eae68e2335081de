//! 组件注册器构建器

use crate::component_scanner::ComponentScannerImpl;
use crate::registrar::ComponentRegistrar;
use di_abstractions::{
    ComponentScanner, NameGenerator, NoopHook, RegistrationHook, TypeEnumerator, TypeFilter,
    TypeFilterProvider, TypeFilterSet,
};
use di_impl::ConventionNameGenerator;
use infrastructure_common::ComponentError;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// 组件注册器构建器
///
/// 使用建造者模式组装过滤器、类型枚举器、名称生成器和扩展钩子
pub struct RegistrarBuilder {
    /// 类型过滤器
    filters: TypeFilterSet,
    /// 类型枚举原语
    enumerator: Option<Arc<dyn TypeEnumerator>>,
    /// 名称生成器，未设置时按过滤器推导
    name_generator: Option<Arc<dyn NameGenerator>>,
    /// 自定义扫描器，设置后忽略枚举器和名称生成器
    scanner: Option<Box<dyn ComponentScanner>>,
    /// 扩展钩子
    hook: Box<dyn RegistrationHook>,
    /// 是否启用日志初始化
    logging_enabled: bool,
    /// 日志配置
    logging_config: LoggingConfig,
}

impl RegistrarBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self {
            filters: TypeFilterSet::new(),
            enumerator: None,
            name_generator: None,
            scanner: None,
            hook: Box::new(NoopHook),
            logging_enabled: false, // 默认不启用日志初始化
            logging_config: LoggingConfig::default(),
        }
    }

    /// 追加过滤器提供者声明的全部过滤器
    pub fn with_filters(mut self, provider: &dyn TypeFilterProvider) -> Self {
        for filter in provider.type_filters().iter() {
            self.filters.push(filter.clone());
        }
        self
    }

    /// 追加单个过滤器
    pub fn add_filter(mut self, filter: TypeFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// 设置类型枚举原语
    pub fn with_enumerator(mut self, enumerator: impl TypeEnumerator + 'static) -> Self {
        self.enumerator = Some(Arc::new(enumerator));
        self
    }

    /// 设置共享的类型枚举原语
    pub fn with_shared_enumerator(mut self, enumerator: Arc<dyn TypeEnumerator>) -> Self {
        self.enumerator = Some(enumerator);
        self
    }

    /// 设置名称生成器
    pub fn with_name_generator(mut self, generator: impl NameGenerator + 'static) -> Self {
        self.name_generator = Some(Arc::new(generator));
        self
    }

    /// 使用自定义扫描器
    pub fn with_scanner(mut self, scanner: impl ComponentScanner + 'static) -> Self {
        self.scanner = Some(Box::new(scanner));
        self
    }

    /// 设置扩展钩子
    pub fn with_hook(mut self, hook: impl RegistrationHook + 'static) -> Self {
        self.hook = Box::new(hook);
        self
    }

    /// 启用日志初始化
    pub fn with_logging(mut self, config: LoggingConfig) -> Self {
        self.logging_enabled = true;
        self.logging_config = config;
        self
    }

    /// 构建组件注册器
    pub fn build(self) -> Result<ComponentRegistrar, ComponentError> {
        if self.logging_enabled {
            self.logging_config.initialize()?;
        }

        info!("开始构建组件注册器");

        let scanner = match self.scanner {
            Some(scanner) => scanner,
            None => {
                let enumerator = self
                    .enumerator
                    .ok_or_else(|| ComponentError::configuration("未配置类型枚举器"))?;
                let name_generator = self.name_generator.unwrap_or_else(|| {
                    debug!("未配置名称生成器，使用约定名称生成器");
                    Arc::new(ConventionNameGenerator::from_filters(&self.filters))
                });
                Box::new(ComponentScannerImpl::new(enumerator, name_generator))
            }
        };

        debug!(
            "过滤器: {:?}, 扫描器: {}, 扩展钩子: {}",
            self.filters.marker_names(),
            scanner.name(),
            self.hook.name()
        );

        Ok(ComponentRegistrar::new(self.filters, scanner, self.hook))
    }
}

impl Default for RegistrarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 日志配置
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// 日志级别，设置了 `RUST_LOG` 时以环境变量为准
    pub level: tracing::Level,
    /// 是否显示目标
    pub show_target: bool,
    /// 是否显示线程ID
    pub show_thread_ids: bool,
    /// 是否显示文件名
    pub show_file: bool,
    /// 是否显示行号
    pub show_line_number: bool,
    /// 是否使用 JSON 格式
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
            show_target: true,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// 创建开发环境日志配置
    pub fn development() -> Self {
        Self {
            level: tracing::Level::DEBUG,
            show_target: true,
            show_thread_ids: true,
            show_file: true,
            show_line_number: true,
            json_format: false,
        }
    }

    /// 创建生产环境日志配置
    pub fn production() -> Self {
        Self {
            level: tracing::Level::INFO,
            show_target: false,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
            json_format: true,
        }
    }

    /// 设置日志级别
    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = level;
        self
    }

    /// 初始化全局日志订阅者，重复初始化会返回错误
    pub fn initialize(&self) -> Result<(), ComponentError> {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::default().add_directive(LevelFilter::from_level(self.level).into())
        });

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(self.show_target)
            .with_thread_ids(self.show_thread_ids)
            .with_file(self.show_file)
            .with_line_number(self.show_line_number);

        if self.json_format {
            subscriber.json().try_init()
        } else {
            subscriber.try_init()
        }
        .map_err(|e| ComponentError::configuration(format!("日志初始化失败: {}", e)))?;

        info!("日志系统初始化完成");
        Ok(())
    }
}
