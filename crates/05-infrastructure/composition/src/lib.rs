//! # 组件注册组合层
//!
//! 把扫描根解析、组件扫描、容器注册和扩展钩子组合成一次完整的注册过程。
//!
//! ## 主要功能
//!
//! - **扫描根解析**: 显式扫描根或指令来源命名空间，并合并过滤器标记所在的命名空间
//! - **组件扫描**: 按过滤器筛选具体类型并生成唯一的组件名称
//! - **注册协调**: 逐个注册到容器后执行一次扩展钩子
//! - **指令配置**: 从配置文件和环境变量加载扫描指令
//!
//! ## 基本使用
//!
//! ```rust,no_run
//! use di_abstractions::{ScanDirective, TypeFilter};
//! use di_impl::{DiContainerImpl, TypeCatalog};
//! use infrastructure_common::{Discoverable, Marker, MarkerInfo, TypeInfo};
//! use infrastructure_composition::{ComponentRegistrar, DispatchTable, DispatchTableHook};
//!
//! pub trait Command {}
//!
//! impl Marker for dyn Command {
//!     fn marker_info() -> MarkerInfo {
//!         MarkerInfo::of::<dyn Command>()
//!     }
//! }
//!
//! pub struct PingCommand;
//!
//! impl Discoverable for PingCommand {
//!     fn type_info() -> TypeInfo {
//!         TypeInfo::of::<PingCommand>().implementing::<dyn Command>()
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = DispatchTable::new();
//!     let registrar = ComponentRegistrar::builder()
//!         .add_filter(TypeFilter::transitive::<dyn Command>())
//!         .with_enumerator(TypeCatalog::new().with::<PingCommand>())
//!         .with_hook(DispatchTableHook::new(table.clone()))
//!         .build()?;
//!
//!     let container = DiContainerImpl::new();
//!     let directive = ScanDirective::for_type::<PingCommand>();
//!     registrar.register(&directive, &container).await?;
//!
//!     assert!(table.route("ping").is_some());
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod component_scanner;
pub mod config_sources;
pub mod hooks;
pub mod registrar;
pub mod roots;

#[cfg(test)]
mod tests;

// 重新导出主要类型
pub use builder::{LoggingConfig, RegistrarBuilder};
pub use component_scanner::ComponentScannerImpl;
pub use config_sources::{ConfigSourceDescriptor, ConfigSourceType, DirectiveLoader};
pub use hooks::{DispatchError, DispatchTable, DispatchTableHook};
pub use registrar::ComponentRegistrar;
pub use roots::PackageRootResolver;

// 重新导出错误类型
pub use infrastructure_common::{ComponentError, ComponentResult};
