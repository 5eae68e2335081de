//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义组件扫描和注册的核心接口。
//!
//! ## 核心接口
//!
//! - [`ComponentRegistry`] - 组件注册表（外部容器）接口
//! - [`TypeEnumerator`] - 类型枚举原语接口
//! - [`ComponentScanner`] - 组件扫描器接口
//! - [`NameGenerator`] - 组件名称生成器接口
//! - [`TypeFilterProvider`] - 类型过滤器提供者接口
//! - [`RegistrationHook`] - 注册后扩展钩子接口

pub mod directive;
pub mod discovery;
pub mod filter;
pub mod hook;
pub mod naming;
pub mod registry;
pub mod scanner;

pub use directive::*;
pub use discovery::*;
pub use filter::*;
pub use hook::*;
pub use naming::*;
pub use registry::*;
pub use scanner::*;
