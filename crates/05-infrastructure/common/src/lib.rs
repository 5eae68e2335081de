//! # Infrastructure Common
//!
//! 这个 crate 提供了组件扫描与注册机制的公共类型。
//!
//! ## 核心类型
//!
//! - [`Namespace`] - 点分命名空间
//! - [`MarkerInfo`] - 标记 trait 的元数据
//! - [`TypeInfo`] - 可枚举类型的元数据
//! - [`ComponentDescriptor`] - 扫描产出的组件描述符
//! - [`ComponentError`] - 注册过程的错误分类
//! - [`PassState`] - 注册过程状态机
//!
//! ## 设计原则
//!
//! - 基于显式元数据的能力匹配，不依赖运行时反射
//! - 同一输入得到同一顺序的结果
//! - 约定优于配置

pub mod component;
pub mod conventions;
pub mod errors;
pub mod lifecycle;
pub mod metadata;

pub use component::*;
pub use conventions::*;
pub use errors::*;
pub use lifecycle::*;
pub use metadata::*;
