//! 示例命令
//!
//! 每个命令通过 [`Discoverable`] 描述自己，命名空间取自模块路径 `example_app.commands`。

use infrastructure_common::{Discoverable, Marker, MarkerInfo, TypeInfo};
use std::any::TypeId;

/// 命令处理器
pub trait Command: Send + Sync {
    /// 执行命令
    fn execute(&self, args: &[String]) -> String;
}

impl Marker for dyn Command {
    fn marker_info() -> MarkerInfo {
        MarkerInfo::of::<dyn Command>()
    }
}

/// 返回 pong
pub struct PingCommand;

impl Command for PingCommand {
    fn execute(&self, _args: &[String]) -> String {
        "pong".to_string()
    }
}

impl Discoverable for PingCommand {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>().implementing::<dyn Command>()
    }
}

/// 原样返回参数
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(&self, args: &[String]) -> String {
        args.join(" ")
    }
}

impl Discoverable for EchoCommand {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>().implementing::<dyn Command>()
    }
}

/// 报告版本
pub struct ShowVersion;

impl Command for ShowVersion {
    fn execute(&self, _args: &[String]) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

impl Discoverable for ShowVersion {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>()
            .implementing::<dyn Command>()
            .named("version")
    }
}

/// 按类型ID创建命令实例
pub fn instantiate(type_id: TypeId) -> Option<Box<dyn Command>> {
    if type_id == TypeId::of::<PingCommand>() {
        Some(Box::new(PingCommand))
    } else if type_id == TypeId::of::<EchoCommand>() {
        Some(Box::new(EchoCommand))
    } else if type_id == TypeId::of::<ShowVersion>() {
        Some(Box::new(ShowVersion))
    } else {
        None
    }
}
