//! 注册过程测试


use di_abstractions::{TypeFilter, TypeFilterSet};
use di_impl::TypeCatalog;
use infrastructure_common::{Discoverable, Marker, MarkerInfo, Namespace, TypeInfo};

pub(crate) trait Handler {}
pub(crate) trait Command: Handler {}

impl Marker for dyn Handler {
    fn marker_info() -> MarkerInfo {
        MarkerInfo::of::<dyn Handler>().in_namespace(ns("core.handlers"))
    }
}

impl Marker for dyn Command {
    fn marker_info() -> MarkerInfo {
        MarkerInfo::of::<dyn Command>()
            .in_namespace(ns("core.commands"))
            .extends(<dyn Handler>::marker_info())
    }
}

pub(crate) struct PingCommand;
pub(crate) struct EchoCommand;
pub(crate) struct PingV2Command;
pub(crate) struct StatusHandler;
pub(crate) struct Helper;

impl Discoverable for PingCommand {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>()
            .in_namespace(ns("svc.commands"))
            .implementing::<dyn Command>()
    }
}

impl Discoverable for EchoCommand {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>()
            .in_namespace(ns("svc.commands"))
            .implementing::<dyn Command>()
    }
}

impl Discoverable for PingV2Command {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>()
            .in_namespace(ns("svc.commands.v2"))
            .implementing::<dyn Command>()
            .named("ping")
    }
}

impl Discoverable for StatusHandler {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>()
            .in_namespace(ns("svc.handlers"))
            .implementing::<dyn Handler>()
    }
}

impl Discoverable for Helper {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>().in_namespace(ns("svc.commands"))
    }
}

pub(crate) fn ns(raw: &str) -> Namespace {
    Namespace::parse(raw).unwrap()
}

pub(crate) fn command_filters() -> TypeFilterSet {
    TypeFilterSet::new().with(TypeFilter::transitive::<dyn Command>())
}

/// `ping`、`echo` 两个命令加上一个普通类型和一个处理器
pub(crate) fn service_catalog() -> TypeCatalog {
    TypeCatalog::new()
        .with::<PingCommand>()
        .with::<Helper>()
        .with::<EchoCommand>()
        .with::<StatusHandler>()
}
