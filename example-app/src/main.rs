//! # 示例应用程序
//!
//! 扫描 `commands` 模块中的命令处理器，构建名称到命令的分发表，然后执行命令行指定的命令。
//!
//! ```text
//! example-app ping
//! example-app echo hello world
//! example-app --config scan.toml --log-level debug ping
//! ```

mod commands;

use clap::Parser;
use commands::{Command, EchoCommand, PingCommand, ShowVersion};
use di_abstractions::{ComponentRegistry, ScanDirective, TypeFilter};
use di_impl::{DiContainerImpl, TypeCatalog};
use infrastructure_composition::{
    ComponentRegistrar, DirectiveLoader, DispatchTable, DispatchTableHook, LoggingConfig,
};
use std::path::PathBuf;
use tracing::{info, warn};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "组件扫描示例：按名称分发命令")]
struct Args {
    /// 扫描配置文件路径（TOML/JSON/YAML）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 额外的扫描根，可以重复指定
    #[arg(long = "root")]
    roots: Vec<String>,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,

    /// 使用 JSON 格式输出日志
    #[arg(long)]
    json_logs: bool,

    /// 要执行的命令名称
    command: Option<String>,

    /// 命令参数
    args: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::default().with_level(parse_log_level(&args.log_level));
    logging.json_format = args.json_logs;

    let table = DispatchTable::new();
    let catalog = TypeCatalog::new()
        .with::<PingCommand>()
        .with::<EchoCommand>()
        .with::<ShowVersion>();

    let registrar = ComponentRegistrar::builder()
        .add_filter(TypeFilter::transitive::<dyn Command>())
        .with_enumerator(catalog)
        .with_hook(
            DispatchTableHook::new(table.clone())
                .only::<dyn Command>()
                .require_components(true),
        )
        .with_logging(logging)
        .build()?;

    info!("启动组件扫描示例应用");

    let directive = load_directive(&args)?;
    let container = DiContainerImpl::new();
    let result = registrar.register(&directive, &container).await?;
    info!(
        "注册过程 {} 完成，容器中共有 {} 个组件",
        result.pass_id,
        container.len()
    );

    let Some(name) = args.command.as_deref() else {
        println!("可用命令: {}", table.names().join(", "));
        return Ok(());
    };

    let Some(command) = table
        .route(name)
        .and_then(|type_info| commands::instantiate(type_info.id))
    else {
        warn!("未知命令: {}", name);
        anyhow::bail!("未知命令: {name}，可用命令: {}", table.names().join(", "));
    };

    println!("{}", command.execute(&args.args));
    Ok(())
}

/// 加载扫描指令
///
/// 配置文件和 `COMPONENT_` 环境变量优先；都没有时扫描 `commands` 模块。
fn load_directive(args: &Args) -> anyhow::Result<ScanDirective> {
    let mut loader = DirectiveLoader::default();
    if let Some(path) = &args.config {
        loader = loader.add_file(path, 10)?;
    }

    let mut directive = loader.load()?;
    directive.explicit_roots.extend(args.roots.iter().cloned());
    if directive.origin().is_none() {
        directive.origin_namespace = ScanDirective::for_type::<PingCommand>().origin_namespace;
    }
    Ok(directive)
}

/// 解析日志级别
fn parse_log_level(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}
