//! 构建期依赖解析命令行（infraworld-build）。
//!
//! 职责：
//! - 从模块目录（或直接给定的工程根目录）解析 gRPC/protobuf 头文件与静态库
//! - 以文本、JSON 或 cargo 构建脚本指令的形式输出模块配置
//! - 列出公共预处理器定义与平台目录约定
//!
//! 输出约定：
//! - 结果写到标准输出；日志写到标准错误，便于被构建脚本直接消费
//!
//! 作者：Infraworld 项目组
//! 创建时间：2026-10-18
//! 修改时间：2026-10-18

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use infraworld_core::cargo::CargoDirectives;
use infraworld_core::definitions;
use infraworld_core::platform::PLATFORM_RULES;
use infraworld_core::rules::{ModuleRules, TargetRules};
use infraworld_core::{ArtifactLayout, BuildConfiguration, DependencyResolver, Platform};
use tracing::{debug, info};

/// 命令行参数。
#[derive(Debug, Parser)]
#[command(name = "infraworld-build", version)]
struct Cli {
    #[command(flatten)]
    location: Location,

    /// 目标平台（默认当前宿主平台）。
    #[arg(long, value_parser = parse_platform)]
    platform: Option<Platform>,

    /// 构建配置。
    #[arg(long, default_value = "Development", value_parser = parse_configuration)]
    configuration: BuildConfiguration,

    /// JSON 布局覆盖文件。
    #[arg(long)]
    layout: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// 工程位置：模块目录与工程根目录二选一。
#[derive(Debug, Args)]
#[group(required = false, multiple = false)]
struct Location {
    /// 模块目录（工程根目录为其向上两级）。
    #[arg(long)]
    module_dir: Option<PathBuf>,

    /// 工程根目录。
    #[arg(long)]
    project_root: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// 解析依赖并输出模块配置。
    Resolve {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// 输出公共预处理器定义。
    Definitions,
    /// 输出平台目录与扩展名约定。
    Platforms,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Cargo,
}

fn parse_platform(s: &str) -> Result<Platform, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_configuration(s: &str) -> Result<BuildConfiguration, String> {
    s.parse().map_err(|e| format!("{e}"))
}

/// 程序入口：解析参数并分发子命令。
///
/// 异常处理：
/// - 工程根目录无法定位、布局文件错误、库目录不可读时返回 `Err`，进程以非零状态退出。
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Resolve { format } => resolve(&cli, format),
        Commands::Definitions => {
            for d in definitions::public_definitions() {
                println!("{d}");
            }
            Ok(())
        }
        Commands::Platforms => {
            for rule in &PLATFORM_RULES {
                println!("{}\t{}\t.{}", rule.platform, rule.subdir, rule.convention.extension());
            }
            Ok(())
        }
    }
}

fn load_layout(path: Option<&Path>) -> Result<ArtifactLayout> {
    match path {
        Some(p) => ArtifactLayout::load(p),
        None => Ok(ArtifactLayout::default()),
    }
}

/// 解析依赖并按指定格式输出。
///
/// 主要步骤：
/// 1) 加载布局（可选覆盖文件）
/// 2) 由模块目录推导工程根目录，或直接使用 `--project-root`
/// 3) 解析依赖，生成模块配置
/// 4) 输出文本/JSON/cargo 指令
fn resolve(cli: &Cli, format: OutputFormat) -> Result<()> {
    let layout = load_layout(cli.layout.as_deref())?;
    let target = TargetRules {
        platform: cli.platform.unwrap_or_else(Platform::host),
        configuration: cli.configuration,
    };
    debug!(
        "target: platform={}, configuration={}",
        target.platform, target.configuration
    );

    let rules = match (&cli.location.module_dir, &cli.location.project_root) {
        (Some(module_dir), _) => ModuleRules::configure_with_layout(target, module_dir, layout)
            .with_context(|| format!("配置模块失败: {}", module_dir.display()))?,
        (None, Some(project_root)) => {
            let resolver = DependencyResolver::for_project_root(project_root)
                .with_context(|| format!("工程根目录无效: {}", project_root.display()))?
                .with_layout(layout);
            ModuleRules::from_resolver(target, &resolver)
                .with_context(|| format!("解析依赖失败: {}", project_root.display()))?
        }
        (None, None) => {
            let cwd = std::env::current_dir().context("读取当前目录失败")?;
            ModuleRules::configure_with_layout(target, &cwd, layout)
                .with_context(|| format!("配置模块失败: {}", cwd.display()))?
        }
    };

    match format {
        OutputFormat::Text => print_text(&rules),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&rules).context("序列化模块配置失败")?;
            println!("{json}");
        }
        OutputFormat::Cargo => CargoDirectives::from_rules(&rules).emit(),
    }
    info!(
        "已解析 {} 个头文件路径、{} 个静态库",
        rules.public_include_paths.len(),
        rules.public_additional_libraries.len()
    );
    Ok(())
}

fn print_text(rules: &ModuleRules) {
    println!("{}", rules.dependency_paths());
    println!("Definitions:");
    for d in &rules.public_definitions {
        println!("{d}");
    }
}
