//! 程序入口：解析命令行、初始化日志，并把命令分发给 CommandBridge

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

use course_manager::model::data_core::{CourseStore, StoreConfig, DEFAULT_DATA_FILE};
use course_manager::utils::prompt::Prompter;
use course_manager::vm::commands::CommandBridge;

#[derive(Parser)]
#[command(name = "course-manager", about = "CLI to manage courses", version = "1.0.0")]
struct Cli {
    /// JSON data file holding the courses
    #[arg(long, global = true, default_value = DEFAULT_DATA_FILE)]
    file: PathBuf,
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a course
    #[command(visible_alias = "a")]
    Add,
    /// List all courses
    #[command(visible_alias = "l")]
    List,
    /// Get a course by ID
    #[command(visible_alias = "g")]
    Get,
    /// Update a course by ID
    #[command(visible_alias = "u")]
    Update,
    /// Delete a course by ID
    #[command(visible_alias = "d")]
    Delete,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 日志写到 stderr，避免混入表格输出
    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    let _ = SubscriberBuilder::default()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();

    tracing::debug!("执行命令 {:?}，数据文件: {}", cli.command, cli.file.display());

    let store = CourseStore::new(StoreConfig::new(cli.file.clone()));
    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());
    let mut bridge = CommandBridge::new(store, prompter);

    match cli.command {
        Commands::Add => bridge.handle_add(),
        Commands::List => bridge.handle_list(),
        Commands::Get => bridge.handle_get(),
        Commands::Update => bridge.handle_update(),
        Commands::Delete => bridge.handle_delete(),
    }
    .with_context(|| format!("course-manager failed (data file: {})", cli.file.display()))
}
