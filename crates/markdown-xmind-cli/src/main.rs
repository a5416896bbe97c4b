use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use markdown_xmind_config::Config;
use markdown_xmind_engine::io::{default_output_name, default_output_path};
use markdown_xmind_engine::{
    EmitMode, convert_markdown_file, convert_xmind_file, rewrite_file, xmind::UuidIds,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "markdown-xmind")]
#[command(about = "Convert between Markdown outlines and XMind mind maps", long_about = None)]
#[command(version)]
struct Args {
    /// Config file to use instead of ~/.config/markdown-xmind/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Insert the parent level-2 heading before every level-3 heading
    Rewrite {
        /// Markdown file to rewrite
        input: PathBuf,
        /// Output file (defaults to "<input>（转换版）.md")
        output: Option<PathBuf>,
    },
    /// Convert a Markdown outline into an XMind file
    ToXmind {
        /// Markdown file to convert
        input: PathBuf,
        /// Output file (defaults to "<input stem>.xmind" in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Root title for documents without a single top-level heading
        #[arg(long)]
        title: Option<String>,
    },
    /// Convert an XMind file into Markdown
    ToMarkdown {
        /// XMind file to convert
        input: PathBuf,
        /// Output file (defaults to "<input stem>.md", or "<input stem>_list.md" with --list,
        /// in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Emit nested bullets instead of headings
        #[arg(long)]
        list: bool,
    },
    /// Write a config file with default settings
    InitConfig,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config_path = match args.config {
        Some(path) => Config::expand_path(&path).unwrap_or(path),
        None => Config::config_path(),
    };

    match args.command {
        Command::InitConfig => init_config(&config_path),
        Command::Rewrite { input, output } => {
            let config = load_config(&config_path)?;
            let output =
                output.unwrap_or_else(|| default_output_path(&input, "（转换版）", "md"));
            rewrite(&input, &output, &config)
        }
        Command::ToXmind {
            input,
            output,
            title,
        } => {
            let config = load_config(&config_path)?;
            let output = output.unwrap_or_else(|| default_output_name(&input, "", "xmind"));
            let title = title.unwrap_or(config.default_root_title);
            to_xmind(&input, &output, &title)
        }
        Command::ToMarkdown {
            input,
            output,
            list,
        } => {
            let config = load_config(&config_path)?;
            let mode = if list || config.list_mode {
                EmitMode::List
            } else {
                EmitMode::Heading
            };
            let suffix = match mode {
                EmitMode::List => "_list",
                EmitMode::Heading => "",
            };
            let output = output.unwrap_or_else(|| default_output_name(&input, suffix, "md"));
            to_markdown(&input, &output, mode)
        }
    }
}

fn load_config(config_path: &Path) -> Result<Config> {
    let config = Config::load_or_default(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    log::debug!("Using config {config:?}");
    Ok(config)
}

fn rewrite(input: &Path, output: &Path, config: &Config) -> Result<()> {
    log::info!("Rewriting {}", input.display());
    let stats = rewrite_file(input, output, &config.placeholder_label)
        .with_context(|| format!("Failed to rewrite {}", input.display()))?;

    println!("Total lines: {}", stats.total_lines);
    println!("Level-1 headings: {}", stats.before.h1);
    println!("Original level-2 headings: {}", stats.before.h2);
    println!("Level-3 headings: {}", stats.before.h3);
    println!("Level-2 headings after rewrite: {}", stats.after.h2);
    println!("Output file: {}", output.display());
    Ok(())
}

fn to_xmind(input: &Path, output: &Path, default_title: &str) -> Result<()> {
    convert_markdown_file(input, output, default_title, &mut UuidIds)
        .with_context(|| format!("Failed to convert {} to XMind", input.display()))?;
    log::info!("Converted {} -> {}", input.display(), output.display());
    Ok(())
}

fn to_markdown(input: &Path, output: &Path, mode: EmitMode) -> Result<()> {
    convert_xmind_file(input, output, mode)
        .with_context(|| format!("Failed to convert {} to Markdown", input.display()))?;
    log::info!("Converted {} -> {}", input.display(), output.display());
    Ok(())
}

fn init_config(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        log::warn!("Config file already exists at {}", config_path.display());
        return Ok(());
    }
    Config::default().save_to_path(config_path)?;
    log::info!("Wrote default config to {}", config_path.display());
    Ok(())
}
