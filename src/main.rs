// main.rs — 程序入口
// 负责初始化异步运行时、解析命令行参数、驱动交互式抓取循环

mod applier;
mod cli;
mod config;
mod fetch;
mod prompt;
mod source;

// 初始化多语言支持，嵌入 locales 目录下的所有翻译
rust_i18n::i18n!("locales");

use applier::SystemApplier;
use clap::{CommandFactory, Parser}; // 引入 Parser trait 的 parse() 方法; CommandFactory 用于生成补全脚本
use clap_complete::generate; // 引入补全脚本生成函数
use cli::{Cli, Commands};
use config::AppConfig;
use rust_i18n::t; // 引入翻译宏
use source::wallhaven::WallhavenClient;
use source::SearchOptions;

/// `#[tokio::main]` 宏将 async main 转换为同步 main + tokio 运行时
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 自动检测系统语言并设置
    let locale = std::env::var("LANG").unwrap_or_else(|_| "en".to_string());
    if locale.starts_with("zh") {
        rust_i18n::set_locale("zh-CN");
    } else {
        rust_i18n::set_locale("en");
    }

    // 解析命令行参数
    let cli = Cli::parse();

    // 创建应用配置（读取环境变量、设置路径）
    let mut config = AppConfig::new();

    // 确保配置目录和自定义保存目录存在
    config.ensure_dirs()?;

    match &cli.command {
        Some(Commands::Completions { shell }) => {
            generate(
                *shell,
                &mut Cli::command(),
                "wallpick",
                &mut std::io::stdout(),
            );
        }

        Some(Commands::Config { action }) => {
            handle_config(&mut config, action)?;
        }

        // 默认路径：交互式抓取流程
        None => {
            if let Err(e) = run_picker(&config, &cli).await {
                eprintln!("{}", t!("error_msg", msg => e));
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// 交互式抓取循环：提问 -> 搜索 -> 下载 -> 应用 -> 询问是否再来一轮
///
/// 每轮失败只中止当前轮，打印错误后仍回到"是否继续"的提问；
/// 最后一轮失败时以状态码 1 退出
async fn run_picker(config: &AppConfig, cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let client = WallhavenClient::new(config.api_key.clone())?;
    let applier = SystemApplier;

    // 未配置保存目录则使用系统临时目录（旧文件不做清理）
    let save_dir = config
        .save_dir
        .clone()
        .unwrap_or_else(std::env::temp_dir);

    let interactive = !cli.yes;
    let mut last_failed = false;

    loop {
        let query = resolve_query(config, cli, interactive)?;
        let resolution = resolve_resolution(config, cli, interactive)?;

        let options = SearchOptions {
            query: &query,
            resolution: &resolution,
            categories: &config.search_defaults.categories,
            purity: &config.search_defaults.purity,
            ratios: &config.search_defaults.ratios,
            top_range: &config.search_defaults.top_range,
        };

        println!("{}", t!("search_start", query => query));

        match fetch::run_once(&client, &applier, &options, &save_dir).await {
            Ok(_) => {
                last_failed = false;
                println!("{}", t!("set_done"));
            }
            Err(e) => {
                last_failed = true;
                eprintln!("{}", t!("error_msg", msg => e));
            }
        }

        if !interactive || !prompt::confirm(&t!("prompt_again"))? {
            break;
        }
    }

    if last_failed {
        std::process::exit(1);
    }

    Ok(())
}

/// 确定本轮搜索关键词：命令行参数 > 交互提问 > 配置/内置默认值
fn resolve_query(config: &AppConfig, cli: &Cli, interactive: bool) -> std::io::Result<String> {
    if let Some(q) = &cli.query {
        return Ok(prompt::effective_query(q));
    }

    if !interactive {
        return Ok(config
            .search_defaults
            .query
            .clone()
            .unwrap_or_else(|| prompt::DEFAULT_QUERY.to_string()));
    }

    prompt::ask_query()
}

/// 确定本轮最低分辨率：命令行参数 > (可选提问后的)交互输入 > 配置默认值
fn resolve_resolution(config: &AppConfig, cli: &Cli, interactive: bool) -> std::io::Result<String> {
    if let Some(r) = &cli.resolution {
        return Ok(prompt::effective_resolution(r));
    }

    if interactive && prompt::confirm(&t!("prompt_customize_res"))? {
        return prompt::ask_resolution();
    }

    Ok(config.search_defaults.resolution.clone())
}

/// 处理 config 子命令：查看或修改配置
fn handle_config(
    config: &mut AppConfig,
    action: &cli::ConfigAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        cli::ConfigAction::Show => {
            println!("{}", t!("config_title"));
            println!(
                "{}",
                t!("config_path", path => config.config_path.display())
            );
            println!("{}", t!("config_search_defaults"));
            let query_str = config.search_defaults.query.as_deref().unwrap_or("None");
            println!("{}", t!("config_query", query => query_str));
            println!(
                "{}",
                t!("config_res", res => config.search_defaults.resolution)
            );
            println!(
                "{}",
                t!("config_categories", categories => config.search_defaults.categories)
            );
            println!(
                "{}",
                t!("config_purity", purity => config.search_defaults.purity)
            );
        }
        cli::ConfigAction::Schema => {
            println!("{}", AppConfig::get_schema());
        }
        cli::ConfigAction::Dump => {
            println!("{}", config.to_toml());
        }
        cli::ConfigAction::Set { key, value } => {
            match key.as_str() {
                "query" => config.search_defaults.query = Some(value.clone()),
                "res" | "resolution" => config.search_defaults.resolution = value.clone(),
                "categories" => config.search_defaults.categories = value.clone(),
                "purity" => config.search_defaults.purity = value.clone(),
                _ => return Err(t!("config_error_unknown_key", key => key).into()),
            }
            config.save()?;
            println!("{}", t!("config_updated", key => key, value => value));
        }
    }
    Ok(())
}
