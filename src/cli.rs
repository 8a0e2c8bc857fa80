// cli.rs — 命令行接口定义模块
// 使用 clap 的 derive 模式定义顶层参数和子命令

use clap::{Parser, Subcommand}; // Parser: 解析命令行参数的 trait; Subcommand: 定义子命令的 trait
use clap_complete::Shell; // Shell 枚举：Bash, Zsh, Fish, Elvish, PowerShell

/// 随机壁纸工具
///
/// 按关键词和分辨率从 Wallhaven 随机抓取一张壁纸，
/// 下载后直接设置为系统桌面背景（填充样式）。
/// 不带子命令时进入交互式流程。
#[derive(Parser)]
#[command(name = "wallpick")]
#[command(version)] // 自动从 Cargo.toml 读取 version 字段
#[command(about = "随机壁纸工具 — 从 Wallhaven 随机抓取壁纸并设置为桌面背景")]
pub struct Cli {
    /// 搜索关键词（指定后跳过交互提问，留空等价于 "random"）
    #[arg(short, long)]
    pub query: Option<String>,

    /// 最低分辨率（如 "1920x1080"，指定后跳过交互提问）
    #[arg(short, long)]
    pub resolution: Option<String>,

    /// 非交互模式：全部使用默认值/配置值，只执行一轮，失败立即退出
    #[arg(short = 'y', long)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 生成 shell 补全脚本（支持 bash, zsh, fish, elvish, powershell）
    ///
    /// 用法示例：
    ///   wallpick completions zsh > ~/.zsh/completions/_wallpick
    ///   wallpick completions fish > ~/.config/fish/completions/wallpick.fish
    Completions {
        /// 目标 shell 类型
        shell: Shell,
    },

    /// 配置管理操作
    ///
    /// 用法示例:
    ///   wallpick config show
    ///   wallpick config dump
    ///   wallpick config set query "anime"
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// 配置管理操作
#[derive(Subcommand)]
pub enum ConfigAction {
    /// 查看当前所有配置简报
    Show,
    /// 生成配置文件对应的 JSON Schema
    Schema,
    /// 以 TOML 格式打印当前完整配置内容
    Dump,
    /// 设置配置项的值 (支持: query, resolution, categories, purity)
    Set {
        /// 要设置的键 (query, res, resolution, categories, purity)
        key: String,
        /// 要设置的值
        value: String,
    },
}
