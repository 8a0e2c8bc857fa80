// config.rs — 配置管理模块
// 遵循 Unix 风格：优先从 ~/.config/wallpick/config.toml 读取配置

use schemars::JsonSchema; // 引入用于生成 JSON Schema 的 trait
use serde::{Deserialize, Serialize}; // 引入序列化与反序列化 trait
use shellexpand::tilde; // 用于展开 ~ 和环境变量
use std::env; // 环境变量模块
use std::fs; // 文件系统模块
use std::path::{Path, PathBuf}; // 路径处理类型

/// 展开路径中的 ~ 和环境变量 ($HOME, $XDG_CONFIG_HOME 等)
/// 支持格式: ~/path, $HOME/path, ${HOME}/path
fn expand_path(path_str: &str) -> PathBuf {
    let expanded = tilde(path_str).into_owned();
    PathBuf::from(expanded)
}

/// 映射 config.toml 文件内容的嵌套结构体
#[derive(Debug, Deserialize, Serialize, Default, JsonSchema)]
struct ConfigFile {
    #[serde(default)]
    common: CommonConfig,
    #[serde(default)]
    source: SourceConfigs,
}

#[derive(Debug, Deserialize, Serialize, Default, JsonSchema)]
struct CommonConfig {
    /// 壁纸保存目录 (支持 ~、$HOME 等环境变量，相对路径则相对于 $HOME)
    /// 不配置则使用系统临时目录
    save_dir: Option<String>,
    /// 默认搜索参数
    #[serde(default)]
    search: SearchDefaults,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SearchDefaults {
    /// 默认搜索关键词（非交互模式下使用，不配置则为 "random"）
    #[serde(default)]
    pub query: Option<String>,
    /// 最低分辨率 (atleast 过滤器)
    #[serde(default = "default_resolution")]
    pub resolution: String,
    /// 分类开关 (general/anime/people)，如 "111"=全部, "100"=仅general
    #[serde(default = "default_categories")]
    pub categories: String,
    /// 内容纯净度开关 (sfw/sketchy/nsfw)，如 "100"=仅SFW
    #[serde(default = "default_purity")]
    pub purity: String,
    /// 宽高比过滤器
    #[serde(default = "default_ratios")]
    pub ratios: String,
    /// 热榜时间窗口
    #[serde(default = "default_top_range")]
    pub top_range: String,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            query: None,
            resolution: default_resolution(),
            categories: default_categories(),
            purity: default_purity(),
            ratios: default_ratios(),
            top_range: default_top_range(),
        }
    }
}

fn default_resolution() -> String {
    "1920x1080".to_string()
}
fn default_categories() -> String {
    "111".to_string()
}
fn default_purity() -> String {
    "100".to_string()
}
fn default_ratios() -> String {
    "16x9".to_string()
}
fn default_top_range() -> String {
    "3d".to_string()
}

#[derive(Debug, Deserialize, Serialize, Default, JsonSchema)]
struct SourceConfigs {
    #[serde(default)]
    wallhaven: WallhavenConfig,
}

#[derive(Debug, Deserialize, Serialize, Default, JsonSchema)]
struct WallhavenConfig {
    api_key: Option<String>,
}

/// 应用全局配置项
pub struct AppConfig {
    /// Wallhaven API Key (优先级：ENV > TOML)
    pub api_key: Option<String>,
    /// 壁纸保存目录；None 表示使用系统临时目录
    pub save_dir: Option<PathBuf>,
    /// 配置文件所在路径
    pub config_path: PathBuf,
    /// 默认搜索参数
    pub search_defaults: SearchDefaults,
}

impl AppConfig {
    /// 初始化配置
    pub fn new() -> Self {
        let home = env::var("HOME").expect("无法获取 $HOME 环境变量");
        let home_path = PathBuf::from(&home);
        let config_dir = home_path.join(".config").join("wallpick");
        let config_path = config_dir.join("config.toml");

        let config_file = Self::load_config_from_file(&config_path).unwrap_or_default();

        // 优先级：环境变量 > 配置文件内容
        let api_key = env::var("WALLHAVEN_API_KEY")
            .ok()
            .or(config_file.source.wallhaven.api_key);

        // 保存目录：配置了则展开 ~ 和环境变量，相对路径相对于 $HOME；
        // 未配置保持 None，由调用方落到系统临时目录
        let save_dir = config_file.common.save_dir.map(|dir_str| {
            let p = expand_path(&dir_str);
            if p.is_absolute() { p } else { home_path.join(p) }
        });

        Self {
            api_key,
            save_dir,
            config_path,
            search_defaults: config_file.common.search,
        }
    }

    /// 辅助函数：解析 TOML 配置文件
    fn load_config_from_file(path: &Path) -> Option<ConfigFile> {
        fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
    }

    /// 确保所有必要的目录都存在
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if let Some(dir) = &self.save_dir {
            fs::create_dir_all(dir)?;
        }

        Ok(())
    }

    /// 由当前运行时配置还原出文件结构
    fn to_config_file(&self) -> ConfigFile {
        ConfigFile {
            common: CommonConfig {
                save_dir: self
                    .save_dir
                    .as_ref()
                    .map(|p| p.to_string_lossy().to_string()),
                search: SearchDefaults {
                    query: self.search_defaults.query.clone(),
                    resolution: self.search_defaults.resolution.clone(),
                    categories: self.search_defaults.categories.clone(),
                    purity: self.search_defaults.purity.clone(),
                    ratios: self.search_defaults.ratios.clone(),
                    top_range: self.search_defaults.top_range.clone(),
                },
            },
            source: SourceConfigs {
                wallhaven: WallhavenConfig {
                    api_key: self.api_key.clone(),
                },
            },
        }
    }

    /// 将配置保存回文件
    pub fn save(&self) -> std::io::Result<()> {
        let toml_str = toml::to_string_pretty(&self.to_config_file())
            .map_err(std::io::Error::other)?;
        fs::write(&self.config_path, toml_str)
    }

    /// 获取配置文件的 JSON Schema
    pub fn get_schema() -> String {
        let schema = schemars::schema_for!(ConfigFile);
        serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string())
    }

    /// 将当前配置转换为 TOML 字符串
    pub fn to_toml(&self) -> String {
        let toml_str = toml::to_string_pretty(&self.to_config_file())
            .unwrap_or_else(|_| "# Error serializing config".to_string());

        // toml 库不支持带注释序列化，所以手动插入说明
        toml_str.replace(
            "[source.wallhaven]",
            "# Wallhaven API Key（也可通过环境变量 WALLHAVEN_API_KEY 提供）\n[source.wallhaven]\n# api_key = \"your_wallhaven_api_key_here\"",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_yields_search_defaults() {
        let config: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(config.common.search.resolution, "1920x1080");
        assert_eq!(config.common.search.categories, "111");
        assert_eq!(config.common.search.purity, "100");
        assert_eq!(config.common.search.ratios, "16x9");
        assert_eq!(config.common.search.top_range, "3d");
        assert!(config.common.search.query.is_none());
        assert!(config.common.save_dir.is_none());
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config: ConfigFile = toml::from_str(
            r#"
            [common.search]
            query = "nature"
            resolution = "2560x1440"
            "#,
        )
        .unwrap();
        assert_eq!(config.common.search.query.as_deref(), Some("nature"));
        assert_eq!(config.common.search.resolution, "2560x1440");
        assert_eq!(config.common.search.purity, "100");
    }

    #[test]
    fn api_key_is_read_from_source_section() {
        let config: ConfigFile = toml::from_str(
            r#"
            [source.wallhaven]
            api_key = "abc123"
            "#,
        )
        .unwrap();
        assert_eq!(config.source.wallhaven.api_key.as_deref(), Some("abc123"));
    }
}
