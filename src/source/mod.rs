// source/mod.rs — 壁纸源抽象接口模块
// 定义了壁纸站客户端（如 Wallhaven）必须实现的通用 Trait

pub mod wallhaven;

use async_trait::async_trait; // 异步 Trait 支持宏

/// 统一的壁纸元数据结构
/// 不论来自哪个壁纸站，都转换成这个结构体供上层使用
#[derive(Debug, Clone)]
pub struct WallpaperInfo {
    /// 壁纸在原站的 ID
    pub id: String,
    /// 壁纸原图的直接下载 URL
    pub url: String,
    /// 分辨率描述
    pub resolution: String,
}

/// 搜索参数结构体
/// 抽象了通用的搜索需求；排序方式固定为 random，不在这里出现
pub struct SearchOptions<'a> {
    pub query: &'a str,
    /// 最低分辨率（atleast 过滤器）
    pub resolution: &'a str,
    pub categories: &'a str,
    pub purity: &'a str,
    pub ratios: &'a str,
    /// 热榜时间窗口（如 "3d"）
    pub top_range: &'a str,
}

/// 单页搜索结果
/// wallpapers 为本页候选壁纸，last_page 为服务端报告的总页数
pub struct SearchPage {
    pub wallpapers: Vec<WallpaperInfo>,
    pub last_page: u32,
}

/// 壁纸源的抽象 Trait
/// 所有的壁纸站客户端（如 WallhavenClient）都应该实现这个 Trait
///
/// # 异步 Trait 说明
/// Rust 原生目前对 Trait 中的 async fn 支持有限，
/// 这里使用 `async_trait` 宏来支持异步接口。
#[async_trait]
pub trait WallpaperSource {
    /// 搜索指定页的壁纸
    /// 返回该页的候选列表和总页数
    async fn search(
        &self,
        options: &SearchOptions<'_>,
        page: u32,
    ) -> Result<SearchPage, Box<dyn std::error::Error>>;

    /// 下载单张壁纸的原始字节
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>>;
}
