// fetch.rs — 核心抓取流程模块
// 发现总页数 -> 随机选页 -> 随机选图 -> 下载保存 -> 应用为壁纸

use crate::applier::WallpaperApplier;
use crate::source::{SearchOptions, WallpaperSource};
use chrono::NaiveDateTime;
use rand::Rng;
use rust_i18n::t;
use std::path::{Path, PathBuf};
use tokio::fs::File; // tokio 提供的异步文件操作
use tokio::io::AsyncWriteExt; // 异步写入 trait，提供 write_all() 等方法

/// 随机选页的上限
/// 服务端报告的 last_page 可能很大，超过这个值的页码命中率没有意义，
/// 同时避免 last_page 异常时产生退化的分页请求
pub const MAX_RANDOM_PAGE: u32 = 50;

/// 把服务端报告的总页数收敛到 [1, MAX_RANDOM_PAGE]
pub fn clamp_last_page(last_page: u32) -> u32 {
    last_page.clamp(1, MAX_RANDOM_PAGE)
}

/// 从图片 URL 推断文件扩展名，推断不出时回退到 jpg
///
/// 查询串和片段不算路径的一部分，先剥掉再取最后一段
pub fn infer_extension(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.rsplit('/').next().unwrap_or("");

    match segment.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty() && !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            ext
        }
        _ => "jpg",
    }
}

/// 根据下载时刻和图片 URL 构造保存文件名
/// 形如 wallhaven_20240501_130203.png，时间精确到秒
pub fn build_filename(url: &str, moment: NaiveDateTime) -> String {
    format!(
        "wallhaven_{}.{}",
        moment.format("%Y%m%d_%H%M%S"),
        infer_extension(url)
    )
}

/// 执行一次完整的搜索-下载-应用流程，返回保存路径
///
/// 第一次请求只用来读取 last_page；随机选页后总是再请求一次，
/// 即使选中的恰好是第 1 页——sorting=random 下每次请求服务端都会
/// 重新洗牌，这个行为影响随机分布，保持不变
pub async fn run_once<S, A>(
    source: &S,
    applier: &A,
    options: &SearchOptions<'_>,
    save_dir: &Path,
) -> Result<PathBuf, Box<dyn std::error::Error>>
where
    S: WallpaperSource,
    A: WallpaperApplier,
{
    let first_page = source.search(options, 1).await?;
    let max_page = clamp_last_page(first_page.last_page);

    let page = rand::thread_rng().gen_range(1..=max_page);
    let result_page = source.search(options, page).await?;

    if result_page.wallpapers.is_empty() {
        return Err(t!("error_no_wallpapers").into());
    }

    let index = rand::thread_rng().gen_range(0..result_page.wallpapers.len());
    let chosen = &result_page.wallpapers[index];

    if chosen.url.trim().is_empty() {
        return Err(t!("error_invalid_url").into());
    }

    println!(
        "{}",
        t!("download_info", id => chosen.id, res => chosen.resolution)
    );

    let bytes = source.fetch_image(&chosen.url).await?;

    let filename = build_filename(&chosen.url, chrono::Local::now().naive_local());
    let save_path = save_dir.join(filename);

    let mut file = File::create(&save_path).await?;
    file.write_all(&bytes).await?;

    println!("{}", t!("save_path", path => save_path.display()));

    // 先写显示样式，再让系统重绘桌面
    applier.set_fill_style()?;
    applier.apply(&save_path)?;

    Ok(save_path)
}
