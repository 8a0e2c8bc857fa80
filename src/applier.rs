// applier.rs — 系统壁纸应用模块

use rust_i18n::t;
use std::path::Path;

/// 壁纸应用器抽象
/// 把"写显示样式"和"应用壁纸"两个系统副作用收敛到一个窄接口后面，
/// 核心流程只依赖这个 Trait，测试时可以换成记录调用的假实现
pub trait WallpaperApplier {
    /// 将显示样式持久化为"填充"（缩放铺满屏幕，关闭平铺）
    fn set_fill_style(&self) -> Result<(), Box<dyn std::error::Error>>;

    /// 将指定路径的图片设置为系统壁纸（立即生效并跨会话保留）
    fn apply(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>>;
}

/// 基于 wallpaper 库的真实实现
/// 这个库会自动识别操作系统并调用相应的 API
pub struct SystemApplier;

impl WallpaperApplier for SystemApplier {
    fn set_fill_style(&self) -> Result<(), Box<dyn std::error::Error>> {
        // Mode::Crop 即 Windows 上的 "Fill"：缩放裁剪铺满，TileWallpaper=0
        wallpaper::set_mode(wallpaper::Mode::Crop)
            .map_err(|e| format!("{}: {}", t!("error_set_failed"), e).into())
    }

    fn apply(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let path_str = path.to_str().ok_or(t!("error_utf8"))?;

        // 打印调试信息，让用户知道到底在设置哪张图
        println!("  -> {}", path.display());

        wallpaper::set_from_path(path_str)
            .map_err(|e| format!("{}: {}", t!("error_set_failed"), e).into())
    }
}
