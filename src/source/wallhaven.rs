// wallhaven.rs — Wallhaven API 异步客户端模块
// 负责与 Wallhaven API 交互：分页搜索壁纸和下载图片

use super::{SearchOptions, SearchPage, WallpaperInfo, WallpaperSource};
use async_trait::async_trait;
use serde::Deserialize; // 反序列化 trait，用于将 JSON 转为 Rust 结构体

/// 每次请求携带的 User-Agent
const USER_AGENT: &str = concat!("wallpick/", env!("CARGO_PKG_VERSION"));

/// Wallhaven API 搜索响应的顶层结构
///
/// # serde 说明
/// - `#[derive(Deserialize)]` 自动实现 JSON -> Rust 结构体的反序列化
/// - 字段名必须与 JSON 的 key 完全匹配（或使用 `#[serde(rename)]`）
/// - JSON 中多余的字段会被 serde 自动忽略
#[derive(Deserialize, Debug)]
pub struct SearchResponse {
    /// 搜索结果列表
    /// Wallhaven API 每页最多返回 24 条结果
    pub data: Vec<Wallpaper>,

    /// 分页元信息；个别端点不带 meta，缺省按单页处理
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// 分页元信息，只提取 last_page
#[derive(Deserialize, Debug)]
pub struct Meta {
    /// 本次查询的总页数
    pub last_page: u32,
}

/// 单张壁纸的数据结构
#[derive(Deserialize, Debug)]
pub struct Wallpaper {
    /// 壁纸唯一标识符（如 "94x38z"）
    pub id: String,

    /// 壁纸原图的直接下载 URL
    /// 格式如：https://w.wallhaven.cc/full/94/wallhaven-94x38z.jpg
    pub path: String,

    /// 壁纸分辨率（如 "3840x2160"）
    pub resolution: String,
}

/// Wallhaven API 异步客户端
///
/// 封装了 reqwest::Client 和 API 配置，提供搜索和下载方法。
///
/// # Rust 特性说明
/// - `reqwest::Client` 内部维护连接池，应该复用而非每次请求都创建新的
/// - `Option<String>` 用于可选的 API Key
pub struct WallhavenClient {
    /// HTTP 客户端（内部有连接池，应复用）
    client: reqwest::Client,

    /// API 基础 URL
    base_url: String,

    /// 可选的 API Key
    api_key: Option<String>,
}

impl WallhavenClient {
    /// 创建新的 Wallhaven 客户端
    ///
    /// 客户端带自定义 User-Agent；构建失败（TLS 后端初始化等）时
    /// 返回错误而不是 panic。
    pub fn new(api_key: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: String::from("https://wallhaven.cc/api/v1"),
            api_key,
        })
    }
}

#[async_trait]
impl WallpaperSource for WallhavenClient {
    async fn search(
        &self,
        options: &SearchOptions<'_>,
        page: u32,
    ) -> Result<SearchPage, Box<dyn std::error::Error>> {
        let url = format!("{}/search", self.base_url);
        let page_str = page.to_string();

        // 排序固定为 random：本工具就是随机选图器
        let mut params: Vec<(&str, &str)> = vec![
            ("q", options.query),
            ("sorting", "random"),
            ("purity", options.purity),
            ("categories", options.categories),
            ("atleast", options.resolution),
            ("ratios", options.ratios),
            ("topRange", options.top_range),
            ("page", &page_str),
        ];

        // .as_deref() 将 Option<String> 转为 Option<&str>
        if let Some(key) = self.api_key.as_deref() {
            params.push(("apikey", key));
        }

        let response = self.client.get(&url).query(&params).send().await?;

        let search_response: SearchResponse = response.json().await?;

        let last_page = search_response.meta.map(|m| m.last_page).unwrap_or(1);

        let wallpapers = search_response
            .data
            .into_iter()
            .map(|w| WallpaperInfo {
                id: w.id,
                url: w.path,
                resolution: w.resolution,
            })
            .collect();

        Ok(SearchPage {
            wallpapers,
            last_page,
        })
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        let response = self.client.get(url).send().await?;
        // .bytes().await 将整个响应体读取为字节数组（Bytes 类型）
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_response_with_meta() {
        let json = r#"{
            "data": [
                {
                    "id": "94x38z",
                    "url": "https://wallhaven.cc/w/94x38z",
                    "path": "https://w.wallhaven.cc/full/94/wallhaven-94x38z.jpg",
                    "resolution": "3840x2160",
                    "file_size": 1234567
                }
            ],
            "meta": {
                "current_page": 1,
                "last_page": 5,
                "total": 120
            }
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].id, "94x38z");
        assert_eq!(
            response.data[0].path,
            "https://w.wallhaven.cc/full/94/wallhaven-94x38z.jpg"
        );
        assert_eq!(response.meta.unwrap().last_page, 5);
    }

    #[test]
    fn missing_meta_is_tolerated() {
        let response: SearchResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(response.data.is_empty());
        assert!(response.meta.is_none());
    }
}
