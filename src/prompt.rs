// prompt.rs — 交互式输入模块
// 负责 stdin 行读取、默认值回退和 y/n 解析

use rust_i18n::t;
use std::io::{self, Write};

/// 关键词留空时的默认搜索词
pub const DEFAULT_QUERY: &str = "random";

/// 分辨率留空时的默认值
pub const DEFAULT_RESOLUTION: &str = "1920x1080";

/// 打印提示语并读取一行输入，去除首尾空白
fn read_line(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// 空白输入回退到默认关键词
pub fn effective_query(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_QUERY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// 空白输入回退到默认分辨率
pub fn effective_resolution(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_RESOLUTION.to_string()
    } else {
        trimmed.to_string()
    }
}

/// y / yes 视为肯定（大小写不敏感），其余一律否定
pub fn is_affirmative(input: &str) -> bool {
    matches!(
        input.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    )
}

/// 询问搜索关键词
pub fn ask_query() -> io::Result<String> {
    Ok(effective_query(&read_line(&t!("prompt_query"))?))
}

/// 询问最低分辨率
pub fn ask_resolution() -> io::Result<String> {
    Ok(effective_resolution(&read_line(&t!("prompt_resolution"))?))
}

/// y/n 确认提问
pub fn confirm(message: &str) -> io::Result<bool> {
    Ok(is_affirmative(&read_line(message)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_falls_back_to_default() {
        assert_eq!(effective_query(""), "random");
        assert_eq!(effective_query("   "), "random");
        assert_eq!(effective_query("\t\n"), "random");
    }

    #[test]
    fn query_is_trimmed() {
        assert_eq!(effective_query(" mountains "), "mountains");
    }

    #[test]
    fn blank_resolution_falls_back_to_default() {
        assert_eq!(effective_resolution(""), "1920x1080");
        assert_eq!(effective_resolution("  "), "1920x1080");
        assert_eq!(effective_resolution("2560x1440"), "2560x1440");
    }

    #[test]
    fn affirmative_inputs() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("yes"));
        assert!(is_affirmative(" YES "));
    }

    #[test]
    fn negative_inputs() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yep"));
    }
}
