//! 文本匹配小工具

/// 安全转小写，仅转换ASCII字符
#[inline(always)]
pub fn safe_lowercase(s: &str) -> String {
    s.chars().map(|c| c.to_ascii_lowercase()).collect()
}

/// 忽略大小写的子串包含判断（needle 须已是小写）
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    safe_lowercase(haystack).contains(needle_lower)
}
