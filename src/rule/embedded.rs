//! 内置规则库 - 仅在开启embedded-rules特性时编译
//! 规则JSON编译期embed，运行期首次访问解析，内存中仅一份实例，线程安全

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::model::GstRule;

// 规则库JSON随crate一同发布
static EMBEDDED_RULES_JSON: &str = include_str!("embedded_rules.json");

/// 全局懒加载的内置规则库单例
static EMBEDDED_RULES: Lazy<Arc<Vec<GstRule>>> = Lazy::new(|| {
    let rules: Vec<GstRule> = serde_json::from_str(EMBEDDED_RULES_JSON).unwrap_or_else(|e| {
        eprintln!("致命错误: 内置规则库反序列化失败 - {:?}", e);
        panic!("内置规则库JSON异常，请检查 embedded_rules.json");
    });
    Arc::new(rules)
});

/// 取内置规则列表副本（快照语义，调用方独立持有）
pub fn embedded_rules() -> Vec<GstRule> {
    EMBEDDED_RULES.as_ref().clone()
}
