//! 规则数据源边界：统一"返回全部规则"契约
//! 内置规则、内存规则与JSON载荷三种来源，均为全量返回，不分页、不做服务端过滤

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::model::GstRule;
use crate::error::GstResult;

/// 规则数据源契约（后端唯一操作：列出全部规则）
#[async_trait]
pub trait RuleSource: Send + Sync {
    /// 返回完整规则列表（全量成功或整体失败，无部分结果语义）
    async fn list_all(&self) -> GstResult<Vec<GstRule>>;

    /// 数据源名称（用于日志输出）
    fn name(&self) -> &str {
        "unknown"
    }
}

/// 模拟数据源延迟
async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

/// 内置规则数据源（编译期 embed，仅 embedded-rules 特性开启时可用）
#[cfg(feature = "embedded-rules")]
#[derive(Debug, Clone)]
pub struct EmbeddedRuleSource {
    latency: Duration,
}

#[cfg(feature = "embedded-rules")]
impl EmbeddedRuleSource {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[cfg(feature = "embedded-rules")]
#[async_trait]
impl RuleSource for EmbeddedRuleSource {
    async fn list_all(&self) -> GstResult<Vec<GstRule>> {
        simulate_latency(self.latency).await;
        let rules = super::embedded::embedded_rules();
        debug!("内置规则源返回规则总数：{}", rules.len());
        Ok(rules)
    }

    fn name(&self) -> &str {
        "embedded"
    }
}

/// 内存规则数据源（调用方自带规则列表，测试与自定义部署场景）
#[derive(Debug, Clone, Default)]
pub struct InMemoryRuleSource {
    rules: Vec<GstRule>,
    latency: Duration,
}

impl InMemoryRuleSource {
    pub fn new(rules: Vec<GstRule>) -> Self {
        Self {
            rules,
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(rules: Vec<GstRule>, latency: Duration) -> Self {
        Self { rules, latency }
    }
}

#[async_trait]
impl RuleSource for InMemoryRuleSource {
    async fn list_all(&self) -> GstResult<Vec<GstRule>> {
        simulate_latency(self.latency).await;
        Ok(self.rules.clone())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// JSON载荷规则数据源（对接上游"返回全部规则"接口的响应体）
/// 载荷畸形（缺必填字段 / 枚举值未知）在加载期报错
#[derive(Debug, Clone)]
pub struct JsonRuleSource {
    payload: String,
    latency: Duration,
}

impl JsonRuleSource {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(payload: impl Into<String>, latency: Duration) -> Self {
        Self {
            payload: payload.into(),
            latency,
        }
    }
}

#[async_trait]
impl RuleSource for JsonRuleSource {
    async fn list_all(&self) -> GstResult<Vec<GstRule>> {
        simulate_latency(self.latency).await;
        let rules: Vec<GstRule> = serde_json::from_str(&self.payload)?;
        debug!("JSON规则源解析成功，规则总数：{}", rules.len());
        Ok(rules)
    }

    fn name(&self) -> &str {
        "json"
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RsGstRulesError;

    #[tokio::test]
    async fn test_in_memory_source_returns_copy() {
        let source = InMemoryRuleSource::new(Vec::new());
        let rules = source.list_all().await.unwrap();
        assert!(rules.is_empty());
        assert_eq!(source.name(), "memory");
    }

    #[tokio::test]
    async fn test_json_source_rejects_malformed_payload() {
        // 测试场景：缺少必填字段的载荷整体失败，不产出部分结果
        let source = JsonRuleSource::new(r#"[{"id": "GST-X-001"}]"#);
        let result = source.list_all().await;
        assert!(matches!(result, Err(RsGstRulesError::JsonError(_))));
    }

    #[tokio::test]
    async fn test_json_source_rejects_unknown_enum_value() {
        // 测试场景：domain 取值超出封闭枚举
        let payload = r#"[{
            "id": "GST-X-001", "name": "x", "description": "x", "version": "v1",
            "domain": "UNKNOWN_DOMAIN", "priority": 1,
            "risk": { "level": "LOW", "reason": "r", "confidence": 10, "impact": "Compliance" },
            "createdDate": "2024-01-01", "lastUpdated": "2024-01-01", "active": true
        }]"#;
        let result = JsonRuleSource::new(payload).list_all().await;
        assert!(result.is_err());
    }
}
