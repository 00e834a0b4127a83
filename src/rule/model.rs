//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use std::fmt;

use serde::{Deserialize, Serialize};

/// 规则所属合规领域（封闭枚举，载荷出现未知值即为加载错误）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleDomain {
    Exemption,
    Taxability,
    PlaceOfSupply,
    Valuation,
    Compliance,
}

impl RuleDomain {
    /// 全部领域，按声明顺序（用于分组输出与过滤选项展示）
    pub const ALL: [RuleDomain; 5] = [
        RuleDomain::Exemption,
        RuleDomain::Taxability,
        RuleDomain::PlaceOfSupply,
        RuleDomain::Valuation,
        RuleDomain::Compliance,
    ];

    /// 领域的载荷名称
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleDomain::Exemption => "EXEMPTION",
            RuleDomain::Taxability => "TAXABILITY",
            RuleDomain::PlaceOfSupply => "PLACE_OF_SUPPLY",
            RuleDomain::Valuation => "VALUATION",
            RuleDomain::Compliance => "COMPLIANCE",
        }
    }
}

impl fmt::Display for RuleDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 风险等级（封闭三档，载荷出现未知值即为加载错误）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// 等级的载荷名称
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "HIGH",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::Low => "LOW",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 条件比较操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionOperator {
    Equals,
    NotEquals,
    In,
    NotIn,
    GreaterThan,
    LessThan,
}

/// 条件值（带标签变体：布尔/数值/文本/列表）
/// 本库仅存储与展示条件，不做求值，变体只需结构相等与可读输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<ConditionValue>),
}

impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionValue::Bool(b) => write!(f, "{}", b),
            ConditionValue::Number(n) => write!(f, "{}", n),
            ConditionValue::Text(s) => write!(f, "{}", s),
            ConditionValue::List(items) => {
                let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
        }
    }
}

/// 规则条件（存储型元数据，顺序仅用于展示）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub fact: String,
    pub operator: ConditionOperator,
    pub value: ConditionValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// 风险评估
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub reason: String,
    // 置信度 0-100，快照构建时校验
    pub confidence: u8,
    // 影响类别（Financial / Compliance / Operational 等自由文本）
    pub impact: String,
}

/// 法律条文引用（仅 domain 必填）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalReference {
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circular: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_to: Option<String>,
}

/// GST合规决策规则（从规则库JSON解析，加载后不可变）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstRule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub version: String,
    pub domain: RuleDomain,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_domain: Option<String>,
    // 名义范围 1-10，不强制校验
    pub priority: i32,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub actions: Vec<String>,
    pub risk: RiskAssessment,
    #[serde(default)]
    pub legal_references: Vec<LegalReference>,
    // 插入顺序保留用于展示
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    // ISO风格日期字符串，不做严格校验
    pub created_date: String,
    pub last_updated: String,
    pub active: bool,
}

// ======== 为 GstRule 实现 Display trait（用于日志 / Report 输出） ========
impl fmt::Display for GstRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            write!(f, "[{}] {}", self.id, self.name)
        } else {
            write!(f, "[{}] {} {}", self.id, self.name, self.version)
        }
    }
}

/// 按领域归组的规则集合（领域导航展示用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleGroup {
    pub domain: RuleDomain,
    pub count: usize,
    pub rules: Vec<GstRule>,
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RULE_JSON: &str = r#"{
        "id": "GST-EXEMPT-001",
        "name": "SEZ Authorized Operations Exemption",
        "description": "Supplies to SEZ unit/developer for authorized operations are exempt",
        "version": "v1.0.0",
        "domain": "EXEMPTION",
        "subDomain": "SEZ",
        "priority": 1,
        "conditions": [
            { "fact": "supply_to", "operator": "equals", "value": "SEZ_UNIT_OR_DEVELOPER" },
            { "fact": "exemption_claimed", "operator": "equals", "value": true }
        ],
        "actions": ["EXEMPT_FROM_GST"],
        "risk": {
            "level": "LOW",
            "reason": "Clear exemption under Section 16 of IGST Act",
            "confidence": 95,
            "impact": "Compliance"
        },
        "legalReferences": [
            { "domain": "IGST Act, 2017", "section": "Section 16", "effectiveFrom": "2017-07-01" }
        ],
        "tags": ["SEZ", "Exemption"],
        "createdDate": "2024-01-15",
        "lastUpdated": "2024-03-20",
        "active": true
    }"#;

    #[test]
    fn test_parse_full_rule() {
        // 测试场景：完整规则JSON解析，camelCase字段名
        let rule: GstRule = serde_json::from_str(SAMPLE_RULE_JSON).unwrap();
        assert_eq!(rule.id, "GST-EXEMPT-001");
        assert_eq!(rule.domain, RuleDomain::Exemption);
        assert_eq!(rule.sub_domain.as_deref(), Some("SEZ"));
        assert_eq!(rule.risk.level, RiskLevel::Low);
        assert_eq!(rule.risk.confidence, 95);
        assert_eq!(rule.conditions.len(), 2);
        assert_eq!(rule.conditions[0].operator, ConditionOperator::Equals);
        assert_eq!(rule.legal_references[0].section.as_deref(), Some("Section 16"));
        assert!(rule.active);
    }

    #[test]
    fn test_unknown_domain_is_parse_error() {
        // 测试场景：领域枚举为封闭集合，未知值解析失败
        let json = SAMPLE_RULE_JSON.replace("\"EXEMPTION\"", "\"SOMETHING_ELSE\"");
        assert!(serde_json::from_str::<GstRule>(&json).is_err());
    }

    #[test]
    fn test_unknown_risk_level_is_parse_error() {
        let json = SAMPLE_RULE_JSON.replace("\"LOW\"", "\"CRITICAL\"");
        assert!(serde_json::from_str::<GstRule>(&json).is_err());
    }

    #[test]
    fn test_condition_value_variants() {
        // 测试场景：untagged 条件值按 布尔/数值/文本/列表 区分
        assert_eq!(
            serde_json::from_str::<ConditionValue>("true").unwrap(),
            ConditionValue::Bool(true)
        );
        assert_eq!(
            serde_json::from_str::<ConditionValue>("95").unwrap(),
            ConditionValue::Number(95.0)
        );
        assert_eq!(
            serde_json::from_str::<ConditionValue>("\"DTA\"").unwrap(),
            ConditionValue::Text("DTA".to_string())
        );
        assert_eq!(
            serde_json::from_str::<ConditionValue>("[\"A\", \"B\"]").unwrap(),
            ConditionValue::List(vec![
                ConditionValue::Text("A".to_string()),
                ConditionValue::Text("B".to_string()),
            ])
        );
    }

    #[test]
    fn test_condition_value_display() {
        let value = ConditionValue::List(vec![
            ConditionValue::Text("SEZ".to_string()),
            ConditionValue::Number(5.0),
            ConditionValue::Bool(false),
        ]);
        assert_eq!(value.to_string(), "[SEZ, 5, false]");
    }

    #[test]
    fn test_operator_wire_names() {
        // 测试场景：操作符 camelCase 载荷名
        assert_eq!(
            serde_json::from_str::<ConditionOperator>("\"notEquals\"").unwrap(),
            ConditionOperator::NotEquals
        );
        assert_eq!(
            serde_json::from_str::<ConditionOperator>("\"in\"").unwrap(),
            ConditionOperator::In
        );
        assert_eq!(
            serde_json::to_string(&ConditionOperator::GreaterThan).unwrap(),
            "\"greaterThan\""
        );
    }

    #[test]
    fn test_rule_display() {
        let rule: GstRule = serde_json::from_str(SAMPLE_RULE_JSON).unwrap();
        assert_eq!(
            rule.to_string(),
            "[GST-EXEMPT-001] SEZ Authorized Operations Exemption v1.0.0"
        );
    }

    #[test]
    fn test_domain_display_matches_wire_name() {
        assert_eq!(RuleDomain::PlaceOfSupply.to_string(), "PLACE_OF_SUPPLY");
        assert_eq!(RiskLevel::Medium.to_string(), "MEDIUM");
    }
}
