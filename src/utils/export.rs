//! 导出工具：规则与统计结果的JSON / 文本报告输出

use crate::error::GstResult;
use crate::query::stats::RuleStats;
use crate::rule::model::{GstRule, RuleDomain};

/// JSON导出工具类
pub struct JsonExporter;

impl JsonExporter {
    /// 规则列表导出为格式化JSON
    pub fn rules_to_json(rules: &[GstRule]) -> GstResult<String> {
        Ok(serde_json::to_string_pretty(rules)?)
    }

    /// 统计结果导出为格式化JSON
    pub fn stats_to_json(stats: &RuleStats) -> GstResult<String> {
        Ok(serde_json::to_string_pretty(stats)?)
    }

    /// 统计结果渲染为文本报告（规则库概览）
    pub fn stats_report(stats: &RuleStats) -> String {
        let mut report = String::new();
        report.push_str(&format!("规则总数：{}\n", stats.total));
        report.push_str(&format!(
            "启用：{}  停用：{}\n",
            stats.by_status.active, stats.by_status.inactive
        ));
        report.push_str("按风险等级：\n");
        report.push_str(&format!("  HIGH: {}\n", stats.by_risk_level.high));
        report.push_str(&format!("  MEDIUM: {}\n", stats.by_risk_level.medium));
        report.push_str(&format!("  LOW: {}\n", stats.by_risk_level.low));
        report.push_str("按领域：\n");
        // 领域按声明顺序输出，仅含出现过的领域
        for domain in RuleDomain::ALL {
            if let Some(count) = stats.by_domain.get(&domain) {
                report.push_str(&format!("  {}: {}\n", domain, count));
            }
        }
        report
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::stats::StatsAggregator;
    use crate::rule::model::{RiskAssessment, RiskLevel};

    fn sample_rule() -> GstRule {
        GstRule {
            id: "GST-EXEMPT-001".to_string(),
            name: "SEZ Authorized Operations Exemption".to_string(),
            description: String::new(),
            version: "v1.0.0".to_string(),
            domain: RuleDomain::Exemption,
            sub_domain: None,
            priority: 1,
            conditions: Vec::new(),
            actions: Vec::new(),
            risk: RiskAssessment {
                level: RiskLevel::Low,
                reason: String::new(),
                confidence: 95,
                impact: "Compliance".to_string(),
            },
            legal_references: Vec::new(),
            tags: vec!["SEZ".to_string()],
            examples: Vec::new(),
            notes: None,
            created_date: "2024-01-15".to_string(),
            last_updated: "2024-03-20".to_string(),
            active: true,
        }
    }

    #[test]
    fn test_rules_to_json_round_trip() {
        let rules = vec![sample_rule()];
        let json = JsonExporter::rules_to_json(&rules).unwrap();
        let parsed: Vec<GstRule> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rules);
    }

    #[test]
    fn test_stats_report_contains_observed_domain_only() {
        let rules = vec![sample_rule()];
        let report = JsonExporter::stats_report(&StatsAggregator::summarize(&rules));
        assert!(report.contains("EXEMPTION: 1"));
        assert!(!report.contains("VALUATION"));
        assert!(report.contains("LOW: 1"));
        // 零值风险档照常输出
        assert!(report.contains("HIGH: 0"));
    }
}
