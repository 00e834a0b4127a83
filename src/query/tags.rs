//! 标签索引：汇总规则集中出现过的全部标签，供过滤选项展示

use std::collections::BTreeSet;

use crate::rule::model::GstRule;

/// 标签索引
pub struct TagIndex;

impl TagIndex {
    /// 去重后的全部标签，字典序升序
    /// 对给定规则集合确定性输出，与规则顺序无关
    pub fn distinct_tags(rules: &[GstRule]) -> Vec<String> {
        let unique: BTreeSet<&str> = rules
            .iter()
            .flat_map(|rule| rule.tags.iter().map(String::as_str))
            .collect();
        unique.into_iter().map(str::to_owned).collect()
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::model::{RiskAssessment, RiskLevel, RuleDomain};

    fn rule_with_tags(id: &str, tags: &[&str]) -> GstRule {
        GstRule {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            version: "v1.0.0".to_string(),
            domain: RuleDomain::Compliance,
            sub_domain: None,
            priority: 5,
            conditions: Vec::new(),
            actions: Vec::new(),
            risk: RiskAssessment {
                level: RiskLevel::Low,
                reason: String::new(),
                confidence: 90,
                impact: "Compliance".to_string(),
            },
            legal_references: Vec::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            examples: Vec::new(),
            notes: None,
            created_date: "2024-01-01".to_string(),
            last_updated: "2024-01-01".to_string(),
            active: true,
        }
    }

    #[test]
    fn test_distinct_tags_sorted_and_deduplicated() {
        // 测试场景：跨规则去重 + 字典序升序
        let rules = vec![
            rule_with_tags("R-1", &["SEZ", "Exemption"]),
            rule_with_tags("R-2", &["DTA", "Exemption", "Compliance"]),
        ];
        assert_eq!(
            TagIndex::distinct_tags(&rules),
            vec!["Compliance", "DTA", "Exemption", "SEZ"]
        );
    }

    #[test]
    fn test_distinct_tags_order_independent() {
        // 测试场景：规则顺序变化不影响输出
        let mut rules = vec![
            rule_with_tags("R-1", &["B", "A"]),
            rule_with_tags("R-2", &["C"]),
        ];
        let forward = TagIndex::distinct_tags(&rules);
        rules.reverse();
        assert_eq!(forward, TagIndex::distinct_tags(&rules));
        assert_eq!(forward, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_distinct_tags_empty() {
        assert!(TagIndex::distinct_tags(&[]).is_empty());
        assert!(TagIndex::distinct_tags(&[rule_with_tags("R-1", &[])]).is_empty());
    }
}
