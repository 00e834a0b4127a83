//! 规则统计聚合：单次线性扫描产出汇总计数
//! by_domain 仅含出现过的领域（不补零）；by_risk_level 恒为三档全量（零值照常输出）

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::rule::model::{GstRule, RiskLevel, RuleDomain, RuleGroup};

/// 风险等级计数（三档恒全量）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct RiskLevelStats {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RiskLevelStats {
    /// 按等级取计数
    pub fn get(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }

    /// 三档合计
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// 启停状态计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusStats {
    pub active: usize,
    pub inactive: usize,
}

/// 规则统计汇总
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleStats {
    pub total: usize,
    /// 仅含出现过的领域
    pub by_domain: FxHashMap<RuleDomain, usize>,
    /// 三档恒全量
    pub by_risk_level: RiskLevelStats,
    pub by_status: StatusStats,
}

/// 统计聚合器
pub struct StatsAggregator;

impl StatsAggregator {
    /// 汇总规则集合（单次线性扫描）
    pub fn summarize(rules: &[GstRule]) -> RuleStats {
        let mut stats = RuleStats {
            total: rules.len(),
            ..RuleStats::default()
        };

        for rule in rules {
            *stats.by_domain.entry(rule.domain).or_insert(0) += 1;
            match rule.risk.level {
                RiskLevel::High => stats.by_risk_level.high += 1,
                RiskLevel::Medium => stats.by_risk_level.medium += 1,
                RiskLevel::Low => stats.by_risk_level.low += 1,
            }
            if rule.active {
                stats.by_status.active += 1;
            } else {
                stats.by_status.inactive += 1;
            }
        }

        stats
    }

    /// 按领域分组
    /// 仅输出出现过的领域，组间按领域声明顺序，组内保持输入顺序
    pub fn group_by_domain(rules: &[GstRule]) -> Vec<RuleGroup> {
        RuleDomain::ALL
            .iter()
            .filter_map(|&domain| {
                let grouped: Vec<GstRule> = rules
                    .iter()
                    .filter(|rule| rule.domain == domain)
                    .cloned()
                    .collect();
                if grouped.is_empty() {
                    None
                } else {
                    Some(RuleGroup {
                        domain,
                        count: grouped.len(),
                        rules: grouped,
                    })
                }
            })
            .collect()
    }
}
