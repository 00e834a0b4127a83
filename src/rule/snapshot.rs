//! 规则快照：一次批量加载、校验通过后不可变的规则集合
//! 刷新时整体替换，绝不逐条修改

use rustc_hash::FxHashSet;
use tracing::debug;

use super::model::GstRule;
use crate::error::{GstResult, RsGstRulesError};

/// 规则快照
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSnapshot {
    rules: Vec<GstRule>,
}

impl RuleSnapshot {
    /// 从规则列表构建快照（批量校验，任一规则非法即整体失败，无部分结果）
    pub fn from_rules(rules: Vec<GstRule>) -> GstResult<Self> {
        let mut seen_ids = FxHashSet::default();
        for rule in &rules {
            if rule.id.trim().is_empty() {
                return Err(RsGstRulesError::RuleValidateError(
                    "存在空规则ID".to_string(),
                ));
            }
            if !seen_ids.insert(rule.id.as_str()) {
                return Err(RsGstRulesError::RuleValidateError(format!(
                    "规则ID重复：{}",
                    rule.id
                )));
            }
            if rule.risk.confidence > 100 {
                return Err(RsGstRulesError::RuleValidateError(format!(
                    "规则[{}]置信度超出范围：{}（合法区间 0-100）",
                    rule.id, rule.risk.confidence
                )));
            }
        }
        debug!("规则快照构建完成，规则总数：{}", rules.len());
        Ok(Self { rules })
    }

    /// 规则列表只读视图
    pub fn rules(&self) -> &[GstRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 按ID查找（未命中返回None，不视为错误）
    pub fn get(&self, id: &str) -> Option<&GstRule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    /// 拆出规则列表（所有权转移）
    pub fn into_rules(self) -> Vec<GstRule> {
        self.rules
    }
}
