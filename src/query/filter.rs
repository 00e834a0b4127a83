//! 规则过滤引擎：多谓词AND语义的纯函数过滤
//! 缺省字段不构成约束；输出保持输入顺序（稳定过滤，不重排序）

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::rule::model::{GstRule, RiskLevel, RuleDomain};
use crate::utils::text::contains_ignore_case;

/// 领域筛选值
/// 未识别的字符串不报错，按"不匹配任何规则"处理，保证过滤对全部输入可定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DomainSelector {
    Known(RuleDomain),
    Unknown(String),
}

impl DomainSelector {
    /// 是否命中指定领域
    pub fn matches(&self, domain: RuleDomain) -> bool {
        match self {
            DomainSelector::Known(wanted) => *wanted == domain,
            DomainSelector::Unknown(_) => false,
        }
    }
}

impl From<RuleDomain> for DomainSelector {
    fn from(domain: RuleDomain) -> Self {
        DomainSelector::Known(domain)
    }
}

/// 风险等级筛选值（语义同 DomainSelector）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RiskSelector {
    Known(RiskLevel),
    Unknown(String),
}

impl RiskSelector {
    /// 是否命中指定风险等级
    pub fn matches(&self, level: RiskLevel) -> bool {
        match self {
            RiskSelector::Known(wanted) => *wanted == level,
            RiskSelector::Unknown(_) => false,
        }
    }
}

impl From<RiskLevel> for RiskSelector {
    fn from(level: RiskLevel) -> Self {
        RiskSelector::Known(level)
    }
}

/// 过滤条件集合（全部字段可缺省，缺省即放行）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSpec {
    /// 搜索词：忽略大小写子串匹配 id/name/description/任一标签
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<DomainSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskSelector>,
    /// 标签AND语义：所列标签须全部出现在规则上
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// true 时仅保留启用规则；false 时启停均放行
    pub active_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl FilterSpec {
    /// 空条件（放行全部规则）
    pub fn new() -> Self {
        Self::default()
    }

    // ===== 链式构造（便于调用方拼装条件） =====
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn domain(mut self, domain: RuleDomain) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn risk_level(mut self, level: RiskLevel) -> Self {
        self.risk_level = Some(level.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn active_only(mut self, active_only: bool) -> Self {
        self.active_only = active_only;
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// 是否为空条件
    pub fn is_empty(&self) -> bool {
        self.search_term.is_none()
            && self.domain.is_none()
            && self.risk_level.is_none()
            && self.tags.is_empty()
            && !self.active_only
            && self.version.is_none()
    }
}

/// 规则过滤引擎
pub struct FilterEngine;

impl FilterEngine {
    /// 应用过滤条件
    /// 稳定过滤：保持输入顺序，返回值拷贝，不修改输入；空条件返回全量拷贝
    pub fn apply(rules: &[GstRule], spec: &FilterSpec) -> Vec<GstRule> {
        // 标签先去重为集合（条件内重复标签不改变AND语义）
        let wanted_tags: FxHashSet<&str> = spec.tags.iter().map(String::as_str).collect();
        // 搜索词仅降一次小写；空串不构成约束
        let search_lower = spec
            .search_term
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);

        rules
            .iter()
            .filter(|rule| Self::matches(rule, spec, search_lower.as_deref(), &wanted_tags))
            .cloned()
            .collect()
    }

    /// 单规则匹配判定（全部已配置谓词AND）
    fn matches(
        rule: &GstRule,
        spec: &FilterSpec,
        search_lower: Option<&str>,
        wanted_tags: &FxHashSet<&str>,
    ) -> bool {
        // 1. 搜索词
        if let Some(term) = search_lower {
            let hit = contains_ignore_case(&rule.id, term)
                || contains_ignore_case(&rule.name, term)
                || contains_ignore_case(&rule.description, term)
                || rule.tags.iter().any(|tag| contains_ignore_case(tag, term));
            if !hit {
                return false;
            }
        }

        // 2. 领域精确匹配
        if let Some(selector) = &spec.domain {
            if !selector.matches(rule.domain) {
                return false;
            }
        }

        // 3. 风险等级精确匹配
        if let Some(selector) = &spec.risk_level {
            if !selector.matches(rule.risk.level) {
                return false;
            }
        }

        // 4. 标签AND语义（标签本身精确匹配，区分大小写）
        if !wanted_tags.is_empty()
            && !wanted_tags
                .iter()
                .all(|wanted| rule.tags.iter().any(|tag| tag == wanted))
        {
            return false;
        }

        // 5. 仅启用规则
        if spec.active_only && !rule.active {
            return false;
        }

        // 6. 版本精确匹配
        if let Some(version) = &spec.version {
            if version != &rule.version {
                return false;
            }
        }

        true
    }
}
