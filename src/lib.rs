//! rsgstrules - GST合规决策规则查询引擎
//! 规则浏览、过滤、统计核心库：加载不可变规则快照，提供多谓词过滤、
//! 汇总统计、标签索引与异步查询门面

pub mod config;
pub mod error;
pub mod explorer;
pub mod query;
pub mod rule;
pub mod utils;

// 导出全局错误类型
pub use self::error::{GstResult, RsGstRulesError};

// 导出配置模块核心结构体与构建器
pub use crate::config::{ConfigManager, CustomConfigBuilder, QueryConfig};

// 导出规则模块核心数据结构与加载接口
pub use crate::rule::model::{
    Condition, ConditionOperator, ConditionValue, GstRule, LegalReference, RiskAssessment,
    RiskLevel, RuleDomain, RuleGroup,
};
#[cfg(feature = "embedded-rules")]
pub use crate::rule::source::EmbeddedRuleSource;
pub use crate::rule::source::{InMemoryRuleSource, JsonRuleSource, RuleSource};
pub use crate::rule::{RuleLoader, RuleSnapshot};

// 导出查询模块核心接口
pub use crate::query::filter::{DomainSelector, FilterEngine, FilterSpec, RiskSelector};
pub use crate::query::stats::{RiskLevelStats, RuleStats, StatsAggregator, StatusStats};
pub use crate::query::tags::TagIndex;

// 导出查询门面
pub use crate::explorer::{RuleExplorer, TaggedRules};

// 导出通用工具模块核心能力
pub use crate::utils::JsonExporter;
