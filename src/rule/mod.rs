//! 规则模块：负责规则的数据模型、数据源、加载与快照
pub mod model;
pub mod snapshot;
pub mod source;
pub mod loader;
#[cfg(feature = "embedded-rules")]
pub mod embedded;

// 导出核心接口
pub use self::model::{
    Condition, ConditionOperator, ConditionValue, GstRule, LegalReference, RiskAssessment,
    RiskLevel, RuleDomain, RuleGroup,
};
pub use self::snapshot::RuleSnapshot;
#[cfg(feature = "embedded-rules")]
pub use self::source::EmbeddedRuleSource;
pub use self::source::{InMemoryRuleSource, JsonRuleSource, RuleSource};
pub use self::loader::RuleLoader;
