//! 查询模块：过滤、统计与标签索引（均为纯函数，不持有状态）
pub mod filter;
pub mod stats;
pub mod tags;

// 导出核心接口
pub use self::filter::{DomainSelector, FilterEngine, FilterSpec, RiskSelector};
pub use self::stats::{RiskLevelStats, RuleStats, StatsAggregator, StatusStats};
pub use self::tags::TagIndex;
