//! 查询门面模块
pub mod explorer;

// 导出核心接口
pub use self::explorer::{RuleExplorer, TaggedRules};
