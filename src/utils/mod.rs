//! 通用工具模块
pub mod export;
pub mod text;

// 导出核心接口
pub use self::export::JsonExporter;
pub use self::text::{contains_ignore_case, safe_lowercase};
