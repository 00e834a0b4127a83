//! 全局错误类型定义
use std::time::Duration;

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RsGstRulesError {
    // 规则相关错误
    #[error("规则加载失败：{0}")]
    RuleLoadError(String),
    #[error("规则校验失败：{0}")]
    RuleValidateError(String),

    // 超时错误（与加载失败区分，上层可分别处理）
    #[error("规则加载超时：超过 {0:?}")]
    TimeoutError(Duration),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type GstResult<T> = Result<T, RsGstRulesError>;
