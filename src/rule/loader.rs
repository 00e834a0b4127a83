//! 规则加载管理器
//! 负责从数据源拉取全量规则并构建校验后的快照

use tracing::{debug, warn};

use super::snapshot::RuleSnapshot;
use super::source::RuleSource;
use crate::config::QueryConfig;
use crate::error::{GstResult, RsGstRulesError};

/// 规则加载管理器
pub struct RuleLoader;

impl RuleLoader {
    /// 加载规则快照
    /// 流程：拉取全量规则（可选超时控制）→ 批量校验 → 产出不可变快照
    /// 超时与加载失败为两类错误；本层不做重试，刷新策略由调用方决定
    pub async fn load(source: &dyn RuleSource, config: &QueryConfig) -> GstResult<RuleSnapshot> {
        // 1. 拉取全量规则
        let rules = match config.timeout {
            Some(deadline) => match tokio::time::timeout(deadline, source.list_all()).await {
                Ok(result) => result?,
                Err(_) => {
                    warn!("规则源 [{}] 加载超时：{:?}", source.name(), deadline);
                    return Err(RsGstRulesError::TimeoutError(deadline));
                }
            },
            None => source.list_all().await?,
        };
        debug!(
            "规则源 [{}] 拉取成功，规则总数：{}",
            source.name(),
            rules.len()
        );

        // 2. 构建校验后的快照（整体成功或整体失败）
        RuleSnapshot::from_rules(rules)
    }
}
