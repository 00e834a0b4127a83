//! 查询门面核心：整合数据源加载与过滤/检索，输出查询结果
//! 快照不可变，各次调用相互独立且幂等；不提供进程级单例，门面由调用方持有

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::config::QueryConfig;
use crate::error::GstResult;
use crate::query::filter::{FilterEngine, FilterSpec};
use crate::rule::loader::RuleLoader;
use crate::rule::model::GstRule;
#[cfg(feature = "embedded-rules")]
use crate::rule::source::EmbeddedRuleSource;
use crate::rule::source::RuleSource;

/// 带请求序号的查询结果（供展示层丢弃过期响应）
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedRules {
    /// 请求序号，单调递增
    pub epoch: u64,
    pub rules: Vec<GstRule>,
}

/// 规则查询门面
#[derive(Clone)]
pub struct RuleExplorer {
    source: Arc<dyn RuleSource>,
    config: QueryConfig,
    // 请求序号发生器：交错请求场景用于识别最新一次
    epoch: Arc<AtomicU64>,
}

impl RuleExplorer {
    /// 创建查询门面（内置规则源，仅 embedded-rules 特性开启时可用）
    #[cfg(feature = "embedded-rules")]
    pub fn new(config: QueryConfig) -> Self {
        let source = EmbeddedRuleSource::new(config.simulate_latency);
        Self::with_source(Arc::new(source), config)
    }

    /// 创建查询门面（自定义规则源）
    pub fn with_source(source: Arc<dyn RuleSource>, config: QueryConfig) -> Self {
        Self {
            source,
            config,
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// 拉取全部规则
    /// 加载失败原样上抛；本层不重试，刷新策略由调用方决定
    pub async fn fetch_all(&self) -> GstResult<Vec<GstRule>> {
        let snapshot = RuleLoader::load(self.source.as_ref(), &self.config).await?;
        Ok(snapshot.into_rules())
    }

    /// 拉取过滤后的规则（出错时不产出部分结果）
    pub async fn fetch_filtered(&self, spec: &FilterSpec) -> GstResult<Vec<GstRule>> {
        let all = self.fetch_all().await?;
        let filtered = FilterEngine::apply(&all, spec);
        debug!("过滤完成：{} -> {} 条规则", all.len(), filtered.len());
        Ok(filtered)
    }

    /// 按ID检索单条规则（未命中返回None，不视为错误）
    pub async fn fetch_by_id(&self, id: &str) -> GstResult<Option<GstRule>> {
        let all = self.fetch_all().await?;
        Ok(all.into_iter().find(|rule| rule.id == id))
    }

    /// 拉取过滤结果并附带请求序号
    /// 序号在请求发出时分配；响应返回后用 is_stale 判断期间是否已有更新请求
    pub async fn fetch_filtered_tagged(&self, spec: &FilterSpec) -> GstResult<TaggedRules> {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let rules = self.fetch_filtered(spec).await?;
        Ok(TaggedRules { epoch, rules })
    }

    /// 响应是否已过期（其后已发出更新的请求）
    pub fn is_stale(&self, epoch: u64) -> bool {
        epoch < self.epoch.load(Ordering::SeqCst)
    }

    /// 最近一次发出的请求序号
    pub fn latest_epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }
}
