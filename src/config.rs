//! 全局查询配置管理,存储所有可配置项

use std::time::Duration;

/// 查询配置
#[derive(Debug, Clone)]
pub struct QueryConfig {
    // 模拟数据源延迟（对接真实后端时配置为零）
    pub simulate_latency: Duration,
    // 加载超时（None 表示不限时）
    pub timeout: Option<Duration>,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            simulate_latency: Duration::from_millis(300),
            timeout: None,
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> QueryConfig {
        QueryConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: QueryConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: QueryConfig::default(),
        }
    }

    pub fn simulate_latency(mut self, latency: Duration) -> Self {
        self.config.simulate_latency = latency;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> QueryConfig {
        self.config
    }
}
