//! Interleaved filtering demonstration for rsgstrules
//! rsgstrules 交错过滤请求演示程序
//! 功能说明：
//! 1. 演示带请求序号的过滤查询（fetch_filtered_tagged）
//! 2. 展示过期响应识别（is_stale）——后发请求使先发请求的响应作废
//! 3. 过滤结果导出为格式化JSON
//!
//! 运行命令：
//! cargo run --example filter_demo

use std::error::Error;
use std::time::Duration;

use rsgstrules::{ConfigManager, FilterSpec, JsonExporter, RuleExplorer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // ========== 1. 日志系统初始化 ==========
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ConfigManager::custom()
        .simulate_latency(Duration::from_millis(50))
        .timeout(Duration::from_secs(5))
        .build();
    let explorer = RuleExplorer::new(config);

    // ========== 2. 交错请求：用户先搜索再快速改词 ==========
    let first = explorer
        .fetch_filtered_tagged(&FilterSpec::new().search("supply"))
        .await?;
    let second = explorer
        .fetch_filtered_tagged(&FilterSpec::new().search("sez"))
        .await?;

    // 先发请求的响应此时已过期，展示层应丢弃
    println!(
        "请求#{} 过期={}，请求#{} 过期={}",
        first.epoch,
        explorer.is_stale(first.epoch),
        second.epoch,
        explorer.is_stale(second.epoch)
    );

    // ========== 3. 最新结果导出JSON ==========
    println!("{}", JsonExporter::rules_to_json(&second.rules)?);

    Ok(())
}
