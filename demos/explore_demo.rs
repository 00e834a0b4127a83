//! Rule exploration demonstration for rsgstrules
//! rsgstrules 规则浏览演示程序
//! 功能说明：
//! 1. 演示内置规则库加载流程（含模拟数据源延迟）
//! 2. 展示汇总统计、领域分组与标签索引输出
//! 3. 典型过滤查询（领域 / 搜索词 / 标签AND）
//!
//! 运行命令：
//! cargo run --example explore_demo

use std::error::Error;
use std::time::{Duration, Instant};

use rsgstrules::{
    ConfigManager, FilterSpec, JsonExporter, RuleDomain, RuleExplorer, StatsAggregator, TagIndex,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // ========== 1. 日志系统初始化 ==========
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    // ========== 2. 查询配置 ==========
    // 演示用缩短模拟延迟（默认300ms）
    let config = ConfigManager::custom()
        .simulate_latency(Duration::from_millis(50))
        .build();

    // ========== 3. 初始化查询门面并全量加载 ==========
    let explorer = RuleExplorer::new(config);

    let start_instant = Instant::now();
    let rules = explorer.fetch_all().await?;
    println!(
        "已加载规则 {} 条，耗时 {:?}",
        rules.len(),
        start_instant.elapsed()
    );
    for rule in &rules {
        println!("  {}", rule);
    }

    // ========== 4. 汇总统计 / 领域分组 / 标签索引 ==========
    let stats = StatsAggregator::summarize(&rules);
    println!("\n{}", JsonExporter::stats_report(&stats));

    for group in StatsAggregator::group_by_domain(&rules) {
        println!("领域 {} 共 {} 条规则", group.domain, group.count);
    }

    println!("全部标签：{:?}", TagIndex::distinct_tags(&rules));

    // ========== 5. 典型过滤查询 ==========
    let exemption = explorer
        .fetch_filtered(&FilterSpec::new().domain(RuleDomain::Exemption))
        .await?;
    println!(
        "\nEXEMPTION 规则：{:?}",
        exemption.iter().map(|r| r.id.as_str()).collect::<Vec<_>>()
    );

    let sez = explorer
        .fetch_filtered(&FilterSpec::new().search("sez").active_only(true))
        .await?;
    println!(
        "搜索 'sez'：{:?}",
        sez.iter().map(|r| r.id.as_str()).collect::<Vec<_>>()
    );

    let tagged = explorer
        .fetch_filtered(&FilterSpec::new().tag("Compliance"))
        .await?;
    println!(
        "标签 Compliance：{:?}",
        tagged.iter().map(|r| r.id.as_str()).collect::<Vec<_>>()
    );

    // ========== 6. 单条检索 ==========
    match explorer.fetch_by_id("GST-TAX-003").await? {
        Some(rule) => println!("检索命中：{}", rule),
        None => println!("检索未命中"),
    }

    Ok(())
}
