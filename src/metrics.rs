//! 性能指标收集模块
//!
//! 提供运行时指标的收集和导出功能

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// 系统全局指标
#[derive(Debug)]
pub struct Metrics {
    /// 添加的边数
    edges_added: AtomicU64,
    /// 完成的最大流运行次数
    runs_completed: AtomicU64,
    /// 找到的增广路径总数
    augmenting_paths: AtomicU64,
    /// 推送的流量总和
    flow_pushed: AtomicU64,
    /// 启动时间
    start_time: Instant,
}

/// 可导出的指标快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub edges_added: u64,
    pub runs_completed: u64,
    pub augmenting_paths: u64,
    pub flow_pushed: u64,
    pub uptime_seconds: u64,
}

impl Metrics {
    fn new() -> Self {
        Self {
            edges_added: AtomicU64::new(0),
            runs_completed: AtomicU64::new(0),
            augmenting_paths: AtomicU64::new(0),
            flow_pushed: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// 记录一次边添加
    pub fn record_edge_added(&self) {
        self.edges_added.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录一次完成的最大流运行
    pub fn record_run(&self, total_flow: u64, paths: u64) {
        self.runs_completed.fetch_add(1, Ordering::Relaxed);
        self.augmenting_paths.fetch_add(paths, Ordering::Relaxed);
        self.flow_pushed.fetch_add(total_flow, Ordering::Relaxed);
    }

    /// 导出当前快照
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            edges_added: self.edges_added.load(Ordering::Relaxed),
            runs_completed: self.runs_completed.load(Ordering::Relaxed),
            augmenting_paths: self.augmenting_paths.load(Ordering::Relaxed),
            flow_pushed: self.flow_pushed.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

static METRICS: Lazy<Metrics> = Lazy::new(Metrics::new);

/// 获取全局指标收集器
pub fn metrics() -> &'static Metrics {
    &METRICS
}
