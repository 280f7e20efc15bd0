//! LogiFlow - 物流配送网络最大流分析引擎
//!
//! 针对 源点 -> 终端 -> 仓库 -> 商店 -> 汇点 的分层配送网络，支持：
//! - Edmonds-Karp 最大流计算（BFS 最短增广路径，整数精确）
//! - 按 (终端, 商店) 对归属流量
//! - 逐步记录增广路径日志，供诊断与展示
//! - 表格化报告与瓶颈分析

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod logistics;
pub mod metrics;
pub mod report;
pub mod types;

// 重导出常用类型
pub use algorithm::{compute, min_cut_source_side, saturated_edges, EdmondsKarp, FlowSummary};
pub use error::{Error, Result};
pub use graph::{FlowNetwork, Node, NodeId};
pub use logistics::{build_logistics_network, LogisticsNetwork};
pub use report::FlowReport;
pub use types::{Capacity, NodeKind};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
