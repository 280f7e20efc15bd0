//! 图算法模块
//!
//! 包含最大流引擎与流量归属索引

mod attribution;
mod max_flow;

pub use attribution::AttributionIndex;
pub use max_flow::{compute, min_cut_source_side, saturated_edges, EdmondsKarp, FlowSummary};
