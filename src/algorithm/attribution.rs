//! 流量归属索引
//!
//! 按 (终端, 商店) 对累计每条增广路径携带的流量

use crate::graph::NodeId;
use crate::types::Capacity;
use indexmap::IndexMap;
use std::collections::HashSet;

/// 归属索引器
///
/// 对每条被接受的路径，按顺序扫描节点，取第一个属于终端集合
/// 和第一个属于商店集合的节点；两者都存在时记入该对，否则
/// 静默跳过（预期的分层拓扑 源->终端->仓库->商店->汇 保证每条
/// 路径恰好经过一个终端和一个商店）。
#[derive(Debug, Clone)]
pub struct AttributionIndex {
    terminals: HashSet<NodeId>,
    shops: HashSet<NodeId>,
    /// (终端, 商店) -> 累计流量（保持首次记录顺序）
    flows: IndexMap<(NodeId, NodeId), Capacity>,
}

impl AttributionIndex {
    /// 创建索引器
    pub fn new(terminals: HashSet<NodeId>, shops: HashSet<NodeId>) -> Self {
        Self {
            terminals,
            shops,
            flows: IndexMap::new(),
        }
    }

    /// 记录一条路径及其瓶颈流量
    pub fn record(&mut self, path: &[NodeId], flow: Capacity) {
        let terminal = path.iter().find(|n| self.terminals.contains(n));
        let shop = path.iter().find(|n| self.shops.contains(n));

        if let (Some(&t), Some(&s)) = (terminal, shop) {
            *self.flows.entry((t, s)).or_insert(0) += flow;
        }
    }

    /// 当前归属映射
    pub fn flows(&self) -> &IndexMap<(NodeId, NodeId), Capacity> {
        &self.flows
    }

    /// 取出归属映射
    pub fn into_flows(self) -> IndexMap<(NodeId, NodeId), Capacity> {
        self.flows
    }
}
