//! 内置物流配送网络
//!
//! 固定拓扑：超级源点 -> 2 个货运终端 -> 4 个仓库 -> 14 个商店
//! -> 超级汇点，作为测试与演示用的标准场景数据。

use crate::error::Result;
use crate::graph::{FlowNetwork, NodeId};
use crate::types::NodeKind;
use std::collections::HashSet;

/// 超级源点标签
pub const SUPER_SOURCE: &str = "SuperSource";
/// 超级汇点标签
pub const SUPER_SINK: &str = "SuperSink";

/// 源点到终端、商店到汇点的边容量（远大于任何内部容量）
const UNLIMITED: i64 = 1_000_000_000;

/// 物流网络的外部视图（源/汇/终端/仓库/商店节点）
#[derive(Debug, Clone)]
pub struct LogisticsNetwork {
    pub source: NodeId,
    pub sink: NodeId,
    pub terminals: Vec<NodeId>,
    pub warehouses: Vec<NodeId>,
    pub shops: Vec<NodeId>,
}

impl LogisticsNetwork {
    /// 终端节点集合（供归属索引使用）
    pub fn terminal_set(&self) -> HashSet<NodeId> {
        self.terminals.iter().copied().collect()
    }

    /// 商店节点集合（供归属索引使用）
    pub fn shop_set(&self) -> HashSet<NodeId> {
        self.shops.iter().copied().collect()
    }
}

/// 构建内置物流网络
pub fn build_logistics_network() -> Result<(FlowNetwork, LogisticsNetwork)> {
    let mut net = FlowNetwork::new();

    let source = net.add_node(SUPER_SOURCE, NodeKind::Source);
    let sink = net.add_node(SUPER_SINK, NodeKind::Sink);

    let terminals: Vec<NodeId> = (1..=2)
        .map(|i| net.add_node(&format!("Terminal {}", i), NodeKind::Terminal))
        .collect();
    let warehouses: Vec<NodeId> = (1..=4)
        .map(|i| net.add_node(&format!("Warehouse {}", i), NodeKind::Warehouse))
        .collect();
    let shops: Vec<NodeId> = (1..=14)
        .map(|i| net.add_node(&format!("Shop {}", i), NodeKind::Shop))
        .collect();

    // 源点 -> 终端
    for &t in &terminals {
        net.add_edge(source, t, UNLIMITED)?;
    }
    // 商店 -> 汇点
    for &s in &shops {
        net.add_edge(s, sink, UNLIMITED)?;
    }

    // 终端 -> 仓库
    net.add_edge(terminals[0], warehouses[0], 25)?;
    net.add_edge(terminals[0], warehouses[1], 20)?;
    net.add_edge(terminals[0], warehouses[2], 15)?;

    net.add_edge(terminals[1], warehouses[2], 15)?;
    net.add_edge(terminals[1], warehouses[3], 30)?;
    net.add_edge(terminals[1], warehouses[1], 10)?;

    // 仓库 -> 商店
    net.add_edge(warehouses[0], shops[0], 15)?;
    net.add_edge(warehouses[0], shops[1], 10)?;
    net.add_edge(warehouses[0], shops[2], 20)?;

    net.add_edge(warehouses[1], shops[3], 15)?;
    net.add_edge(warehouses[1], shops[4], 10)?;
    net.add_edge(warehouses[1], shops[5], 25)?;

    net.add_edge(warehouses[2], shops[6], 20)?;
    net.add_edge(warehouses[2], shops[7], 15)?;
    net.add_edge(warehouses[2], shops[8], 10)?;

    net.add_edge(warehouses[3], shops[9], 20)?;
    net.add_edge(warehouses[3], shops[10], 10)?;
    net.add_edge(warehouses[3], shops[11], 15)?;
    net.add_edge(warehouses[3], shops[12], 5)?;
    net.add_edge(warehouses[3], shops[13], 10)?;

    let topology = LogisticsNetwork {
        source,
        sink,
        terminals,
        warehouses,
        shops,
    };
    Ok((net, topology))
}
