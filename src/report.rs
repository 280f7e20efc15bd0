//! 流量报告
//!
//! 在引擎输出（总流量、归属映射、日志）之上聚合展示层所需的
//! 统计数据：终端/商店汇总、最繁忙终端、供货最少的商店、
//! 已饱和的瓶颈边。

use crate::algorithm::{saturated_edges, FlowSummary};
use crate::graph::FlowNetwork;
use crate::logistics::LogisticsNetwork;
use crate::types::Capacity;
use serde::{Deserialize, Serialize};

/// 单条归属记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributionRow {
    pub terminal: String,
    pub shop: String,
    pub flow: Capacity,
}

/// 已饱和的边
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaturatedEdge {
    pub from: String,
    pub to: String,
    pub capacity: Capacity,
}

/// 流量分析报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowReport {
    /// 最大流量值
    pub total_flow: Capacity,
    /// 终端 -> 商店 归属表（仅流量 > 0 的对，按终端、商店顺序）
    pub rows: Vec<AttributionRow>,
    /// 各终端的流量合计
    pub terminal_totals: Vec<(String, Capacity)>,
    /// 各商店的流量合计（含 0）
    pub shop_totals: Vec<(String, Capacity)>,
    /// 流量最大的终端（并列时取靠前者）
    pub busiest_terminal: Option<String>,
    /// 供货最少的商店（可能并列多个）
    pub least_supplied_shops: Vec<String>,
    /// 最少供货量
    pub min_shop_flow: Capacity,
    /// 已饱和的瓶颈边（不含源/汇两端的虚拟边）
    pub saturated_edges: Vec<SaturatedEdge>,
    /// 增广路径日志
    pub log: Vec<String>,
}

impl FlowReport {
    /// 从一次运行的结果构建报告
    pub fn build(
        summary: &FlowSummary,
        network: &FlowNetwork,
        topology: &LogisticsNetwork,
    ) -> Self {
        let mut rows = Vec::new();
        let mut terminal_totals = Vec::new();
        let mut shop_totals = Vec::new();

        for &terminal in &topology.terminals {
            let mut total: Capacity = 0;
            for &shop in &topology.shops {
                if let Some(&flow) = summary.attribution.get(&(terminal, shop)) {
                    total += flow;
                    if flow > 0 {
                        rows.push(AttributionRow {
                            terminal: network.label(terminal).to_string(),
                            shop: network.label(shop).to_string(),
                            flow,
                        });
                    }
                }
            }
            terminal_totals.push((network.label(terminal).to_string(), total));
        }

        for &shop in &topology.shops {
            let total: Capacity = topology
                .terminals
                .iter()
                .filter_map(|&t| summary.attribution.get(&(t, shop)))
                .sum();
            shop_totals.push((network.label(shop).to_string(), total));
        }

        // max_by_key 在并列时取最后一个，反向迭代使并列时取靠前的终端
        let busiest_terminal = terminal_totals
            .iter()
            .rev()
            .max_by_key(|(_, total)| *total)
            .map(|(label, _)| label.clone());

        let min_shop_flow = shop_totals
            .iter()
            .map(|(_, total)| *total)
            .min()
            .unwrap_or(0);
        let least_supplied_shops = shop_totals
            .iter()
            .filter(|(_, total)| *total == min_shop_flow)
            .map(|(label, _)| label.clone())
            .collect();

        let saturated = saturated_edges(network)
            .into_iter()
            .filter(|&(u, v, _)| u != topology.source && v != topology.sink)
            .map(|(u, v, capacity)| SaturatedEdge {
                from: network.label(u).to_string(),
                to: network.label(v).to_string(),
                capacity,
            })
            .collect();

        Self {
            total_flow: summary.total_flow,
            rows,
            terminal_totals,
            shop_totals,
            busiest_terminal,
            least_supplied_shops,
            min_shop_flow,
            saturated_edges: saturated,
            log: summary.log.clone(),
        }
    }
}
