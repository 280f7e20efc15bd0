//! 容量网络数据结构
//!
//! 持有有向边与整数容量，并维护残量图遍历所需的反向边登记。
//! 网络构建完成后只增不删；一次最大流运行期间，算法引擎是
//! 残量状态的唯一修改者。

use super::node::{Node, NodeId};
use crate::error::{Error, Result};
use crate::metrics::metrics;
use crate::types::{Capacity, NodeKind};
use indexmap::IndexMap;
use std::collections::HashMap;

/// 容量网络（图存储）
#[derive(Debug, Clone, Default)]
pub struct FlowNetwork {
    /// 节点表（NodeId 即下标）
    nodes: Vec<Node>,
    /// 标签 -> 节点 ID（保持插入顺序）
    labels: IndexMap<String, NodeId>,
    /// 邻接表（双向登记，供残量图正反向遍历）
    adjacency: Vec<Vec<NodeId>>,
    /// 原始累计容量（同一 (u, v) 重复添加时求和）
    base: IndexMap<(NodeId, NodeId), Capacity>,
    /// 残量容量
    residual: HashMap<(NodeId, NodeId), Capacity>,
}

impl FlowNetwork {
    /// 创建空网络
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== 节点操作 ====================

    /// 添加节点，返回节点 ID
    ///
    /// 同一标签重复添加时返回已有节点（首次指定的类别保留）。
    pub fn add_node(&mut self, label: &str, kind: NodeKind) -> NodeId {
        if let Some(&id) = self.labels.get(label) {
            return id;
        }

        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(Node::new(id, label.to_string(), kind));
        self.labels.insert(label.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// 通过标签查找节点 ID
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.labels.get(label).copied()
    }

    /// 通过标签查找节点 ID，不存在时返回 NodeNotFound
    pub fn require_node(&self, label: &str) -> Result<NodeId> {
        self.node_id(label)
            .ok_or_else(|| Error::NodeNotFound(label.to_string()))
    }

    /// 获取节点
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// 获取节点标签
    ///
    /// NodeId 只能由本网络的 add_node 产生，下标必然有效。
    pub fn label(&self, id: NodeId) -> &str {
        self.nodes[id.index()].label()
    }

    /// 所有节点
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// 节点数量
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ==================== 边操作 ====================

    /// 添加有向边
    ///
    /// 负容量返回 InvalidCapacity，校验失败前不做任何修改。
    /// 同一 (u, v) 重复添加时容量累加；同时确保反向残量项存在
    /// （默认 0），使残量查询永不失败。
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, capacity: i64) -> Result<()> {
        if capacity < 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        let capacity = capacity as Capacity;

        self.register_adjacent(u, v);
        self.register_adjacent(v, u);

        *self.base.entry((u, v)).or_insert(0) += capacity;
        *self.residual.entry((u, v)).or_insert(0) += capacity;
        self.residual.entry((v, u)).or_insert(0);

        metrics().record_edge_added();
        Ok(())
    }

    /// 按标签添加有向边（节点不存在时自动创建为 Generic）
    pub fn link(&mut self, u: &str, v: &str, capacity: i64) -> Result<()> {
        // 先校验再登记节点，保证失败时无部分修改
        if capacity < 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        let u = self.add_node(u, NodeKind::Generic);
        let v = self.add_node(v, NodeKind::Generic);
        self.add_edge(u, v, capacity)
    }

    fn register_adjacent(&mut self, u: NodeId, v: NodeId) {
        let list = &mut self.adjacency[u.index()];
        if !list.contains(&v) {
            list.push(v);
        }
    }

    /// 获取节点的邻接表（含反向登记，按插入顺序）
    pub fn neighbors(&self, u: NodeId) -> &[NodeId] {
        &self.adjacency[u.index()]
    }

    /// 原始边数量（按有向 (u, v) 对计）
    pub fn edge_count(&self) -> usize {
        self.base.len()
    }

    /// 所有原始边及其累计容量（按添加顺序）
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Capacity)> + '_ {
        self.base.iter().map(|(&(u, v), &cap)| (u, v, cap))
    }

    // ==================== 残量状态 ====================

    /// 查询残量容量（不存在的对视为 0）
    pub fn residual(&self, u: NodeId, v: NodeId) -> Capacity {
        self.residual.get(&(u, v)).copied().unwrap_or(0)
    }

    /// 查询原始累计容量
    pub fn base_capacity(&self, u: NodeId, v: NodeId) -> Capacity {
        self.base.get(&(u, v)).copied().unwrap_or(0)
    }

    /// 原始边 (u, v) 上已推送的净流量
    pub fn flow(&self, u: NodeId, v: NodeId) -> Capacity {
        self.base_capacity(u, v).saturating_sub(self.residual(u, v))
    }

    /// 将残量状态重置为原始容量
    ///
    /// 每次最大流运行前调用，保证重复运行结果一致。
    pub fn reset_residual(&mut self) {
        self.residual.clear();
        let edges: Vec<(NodeId, NodeId, Capacity)> = self.edges().collect();
        for (u, v, cap) in edges {
            *self.residual.entry((u, v)).or_insert(0) += cap;
            self.residual.entry((v, u)).or_insert(0);
        }
    }

    /// 沿边 (u, v) 推送流量：扣减正向残量，镜像增加反向残量
    ///
    /// 仅供算法引擎在一次运行期间调用；调用方保证 amount 不超过
    /// 当前残量，因此 residual[u][v] + residual[v][u] 在运行期间不变。
    pub fn push_flow(&mut self, u: NodeId, v: NodeId, amount: Capacity) {
        if let Some(r) = self.residual.get_mut(&(u, v)) {
            debug_assert!(*r >= amount);
            *r -= amount;
        }
        *self.residual.entry((v, u)).or_insert(0) += amount;
    }
}
