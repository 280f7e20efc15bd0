//! 最大流算法
//!
//! 实现 Edmonds-Karp 算法（基于 BFS 的 Ford-Fulkerson），
//! 用于分析物流配送网络的最大通量，并记录每一步增广路径。

use super::attribution::AttributionIndex;
use crate::graph::{FlowNetwork, NodeId};
use crate::metrics::metrics;
use crate::types::Capacity;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::{debug, info};

/// 最大流结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowSummary {
    /// 最大流量值
    pub total_flow: Capacity,
    /// 流量归属（(终端, 商店) -> 累计流量）
    pub attribution: IndexMap<(NodeId, NodeId), Capacity>,
    /// 每次增广的日志条目（按时间顺序）
    pub log: Vec<String>,
}

/// Edmonds-Karp 最大流引擎
///
/// 运行期间引擎是网络残量状态的唯一修改者；每次运行前残量
/// 会重置为原始容量，保证重复运行结果一致。
pub struct EdmondsKarp<'a> {
    network: &'a mut FlowNetwork,
}

impl<'a> EdmondsKarp<'a> {
    /// 创建引擎实例
    pub fn new(network: &'a mut FlowNetwork) -> Self {
        Self { network }
    }

    /// 计算从 source 到 sink 的最大流
    ///
    /// 循环调用 BFS 寻路器：瓶颈为 0 时终止（不存在增广路径，
    /// 由最大流-最小割定理，当前总流量即为最大流）；否则沿路径
    /// 更新残量、累计总流量、记录日志并交给归属索引器。
    ///
    /// 每次迭代严格增加整数总流量，总流量受最小割上界约束，
    /// 因此循环必然在有限步内终止。
    pub fn run(
        &mut self,
        source: NodeId,
        sink: NodeId,
        terminals: &HashSet<NodeId>,
        shops: &HashSet<NodeId>,
    ) -> FlowSummary {
        self.network.reset_residual();

        let mut index = AttributionIndex::new(terminals.clone(), shops.clone());
        let mut total_flow: Capacity = 0;
        let mut log = Vec::new();

        loop {
            let (bottleneck, parent) = self.bfs_augmenting_path(source, sink);
            if bottleneck == 0 {
                break;
            }

            let path = self.reconstruct_path(source, sink, &parent);
            for pair in path.windows(2) {
                self.network.push_flow(pair[0], pair[1], bottleneck);
            }
            total_flow += bottleneck;

            index.record(&path, bottleneck);

            let rendered: Vec<&str> = path.iter().map(|&n| self.network.label(n)).collect();
            let entry = format!("Path: {}, add flow = {}", rendered.join(" -> "), bottleneck);
            debug!(bottleneck, "{}", entry);
            log.push(entry);
        }

        info!(total_flow, iterations = log.len(), "最大流计算完成");
        metrics().record_run(total_flow, log.len() as u64);

        FlowSummary {
            total_flow,
            attribution: index.into_flows(),
            log,
        }
    }

    /// BFS 寻找最短增广路径
    ///
    /// 只沿残量 > 0 且终点未访问的边前进；到达 sink 立即返回。
    /// 队列元素携带路径当前瓶颈，源点以 None 表示“尚无约束”
    /// （显式无界标记，不用浮点无穷大）。返回瓶颈为 0 表示
    /// sink 不可达。等长路径按邻接表插入顺序决出，结果确定。
    fn bfs_augmenting_path(
        &self,
        source: NodeId,
        sink: NodeId,
    ) -> (Capacity, HashMap<NodeId, NodeId>) {
        let mut parent: HashMap<NodeId, NodeId> = HashMap::new();
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut queue: VecDeque<(NodeId, Option<Capacity>)> = VecDeque::new();

        visited.insert(source);
        queue.push_back((source, None));

        while let Some((u, bound)) = queue.pop_front() {
            for &v in self.network.neighbors(u) {
                if visited.contains(&v) {
                    continue;
                }
                let residual = self.network.residual(u, v);
                if residual == 0 {
                    continue;
                }

                visited.insert(v);
                parent.insert(v, u);

                let bottleneck = match bound {
                    None => residual,
                    Some(b) => b.min(residual),
                };
                if v == sink {
                    return (bottleneck, parent);
                }
                queue.push_back((v, Some(bottleneck)));
            }
        }

        (0, parent)
    }

    /// 沿父指针从 sink 回溯到 source 并反转
    fn reconstruct_path(
        &self,
        source: NodeId,
        sink: NodeId,
        parent: &HashMap<NodeId, NodeId>,
    ) -> Vec<NodeId> {
        let mut path = vec![sink];
        let mut current = sink;
        while current != source {
            match parent.get(&current) {
                Some(&prev) => {
                    path.push(prev);
                    current = prev;
                }
                // 瓶颈 > 0 时 sink 必有完整父指针链
                None => break,
            }
        }
        path.reverse();
        path
    }
}

/// 计算最大流（便捷入口）
pub fn compute(
    network: &mut FlowNetwork,
    source: NodeId,
    sink: NodeId,
    terminals: &HashSet<NodeId>,
    shops: &HashSet<NodeId>,
) -> FlowSummary {
    EdmondsKarp::new(network).run(source, sink, terminals, shops)
}

/// 最小割的源侧节点集
///
/// 在一次运行结束后的残量图上从 source 做 BFS，可达节点即
/// 源侧；跨越该割的原始边容量之和等于最大流。
pub fn min_cut_source_side(network: &FlowNetwork, source: NodeId) -> HashSet<NodeId> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(source);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for &v in network.neighbors(u) {
            if !visited.contains(&v) && network.residual(u, v) > 0 {
                visited.insert(v);
                queue.push_back(v);
            }
        }
    }

    visited
}

/// 已饱和的原始边（运行后残量为 0 的边，即流量瓶颈）
pub fn saturated_edges(network: &FlowNetwork) -> Vec<(NodeId, NodeId, Capacity)> {
    network
        .edges()
        .filter(|&(u, v, cap)| cap > 0 && network.residual(u, v) == 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeKind;

    fn run(net: &mut FlowNetwork, s: &str, t: &str) -> FlowSummary {
        let source = net.node_id(s).unwrap();
        let sink = net.node_id(t).unwrap();
        compute(net, source, sink, &HashSet::new(), &HashSet::new())
    }

    #[test]
    fn test_single_edge() {
        let mut net = FlowNetwork::new();
        net.link("S", "T", 5).unwrap();

        let summary = run(&mut net, "S", "T");

        assert_eq!(summary.total_flow, 5);
        assert_eq!(summary.log, vec!["Path: S -> T, add flow = 5".to_string()]);
        assert!(summary.attribution.is_empty());
    }

    #[test]
    fn test_diamond_graph() {
        // S -> A(3), S -> B(2), A -> T(2), B -> T(3)
        let mut net = FlowNetwork::new();
        net.link("S", "A", 3).unwrap();
        net.link("S", "B", 2).unwrap();
        net.link("A", "T", 2).unwrap();
        net.link("B", "T", 3).unwrap();

        let summary = run(&mut net, "S", "T");

        assert_eq!(summary.total_flow, 4);
        assert_eq!(summary.log.len(), 2);
    }

    #[test]
    fn test_disconnected_sink() {
        let mut net = FlowNetwork::new();
        net.link("S", "A", 10).unwrap();
        net.link("B", "T", 10).unwrap();

        let summary = run(&mut net, "S", "T");

        assert_eq!(summary.total_flow, 0);
        assert!(summary.attribution.is_empty());
        assert!(summary.log.is_empty());
    }

    #[test]
    fn test_flow_cancellation() {
        // 经典图：需要通过反向边取消流量才能达到 15
        //     10       10
        // S -----> A -----> T
        // |        ^        ^
        // |5       |5       |
        // v        |        |10
        // B -----> C ------>+
        //     10
        let mut net = FlowNetwork::new();
        net.link("S", "A", 10).unwrap();
        net.link("S", "B", 5).unwrap();
        net.link("A", "T", 10).unwrap();
        net.link("B", "C", 10).unwrap();
        net.link("C", "A", 5).unwrap();
        net.link("C", "T", 10).unwrap();

        let summary = run(&mut net, "S", "T");
        assert_eq!(summary.total_flow, 15);
    }

    #[test]
    fn test_capacity_conservation_after_run() {
        let mut net = FlowNetwork::new();
        net.link("S", "A", 3).unwrap();
        net.link("S", "B", 2).unwrap();
        net.link("A", "T", 2).unwrap();
        net.link("B", "T", 3).unwrap();

        run(&mut net, "S", "T");

        // 每条原始边 (u, v)：正反残量之和等于累计正向 + 反向容量
        let edges: Vec<_> = net.edges().collect();
        for (u, v, _) in edges {
            let invariant = net.base_capacity(u, v) + net.base_capacity(v, u);
            assert_eq!(net.residual(u, v) + net.residual(v, u), invariant);
        }
    }

    #[test]
    fn test_deterministic_repeated_runs() {
        let mut net = FlowNetwork::new();
        net.link("S", "A", 10).unwrap();
        net.link("S", "B", 5).unwrap();
        net.link("A", "T", 10).unwrap();
        net.link("B", "C", 10).unwrap();
        net.link("C", "A", 5).unwrap();
        net.link("C", "T", 10).unwrap();

        let first = run(&mut net, "S", "T");
        let second = run(&mut net, "S", "T");

        assert_eq!(first.total_flow, second.total_flow);
        assert_eq!(first.log, second.log);
        assert_eq!(first.attribution, second.attribution);
    }

    #[test]
    fn test_min_cut_matches_flow() {
        let mut net = FlowNetwork::new();
        net.link("S", "A", 3).unwrap();
        net.link("S", "B", 2).unwrap();
        net.link("A", "T", 2).unwrap();
        net.link("B", "T", 3).unwrap();

        let summary = run(&mut net, "S", "T");
        let source_side = min_cut_source_side(&net, net.node_id("S").unwrap());

        // 跨割原始边容量之和 = 最大流
        let cut_capacity: Capacity = net
            .edges()
            .filter(|(u, v, _)| source_side.contains(u) && !source_side.contains(v))
            .map(|(_, _, cap)| cap)
            .sum();
        assert_eq!(cut_capacity, summary.total_flow);
    }

    #[test]
    fn test_min_cut_brute_force() {
        // 小图上穷举所有割验证最大流 = 最小割
        let mut net = FlowNetwork::new();
        net.link("S", "A", 4).unwrap();
        net.link("S", "B", 3).unwrap();
        net.link("A", "B", 2).unwrap();
        net.link("A", "T", 2).unwrap();
        net.link("B", "T", 5).unwrap();

        let summary = run(&mut net, "S", "T");

        let s = net.node_id("S").unwrap();
        let t = net.node_id("T").unwrap();
        let inner: Vec<NodeId> = net
            .nodes()
            .iter()
            .map(|n| n.id())
            .filter(|&id| id != s && id != t)
            .collect();

        let mut min_cut = Capacity::MAX;
        for mask in 0..(1u32 << inner.len()) {
            let mut side: HashSet<NodeId> = HashSet::new();
            side.insert(s);
            for (i, &id) in inner.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    side.insert(id);
                }
            }
            let cut: Capacity = net
                .edges()
                .filter(|(u, v, _)| side.contains(u) && !side.contains(v))
                .map(|(_, _, cap)| cap)
                .sum();
            min_cut = min_cut.min(cut);
        }

        assert_eq!(summary.total_flow, min_cut);
    }

    #[test]
    fn test_saturated_edges() {
        let mut net = FlowNetwork::new();
        net.link("S", "A", 10).unwrap();
        net.link("A", "T", 5).unwrap();

        let summary = run(&mut net, "S", "T");
        assert_eq!(summary.total_flow, 5);

        let a = net.node_id("A").unwrap();
        let t = net.node_id("T").unwrap();
        assert_eq!(saturated_edges(&net), vec![(a, t, 5)]);
    }

    #[test]
    fn test_attribution_through_layers() {
        // 源 -> 终端 -> 仓库 -> 商店 -> 汇
        let mut net = FlowNetwork::new();
        let s = net.add_node("S", NodeKind::Source);
        let t1 = net.add_node("T1", NodeKind::Terminal);
        let w = net.add_node("W", NodeKind::Warehouse);
        let shop = net.add_node("Shop", NodeKind::Shop);
        let sink = net.add_node("Z", NodeKind::Sink);

        net.add_edge(s, t1, 10).unwrap();
        net.add_edge(t1, w, 7).unwrap();
        net.add_edge(w, shop, 5).unwrap();
        net.add_edge(shop, sink, 10).unwrap();

        let terminals: HashSet<NodeId> = [t1].into_iter().collect();
        let shops: HashSet<NodeId> = [shop].into_iter().collect();
        let summary = compute(&mut net, s, sink, &terminals, &shops);

        assert_eq!(summary.total_flow, 5);
        assert_eq!(summary.attribution.get(&(t1, shop)), Some(&5));
    }

    #[test]
    fn test_random_flow_bounds() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut net = FlowNetwork::new();
            let node_count = rng.gen_range(4..9);
            let labels: Vec<String> = (0..node_count).map(|i| format!("N{}", i)).collect();

            for _ in 0..rng.gen_range(4..16) {
                let u = rng.gen_range(0..node_count);
                let mut v = rng.gen_range(0..node_count);
                if u == v {
                    v = (v + 1) % node_count;
                }
                net.link(&labels[u], &labels[v], rng.gen_range(0..20)).unwrap();
            }
            net.link(&labels[0], &labels[1], rng.gen_range(1..10)).unwrap();
            net.link(
                &labels[node_count - 2],
                &labels[node_count - 1],
                rng.gen_range(0..10),
            )
            .unwrap();

            let summary = run(&mut net, "N0", &format!("N{}", node_count - 1));

            let s = net.node_id("N0").unwrap();
            let t = net.node_id(&format!("N{}", node_count - 1)).unwrap();
            let source_out: Capacity = net
                .edges()
                .filter(|&(u, _, _)| u == s)
                .map(|(_, _, cap)| cap)
                .sum();
            let sink_in: Capacity = net
                .edges()
                .filter(|&(_, v, _)| v == t)
                .map(|(_, _, cap)| cap)
                .sum();

            assert!(summary.total_flow <= source_out);
            assert!(summary.total_flow <= sink_in);
        }
    }
}
