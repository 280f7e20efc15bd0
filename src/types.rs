//! 物流网络通用类型定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 容量/流量值（全程整数精确，不使用浮点）
pub type Capacity = u64;

/// 节点类别标签
///
/// 类别在构建网络时显式附加到节点上；最大流计算本身只依赖
/// 调用方传入的终端/商店集合，类别标签用于展示层。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// 超级源点
    Source,
    /// 超级汇点
    Sink,
    /// 货运终端
    Terminal,
    /// 仓库
    Warehouse,
    /// 商店
    Shop,
    /// 通用节点
    Generic,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Source => "Source",
            NodeKind::Sink => "Sink",
            NodeKind::Terminal => "Terminal",
            NodeKind::Warehouse => "Warehouse",
            NodeKind::Shop => "Shop",
            NodeKind::Generic => "Generic",
        }
    }
}

impl Default for NodeKind {
    fn default() -> Self {
        NodeKind::Generic
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
