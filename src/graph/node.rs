//! 节点定义
//!
//! 物流场景的节点类型：源点、汇点、终端、仓库、商店

use crate::types::NodeKind;
use serde::{Deserialize, Serialize};

/// 节点 ID（节点表下标，全局唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// 节点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// 节点 ID
    id: NodeId,
    /// 节点标签（唯一的不透明标识符）
    label: String,
    /// 节点类别
    kind: NodeKind,
}

impl Node {
    /// 创建新节点
    pub fn new(id: NodeId, label: String, kind: NodeKind) -> Self {
        Self { id, label, kind }
    }

    /// 获取节点 ID
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// 获取节点标签
    pub fn label(&self) -> &str {
        &self.label
    }

    /// 获取节点类别
    pub fn kind(&self) -> NodeKind {
        self.kind
    }
}
