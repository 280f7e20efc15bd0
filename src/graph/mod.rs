//! 图核心模块
//!
//! 定义节点与容量网络的核心数据结构

mod network;
mod node;

pub use network::FlowNetwork;
pub use node::{Node, NodeId};
