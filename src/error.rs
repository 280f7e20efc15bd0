//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("无效容量: {0} (容量必须为非负整数)")]
    InvalidCapacity(i64),

    #[error("节点不存在: {0}")]
    NodeNotFound(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
