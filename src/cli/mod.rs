//! CLI 支持模块

mod printer;

pub use printer::Printer;
