//! 结果打印器
//!
//! 将流量报告渲染为表格与文字分析

use crate::metrics::MetricsSnapshot;
use crate::report::FlowReport;
use prettytable::{format, row, Cell, Row, Table};

/// 结果打印器
#[derive(Debug, Default)]
pub struct Printer;

impl Printer {
    pub fn new() -> Self {
        Self
    }

    /// 增广路径日志（带序号）
    pub fn format_log(&self, log: &[String]) -> String {
        if log.is_empty() {
            return "（无增广路径）\n".to_string();
        }

        let mut output = String::new();
        for (i, step) in log.iter().enumerate() {
            output.push_str(&format!("{:02}. {}\n", i + 1, step));
        }
        output
    }

    /// Terminal -> Shop 流量表（仅流量 > 0 的行）
    pub fn format_flow_table(&self, report: &FlowReport) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Terminal", "Shop", "Flow"]);

        for r in &report.rows {
            table.add_row(Row::new(vec![
                Cell::new(&r.terminal),
                Cell::new(&r.shop),
                Cell::new(&r.flow.to_string()),
            ]));
        }

        format!("{}\n{} 对有实际流量\n", table, report.rows.len())
    }

    /// 文字分析：终端汇总、最繁忙终端、供货最少的商店、瓶颈边
    pub fn format_analysis(&self, report: &FlowReport) -> String {
        let mut output = String::new();
        output.push_str(&format!("最大流量: {}\n\n分析:\n", report.total_flow));

        for (terminal, total) in &report.terminal_totals {
            output.push_str(&format!("- {} 提供的总流量: {}\n", terminal, total));
        }
        if let Some(busiest) = &report.busiest_terminal {
            output.push_str(&format!("结论 1: 流量最大的终端是 {}。\n", busiest));
        }

        output.push_str(&format!(
            "结论 2: 收货最少的商店: {:?} (流量 = {})。\n",
            report.least_supplied_shops, report.min_shop_flow
        ));

        if report.saturated_edges.is_empty() {
            output.push_str("结论 3: 没有已饱和的内部边。\n");
        } else {
            output.push_str("结论 3: 瓶颈（已饱和的边），提升这些容量可增大总流量:\n");
            for edge in &report.saturated_edges {
                output.push_str(&format!(
                    "  {} -> {} (容量 {})\n",
                    edge.from, edge.to, edge.capacity
                ));
            }
        }

        output
    }

    /// 打印运行指标
    pub fn format_stats(&self, snapshot: &MetricsSnapshot) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Metric", "Value"]);
        table.add_row(row!["Edges Added", snapshot.edges_added.to_string()]);
        table.add_row(row!["Runs Completed", snapshot.runs_completed.to_string()]);
        table.add_row(row![
            "Augmenting Paths",
            snapshot.augmenting_paths.to_string()
        ]);
        table.add_row(row!["Flow Pushed", snapshot.flow_pushed.to_string()]);
        table.add_row(row!["Uptime (s)", snapshot.uptime_seconds.to_string()]);
        table.to_string()
    }
}
