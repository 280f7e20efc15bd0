//! LogiFlow CLI 工具
//!
//! 基于内置物流网络的交互式分析界面

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use logiflow::algorithm::compute;
use logiflow::cli::Printer;
use logiflow::logistics::{build_logistics_network, LogisticsNetwork};
use logiflow::metrics::metrics;
use logiflow::report::FlowReport;
use logiflow::FlowNetwork;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "logiflow-cli")]
#[command(about = "LogiFlow 物流网络最大流分析工具")]
struct Args {
    /// 运行完整分析报告后退出
    #[arg(short, long)]
    report: bool,

    /// 以 JSON 输出报告（隐含 --report）
    #[arg(short, long)]
    json: bool,

    /// 执行单个命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let (mut network, topology) = build_logistics_network()?;

    // 一次性报告模式
    if args.report || args.json {
        let report = run_report(&mut network, &topology);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            let printer = Printer::new();
            println!("{}", printer.format_log(&report.log));
            println!("{}", printer.format_flow_table(&report));
            println!("{}", printer.format_analysis(&report));
        }
        return Ok(());
    }

    println!("{}", "LogiFlow - 物流配送网络最大流分析".bold());
    println!("=====================================");
    println!("内置网络已加载:");
    println!("  节点数: {}", network.node_count());
    println!("  边数: {}", network.edge_count());

    // 单命令模式
    if let Some(cmd) = args.execute {
        handle_command(&mut network, &topology, &cmd)?;
        return Ok(());
    }

    // 交互模式
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let stdin = io::stdin();
    loop {
        print!("logiflow> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match handle_command(&mut network, &topology, line) {
            Ok(true) => break,
            Ok(false) => {}
            Err(e) => println!("{} {}", "错误:".red(), e),
        }
    }

    println!("再见！");
    Ok(())
}

fn run_report(network: &mut FlowNetwork, topology: &LogisticsNetwork) -> FlowReport {
    let summary = compute(
        network,
        topology.source,
        topology.sink,
        &topology.terminal_set(),
        &topology.shop_set(),
    );
    FlowReport::build(&summary, network, topology)
}

fn handle_command(
    network: &mut FlowNetwork,
    topology: &LogisticsNetwork,
    input: &str,
) -> Result<bool> {
    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let args = parts.get(1).copied().unwrap_or("");
    let printer = Printer::new();

    match cmd.as_str() {
        "quit" | "exit" | "q" => return Ok(true),

        "help" | "h" | "?" => {
            print_help();
        }

        "stats" | "info" => {
            println!("网络统计信息:");
            println!("  节点数: {}", network.node_count());
            println!("  边数: {}", network.edge_count());
            println!("{}", printer.format_stats(&metrics().snapshot()));
        }

        "maxflow" | "flow" => {
            let report = run_report(network, topology);
            println!("最大流量: {}", report.total_flow);
        }

        "log" | "steps" => {
            let report = run_report(network, topology);
            println!("Edmonds-Karp 增广步骤:");
            println!("{}", printer.format_log(&report.log));
        }

        "table" => {
            let report = run_report(network, topology);
            println!("{}", printer.format_flow_table(&report));
        }

        "analyze" | "report" => {
            let report = run_report(network, topology);
            println!("{}", printer.format_log(&report.log));
            println!("{}", printer.format_flow_table(&report));
            println!("{}", printer.format_analysis(&report));
        }

        "node" | "n" => {
            if args.is_empty() {
                println!("用法: node <标签>");
            } else {
                show_node(network, args)?;
            }
        }

        _ => {
            println!("未知命令: {}。输入 'help' 查看帮助。", cmd);
        }
    }

    Ok(false)
}

fn show_node(network: &FlowNetwork, label: &str) -> Result<()> {
    let id = network.require_node(label)?;
    if let Some(node) = network.node(id) {
        println!("节点 {}:", node.label());
        println!("  类别: {}", node.kind());
        println!("  相邻节点:");
        for &v in network.neighbors(id) {
            let cap = network.base_capacity(id, v);
            if cap > 0 {
                println!("    -> {} (容量 {})", network.label(v), cap);
            }
        }
    }
    Ok(())
}

fn print_help() {
    println!(
        "
═══════════════════════════════════════════════════════════
                 LogiFlow CLI 命令帮助
═══════════════════════════════════════════════════════════

基础命令:
  help, h, ?           显示帮助
  quit, exit, q        退出程序
  stats, info          显示网络与运行指标

分析命令:
  maxflow, flow        计算最大流量
  log, steps           显示增广路径日志
  table                显示 Terminal -> Shop 流量表
  analyze, report      完整分析（日志 + 流量表 + 结论）

  node <标签>          查看节点详情
                       示例: node Warehouse 2

提示: 也可以用 --report / --json 参数非交互运行
═══════════════════════════════════════════════════════════
"
    );
}
