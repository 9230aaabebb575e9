//! qfilter — render JSON filters as MySQL or MongoDB queries.
//!
//! # Usage
//!
//! ```bash
//! # Render a filter
//! qfilter '{"where": {"age": {"gte": 18}}, "limit": 10}'
//!
//! # Read it from a file (or stdin with `-`)
//! qfilter --file filter.json --backend mongo
//!
//! # Show the parsed tree and both renderings
//! qfilter explain '{"where": {"or": [{"a": 1}, {"b": 2}]}}'
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use qfilter::config::Config;
use qfilter::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qfilter")]
#[command(version)]
#[command(about = "Render JSON where/order/limit/skip filters as queries", long_about = None)]
#[command(after_help = "EXAMPLES:
    qfilter '{\"where\": {\"name\": \"astra\"}}'
    qfilter '{\"where\": {\"tag\": {\"in\": [\"a\", \"b\"]}}, \"order\": \"id desc\"}' --backend mongo
    echo '{\"limit\": 5}' | qfilter --file -")]
struct Cli {
    /// The filter JSON
    filter: Option<String>,

    /// Read the filter JSON from a file ('-' for stdin)
    #[arg(short, long, conflicts_with = "filter")]
    file: Option<PathBuf>,

    /// Output backend (overrides the config file)
    #[arg(short, long, env = "QFILTER_BACKEND")]
    backend: Option<Backend>,

    /// Config file path
    #[arg(long, env = "QFILTER_CONFIG")]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a filter and show its tree and renderings
    Explain {
        /// The filter JSON
        filter: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "qfilter=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(backend) = cli.backend {
        config.backend = backend;
    }
    config.pretty |= cli.pretty;
    colored::control::set_override(config.color);

    match &cli.command {
        Some(Commands::Explain { filter }) => explain(filter, &config),
        None => {
            let input = read_input(cli)?;
            render(&input, &config)
        }
    }
}

fn read_input(cli: &Cli) -> anyhow::Result<String> {
    match (&cli.filter, &cli.file) {
        (Some(filter), _) => Ok(filter.clone()),
        (None, Some(path)) if path.as_os_str() == "-" => read_stdin(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        (None, None) => read_stdin(),
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(input)
}

fn build(input: &str) -> anyhow::Result<Filter> {
    let value: serde_json::Value = serde_json::from_str(input).context("filter is not valid JSON")?;
    let filter = qfilter::parse(&value)?;
    Ok(filter)
}

fn render(input: &str, config: &Config) -> anyhow::Result<()> {
    let filter = build(input)?;

    match config.backend {
        Backend::Mysql => println!("{}", filter.to_sql().trim_start()),
        Backend::Mongo => println!("{}", to_json(&filter.to_mongo(), config.pretty)?),
    }

    Ok(())
}

fn explain(input: &str, config: &Config) -> anyhow::Result<()> {
    println!("{}", "qfilter explanation".cyan().bold());
    println!();
    println!("{} {}", "Input:".dimmed(), input.trim().yellow());
    println!();

    let filter = build(input)?;

    println!("{}", "Parsed Structure:".green().bold());
    match &filter.condition {
        Some(cdt) => print_tree(cdt, 1),
        None => println!("  {}", "(no where)".dimmed()),
    }
    if let Some(order) = &filter.order {
        println!("  {} {}", "Order:".dimmed(), order.clauses().join(", ").white());
    }
    if let Some(n) = filter.limit {
        println!("  {} {}", "Limit:".dimmed(), n.to_string().white());
    }
    if let Some(n) = filter.skip {
        println!("  {} {}", "Skip:".dimmed(), n.to_string().white());
    }

    println!();
    println!("{}", "Generated SQL:".green().bold());
    println!("  {}", filter.to_sql().trim_start().white());

    println!();
    println!("{}", "MongoDB:".green().bold());
    println!("  {}", to_json(&filter.to_mongo(), config.pretty)?.white());

    Ok(())
}

fn print_tree(cdt: &Where, depth: usize) {
    let indent = "  ".repeat(depth);
    match cdt {
        Where::And(children) | Where::Or(children) => {
            let kind = cdt.logical_op().unwrap_or_default().sql_keyword();
            println!("{}[{}]", indent, kind.cyan());
            for child in children {
                print_tree(child, depth + 1);
            }
        }
        Where::Compare(c) => {
            println!(
                "{}{} {} {}",
                indent,
                c.property.white(),
                c.op.sql_symbol().cyan(),
                c.value.to_string().yellow()
            );
        }
        Where::Member(m) => {
            let values: Vec<String> = m.values.iter().map(|v| v.to_string()).collect();
            println!(
                "{}{} {} ({}) {}",
                indent,
                m.property.white(),
                m.op.sql_symbol().cyan(),
                values.join(", ").yellow(),
                format!("<{}>", m.datatype).dimmed()
            );
        }
    }
}

fn to_json(value: &serde_json::Value, pretty: bool) -> anyhow::Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}
