mod config;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use ringbuffer::RingBuffer;
use std::io::{self, BufRead};

#[derive(Parser, Debug)]
#[command(name = "ringbuffer", about = "fixed-capacity overwrite-on-full ring buffer demo", version = "0.1")]
struct Cli {
    /// Buffer capacity (default from config file)
    #[arg(short, long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    capacity: Option<usize>,

    /// Comma-separated integers to feed instead of the built-in sequence
    #[arg(short, long, value_delimiter = ',')]
    values: Vec<i64>,

    /// Print a one-shot JSON snapshot of the fed buffer and exit
    #[arg(long)]
    json: bool,

    /// Read integers from stdin, reporting evictions as they happen
    #[arg(long)]
    follow: bool,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        return run_completions(shell);
    }

    let cfg = config::Config::load();
    if cli.config {
        return run_print_config(&cfg);
    }

    let capacity = cli.capacity.unwrap_or(cfg.demo.capacity);
    let values = if cli.values.is_empty() { vec![10, 20, 30, 40] } else { cli.values.clone() };

    if cli.json {
        return run_json_snapshot(capacity, &values);
    }
    if cli.follow {
        return run_follow(capacity, cfg.demo.timestamps);
    }
    run_walkthrough(capacity, &values)
}

/// Scripted tour of the buffer contract: fill past capacity, peek, drain,
/// refill, reset.
fn run_walkthrough(capacity: usize, values: &[i64]) -> Result<()> {
    let mut ring = RingBuffer::new(capacity);

    println!("---- filling buffer ----");
    for &v in values {
        if ring.is_full() {
            if let Some(&old) = ring.peek() {
                println!("write {:>4}  (buffer full, {} evicted)", v, old);
            }
        } else {
            println!("write {:>4}", v);
        }
        ring.push(v);
    }
    print_state(&ring);

    println!();
    println!("---- peek the oldest element ----");
    if let Some(v) = ring.peek() {
        println!("peek = {}", v);
    }

    println!();
    println!("---- read all elements ----");
    while let Some(v) = ring.pop() {
        println!("read = {}", v);
    }
    println!("len = {}", ring.len());
    println!("read on empty = {:?}", ring.pop());

    println!();
    println!("---- refill after draining ----");
    for &v in values.iter().take(2) {
        ring.push(v);
    }
    print_state(&ring);

    println!();
    println!("---- reset ----");
    ring.clear();
    print_state(&ring);
    Ok(())
}

fn print_state(ring: &RingBuffer<i64>) {
    println!("len = {}  cap = {}  snapshot = {:?}", ring.len(), ring.capacity(), ring.snapshot());
}

fn run_json_snapshot(capacity: usize, values: &[i64]) -> Result<()> {
    use serde_json::json;

    let mut ring = RingBuffer::new(capacity);
    let mut evicted = Vec::new();
    for &v in values {
        if ring.is_full() {
            if let Some(&old) = ring.peek() {
                evicted.push(old);
            }
        }
        ring.push(v);
    }

    let snapshot = json!({
        "ringbuffer_version": "0.1",
        "timestamp": chrono::Local::now().to_rfc3339(),
        "capacity":  ring.capacity(),
        "len":       ring.len(),
        "oldest":    ring.peek(),
        "contents":  ring.snapshot(),
        "evicted":   evicted,
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Feed integers from stdin, one eviction report per overwritten element.
fn run_follow(capacity: usize, timestamps: bool) -> Result<()> {
    let mut ring = RingBuffer::new(capacity);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        for tok in line.split_whitespace() {
            let v: i64 = match tok.parse() {
                Ok(v) => v,
                Err(_) => {
                    log::warn!("ignoring non-integer input {:?}", tok);
                    continue;
                }
            };
            let evicted = if ring.is_full() { ring.peek().copied() } else { None };
            ring.push(v);
            log::debug!("push {} (len {}/{})", v, ring.len(), ring.capacity());
            if let Some(old) = evicted {
                if timestamps {
                    println!("{} evicted {} for {}", chrono::Local::now().format("%H:%M:%S"), old, v);
                } else {
                    println!("evicted {} for {}", old, v);
                }
            }
        }
    }
    println!("final snapshot = {:?}", ring.snapshot());
    Ok(())
}

fn run_print_config(cfg: &config::Config) -> Result<()> {
    let path = config::Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    println!("Config: {}", path);
    println!();
    println!("[demo]");
    println!("  capacity   = {}", cfg.demo.capacity);
    println!("  timestamps = {}", cfg.demo.timestamps);
    Ok(())
}

fn run_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
