use std::io::Read;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use signal_engine::{
    EngineConfig, SignalMode,
    advisory::advise,
    cli::commands::{Cli, Commands},
    evaluate::evaluate,
    models::{series::BarSeries, signal::SignalKind},
};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = EngineConfig::resolve(cli.config.as_deref())?;

    match cli.command {
        Commands::Scan {
            source,
            input,
            mode,
            format,
        } => {
            let config = apply_mode(config, mode.as_deref())?;
            let series: BarSeries =
                serde_json::from_str(&read_input(&source, input.as_deref())?)
                    .context("failed to parse bar-series JSON")?;
            scan_one(&series, &config, &format)
        }
        Commands::Batch {
            source,
            input,
            mode,
        } => {
            let config = apply_mode(config, mode.as_deref())?;
            let list: Vec<BarSeries> =
                serde_json::from_str(&read_input(&source, input.as_deref())?)
                    .context("failed to parse bar-series array JSON")?;
            run_batch(&list, &config)
        }
    }
}

fn apply_mode(mut config: EngineConfig, mode: Option<&str>) -> Result<EngineConfig> {
    if let Some(mode) = mode {
        config.mode = mode.parse::<SignalMode>().map_err(anyhow::Error::msg)?;
    }
    Ok(config)
}

/// Reads the series document from a file, stdin, or an inline JSON argument.
fn read_input(source: &str, input: Option<&str>) -> Result<String> {
    match source {
        "file" => {
            let path = input.context("file path required for source=file")?;
            std::fs::read_to_string(path).with_context(|| format!("read input file {path}"))
        }
        "stdin" => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        "json" => Ok(input
            .context("JSON string required for source=json")?
            .to_string()),
        other => bail!("invalid source '{other}': use 'file', 'stdin', or 'json'"),
    }
}

fn scan_one(series: &BarSeries, config: &EngineConfig, format: &str) -> Result<()> {
    info!(symbol = %series.symbol, bars = series.len(), "scanning");
    let evaluation = evaluate(series, config)?;
    let advisory = advise(&evaluation.frame, config);

    match format {
        "json" => {
            let report = serde_json::json!({
                "evaluation": evaluation,
                "advisory": advisory,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "text" => {
            println!(
                "{} ({}): {} bars, {} signal(s)",
                evaluation.frame.symbol,
                evaluation.frame.timeframe,
                evaluation.frame.len(),
                evaluation.events.len(),
            );
            for event in &evaluation.events {
                let kind = match event.kind {
                    SignalKind::Buy => "BUY ",
                    SignalKind::Sell => "SELL",
                };
                println!(
                    "{}  {}  close {:.4}",
                    event.timestamp.to_rfc3339(),
                    kind,
                    evaluation.frame.bars[event.index].close,
                );
            }
            match &evaluation.plan {
                Some(plan) => println!(
                    "plan: entry {:.4}  stop {:.4}  target {:.4}  rr {:.2} ({})",
                    plan.entry,
                    plan.stop_loss,
                    plan.take_profit,
                    plan.risk_reward_ratio,
                    if plan.meets_min_rr { "pass" } else { "fail" },
                ),
                None => println!("plan: none (no qualifying buy signal)"),
            }
            if let Some(advisory) = advisory {
                let notes: Vec<String> = advisory
                    .notes
                    .iter()
                    .map(|(category, label)| format!("{category}={label}"))
                    .collect();
                println!("advisory: {}", notes.join(", "));
            }
        }
        other => bail!("invalid format '{other}': use 'text' or 'json'"),
    }
    Ok(())
}

/// Evaluates each series independently; one summary line per symbol on
/// stdout, failures on stderr so machine parsing of results stays clean.
fn run_batch(list: &[BarSeries], config: &EngineConfig) -> Result<()> {
    let mut success_count = 0;
    let mut error_count = 0;

    for series in list {
        match evaluate(series, config) {
            Ok(evaluation) => {
                let plan_note = match &evaluation.plan {
                    Some(plan) => format!(
                        "rr {:.2} ({})",
                        plan.risk_reward_ratio,
                        if plan.meets_min_rr { "pass" } else { "fail" },
                    ),
                    None => "no plan".to_string(),
                };
                println!(
                    "{}: {} signal(s), {}",
                    series.symbol,
                    evaluation.events.len(),
                    plan_note,
                );
                success_count += 1;
            }
            Err(e) => {
                eprintln!("ERROR: {} - {}", series.symbol, e);
                error_count += 1;
            }
        }
    }

    eprintln!("SUMMARY: {success_count} succeeded, {error_count} failed");
    Ok(())
}
