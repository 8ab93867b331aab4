mod cli;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use cli::{Cli, Commands};
use userdir_rank::config::{self, ModuleConfig};
use userdir_rank::ranking::{BoostStatus, Param, RankingBuilder, RankingExpression};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_path()?,
    };

    match cli.command {
        Commands::Ordering(args) => cmd_ordering(args, &config_path),
        Commands::Config => cmd_config(&config_path),
    }
}

#[derive(Serialize)]
struct OrderingOutput<'a> {
    engine: &'a str,
    #[serde(flatten)]
    expr: &'a RankingExpression,
    #[serde(skip_serializing_if = "Option::is_none")]
    bound: Option<Vec<String>>,
}

fn cmd_ordering(args: cli::OrderingArgs, config_path: &Path) -> Result<()> {
    let config = ModuleConfig::load(config_path)?;
    let expr = RankingBuilder::new(&config)
        .placeholders(args.style.with_start(args.start))
        .build_named(&args.engine)?;

    let bound = args.query.as_deref().map(|q| expr.bind(q));

    if args.json {
        let output = OrderingOutput {
            engine: &args.engine,
            expr: &expr,
            bound,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if expr.display_name_boost == BoostStatus::Unsupported {
        eprintln!(
            "{} weighted_display_name_like is ignored on {}.\n",
            "Note:".yellow(),
            args.engine
        );
    }

    println!("{}", expr.sql);

    if expr.params.is_empty() {
        return Ok(());
    }

    println!();
    for (i, param) in expr.params.iter().enumerate() {
        let value = match (param, &bound) {
            (_, Some(bound)) => bound[i].clone(),
            (Param::Text(value), None) => value.clone(),
            (Param::SearchQuery, None) => "<search query>".to_string(),
        };
        println!("  {} {}", format!("{}.", i + 1).bold(), value);
    }

    Ok(())
}

fn cmd_config(path: &Path) -> Result<()> {
    let config = ModuleConfig::load(path)?;

    println!("{} {}\n", "Config file:".bold(), path.display());
    println!("{}", toml::to_string_pretty(&config)?);

    if !path.exists() {
        println!(
            "\n{} No config file found. Creating default at {}",
            "Note:".yellow(),
            path.display()
        );
        config.save(path)?;
    }

    Ok(())
}
