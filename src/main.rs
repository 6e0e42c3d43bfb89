use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hypecycle::config::Config;
use hypecycle::error::HypeCycleErrorTrait;
use hypecycle::models::{InflectionPoint, SearchOperator, SearchTerm};
use hypecycle::pipeline::{HypeCyclePipeline, HypeCycleReport};
use hypecycle::search::classify;
use hypecycle::signals::{calculate_sentiment, extract_country, extract_keywords, extract_year};
use hypecycle::utils::truncate_text;

/// Headlines shown in the text report
const SAMPLE_HEADLINES: usize = 5;

#[derive(Parser)]
#[command(
    name = "hypecycle",
    version,
    about = "Place an emerging technology on the hype cycle from its news coverage",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json); defaults to HYPECYCLE_LOG_FORMAT
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// TOML configuration file; environment variables are used otherwise
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search news coverage and classify the hype-cycle phase
    Analyze {
        /// Search term, optionally prefixed with its operator (e.g. "OR:fusion")
        #[arg(short, long = "term", required = true)]
        terms: Vec<String>,

        /// Operator applied to every term (AND, OR, NOT)
        #[arg(long, value_parser = parse_operator)]
        operator: Option<SearchOperator>,

        /// Quote every term as an exact phrase
        #[arg(long, default_value = "false")]
        exact: bool,

        /// Earliest year of interest
        #[arg(long)]
        min_year: Option<i32>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,

        /// Print Prometheus metrics after the analysis
        #[arg(long, default_value = "false")]
        metrics: bool,
    },

    /// Show how a query would be classified and which strategy it gets
    Classify {
        /// Raw query string
        query: String,
    },

    /// Show the signals extracted from a piece of text
    Signals {
        /// Text to inspect
        text: String,
    },
}

fn parse_operator(s: &str) -> std::result::Result<SearchOperator, String> {
    SearchOperator::parse(s).ok_or_else(|| format!("unknown operator '{s}' (expected AND, OR or NOT)"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    config.validate().context("Invalid configuration")?;

    let log_format = cli.log_format.as_deref().unwrap_or(&config.logging.format);
    setup_tracing(log_format, &config.logging.level, cli.verbose)?;

    if let Err(e) = hypecycle::metrics::init_metrics() {
        tracing::warn!(error = %e, "Metrics unavailable");
    }

    match cli.command {
        Commands::Analyze {
            terms,
            operator,
            exact,
            min_year,
            output,
            metrics,
        } => {
            tracing::info!(
                terms = ?terms,
                operator = ?operator,
                exact = %exact,
                min_year = ?min_year,
                "Starting analyze command"
            );
            let terms = build_terms(&terms, operator, exact)?;
            analyze(&config, &terms, min_year, &output).await?;

            if metrics {
                let text = hypecycle::metrics::encode_metrics()
                    .map_err(|e| anyhow::anyhow!("Failed to encode metrics: {e}"))?;
                println!("{text}");
            }
        }

        Commands::Classify { query } => classify_query(&query),

        Commands::Signals { text } => signals(&text),
    }

    Ok(())
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("hypecycle=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_new(format!("hypecycle={level},warn"))
            .context("Invalid log level")?
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}

fn build_terms(raw: &[String], operator: Option<SearchOperator>, exact: bool) -> Result<Vec<SearchTerm>> {
    raw.iter()
        .map(|value| {
            let mut term: SearchTerm = value.parse().context("Invalid search term")?;
            if let Some(op) = operator {
                term.operator = op;
            }
            term.exact_match |= exact;
            Ok(term)
        })
        .collect()
}

async fn analyze(config: &Config, terms: &[SearchTerm], min_year: Option<i32>, output: &str) -> Result<()> {
    let pipeline = HypeCyclePipeline::from_config(config)?;
    let report = match pipeline.analyze(terms, min_year).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(
                category = ?e.category(),
                recoverable = e.is_recoverable(),
                error = %e,
                "Analysis failed"
            );
            anyhow::bail!(e.user_message());
        }
    };

    match output {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &HypeCycleReport) {
    println!("Query: {}", report.query);
    println!(
        "  Strategy: {} (score {}, {})",
        report.complexity.level, report.complexity.score, report.complexity.reason
    );
    println!("  API calls: {}", report.api_calls);
    println!();
    println!("Phase: {} ({:.0}% confidence)", report.phase, report.confidence * 100.0);
    println!(
        "  Mentions: {} across {} years (peak {})",
        report.metrics.total_mentions, report.metrics.years_analyzed, report.metrics.peak_mentions
    );
    println!("  Average sentiment: {:+.2}", report.metrics.avg_sentiment);
    println!();

    println!("Yearly coverage:");
    for stat in &report.yearly_stats {
        println!(
            "  {}  {:>4} mentions  sentiment {:+.2}",
            stat.year, stat.mention_count, stat.sentiment_mean
        );
    }
    println!();

    let fmt_point = |point: &Option<InflectionPoint>| {
        point.map_or_else(|| "-".to_string(), |p| p.year.to_string())
    };
    let points = &report.inflection_points;
    println!(
        "Inflection points: trigger {}, peak {}, trough {}",
        fmt_point(&points.innovation_trigger),
        fmt_point(&points.peak),
        fmt_point(&points.trough)
    );
    println!();

    println!("Insights:");
    for insight in &report.insights {
        println!("  - {insight}");
    }
    println!();

    println!("Sample coverage:");
    for result in report.news_results.iter().take(SAMPLE_HEADLINES) {
        println!("  [{}] {}", result.year, truncate_text(&result.title, 80));
    }
}

fn classify_query(query: &str) {
    let complexity = classify(query);
    println!("Query: {query}");
    println!("  Level: {}", complexity.level);
    println!("  Score: {}", complexity.score);
    println!("  Reason: {}", complexity.reason);
}

fn signals(text: &str) {
    let keywords = extract_keywords(text, &[]);

    println!("Year: {}", extract_year(text));
    println!("Country: {}", extract_country(text).unwrap_or("-"));
    println!("Sentiment: {:+.2}", calculate_sentiment(text));
    println!(
        "Keywords: {}",
        if keywords.is_empty() {
            "-".to_string()
        } else {
            keywords.join(", ")
        }
    );
}
