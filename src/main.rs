use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use graph_bulkload::config::Config;
use graph_bulkload::job::BulkLoadJob;
use graph_bulkload::utils::logging;
use graph_bulkload::StrategyRegistry;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "GraphDB Contributors")]
enum Cli {
    /// Transform an input file and bulk-commit the mutations into the store
    Load {
        #[clap(short, long, default_value = "bulkload.toml")]
        config: PathBuf,
        #[clap(short, long)]
        input: PathBuf,
    },
    /// List the registered decoders and encoders
    Strategies,
    /// Read committed rows back through the configured encoder
    Dump {
        #[clap(short, long, default_value = "bulkload.toml")]
        config: PathBuf,
        #[clap(short, long)]
        limit: Option<usize>,
    },
    /// Write a default configuration file
    InitConfig {
        #[clap(default_value = "bulkload.toml")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let registry = StrategyRegistry::default();

    match cli {
        Cli::Load { config, input } => {
            let config = Config::load(&config)
                .with_context(|| format!("加载配置失败: {}", config.display()))?;
            let _log_guard = logging::init(&config.log).context("日志初始化失败")?;

            let job = BulkLoadJob::new(config, registry);
            let report = job
                .run(&input)
                .with_context(|| format!("导入失败: {}", input.display()))?;

            println!(
                "records={} vertices={} emitted={} rows={} committed={} parse_errors={} encoding_errors={} elapsed={:?}",
                report.stats.records,
                report.stats.vertices,
                report.stats.emitted,
                report.rows,
                report.committed_rows,
                report.stats.parse_errors,
                report.stats.encoding_errors,
                report.elapsed
            );
            for failure in &report.stats.failures {
                eprintln!("  {}", failure);
            }
        }
        Cli::Strategies => {
            println!("decoders: {}", registry.decoder_names().join(", "));
            println!("encoders: {}", registry.encoder_names().join(", "));
        }
        Cli::Dump { config, limit } => {
            let config = Config::load(&config)
                .with_context(|| format!("加载配置失败: {}", config.display()))?;
            let job = BulkLoadJob::new(config, registry);
            for vertex in job.dump(limit)? {
                println!("{}", serde_json::to_string(&vertex)?);
            }
        }
        Cli::InitConfig { path } => {
            Config::default()
                .save(&path)
                .with_context(|| format!("写入配置失败: {}", path.display()))?;
            println!("已写入默认配置: {}", path.display());
        }
    }

    Ok(())
}
