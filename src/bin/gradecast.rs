use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use gradecast::ml::DEFAULT_K;
use gradecast::{http, pipeline, PipelineConfig};

/// Generate student data, fit a k-NN regressor and answer JSON prediction requests on stdin or
/// over HTTP.
#[derive(Debug, Parser)]
#[command(name = "gradecast", version)]
struct Cli {
    /// Number of synthetic students to generate
    #[arg(long, default_value_t = 200)]
    samples: usize,

    /// Fraction of students used as reference data
    #[arg(long, default_value_t = 0.8)]
    train_ratio: f64,

    /// Neighbor count for requests that do not set one
    #[arg(short, long, default_value_t = DEFAULT_K)]
    k: usize,

    /// Seed for reproducible runs (OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the generated dataset
    #[arg(long, default_value = "students.csv")]
    csv: PathBuf,

    /// Skip writing the dataset
    #[arg(long)]
    no_csv: bool,

    /// Exit after training and evaluation instead of serving requests
    #[arg(long)]
    no_serve: bool,

    /// Serve the form and predictions over HTTP on this address instead of stdin
    #[arg(long, value_name = "ADDR", conflicts_with = "no_serve")]
    listen: Option<String>,
}

impl Cli {
    fn config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::new()
            .with_samples(self.samples)
            .with_train_ratio(self.train_ratio)
            .with_k(self.k)
            .with_csv_path((!self.no_csv).then(|| self.csv.clone()));
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn run(cli: &Cli) -> gradecast::Result<()> {
    let outcome = pipeline::run(&cli.config())?;
    if let Some(mse) = outcome.test_mse {
        println!("test MSE: {mse:.3}");
    }
    if cli.no_serve {
        return Ok(());
    }

    if let Some(addr) = &cli.listen {
        let runtime = tokio::runtime::Runtime::new()?;
        return runtime.block_on(http::serve_http(Arc::new(outcome.service), addr));
    }

    log::info!("reading JSON requests from stdin, one per line");
    let stdin = io::stdin();
    outcome.service.serve(stdin.lock(), io::stdout().lock())?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["gradecast"]);
        assert_eq!(cli.k, DEFAULT_K);
        assert_eq!(cli.listen, None);
        let config = cli.config();
        assert_eq!(config.k, DEFAULT_K);
        assert_eq!(config.csv_path, Some(PathBuf::from("students.csv")));
    }

    #[test]
    fn test_listen_and_flags() {
        let cli = Cli::parse_from([
            "gradecast", "--listen", "127.0.0.1:8080", "-k", "3", "--seed", "9", "--no-csv",
        ]);
        assert_eq!(cli.listen.as_deref(), Some("127.0.0.1:8080"));
        let config = cli.config();
        assert_eq!(config.k, 3);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.csv_path, None);
        assert!(Cli::try_parse_from(["gradecast", "--listen", "x", "--no-serve"]).is_err());
    }
}
