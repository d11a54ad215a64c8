//! Benchmark binary timing every registered indicator.
//!
//! Usage:
//!     kline_ta_bench <data_file> <iterations>
//!
//! The data file is JSON of the form `{"candles": [{"timestamp": ..,
//! "open": .., "high": .., "low": .., "close": .., "volume": ..}, ..]}`.
//! Outputs a JSON array of benchmark results to stdout; logs go to stderr and
//! follow `RUST_LOG`.

use std::env;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

use kline_ta::{IndicatorRegistry, IndicatorRequest, NanMode, PricePoint, PriceSeries};

#[derive(Debug, Deserialize)]
struct CandleFile {
    candles: Vec<PricePoint<f64>>,
}

#[derive(Debug, Serialize)]
struct BenchmarkResult {
    name: String,
    candles: usize,
    iterations: usize,
    total_time_ms: f64,
    avg_time_ms: f64,
    min_time_ms: f64,
    max_time_ms: f64,
    throughput_candles_per_sec: f64,
}

fn load_candles(path: &str) -> Result<PriceSeries<f64>, Box<dyn Error>> {
    let reader = BufReader::new(File::open(path)?);
    let data: CandleFile = serde_json::from_reader(reader)?;
    Ok(data.candles.into_iter().collect())
}

fn benchmark<F>(name: &str, iterations: usize, candles: usize, mut f: F) -> Result<BenchmarkResult, Box<dyn Error>>
where
    F: FnMut() -> kline_ta::Result<()>,
{
    let mut times = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let start = Instant::now();
        f()?;
        times.push(start.elapsed().as_secs_f64() * 1000.0);
    }

    let total_time: f64 = times.iter().sum();
    let avg_time = total_time / iterations as f64;
    let min_time = times.iter().copied().fold(f64::INFINITY, f64::min);
    let max_time = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let throughput = if avg_time > 0.0 {
        (candles as f64 / avg_time) * 1000.0
    } else {
        0.0
    };

    Ok(BenchmarkResult {
        name: name.to_string(),
        candles,
        iterations,
        total_time_ms: total_time,
        avg_time_ms: avg_time,
        min_time_ms: min_time,
        max_time_ms: max_time,
        throughput_candles_per_sec: throughput,
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        return Err(format!("usage: {} <data_file> <iterations>", args[0]).into());
    }
    let data_file = &args[1];
    let iterations: usize = args[2].parse()?;
    if iterations == 0 {
        return Err("iterations must be at least 1".into());
    }

    info!(path = %data_file, "loading candles");
    let series = load_candles(data_file)?;
    let candles = series.len();
    info!(candles, "loaded candles");

    let registry = IndicatorRegistry::new().with_nan_mode(NanMode::Reject);
    let mut results = Vec::new();

    for name in registry.names() {
        let request = IndicatorRequest::new(name);
        info!(indicator = name, iterations, "benchmarking");
        results.push(benchmark(name, iterations, candles, || {
            registry.compute(&series, &request).map(|_| ())
        })?);
    }

    println!("{}", serde_json::to_string(&results)?);
    Ok(())
}
