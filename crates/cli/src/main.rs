use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

use frechet_cert::api::{decide_and_certify, less_than, no_certificate, yes_certificate, GeomCfg};

mod curves;

#[derive(Parser)]
#[command(name = "frechet-cert")]
#[command(about = "Certifying Fréchet-distance decision runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Decide one curve pair and print or write the certificate
    Decide {
        #[arg(long)]
        curve1: PathBuf,
        #[arg(long)]
        curve2: PathBuf,
        #[arg(long)]
        delta: f64,
        /// Force an orientation instead of deciding automatically
        #[arg(long, value_parser = ["yes", "no", "auto"], default_value = "auto")]
        certify: String,
        /// Write a JSON report here instead of dumping text to stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run a query file (`curve1 curve2 delta` per line) against a data
    /// directory and write a JSON summary
    Bench {
        #[arg(long)]
        queries: PathBuf,
        #[arg(long)]
        data: PathBuf,
        /// Skip curve pairs with more points than this on either side
        #[arg(long, default_value_t = 500)]
        max_size: usize,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Decide {
            curve1,
            curve2,
            delta,
            certify,
            out,
        } => decide(&curve1, &curve2, delta, &certify, out.as_deref()),
        Action::Bench {
            queries,
            data,
            max_size,
            out,
        } => bench(&queries, &data, max_size, &out),
    }
}

#[derive(Serialize)]
struct DecideReport {
    answer: Option<bool>,
    cross_check: bool,
    delta: f64,
    certificate_size: usize,
    millis: u128,
}

fn decide(
    curve1: &Path,
    curve2: &Path,
    delta: f64,
    certify: &str,
    out: Option<&Path>,
) -> Result<()> {
    let c1 = curves::read_curve(curve1)?;
    let c2 = curves::read_curve(curve2)?;
    tracing::info!(n = c1.size(), m = c2.size(), delta, "decide");

    let start = Instant::now();
    let cert = match certify {
        "yes" => yes_certificate(&c1, &c2, delta, GeomCfg::default()),
        "no" => no_certificate(&c1, &c2, delta, GeomCfg::default()),
        _ => decide_and_certify(&c1, &c2, delta),
    };
    let elapsed = start.elapsed();

    let plain = less_than(&c1, &c2, delta);
    let cross_check = cert.answer().map_or(true, |a| a == plain);
    if !cross_check {
        tracing::warn!(plain, "answer disagrees with the plain decider");
    }

    match out {
        Some(path) => {
            let report = DecideReport {
                answer: cert.answer(),
                cross_check,
                delta,
                certificate_size: cert.size(),
                millis: elapsed.as_millis(),
            };
            std::fs::write(path, serde_json::to_string_pretty(&report)?)
                .with_context(|| format!("writing report to {}", path.display()))?;
        }
        None => print!("{}", cert.dump()),
    }
    tracing::info!(millis = elapsed.as_millis() as u64, size = cert.size(), "done");
    Ok(())
}

#[derive(Serialize)]
struct BenchReport {
    queries: usize,
    decided: usize,
    skipped: usize,
    mismatches: usize,
    total_millis: u128,
    /// Certificate size -> number of certificates of that size.
    size_histogram: BTreeMap<usize, usize>,
}

fn bench(queries: &Path, data: &Path, max_size: usize, out: &Path) -> Result<()> {
    let text = std::fs::read_to_string(queries)
        .with_context(|| format!("reading query file {}", queries.display()))?;
    let mut report = BenchReport {
        queries: 0,
        decided: 0,
        skipped: 0,
        mismatches: 0,
        total_millis: 0,
        size_histogram: BTreeMap::new(),
    };

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        let mut it = line.split_whitespace();
        let (Some(f1), Some(f2), Some(ds)) = (it.next(), it.next(), it.next()) else {
            anyhow::bail!("query line `{line}`: expected `curve1 curve2 delta`");
        };
        let delta: f64 = ds
            .parse()
            .with_context(|| format!("query line `{line}`: bad delta"))?;
        report.queries += 1;

        let c1 = curves::read_curve(&data.join(f1))?;
        let c2 = curves::read_curve(&data.join(f2))?;
        // External cost bound: the construction is superquadratic, so the
        // driver refuses oversized pairs instead of the core.
        if c1.size() > max_size || c2.size() > max_size || c1.size() < 2 || c2.size() < 2 {
            report.skipped += 1;
            tracing::debug!(f1, f2, n = c1.size(), m = c2.size(), "skipped");
            continue;
        }

        let start = Instant::now();
        let cert = decide_and_certify(&c1, &c2, delta);
        let elapsed = start.elapsed();
        report.total_millis += elapsed.as_millis();
        report.decided += 1;
        *report.size_histogram.entry(cert.size()).or_insert(0) += 1;

        let plain = less_than(&c1, &c2, delta);
        if cert.answer() != Some(plain) {
            report.mismatches += 1;
            tracing::warn!(f1, f2, delta, "mismatch against the plain decider");
        }
        tracing::info!(
            f1,
            f2,
            delta,
            answer = cert.answer(),
            size = cert.size(),
            millis = elapsed.as_millis() as u64,
            "query"
        );
    }

    std::fs::write(out, serde_json::to_string_pretty(&report)?)
        .with_context(|| format!("writing summary to {}", out.display()))?;
    tracing::info!(
        decided = report.decided,
        skipped = report.skipped,
        mismatches = report.mismatches,
        "bench complete"
    );
    Ok(())
}
