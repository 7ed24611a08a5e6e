//! CLI for hierarchical clustering of `.npy` data matrices.

mod data;
mod logger;
mod options;
mod report;

use std::path::PathBuf;

use clap::Parser;

use data::ShellData;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a 2-d `.npy` array of `f32` or `f64`, one observation per row.
    #[arg(short('i'), long)]
    inp_path: PathBuf,

    /// The linkage rule.
    #[arg(short('l'), long, value_enum, default_value_t = options::ShellLinkage::Complete)]
    linkage: options::ShellLinkage,

    /// The distance function.
    #[arg(short('d'), long, value_enum, default_value_t = options::ShellDistance::Euclidean)]
    distance: options::ShellDistance,

    /// The number of flat clusters to print.
    #[arg(short('k'), long)]
    num_clusters: Option<usize>,

    /// Where to write a JSON report of the merges, clusters and tree.
    #[arg(short('o'), long)]
    out_path: Option<PathBuf>,

    /// Compute the similarity matrix in parallel.
    #[arg(short('p'), long, default_value_t = false)]
    parallel: bool,

    /// Log every merge.
    #[arg(short('v'), long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    println!("Args: {args:?}");

    let level = if args.verbose {
        ftlog::LevelFilter::Debug
    } else {
        ftlog::LevelFilter::Info
    };
    let (_guard, log_path) = logger::configure_logger("hclust-shell", level)?;
    println!("Log file: {log_path:?}");

    ftlog::info!("{args:?}");

    let inp_path = args.inp_path.canonicalize().map_err(|e| e.to_string())?;
    ftlog::info!("Input path: {inp_path:?}");

    let options = hclust::Options::default()
        .with_linkage(args.linkage.into())
        .with_distance(args.distance.into());

    let data = ShellData::read(&inp_path)?;
    ftlog::info!("Read {} observations.", data.cardinality());

    match data {
        ShellData::F32(rows) => emit(&report::run(rows, options, args.num_clusters, args.parallel)?, args.out_path)?,
        ShellData::F64(rows) => emit(&report::run(rows, options, args.num_clusters, args.parallel)?, args.out_path)?,
    }

    Ok(())
}

/// Prints the clusters of `report` and writes it to `out_path`, if given.
fn emit<T: serde::Serialize>(report: &report::Report<T>, out_path: Option<PathBuf>) -> Result<(), String> {
    if let Some(clusters) = report.clusters() {
        for (i, cluster) in clusters.iter().enumerate() {
            println!("Cluster {i}: {cluster:?}");
        }
    }

    if let Some(out_path) = out_path {
        ftlog::info!("Writing report to {out_path:?}");
        report.write_to(&out_path)?;
        println!("Report: {out_path:?}");
    }

    Ok(())
}
