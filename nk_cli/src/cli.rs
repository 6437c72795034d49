use clap::{Args, Parser, Subcommand};
use nk_core::types::Strategy;
use nk_kernel::kernel::DEFAULT_TOP_N;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Dense matrix kernels and small file utilities", long_about = None)]
pub struct Cli {
    /// Kernel implementation: `reference` or `vectorized`
    #[arg(short, long, global = true)]
    pub strategy: Option<Strategy>,

    /// Fail on NaN/inf results instead of printing them
    #[arg(long, global = true)]
    pub strict: bool,

    /// JSON file with `strategy` and `strict` keys
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// -v for debug logs, -vv for trace; overrides RUST_LOG when given
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Matrix product X · Y
    Multiply(MultiplyArgs),
    /// Mean of every row, optionally weighted
    RowMean(RowMeanArgs),
    /// Pairwise row cosine similarity with centering, scaling and top-n masking
    Cosine(CosineArgs),
    /// Run both strategies and report how far apart they are
    #[command(subcommand)]
    Compare(KernelOp),
    /// Print a directory tree
    Tree {
        #[arg()]
        path: PathBuf,
        /// Only list files whose name ends with this suffix
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Load, merge and query key/value files (.json or .csv)
    Dict(DictArgs),
}

#[derive(Subcommand, Debug)]
pub enum KernelOp {
    Multiply(MultiplyArgs),
    RowMean(RowMeanArgs),
    Cosine(CosineArgs),
}

#[derive(Args, Debug, Clone)]
pub struct MultiplyArgs {
    /// JSON matrix of shape (N, M)
    #[arg(short, long)]
    pub x: PathBuf,
    /// JSON matrix of shape (M, K)
    #[arg(short, long)]
    pub y: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct RowMeanArgs {
    #[arg(short, long)]
    pub x: PathBuf,
    /// JSON array of M weights
    #[arg(short, long)]
    pub weights: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CosineArgs {
    #[arg(short, long)]
    pub x: PathBuf,
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,
    /// Skip subtracting the row mean
    #[arg(long)]
    pub no_mean: bool,
    /// Skip dividing by the row standard deviation
    #[arg(long)]
    pub no_std: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DictArgs {
    /// Files merged left to right; later keys overwrite earlier ones
    #[arg(short, long, required = true, num_args = 1..)]
    pub input: Vec<PathBuf>,
    /// CSV key and value column names, e.g. `--fields name,score`
    #[arg(long, value_delimiter = ',', default_values = ["key", "value"])]
    pub fields: Vec<String>,
    #[arg(short, long, default_value = "b")]
    pub prefix: String,
    #[arg(long)]
    pub to_json: Option<PathBuf>,
    #[arg(long)]
    pub to_csv: Option<PathBuf>,
}
