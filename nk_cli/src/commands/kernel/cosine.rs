use crate::cli::CosineArgs;
use crate::error::Result;
use crate::utils::output::print_json;
use nk_core::types::Matrix;
use nk_kernel::{CosineOptions, NumericKernel};

pub fn options(args: &CosineArgs) -> CosineOptions {
    CosineOptions::new(args.top_n, !args.no_mean, !args.no_std)
}

pub fn run<K: NumericKernel + ?Sized>(kernel: &K, args: &CosineArgs) -> Result<Matrix> {
    let x = Matrix::from_json_file(&args.x)?;
    Ok(kernel.cosine_similarity(&x, &options(args))?)
}

pub fn handle<K: NumericKernel + ?Sized>(kernel: &K, args: &CosineArgs) -> Result<()> {
    print_json(&run(kernel, args)?)
}
