use crate::cli::RowMeanArgs;
use crate::error::Result;
use crate::utils::output::print_json;
use nk_core::types::vector::vector_from_json_file;
use nk_core::types::{Matrix, Vector};
use nk_kernel::NumericKernel;

pub fn run<K: NumericKernel + ?Sized>(kernel: &K, args: &RowMeanArgs) -> Result<Vector> {
    let x = Matrix::from_json_file(&args.x)?;
    let weights = match &args.weights {
        Some(path) => vector_from_json_file(path)?,
        None => Vec::new(),
    };
    Ok(kernel.row_mean(&x, &weights)?)
}

pub fn handle<K: NumericKernel + ?Sized>(kernel: &K, args: &RowMeanArgs) -> Result<()> {
    print_json(&run(kernel, args)?)
}
