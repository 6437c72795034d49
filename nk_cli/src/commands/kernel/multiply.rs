use crate::cli::MultiplyArgs;
use crate::error::Result;
use crate::utils::output::print_json;
use nk_core::types::Matrix;
use nk_kernel::NumericKernel;

pub fn run<K: NumericKernel + ?Sized>(kernel: &K, args: &MultiplyArgs) -> Result<Matrix> {
    let x = Matrix::from_json_file(&args.x)?;
    let y = Matrix::from_json_file(&args.y)?;
    Ok(kernel.multiply(&x, &y)?)
}

pub fn handle<K: NumericKernel + ?Sized>(kernel: &K, args: &MultiplyArgs) -> Result<()> {
    print_json(&run(kernel, args)?)
}
