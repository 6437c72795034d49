pub mod kernel;
pub mod util;
