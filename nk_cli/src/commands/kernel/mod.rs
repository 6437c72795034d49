pub mod compare;
pub mod cosine;
pub mod multiply;
pub mod row_mean;
