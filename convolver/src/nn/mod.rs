pub mod dense;
pub mod pool;
