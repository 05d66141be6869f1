pub mod fftn;
pub mod shape;
