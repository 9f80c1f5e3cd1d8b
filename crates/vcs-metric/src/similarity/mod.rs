pub mod matrix;

pub use matrix::build_matrix;
