//! CLI command implementations

pub mod describe;

pub use describe::{DescribeArgs, DescribeOutcome, handle_describe};
