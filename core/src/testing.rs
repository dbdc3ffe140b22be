pub mod result;
pub mod runner;
pub mod testcase;

pub use result::*;
pub use runner::*;
pub use testcase::*;
