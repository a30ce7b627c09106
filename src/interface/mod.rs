pub mod rope;
pub mod util;
