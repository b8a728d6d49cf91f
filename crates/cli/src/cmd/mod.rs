mod generate;
mod make_crate;

pub use generate::cmd_gen;
pub use make_crate::{MakeCrateArgs, cmd_make_crate};
