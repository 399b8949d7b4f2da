mod backtrack;
mod output;
mod score_table;

pub use backtrack::*;
pub use output::*;
pub use score_table::*;

#[cfg(test)]
mod test;
