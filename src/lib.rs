// notion-gap: find the notions one document uses and another never does.
//
// This is the library root. Each module corresponds to a stage of the
// comparison: extraction, vectorizing and ranking, then output.

pub mod config;
pub mod extract;
pub mod notions;
pub mod output;
pub mod pipeline;
