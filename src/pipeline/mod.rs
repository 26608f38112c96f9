// Comparison pipeline: two raw texts in, one ranked difference out.

pub mod compare;
