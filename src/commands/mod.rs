pub mod completions;
pub mod scan;
