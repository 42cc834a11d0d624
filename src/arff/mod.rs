mod parser;
mod reader;

pub use reader::load_dataset;
