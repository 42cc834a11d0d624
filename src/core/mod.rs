pub mod attributes;
pub mod dataset;
pub mod error;
pub mod instance_header;
pub mod row;

pub use dataset::Dataset;
pub use error::DataError;
pub use instance_header::InstanceHeader;
pub use row::Row;
