mod knn;
mod neighbor_list;

pub use knn::{DEFAULT_K, NearestNeighbor};
