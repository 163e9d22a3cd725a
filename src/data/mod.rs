pub mod dataset;
pub mod features;
pub mod loader;

pub use dataset::Dataset;
pub use features::polynomial_map;
