pub mod accel;
pub mod config;
pub mod data;
pub mod error;
pub mod optim;
pub mod train;

pub use accel::{SoftwareAccelerator, VectorAccelerator};
pub use config::TrainConfig;
pub use data::{Dataset, loader, polynomial_map};
pub use error::{Result, TrainError};
pub use train::{BatchedStrategy, GradientStrategy, ReferenceStrategy, Trainer};
