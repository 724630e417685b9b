pub mod cli;
pub mod dispatch;
pub mod errors;
pub mod models;
pub mod report;
pub mod running;
pub mod storage;
pub mod swimming;
pub mod training;
pub mod walking;

#[cfg(feature = "python")]
mod py;

pub use dispatch::{read_package, WorkoutKind};
pub use errors::{PackageError, WorkoutError};
pub use models::Session;
pub use report::Summary;
pub use running::Running;
pub use storage::{demo_packages, load_packages, save_packages, Package};
pub use swimming::Swimming;
pub use training::Training;
pub use walking::SportsWalking;
