pub mod combinations;
pub mod error;
pub mod lagrange;
pub mod points;
pub mod reconstruct;
pub mod share;

pub use error::{IngestError, ReconstructError};
pub use reconstruct::{Reconstruction, RobustReconstructor};
pub use share::Share;
