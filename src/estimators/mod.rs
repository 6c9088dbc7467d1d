pub mod approaches;
pub mod entropy;
pub mod mutual_information;
pub mod pid;
pub mod traits;
pub mod transfer_entropy;
pub mod utils;

pub use traits::{GlobalValue, LocalValues};
