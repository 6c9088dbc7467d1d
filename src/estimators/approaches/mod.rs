pub mod discrete;

// Re-exports so callers can import infomeasure-style estimators from
// tripid::estimators::approaches::* directly.
pub use discrete::mle::DiscreteEntropy;
pub use discrete::min_information::MinimumInformation;
pub use discrete::specific_information::SpecificInformation;
pub use discrete::{DiscreteConditionalMutualInformation, DiscreteTransferEntropy};
