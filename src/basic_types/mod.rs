mod hash_structures;
mod model_error;
mod propagation_status;
mod pruning;

pub use hash_structures::*;
pub use model_error::ModelError;
pub use propagation_status::DomainWipeout;
pub use propagation_status::Propagation;
pub use propagation_status::PropagationStatus;
pub use pruning::Pruning;
