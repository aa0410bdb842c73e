pub mod fault;
pub mod latency;
pub mod requests;
pub mod simulated;
pub mod traits;

pub use fault::{Fault, FaultPlan, OperationKind};
pub use latency::LatencyProfile;
pub use requests::{execute_request, AddItemRequest, CreateFolderRequest, VaultRequest, VaultResponse};
pub use simulated::SimulatedBackend;
pub use traits::*;
