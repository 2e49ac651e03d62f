mod authority;
mod contract;
mod details;
mod notarise;
mod types;

pub use authority::{AuthorizationOracle, DenyAll, Ed25519Witness, FixedHeight, HeightProvider};
pub use contract::{to_wire, NotaryContract, OperationError};
pub use details::{DetailsError, GetDetailsUseCase};
pub use notarise::{NotariseError, NotariseUseCase};
pub use types::{
    ErrorResponse, OperationPayload, OperationResponse, Request, RequestError, GETDETAILS,
    NOTARISE,
};
