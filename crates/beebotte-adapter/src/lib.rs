/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Beebotte adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod resource;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApiError,
    ApiErrorKind,
    BeebotteClient,
    BeebotteError,
    ClientConfig,
    Credentials,
    Endpoints,
    RequestSigner,
    Result,
};

pub use resource::{ReadOptions, Resource};

// Re-export all types
pub use types::*;
