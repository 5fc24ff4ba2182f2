/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Xfighter client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Typed async client for the Stockfighter-style trading simulation API.
//!
//! Every operation is a single round trip returning [`Result`]; failures are
//! classified into [`XfighterError`] variants by [`decode_response`].

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    ErrorKind,
    RawResponse,
    Result,
    XfighterClient,
    XfighterError,
    decode_response,
};

// Re-export all types
pub use types::*;
