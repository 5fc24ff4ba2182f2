/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod api;
pub mod client;
pub mod decode;
pub mod error;
pub mod order;
pub mod orderbook;
pub mod stock;
pub mod venue;

pub use error::{ErrorKind, Result, XfighterError};

pub use client::{ClientConfig, RawResponse, XfighterClient};
pub use decode::decode_response;
