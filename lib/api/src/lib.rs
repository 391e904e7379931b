//! # Proxima API
//!
//! Everything between the domain records of `proxima-core` and a Proxima BE
//! server: request assembly, response decoding, the [`Transport`] seam and a
//! gRPC implementation of it.

pub mod client;
pub mod collection;
pub mod generic;
pub mod grpc;
pub mod query;
pub mod request;
pub mod response;
pub mod transport;
pub mod write;

pub use client::{ProximaClient, CLIENT_VERSION};
pub use grpc::GrpcTransport;
pub use request::ListFilter;
pub use transport::Transport;
