// Composition root for the estimates service: configuration, wiring of the
// in-memory adapters into the use case handlers, and the HTTP/GraphQL surface.

pub mod config;
pub mod error;
pub mod graphql;
pub mod http;
pub mod identity;
pub mod state;
