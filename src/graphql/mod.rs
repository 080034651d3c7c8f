/// GraphQL wire layer: request envelope, transport seam, wire errors.
pub mod errors;
pub mod request;
pub mod transport;

#[cfg(test)]
pub mod testing;

pub use errors::GraphQlError;
pub use request::execute;
pub use transport::{DEFAULT_TIMEOUT, HttpTransport, Transport};
