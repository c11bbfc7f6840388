//! HTTP clients for the remote users API.

mod transport;
mod user_client;

pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
#[cfg(any(test, feature = "test-utils"))]
pub use transport::MockHttpTransport;
pub use user_client::UserClient;
