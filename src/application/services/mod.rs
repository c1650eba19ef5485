//! Operations layer — typed pass-throughs over the ECS API port.
//!
//! [`Ecs`] holds the API handle, the configured region, and the poller;
//! every method builds a typed parameter struct, injects the region, and
//! invokes one port method. The asynchronous operations drive
//! [`crate::application::poll::Poller`] until the remote transition lands.

mod address;
mod cleanup;
mod copy;
mod image;
mod instance;
mod listing;

pub use copy::CopyOptions;
pub use image::image_name_for;

use crate::application::poll::Poller;

/// Operations over a configured region, generic over the API port.
///
/// The region and the client handle are fixed at construction and immutable
/// for the process lifetime.
pub struct Ecs<A> {
    api: A,
    region: String,
    poller: Poller,
}

impl<A> Ecs<A> {
    /// Build the operations layer from its explicit configuration.
    pub fn new(api: A, region: impl Into<String>, poller: Poller) -> Self {
        Self {
            api,
            region: region.into(),
            poller,
        }
    }

    /// The configured region, injected into every outbound request.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The underlying API client.
    pub fn api(&self) -> &A {
        &self.api
    }
}
