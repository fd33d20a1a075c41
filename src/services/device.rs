//! Device capabilities the retrieval service depends on.
//!
//! Location and connectivity come from the environment the service runs in,
//! so they are injected rather than queried from a platform runtime.

use crate::models::location::Coordinates;
use std::future::Future;

pub trait LocationProvider: Send + Sync {
    /// Current position, or `None` when it cannot be determined.
    fn current(&self) -> impl Future<Output = Option<Coordinates>> + Send;
}

pub trait ConnectivityChecker: Send + Sync {
    fn is_online(&self) -> bool;
}

/// Location provider backed by a configured, possibly absent, position.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation {
    coordinates: Option<Coordinates>,
}

impl FixedLocation {
    pub fn new(coordinates: Option<Coordinates>) -> Self {
        Self { coordinates }
    }
}

impl LocationProvider for FixedLocation {
    async fn current(&self) -> Option<Coordinates> {
        self.coordinates
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOnline;

impl ConnectivityChecker for AlwaysOnline {
    fn is_online(&self) -> bool {
        true
    }
}
