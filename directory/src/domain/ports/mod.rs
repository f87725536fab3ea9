//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod users_source;

#[cfg(test)]
pub use users_source::MockUsersSource;
pub use users_source::{FixtureUsersSource, TransportError, UsersResponse, UsersSource};
