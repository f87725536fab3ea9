//! DummyJSON outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `UsersSource` port.

mod http_source;

pub use http_source::DummyJsonHttpSource;
