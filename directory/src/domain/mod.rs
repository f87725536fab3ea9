//! Directory domain: decoding, projection, search and load orchestration.
//!
//! Purpose: turn one DummyJSON users page into the list a people directory
//! renders, and keep that list published for subscribers. Nothing here
//! performs I/O directly; the users page arrives through
//! [`ports::UsersSource`].
//!
//! Public surface:
//! - `decode_page` / `UserPage` / `DecodeError`: strict page decoding.
//! - `UserRecord` and its nested value types: the decoded payload.
//! - `DisplayRecord` / `project_all`: the render-ready projection.
//! - `ImageUrlAssigner`: positional avatar URLs.
//! - `SearchQuery` / `filter_by_name`: case-insensitive name filtering.
//! - `UserDetail`: the sectioned read-only detail view.
//! - `DirectoryService` / `DirectoryState`: fetch orchestration and state.

mod decode;
mod detail;
mod directory_service;
mod display;
mod error;
mod image_url;
mod page;
pub mod ports;
mod search;
mod user;

pub use self::decode::DecodeError;
pub use self::detail::{DetailRow, DetailSection, Photo, UserDetail};
pub use self::directory_service::{DirectoryService, DirectoryState, LoadStatus};
pub use self::display::{DisplayRecord, project_all};
pub use self::error::{HttpError, LoadError};
pub use self::image_url::{DEFAULT_IMAGE_BASE_URL, DEFAULT_IMAGE_START, ImageUrlAssigner};
pub use self::page::{UserPage, decode_page};
pub use self::search::{SearchQuery, filter_by_name};
pub use self::user::{
    Address, Bank, Company, Coordinates, Crypto, Hair, Sensitive, UserId, UserRecord,
};
