//! Page envelope and the users payload decoder.

use std::collections::BTreeSet;

use super::decode::{DecodeError, ObjectReader, ROOT_PATH, parse_document};
use super::user::UserRecord;

/// One decoded API response: a bounded list of users plus paging metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPage {
    /// Users in response order.
    pub users: Vec<UserRecord>,
    /// Total number of users available upstream.
    pub total: u64,
    /// Offset of the first user in this page.
    pub skip: u64,
    /// Page size requested.
    pub limit: u64,
}

/// Decode a users payload into a [`UserPage`].
///
/// Decoding is all-or-nothing: the first malformed record fails the page.
///
/// # Errors
///
/// Returns [`DecodeError`] when the body is not JSON, when a declared field is
/// missing or has the wrong shape, or when two users share an id.
///
/// # Examples
///
/// ```rust
/// use directory::domain::{DecodeError, decode_page};
///
/// let error = decode_page(br#"{"total": 0, "skip": 0, "limit": 10}"#)
///     .expect_err("users array is required");
/// assert_eq!(error.missing_field(), Some("users"));
/// ```
pub fn decode_page(body: &[u8]) -> Result<UserPage, DecodeError> {
    let document = parse_document(body)?;
    let root = ObjectReader::new(&document, ROOT_PATH)?;

    let users = root
        .objects("users")?
        .iter()
        .map(UserRecord::read)
        .collect::<Result<Vec<_>, _>>()?;
    ensure_unique_ids(&users)?;

    Ok(UserPage {
        users,
        total: root.unsigned("total")?,
        skip: root.unsigned("skip")?,
        limit: root.unsigned("limit")?,
    })
}

fn ensure_unique_ids(users: &[UserRecord]) -> Result<(), DecodeError> {
    let mut seen = BTreeSet::new();
    for user in users {
        if !seen.insert(user.id) {
            return Err(DecodeError::DuplicateId { id: user.id.get() });
        }
    }
    Ok(())
}
