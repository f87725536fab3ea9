//! Display projection of user records.

use serde::Serialize;

use super::user::{UserId, UserRecord};

/// Reduced, presentation-facing view of one user.
///
/// ## Invariants
/// - `full_name` is `first_name + " " + last_name` of the source record.
/// - `image_url` is `None` until the image assigner populates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    id: UserId,
    full_name: String,
    city: String,
    state: String,
    image_url: Option<String>,
}

impl DisplayRecord {
    /// Build a record without an image URL.
    pub fn new(
        id: UserId,
        full_name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            city: city.into(),
            state: state.into(),
            image_url: None,
        }
    }

    /// Project a decoded user into its display form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use directory::domain::{DisplayRecord, decode_page};
    /// use directory::test_support::{page_body, user_json};
    ///
    /// let body = page_body(vec![user_json(1, "Emily", "Johnson", "Phoenix", "Mississippi")]);
    /// let page = decode_page(&body).expect("valid page");
    /// let record = DisplayRecord::project(&page.users[0]);
    /// assert_eq!(record.full_name(), "Emily Johnson");
    /// assert!(record.image_url().is_none());
    /// ```
    pub fn project(user: &UserRecord) -> Self {
        Self::new(
            user.id,
            format!("{} {}", user.first_name, user.last_name),
            user.address.city.as_str(),
            user.address.state.as_str(),
        )
    }

    /// Return the record with its image URL populated.
    pub fn with_image_url(self, image_url: impl Into<String>) -> Self {
        Self {
            image_url: Some(image_url.into()),
            ..self
        }
    }

    /// Identifier shared with the source record.
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// First and last name joined by one space.
    pub fn full_name(&self) -> &str {
        self.full_name.as_str()
    }

    /// City of the home address.
    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    /// State of the home address.
    pub fn state(&self) -> &str {
        self.state.as_str()
    }

    /// Placeholder image URL, once assigned.
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Single-line location text shown under the name in list rows.
    pub fn location_line(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

/// Project every user of a page, preserving order.
pub fn project_all(users: &[UserRecord]) -> Vec<DisplayRecord> {
    users.iter().map(DisplayRecord::project).collect()
}
