//! Read-only detail view for a selected user.
//!
//! A detail can only be built from a [`DisplayRecord`], so there is no way to
//! open a detail view without a selection.

use super::display::DisplayRecord;

/// Content of the photo row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Photo {
    /// Remote image to load.
    Remote(String),
    /// No image assigned; render the generic avatar.
    Placeholder,
}

/// One labelled value in a detail section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    /// Row label, e.g. `City`.
    pub label: &'static str,
    /// Row value.
    pub value: String,
}

/// A titled group of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    /// Section header, e.g. `LOCATION`.
    pub header: &'static str,
    /// Rows in display order.
    pub rows: Vec<DetailRow>,
}

/// Detail view model for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetail {
    title: String,
    photo: Photo,
    sections: Vec<DetailSection>,
}

impl UserDetail {
    /// Build the detail view for `record`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use directory::domain::{DisplayRecord, Photo, UserDetail, UserId};
    ///
    /// let record = DisplayRecord::new(UserId::new(1), "Emily Johnson", "Phoenix", "Mississippi");
    /// let detail = UserDetail::from_record(&record);
    /// assert_eq!(detail.title(), "Emily Johnson");
    /// assert_eq!(detail.photo(), &Photo::Placeholder);
    /// ```
    pub fn from_record(record: &DisplayRecord) -> Self {
        let photo = record
            .image_url()
            .map_or(Photo::Placeholder, |url| Photo::Remote(url.to_owned()));
        let sections = vec![
            DetailSection {
                header: "NAME",
                rows: vec![row("Name", record.full_name())],
            },
            DetailSection {
                header: "LOCATION",
                rows: vec![row("State", record.state()), row("City", record.city())],
            },
        ];
        Self {
            title: record.full_name().to_owned(),
            photo,
            sections,
        }
    }

    /// Navigation title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Photo shown in the `PHOTO` section.
    pub const fn photo(&self) -> &Photo {
        &self.photo
    }

    /// Text sections following the photo.
    pub fn sections(&self) -> &[DetailSection] {
        &self.sections
    }
}

fn row(label: &'static str, value: &str) -> DetailRow {
    DetailRow {
        label,
        value: value.to_owned(),
    }
}
