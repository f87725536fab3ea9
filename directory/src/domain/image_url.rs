//! Positional placeholder image assignment.
//!
//! Image URLs depend only on a record's position in the page, never on its
//! contents: the i-th record receives `base + zero_pad(start + i, 6) + ".jpg"`.

use super::display::DisplayRecord;

/// Default base URL for placeholder faces.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://ozgrozer.github.io/100k-faces/0/3/";
/// Default counter assigned to the first record of a page.
pub const DEFAULT_IMAGE_START: u32 = 3101;

const COUNTER_WIDTH: usize = 6;

/// Assigns placeholder image URLs from a base URL and a running counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlAssigner {
    base_url: String,
    start: u32,
}

impl Default for ImageUrlAssigner {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URL, DEFAULT_IMAGE_START)
    }
}

impl ImageUrlAssigner {
    /// Build an assigner for the given base URL and starting counter.
    pub fn new(base_url: impl Into<String>, start: u32) -> Self {
        Self {
            base_url: base_url.into(),
            start,
        }
    }

    /// URL for the record at `index` in arrival order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use directory::domain::ImageUrlAssigner;
    ///
    /// let assigner = ImageUrlAssigner::new("https://faces.test/0/3/", 3101);
    /// assert_eq!(assigner.url_for(1), "https://faces.test/0/3/003102.jpg");
    /// ```
    pub fn url_for(&self, index: usize) -> String {
        let offset = u64::try_from(index).unwrap_or(u64::MAX);
        let counter = u64::from(self.start).saturating_add(offset);
        format!(
            "{base}{counter:0width$}.jpg",
            base = self.base_url,
            width = COUNTER_WIDTH
        )
    }

    /// Populate the image URL of every record by position.
    pub fn assign(&self, records: Vec<DisplayRecord>) -> Vec<DisplayRecord> {
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.with_image_url(self.url_for(index)))
            .collect()
    }
}
