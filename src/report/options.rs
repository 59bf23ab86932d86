//! Report scan limits.

/// Limits applied while building reports.
///
/// `None` means unlimited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectOptions {
    /// Shared strings listed (the overview lists all by default)
    pub max_shared_strings: Option<usize>,

    /// Data rows listed by the overview before scanning stops
    pub max_data_rows: Option<usize>,

    /// Leading rows shown cell by cell in the detailed report
    pub max_detail_rows: Option<usize>,

    /// Data rows sampled at the end of the detailed report
    pub max_sample_rows: Option<usize>,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            max_shared_strings: None,
            max_data_rows: Some(10),
            max_detail_rows: Some(10),
            max_sample_rows: Some(5),
        }
    }
}

impl InspectOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults of the detailed report: only the first 20 shared strings.
    pub fn detailed() -> Self {
        Self {
            max_shared_strings: Some(20),
            ..Self::default()
        }
    }

    /// No limits at all.
    pub fn unlimited() -> Self {
        Self {
            max_shared_strings: None,
            max_data_rows: None,
            max_detail_rows: None,
            max_sample_rows: None,
        }
    }

    /// Set the shared string limit.
    pub fn with_max_shared_strings(mut self, limit: Option<usize>) -> Self {
        self.max_shared_strings = limit;
        self
    }

    /// Set the overview data row limit.
    pub fn with_max_data_rows(mut self, limit: Option<usize>) -> Self {
        self.max_data_rows = limit;
        self
    }

    /// Set the detailed row limit.
    pub fn with_max_detail_rows(mut self, limit: Option<usize>) -> Self {
        self.max_detail_rows = limit;
        self
    }

    /// Set the sampled data row limit.
    pub fn with_max_sample_rows(mut self, limit: Option<usize>) -> Self {
        self.max_sample_rows = limit;
        self
    }
}

/// Apply an optional limit to a length.
pub(crate) fn cap(len: usize, limit: Option<usize>) -> usize {
    limit.map_or(len, |l| len.min(l))
}
