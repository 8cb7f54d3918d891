//! Raw call sites and the sources that produce them.

use crate::utils::error::ExtractionError;
use serde::{Deserialize, Serialize};

/// A single stack record as captured at throw time, before enrichment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    /// Enclosing function, absent for anonymous callees
    #[serde(default)]
    pub function_name: Option<String>,

    /// Absolute/relative path, or a runtime pseudo-path like `node:events`
    #[serde(default)]
    pub file_name: Option<String>,

    /// 1-based line number
    #[serde(default)]
    pub line_number: Option<u32>,

    /// 1-based column number
    #[serde(default)]
    pub column_number: Option<u32>,

    /// Builtin frame with no source location
    #[serde(default)]
    pub native: bool,
}

impl CallSite {
    /// Create a call site from its location
    ///
    /// **Public** - constructor
    pub fn new(
        function_name: Option<&str>,
        file_name: Option<&str>,
        line_number: Option<u32>,
    ) -> Self {
        Self {
            function_name: function_name.map(str::to_string),
            file_name: file_name.map(str::to_string),
            line_number,
            ..Self::default()
        }
    }

    /// Attach a column number
    pub fn with_column(mut self, column_number: u32) -> Self {
        self.column_number = Some(column_number);
        self
    }
}

/// Anything that can be decomposed into call sites
///
/// Implementations must return call sites most recent first. The
/// enricher relies on that order to emit frames oldest first.
pub trait CallSiteSource {
    /// Decompose into call sites, newest first
    ///
    /// # Errors
    /// * `ExtractionError` - the value cannot be decomposed
    fn call_sites(&self) -> Result<Vec<CallSite>, ExtractionError>;
}

impl CallSiteSource for [CallSite] {
    fn call_sites(&self) -> Result<Vec<CallSite>, ExtractionError> {
        Ok(self.to_vec())
    }
}

impl CallSiteSource for Vec<CallSite> {
    fn call_sites(&self) -> Result<Vec<CallSite>, ExtractionError> {
        self.as_slice().call_sites()
    }
}

impl<T: CallSiteSource + ?Sized> CallSiteSource for &T {
    fn call_sites(&self) -> Result<Vec<CallSite>, ExtractionError> {
        (**self).call_sites()
    }
}
