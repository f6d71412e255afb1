use crate::application::read_models::MatchReport;
use crate::shared::Result;

/// MatchFormatter port for rendering match reports
///
/// This port abstracts the formatting logic for the supported output
/// formats (plain text, JSON, Markdown).
pub trait MatchFormatter {
    /// Formats the reports of one run, one report per analysed file
    ///
    /// # Arguments
    /// * `reports` - Match reports in the order the files were analysed
    ///
    /// # Returns
    /// Formatted content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, reports: &[MatchReport]) -> Result<String>;
}
