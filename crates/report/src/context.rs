use jiff::civil::Date;

/// Project details printed on every document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    /// Short description of the tank, prefixed by its capacity in headings.
    pub project: String,
    pub client: String,
    pub designer: String,
    pub date: Date,
}

impl ReportContext {
    /// Returns the default project details, dated `date`.
    #[must_use]
    pub fn new(date: Date) -> Self {
        Self {
            project: "Above-Ground Petroleum Storage Tank".to_string(),
            client: "Professional Engineering Application".to_string(),
            designer: "Solprov Engineering (Pty) Ltd".to_string(),
            date,
        }
    }
}
