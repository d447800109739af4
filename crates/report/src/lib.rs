//! Documents generated from a computed [`TankDesign`](vessel_design::TankDesign).
//!
//! - [`AnalysisReport`]: the full design analysis in Markdown.
//! - [`SafetyChecklist`]: fabrication to commissioning checklist in Markdown.
//! - [`DesignSummary`]: a flat, serialisable summary for downstream tools.
//!
//! The Markdown documents implement [`std::fmt::Display`], so rendering one is
//! just `report.to_string()`.

mod analysis;
mod checklist;
mod context;
mod markdown;
mod summary;

pub use analysis::AnalysisReport;
pub use checklist::SafetyChecklist;
pub use context::ReportContext;
pub use summary::DesignSummary;

/// File name of the rendered analysis report.
pub const ANALYSIS_REPORT_FILE: &str = "Tank_Design_Analysis_Report.md";

/// File name of the rendered safety checklist.
pub const SAFETY_CHECKLIST_FILE: &str = "Tank_Safety_Compliance_Checklist.md";

/// File name of the JSON design summary.
pub const SUMMARY_FILE: &str = "tank_design.json";
