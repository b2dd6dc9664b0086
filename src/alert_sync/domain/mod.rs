pub mod advisory_report;
pub mod manifest;
pub mod security_alert;

pub use advisory_report::{Advisory, AdvisoryReport, PackageReport, ReportedAdvisory};
pub use manifest::Manifest;
pub use security_alert::{AlertFields, AlertKey, SecurityAlert};
