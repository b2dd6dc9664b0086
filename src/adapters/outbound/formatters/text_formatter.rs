use crate::alert_sync::domain::SecurityAlert;
use crate::application::dto::SyncResponse;
use crate::ports::outbound::SummaryFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// TextSummaryFormatter adapter rendering human-readable output
pub struct TextSummaryFormatter;

impl TextSummaryFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_section(
        out: &mut String,
        heading: &str,
        marker: char,
        alerts: &[SecurityAlert],
    ) -> std::fmt::Result {
        if alerts.is_empty() {
            return Ok(());
        }
        writeln!(out)?;
        writeln!(out, "{}:", heading)?;
        for alert in alerts {
            writeln!(
                out,
                "  {} {}  {} {}  {}",
                marker,
                alert.identifier(),
                alert.package_name(),
                alert.package_version(),
                alert.title()
            )?;
        }
        Ok(())
    }
}

impl Default for TextSummaryFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryFormatter for TextSummaryFormatter {
    fn format_sync(&self, response: &SyncResponse) -> Result<String> {
        let plan = &response.plan;
        let mut out = String::new();

        writeln!(
            out,
            "Security alert sync ({})",
            response.synced_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(
            out,
            "Reported advisories: {} across {} package(s)",
            response.reported_advisories, response.affected_packages
        )?;
        writeln!(
            out,
            "Created: {}  Updated: {}  Deleted: {}",
            plan.created_count(),
            plan.updated_count(),
            plan.deleted_count()
        )?;
        writeln!(out, "Active alerts: {}", response.active_alerts)?;

        Self::write_section(&mut out, "Created", '+', &plan.created)?;
        Self::write_section(&mut out, "Updated", '~', &plan.updated)?;
        Self::write_section(&mut out, "Deleted", '-', &plan.deleted)?;

        Ok(out)
    }

    fn format_alerts(&self, alerts: &[SecurityAlert]) -> Result<String> {
        if alerts.is_empty() {
            return Ok("No active security alerts.\n".to_string());
        }

        let mut out = String::new();
        for alert in alerts {
            writeln!(
                out,
                "{}  {} {}",
                alert.identifier(),
                alert.package_name(),
                alert.package_version()
            )?;
            writeln!(out, "    {}", alert.title())?;
            if !alert.link().is_empty() {
                writeln!(out, "    {}", alert.link())?;
            }
        }
        writeln!(out)?;
        writeln!(out, "{} active security alert(s)", alerts.len())?;

        Ok(out)
    }
}
