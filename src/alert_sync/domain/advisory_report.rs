use crate::shared::Result;
use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A single advisory entry reported for a package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    #[serde(default, deserialize_with = "null_as_empty")]
    title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    link: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    cve: String,
}

impl Advisory {
    pub fn new(title: String, link: String, cve: String) -> Self {
        Self { title, link, cve }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// CVE identifier, empty when the advisory has none
    pub fn cve(&self) -> &str {
        &self.cve
    }
}

/// Advisories reported for one installed package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageReport {
    #[serde(default, deserialize_with = "null_as_empty")]
    version: String,
    #[serde(default, deserialize_with = "advisories_map")]
    advisories: BTreeMap<String, Advisory>,
}

impl PackageReport {
    pub fn new(version: String) -> Self {
        Self {
            version,
            advisories: BTreeMap::new(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Advisories keyed by advisory key (e.g. `vendor/package/ADVISORY-ID.yaml`)
    pub fn advisories(&self) -> &BTreeMap<String, Advisory> {
        &self.advisories
    }
}

/// One flattened report entry: a single advisory together with its package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportedAdvisory<'a> {
    pub package_name: &'a str,
    pub version: &'a str,
    pub advisory_key: &'a str,
    pub advisory: &'a Advisory,
}

/// AdvisoryReport - the full result of one check, keyed by package name
///
/// Maps are ordered so that flattening yields a deterministic sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdvisoryReport {
    packages: BTreeMap<String, PackageReport>,
}

impl AdvisoryReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a report from the checker's JSON output
    ///
    /// Both `{}` and `[]` decode to an empty report; the advisory service
    /// uses either to say that no package has advisories.
    ///
    /// # Errors
    /// Returns an error if the input is not valid JSON, or is valid JSON
    /// that does not have the report shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).context("Advisory report is not valid JSON")?;

        if let serde_json::Value::Array(items) = &value {
            if items.is_empty() {
                return Ok(Self::default());
            }
        }

        serde_json::from_value(value)
            .context("Advisory report does not match the expected package/advisories structure")
    }

    /// Adds an advisory for a package, creating the package entry on first use
    pub fn with_advisory(
        mut self,
        package_name: &str,
        version: &str,
        advisory_key: &str,
        advisory: Advisory,
    ) -> Self {
        self.packages
            .entry(package_name.to_string())
            .or_insert_with(|| PackageReport::new(version.to_string()))
            .advisories
            .insert(advisory_key.to_string(), advisory);
        self
    }

    pub fn packages(&self) -> &BTreeMap<String, PackageReport> {
        &self.packages
    }

    /// Flattens the report into one entry per (package, advisory) pair
    pub fn advisories(&self) -> impl Iterator<Item = ReportedAdvisory<'_>> {
        self.packages.iter().flat_map(|(package_name, package)| {
            package
                .advisories
                .iter()
                .map(move |(advisory_key, advisory)| ReportedAdvisory {
                    package_name,
                    version: &package.version,
                    advisory_key,
                    advisory,
                })
        })
    }

    /// Total number of advisories across all packages
    pub fn advisory_count(&self) -> usize {
        self.packages.values().map(|p| p.advisories.len()).sum()
    }

    /// Number of packages that have at least one advisory
    pub fn affected_package_count(&self) -> usize {
        self.packages
            .values()
            .filter(|p| !p.advisories.is_empty())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.advisory_count() == 0
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts the advisories map, `null`, or an empty array (PHP's encoding of an empty map)
fn advisories_map<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, Advisory>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Advisories {
        Map(BTreeMap<String, Advisory>),
        List(Vec<serde::de::IgnoredAny>),
    }

    match Option::<Advisories>::deserialize(deserializer)? {
        None => Ok(BTreeMap::new()),
        Some(Advisories::Map(map)) => Ok(map),
        Some(Advisories::List(items)) if items.is_empty() => Ok(BTreeMap::new()),
        Some(Advisories::List(_)) => Err(serde::de::Error::custom(
            "advisories must be an object keyed by advisory key",
        )),
    }
}
