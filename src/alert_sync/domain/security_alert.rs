use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Natural identity of a security alert: (package name, advisory key)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertKey {
    package_name: String,
    advisory_key: String,
}

impl AlertKey {
    pub fn new(package_name: &str, advisory_key: &str) -> Self {
        Self {
            package_name: package_name.to_string(),
            advisory_key: advisory_key.to_string(),
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn advisory_key(&self) -> &str {
        &self.advisory_key
    }
}

impl fmt::Display for AlertKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.package_name, self.advisory_key)
    }
}

/// The advisory-derived content of an alert, without record bookkeeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertFields {
    pub package_name: String,
    pub package_version: String,
    pub identifier: String,
    pub title: String,
    pub link: String,
    pub advisory_key: String,
}

impl AlertFields {
    pub fn key(&self) -> AlertKey {
        AlertKey::new(&self.package_name, &self.advisory_key)
    }
}

/// SecurityAlert entity - one persisted row per currently-active advisory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityAlert {
    id: Uuid,
    package_name: String,
    package_version: String,
    identifier: String,
    title: String,
    link: String,
    advisory_key: String,
    created_at: DateTime<Utc>,
    last_edited: DateTime<Utc>,
}

impl SecurityAlert {
    /// Creates a new alert record with a fresh id
    pub fn create(fields: AlertFields, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            package_name: fields.package_name,
            package_version: fields.package_version,
            identifier: fields.identifier,
            title: fields.title,
            link: fields.link,
            advisory_key: fields.advisory_key,
            created_at: now,
            last_edited: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn key(&self) -> AlertKey {
        AlertKey::new(&self.package_name, &self.advisory_key)
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn package_version(&self) -> &str {
        &self.package_version
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn advisory_key(&self) -> &str {
        &self.advisory_key
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_edited(&self) -> DateTime<Utc> {
        self.last_edited
    }

    /// Returns true if any of version, identifier, title or link differ from `fields`
    pub fn differs_from(&self, fields: &AlertFields) -> bool {
        self.package_version != fields.package_version
            || self.identifier != fields.identifier
            || self.title != fields.title
            || self.link != fields.link
    }

    /// Returns a copy carrying the mutable fields from `fields`, stamped with `now`
    ///
    /// Identity (id, package name, advisory key) and `created_at` are kept.
    pub fn updated_with(&self, fields: AlertFields, now: DateTime<Utc>) -> Self {
        Self {
            package_version: fields.package_version,
            identifier: fields.identifier,
            title: fields.title,
            link: fields.link,
            last_edited: now,
            ..self.clone()
        }
    }
}
