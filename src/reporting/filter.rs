use std::fmt;
use crate::errors::ReportError;

/// Which organizations a dashboard covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrganizationFilter {
    #[default]
    All,
    Only(i64),
}

impl OrganizationFilter {
    /// Parse a raw filter value as it arrives from a query string or CLI flag.
    ///
    /// A missing or blank value means no filter. Anything else must be a
    /// positive integer id.
    pub fn parse(raw: Option<&str>) -> Result<Self, ReportError> {
        let value = match raw.map(str::trim) {
            None | Some("") => return Ok(OrganizationFilter::All),
            Some(v) => v,
        };

        let id: i64 = value.parse().map_err(|_| {
            ReportError::Validation(format!("Organization id must be an integer, got '{}'", value))
        })?;
        if id <= 0 {
            return Err(ReportError::Validation(format!(
                "Organization id must be positive, got {}",
                id
            )));
        }
        Ok(OrganizationFilter::Only(id))
    }

    pub fn organization_id(&self) -> Option<i64> {
        match self {
            OrganizationFilter::All => None,
            OrganizationFilter::Only(id) => Some(*id),
        }
    }
}

impl From<Option<i64>> for OrganizationFilter {
    fn from(value: Option<i64>) -> Self {
        value.map_or(OrganizationFilter::All, OrganizationFilter::Only)
    }
}

impl fmt::Display for OrganizationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrganizationFilter::All => f.write_str("all"),
            OrganizationFilter::Only(id) => write!(f, "{}", id),
        }
    }
}
