use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use std::fmt::{self, Write};

use crate::error::{Result, ServiceVersionError};
use crate::version::BaseVersion;

/// Default date stamp format: two-digit year, month and day.
pub const DEFAULT_DATE_FORMAT: &str = "%y%m%d";

/// A run date rendered for inclusion in a composed version (e.g. "240307")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateStamp(String);

impl DateStamp {
    /// Render `date` with a chrono strftime `format`.
    ///
    /// Unknown specifiers and specifiers a plain date cannot fill (hours,
    /// minutes, time zones) are reported as configuration errors.
    pub fn new(date: NaiveDate, format: &str) -> Result<Self> {
        let invalid =
            || ServiceVersionError::config(format!("invalid date format '{}'", format));

        let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(invalid());
        }

        let mut rendered = String::new();
        write!(rendered, "{}", date.format_with_items(items.into_iter()))
            .map_err(|_| invalid())?;
        Ok(DateStamp(rendered))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The four-part version printed by the tool:
/// `<major>.<minor>.<date stamp>.<build id>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedVersion {
    pub base: BaseVersion,
    pub date: DateStamp,
    pub build_id: String,
}

impl ComposedVersion {
    pub fn new(base: BaseVersion, date: DateStamp, build_id: impl Into<String>) -> Self {
        ComposedVersion {
            base,
            date,
            build_id: build_id.into(),
        }
    }
}

impl fmt::Display for ComposedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.base, self.date, self.build_id)
    }
}
