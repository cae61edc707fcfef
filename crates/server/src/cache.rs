//! `Cache-Control` assembly for protocol responses.

/// Directive values in seconds. Unset or zero directives are left out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheControl {
    pub max_age: Option<u64>,
    pub stale_while_revalidate: Option<u64>,
    pub stale_if_error: Option<u64>,
}

impl CacheControl {
    pub const NONE: CacheControl = CacheControl {
        max_age: None,
        stale_while_revalidate: None,
        stale_if_error: None,
    };

    pub const fn new(max_age: u64, stale_while_revalidate: u64, stale_if_error: u64) -> Self {
        Self {
            max_age: Some(max_age),
            stale_while_revalidate: Some(stale_while_revalidate),
            stale_if_error: Some(stale_if_error),
        }
    }

    /// Header value, or `None` when the header must be omitted.
    pub fn header_value(&self) -> Option<String> {
        let directives: Vec<String> = [
            ("max-age", self.max_age),
            ("stale-while-revalidate", self.stale_while_revalidate),
            ("stale-if-error", self.stale_if_error),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.filter(|v| *v > 0).map(|v| format!("{name}={v}")))
        .collect();

        if directives.is_empty() {
            None
        } else {
            Some(format!("{}, public", directives.join(", ")))
        }
    }
}

const HOUR: u64 = 60 * 60;
const DAY: u64 = 24 * HOUR;

/// Cache profile per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub manifest: CacheControl,
    pub catalog: CacheControl,
    pub meta: CacheControl,
    pub similar: CacheControl,
}

impl CachePolicy {
    pub const fn disabled() -> Self {
        Self {
            manifest: CacheControl::NONE,
            catalog: CacheControl::NONE,
            meta: CacheControl::NONE,
            similar: CacheControl::NONE,
        }
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            manifest: CacheControl::new(12 * HOUR, 14 * DAY, 30 * DAY),
            catalog: CacheControl::new(DAY, 7 * DAY, 14 * DAY),
            meta: CacheControl::new(DAY, 7 * DAY, 14 * DAY),
            similar: CacheControl::new(DAY, 7 * DAY, 14 * DAY),
        }
    }
}
