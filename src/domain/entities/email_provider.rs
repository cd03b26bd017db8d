use strum::{AsRefStr, Display, EnumString};

/// Outbound channel used for waitlist notifications, selected by `EMAIL_PROVIDER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EmailProvider {
    /// Log the notification instead of sending it.
    #[default]
    None,
    Resend,
    Smtp,
}

impl EmailProvider {
    /// Parses a configuration value. Unknown values fall back to log-only,
    /// the same as leaving the variable unset.
    pub fn from_config(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => EmailProvider::None,
            Some(value) => value.parse().unwrap_or_else(|_| {
                tracing::warn!(value, "Unknown EMAIL_PROVIDER, falling back to log-only");
                EmailProvider::None
            }),
        }
    }

    /// Whether this provider delivers mail to a real inbox.
    pub fn is_outbound(&self) -> bool {
        !matches!(self, EmailProvider::None)
    }
}
