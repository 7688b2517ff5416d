/// The banner styles the form can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    /// Match an alert type exactly. Anything other than `"success"` or
    /// `"error"` has no banner.
    pub fn parse(alert_type: &str) -> Option<Self> {
        match alert_type {
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}
