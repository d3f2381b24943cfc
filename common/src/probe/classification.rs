/// Display category of a probe, derived from its status code alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    /// 200
    Success,
    /// 301 or 303
    Redirect,
    /// 403
    Forbidden,
    /// 500
    ServerError,
    /// Any other status, including 404 and the rest of 4xx/5xx.
    Other,
    /// No status at all.
    Unreachable,
}

impl Classification {
    pub const ALL: [Classification; 6] = [
        Self::Success,
        Self::Redirect,
        Self::Forbidden,
        Self::ServerError,
        Self::Other,
        Self::Unreachable,
    ];

    pub fn from_status(status: Option<u16>) -> Self {
        match status {
            Some(200) => Self::Success,
            Some(301 | 303) => Self::Redirect,
            Some(403) => Self::Forbidden,
            Some(500) => Self::ServerError,
            Some(_) => Self::Other,
            None => Self::Unreachable,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Redirect => "Redirect",
            Self::Forbidden => "Forbidden",
            Self::ServerError => "Server error",
            Self::Other => "Other",
            Self::Unreachable => "Unreachable",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}
