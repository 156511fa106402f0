//! Response envelopes used by the HTTP adapter

use dash_model::{AuthUser, ProfileRecord, SupportRequestRecord};
use serde::Deserialize;

/// Body shape of non-2xx responses: `{ message }` when the server has
/// something to say.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) message: Option<String>,
}

/// `{ user: {...} }` envelope from the auth endpoints.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserEnvelope {
    pub(crate) user: AuthUser,
}

/// `{ data: {...} }` envelope from the profile fetch endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProfileEnvelope {
    pub(crate) data: ProfileRecord,
}

/// `{ shareUrl }` from the share endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ShareEnvelope {
    #[serde(rename = "shareUrl")]
    pub(crate) share_url: String,
}

/// The support history endpoint has been seen both bare and wrapped in a
/// `data` envelope; accept either.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum SupportHistoryBody {
    Wrapped { data: Vec<SupportRequestRecord> },
    Bare(Vec<SupportRequestRecord>),
}

impl SupportHistoryBody {
    pub(crate) fn into_records(self) -> Vec<SupportRequestRecord> {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(records) => records,
        }
    }
}
