/// Upper bound on how much of an upstream body ends up in an error message
pub const BODY_PREVIEW_CHARS: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{label}: request failed: {source}")]
    Transport {
        label: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{label}: request cannot be replayed for retry")]
    UnreplayableRequest { label: String },

    #[error("{label}: max retries exceeded after {attempts} attempts (last status {last_status})")]
    Exhausted {
        label: String,
        attempts: u32,
        last_status: u16,
    },

    #[error("{label}: upstream returned HTTP {status}: {body}")]
    Status {
        label: String,
        status: u16,
        body: String,
    },

    #[error("{label}: malformed response (HTTP {status}): {reason}. Body starts with: {preview}")]
    Malformed {
        label: String,
        status: u16,
        reason: String,
        preview: String,
    },
}

impl FetchError {
    /// HTTP status carried by the failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Exhausted { last_status, .. } => Some(*last_status),
            Self::Status { status, .. } | Self::Malformed { status, .. } => Some(*status),
            Self::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            Self::UnreplayableRequest { .. } => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}

pub fn body_preview(body: &str) -> String {
    let mut preview: String = body.chars().take(BODY_PREVIEW_CHARS).collect();
    if body.chars().count() > BODY_PREVIEW_CHARS {
        preview.push('…');
    }
    preview
}
