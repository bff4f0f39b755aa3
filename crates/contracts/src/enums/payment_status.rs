use serde::{Deserialize, Serialize};

/// Payment gateway status vocabulary. Strings outside the known set are
/// preserved verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Created,
    FormShowed,
    ThreeDsMethodCallRequired,
    AuthenticationRequired,
    AuthenticationStarted,
    Authenticated,
    AuthenticationFailed,
    Initialized,
    Started,
    Success,
    Paid,
    Failed,
    Error,
    Expired,
    Other(String),
}

/// Colour family of a payment status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Danger,
    Warning,
    Caution,
    Info,
    Neutral,
}

impl StatusTone {
    pub fn badge_class(&self) -> &'static str {
        match self {
            StatusTone::Success => "badge--green",
            StatusTone::Danger => "badge--red",
            StatusTone::Warning => "badge--yellow",
            StatusTone::Caution => "badge--orange",
            StatusTone::Info => "badge--blue",
            StatusTone::Neutral => "badge--gray",
        }
    }
}

impl PaymentStatus {
    pub fn code(&self) -> &str {
        match self {
            PaymentStatus::Created => "CREATED",
            PaymentStatus::FormShowed => "FORM_SHOWED",
            PaymentStatus::ThreeDsMethodCallRequired => "THREE_DS_METHOD_CALL_REQUIRED",
            PaymentStatus::AuthenticationRequired => "AUTHENTICATION_REQUIRED",
            PaymentStatus::AuthenticationStarted => "AUTHENTICATION_STARTED",
            PaymentStatus::Authenticated => "AUTHENTICATED",
            PaymentStatus::AuthenticationFailed => "AUTHENTICATION_FAILED",
            PaymentStatus::Initialized => "INITIALIZED",
            PaymentStatus::Started => "STARTED",
            PaymentStatus::Success => "SUCCESS",
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Failed => "FAILED",
            PaymentStatus::Error => "ERROR",
            PaymentStatus::Expired => "EXPIRED",
            PaymentStatus::Other(code) => code.as_str(),
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "CREATED" => PaymentStatus::Created,
            "FORM_SHOWED" => PaymentStatus::FormShowed,
            "THREE_DS_METHOD_CALL_REQUIRED" => PaymentStatus::ThreeDsMethodCallRequired,
            "AUTHENTICATION_REQUIRED" => PaymentStatus::AuthenticationRequired,
            "AUTHENTICATION_STARTED" => PaymentStatus::AuthenticationStarted,
            "AUTHENTICATED" => PaymentStatus::Authenticated,
            "AUTHENTICATION_FAILED" => PaymentStatus::AuthenticationFailed,
            "INITIALIZED" => PaymentStatus::Initialized,
            "STARTED" => PaymentStatus::Started,
            "SUCCESS" => PaymentStatus::Success,
            "PAID" => PaymentStatus::Paid,
            "FAILED" => PaymentStatus::Failed,
            "ERROR" => PaymentStatus::Error,
            "EXPIRED" => PaymentStatus::Expired,
            other => PaymentStatus::Other(other.to_string()),
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            PaymentStatus::Success | PaymentStatus::Paid => StatusTone::Success,
            PaymentStatus::Failed | PaymentStatus::Error => StatusTone::Danger,
            PaymentStatus::Expired => StatusTone::Warning,
            PaymentStatus::AuthenticationFailed => StatusTone::Caution,
            PaymentStatus::Created
            | PaymentStatus::FormShowed
            | PaymentStatus::ThreeDsMethodCallRequired
            | PaymentStatus::AuthenticationRequired
            | PaymentStatus::AuthenticationStarted
            | PaymentStatus::Authenticated
            | PaymentStatus::Initialized
            | PaymentStatus::Started => StatusTone::Info,
            PaymentStatus::Other(_) => StatusTone::Neutral,
        }
    }

    /// Only captured payments can be settled to PAID by an operator.
    pub fn can_mark_paid(&self) -> bool {
        matches!(self, PaymentStatus::Success)
    }

    pub fn all() -> Vec<PaymentStatus> {
        [
            "CREATED",
            "FORM_SHOWED",
            "THREE_DS_METHOD_CALL_REQUIRED",
            "AUTHENTICATION_REQUIRED",
            "AUTHENTICATION_STARTED",
            "AUTHENTICATED",
            "AUTHENTICATION_FAILED",
            "INITIALIZED",
            "STARTED",
            "SUCCESS",
            "PAID",
            "FAILED",
            "ERROR",
            "EXPIRED",
        ]
        .into_iter()
        .map(PaymentStatus::from_code)
        .collect()
    }
}

impl From<String> for PaymentStatus {
    fn from(code: String) -> Self {
        PaymentStatus::from_code(&code)
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        status.code().to_string()
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tones() {
        assert_eq!(PaymentStatus::Paid.tone(), StatusTone::Success);
        assert_eq!(PaymentStatus::Error.tone(), StatusTone::Danger);
        assert_eq!(PaymentStatus::Expired.tone(), StatusTone::Warning);
        assert_eq!(PaymentStatus::AuthenticationFailed.tone(), StatusTone::Caution);
        assert_eq!(PaymentStatus::FormShowed.tone(), StatusTone::Info);
        assert_eq!(PaymentStatus::from_code("REVERSED").tone(), StatusTone::Neutral);
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let status: PaymentStatus = serde_json::from_str("\"REVERSED\"").unwrap();
        assert_eq!(status, PaymentStatus::Other("REVERSED".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"REVERSED\"");
    }

    #[test]
    fn test_only_success_can_be_marked_paid() {
        let markable: Vec<_> = PaymentStatus::all()
            .into_iter()
            .filter(|s| s.can_mark_paid())
            .collect();
        assert_eq!(markable, vec![PaymentStatus::Success]);
    }
}
