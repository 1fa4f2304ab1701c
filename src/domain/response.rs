use std::fmt;

use crate::domain::value::ErrorCode;

/// Successful `send.php` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    /// Message id; absent for estimate-only requests ([`Cost::WithoutSend`]).
    ///
    /// Kept as text so caller-chosen ids such as `order-17` survive the round trip.
    ///
    /// [`Cost::WithoutSend`]: crate::Cost::WithoutSend
    pub id: Option<String>,
    /// Number of SMS queued (`cnt`, or `count` in older API revisions).
    pub count: u32,
    pub cost: Option<String>,
    pub balance: Option<String>,
    /// Per-phone detail; empty unless requested with [`SendOptions::per_phone_detail`].
    ///
    /// [`SendOptions::per_phone_detail`]: crate::SendOptions::per_phone_detail
    pub phones: Vec<PhoneResult>,
}

impl fmt::Display for SendResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OK - {} SMS", self.count)?;
        if let Some(id) = &self.id {
            write!(f, ", ID - {id}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneResult {
    pub phone: String,
    /// Carrier code (MCC + MNC).
    pub mccmnc: String,
    pub cost: String,
    pub status: Option<String>,
    pub error: Option<String>,
}

/// Error object returned by SMSC.RU in place of a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: ErrorCode,
    pub description: String,
    /// Message id, when the failure is tied to an accepted message.
    pub id: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ERROR = {} ({})", self.code, self.description)?;
        if let Some(id) = &self.id {
            write!(f, ", ID - {id}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Either shape a `send.php` response can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Sent(SendResult),
    Rejected(ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_result_renders_summary() {
        let result = SendResult {
            id: Some("5".to_owned()),
            count: 2,
            cost: None,
            balance: None,
            phones: Vec::new(),
        };
        assert_eq!(result.to_string(), "OK - 2 SMS, ID - 5");
    }

    #[test]
    fn estimate_result_renders_without_id() {
        let result = SendResult {
            id: None,
            count: 1,
            cost: Some("1.40".to_owned()),
            balance: None,
            phones: Vec::new(),
        };
        assert_eq!(result.to_string(), "OK - 1 SMS");
    }

    #[test]
    fn api_error_renders_id_only_when_present() {
        let mut err = ApiError {
            code: ErrorCode::new(3),
            description: "bad login".to_owned(),
            id: None,
        };
        assert_eq!(err.to_string(), "ERROR = 3 (bad login)");

        err.id = Some("42".to_owned());
        assert_eq!(err.to_string(), "ERROR = 3 (bad login), ID - 42");
    }
}
