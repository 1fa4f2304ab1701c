use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMSC.RU account login.
///
/// Invariant: must not be empty. The value is sent exactly as provided.
pub struct Login(String);

impl Login {
    /// Form field name used by SMSC.RU (`login`).
    pub const FIELD: &'static str = "login";

    /// Create a validated [`Login`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the login as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// SMSC.RU account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Form field name used by SMSC.RU (`psw`).
    pub const FIELD: &'static str = "psw";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender name shown to the recipient (`sender`).
///
/// Invariant: non-empty after trimming. The name must be registered in your SMSC.RU account.
pub struct Sender(String);

impl Sender {
    /// Form field name used by SMSC.RU (`sender`).
    pub const FIELD: &'static str = "sender";

    /// Create a validated [`Sender`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Caller-chosen message identifier (`id`).
///
/// Invariant: non-empty after trimming and at most [`MessageId::MAX_LEN`] characters.
pub struct MessageId(String);

impl MessageId {
    /// Form field name used by SMSC.RU (`id`).
    pub const FIELD: &'static str = "id";

    /// Longest identifier accepted by SMSC.RU.
    pub const MAX_LEN: usize = 40;

    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let len = trimmed.chars().count();
        if len > Self::MAX_LEN {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Sending does not require this type: `send` accepts plain strings. Use it when you want
/// numbers normalized before they reach the provider.
///
/// Equality and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Form field name used by SMSC.RU (`phones`).
    pub const FIELD: &'static str = "phones";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.e164
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Numeric error code reported by SMSC.RU in `error_code`.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct ErrorCode(i32);

impl ErrorCode {
    /// Construct an error code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by SMSC.RU.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known error code variant, if one exists.
    pub fn known_kind(self) -> Option<KnownErrorCode> {
        KnownErrorCode::from_code(self.0)
    }

    /// Returns `true` if SMSC.RU documents the failure as temporary.
    ///
    /// The client never retries on its own; this is a hint for callers.
    pub fn is_retryable(self) -> bool {
        matches!(
            self.known_kind(),
            Some(kind) if kind.is_retryable()
        )
    }

    /// Returns `true` if this code reports rejected credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(self.known_kind(), Some(KnownErrorCode::InvalidCredentials))
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Error codes documented for the SMSC.RU `send.php` endpoint.
///
/// Unknown codes are preserved as [`ErrorCode`] and return `None` from [`KnownErrorCode::from_code`].
pub enum KnownErrorCode {
    InvalidParameters,
    InvalidCredentials,
    InsufficientFunds,
    IpTemporarilyBlocked,
    InvalidDateFormat,
    MessageForbidden,
    InvalidPhoneFormat,
    CannotDeliver,
    DuplicateRequest,
}

impl KnownErrorCode {
    /// Convert a raw integer error code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            1 => Self::InvalidParameters,
            2 => Self::InvalidCredentials,
            3 => Self::InsufficientFunds,
            4 => Self::IpTemporarilyBlocked,
            5 => Self::InvalidDateFormat,
            6 => Self::MessageForbidden,
            7 => Self::InvalidPhoneFormat,
            8 => Self::CannotDeliver,
            9 => Self::DuplicateRequest,
            _ => return None,
        })
    }

    /// Integer code as documented by SMSC.RU.
    pub fn code(self) -> i32 {
        match self {
            Self::InvalidParameters => 1,
            Self::InvalidCredentials => 2,
            Self::InsufficientFunds => 3,
            Self::IpTemporarilyBlocked => 4,
            Self::InvalidDateFormat => 5,
            Self::MessageForbidden => 6,
            Self::InvalidPhoneFormat => 7,
            Self::CannotDeliver => 8,
            Self::DuplicateRequest => 9,
        }
    }

    /// Temporary IP blocks and duplicate-request throttling clear on their own.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::IpTemporarilyBlocked | Self::DuplicateRequest)
    }
}
