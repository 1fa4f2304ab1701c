use serde::Deserialize;
use serde::de::Error as DeError;

/// Scalar returned by SMSC.RU as either a JSON string or a JSON number.
///
/// Money fields (`cost`, `balance`) and carrier codes arrive in both forms depending on
/// the API revision. For numbers, the raw JSON token is preserved to avoid formatting
/// drift (`10.00` remains `"10.00"` instead of becoming `"10.0"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportScalar(String);

impl TransportScalar {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportScalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected scalar field to be JSON string or number",
            )),
        }
    }
}
