use serde::Deserialize;
use serde::de::IgnoredAny;

use super::scalar::TransportScalar;
use crate::domain::{
    ApiError, Charset, Cost, ErrorCode, Format, Login, Message, MessageId, Password, PhoneNumber,
    PhoneResult, SendOutcome, SendResult, Sender, Translit,
};

const TEXT_FIELD: &str = "mes";
const OP_FIELD: &str = "op";
const SUBJECT_FIELD: &str = "subj";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Only looks for the error discriminator; everything else is skipped.
#[derive(Debug, Deserialize)]
struct ResponseProbe {
    #[serde(default)]
    error_code: Option<IgnoredAny>,
}

#[derive(Debug, Clone, Deserialize)]
struct SendJsonResponse {
    #[serde(default)]
    id: Option<TransportScalar>,
    #[serde(rename = "cnt", alias = "count")]
    count: u32,
    #[serde(default)]
    cost: Option<TransportScalar>,
    #[serde(default)]
    balance: Option<TransportScalar>,
    #[serde(default)]
    phones: Option<Vec<PhoneJsonResult>>,
}

#[derive(Debug, Clone, Deserialize)]
struct PhoneJsonResult {
    phone: TransportScalar,
    mccmnc: TransportScalar,
    cost: TransportScalar,
    #[serde(default)]
    status: Option<TransportScalar>,
    #[serde(default)]
    error: Option<TransportScalar>,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorJsonResponse {
    error_code: i32,
    #[serde(default)]
    error: String,
    #[serde(default)]
    id: Option<TransportScalar>,
}

pub fn encode_send_form(message: &Message) -> Vec<(String, String)> {
    let mut params = vec![
        (
            Login::FIELD.to_owned(),
            message.login().as_str().to_owned(),
        ),
        (
            Password::FIELD.to_owned(),
            message.password().as_str().to_owned(),
        ),
        (TEXT_FIELD.to_owned(), message.text().to_owned()),
    ];

    for phone in message.phones() {
        params.push((PhoneNumber::FIELD.to_owned(), phone.clone()));
    }

    if message.format() != Format::InlineVerbose {
        params.push((Format::FIELD.to_owned(), message.format().code().to_string()));
    }
    if message.cost() != Cost::Omit {
        params.push((Cost::FIELD.to_owned(), message.cost().code().to_string()));
    }
    params.push((
        Charset::FIELD.to_owned(),
        message.charset().as_str().to_owned(),
    ));
    push_options(&mut params, message);

    params
}

fn push_options(params: &mut Vec<(String, String)>, message: &Message) {
    if message.translit() != Translit::Off {
        params.push((
            Translit::FIELD.to_owned(),
            message.translit().code().to_string(),
        ));
    }
    if let Some(sender) = message.sender() {
        params.push((Sender::FIELD.to_owned(), sender.as_str().to_owned()));
    }
    if let Some(id) = message.id() {
        params.push((MessageId::FIELD.to_owned(), id.as_str().to_owned()));
    }
    if message.per_phone_detail() {
        params.push((OP_FIELD.to_owned(), "1".to_owned()));
    }
    if let Some(subject) = message.subject() {
        params.push((SUBJECT_FIELD.to_owned(), subject.to_owned()));
    }
}

/// Decode a `send.php` JSON body into a result or a provider error.
///
/// A non-null `error_code` selects the error shape and any success fields are ignored.
pub fn decode_send_json_response(json: &str) -> Result<SendOutcome, TransportError> {
    let probe: ResponseProbe = serde_json::from_str(json)?;

    if probe.error_code.is_some() {
        let parsed: ErrorJsonResponse = serde_json::from_str(json)?;
        return Ok(SendOutcome::Rejected(ApiError {
            code: ErrorCode::new(parsed.error_code),
            description: parsed.error,
            id: parsed.id.map(TransportScalar::into_string),
        }));
    }

    let parsed: SendJsonResponse = serde_json::from_str(json)?;
    let phones = parsed
        .phones
        .unwrap_or_default()
        .into_iter()
        .map(|phone| PhoneResult {
            phone: phone.phone.into_string(),
            mccmnc: phone.mccmnc.into_string(),
            cost: phone.cost.into_string(),
            status: phone.status.map(TransportScalar::into_string),
            error: phone.error.map(TransportScalar::into_string),
        })
        .collect();

    Ok(SendOutcome::Sent(SendResult {
        id: parsed.id.map(TransportScalar::into_string),
        count: parsed.count,
        cost: parsed.cost.map(TransportScalar::into_string),
        balance: parsed.balance.map(TransportScalar::into_string),
        phones,
    }))
}
