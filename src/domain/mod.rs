//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Charset, Cost, Format, Message, SendOptions, Translit};
pub use response::{ApiError, PhoneResult, SendOutcome, SendResult};
pub use validation::ValidationError;
pub use value::{ErrorCode, KnownErrorCode, Login, MessageId, Password, PhoneNumber, Sender};

#[cfg(test)]
mod tests {
    use super::*;

    fn message(phones: &[&str]) -> Message {
        Message::new(
            Login::new("user").unwrap(),
            Password::new("pass").unwrap(),
            "hello",
            phones.iter().map(|p| (*p).to_owned()).collect(),
        )
    }

    #[test]
    fn new_message_requests_json_in_utf8() {
        let msg = message(&["79251234567"]);
        assert_eq!(msg.format(), Format::Json);
        assert_eq!(msg.charset(), Charset::Utf8);
        assert_eq!(msg.cost(), Cost::Omit);
        assert!(!msg.per_phone_detail());
    }

    #[test]
    fn apply_last_setter_wins_on_same_field() {
        let mut msg = message(&["79251234567"]);
        msg.apply(&SendOptions::new().cost(Cost::Count).cost(Cost::WithoutSend));
        assert_eq!(msg.cost(), Cost::WithoutSend);
    }

    #[test]
    fn apply_disjoint_fields_do_not_interact() {
        let mut msg = message(&["79251234567"]);
        msg.apply(&SendOptions::new().cost(Cost::CountBalance));
        msg.apply(&SendOptions::new().translit(Translit::Latin));
        assert_eq!(msg.cost(), Cost::CountBalance);
        assert_eq!(msg.translit(), Translit::Latin);
    }

    #[test]
    fn unset_options_leave_message_untouched() {
        let mut msg = message(&["79251234567"]);
        msg.apply(&SendOptions::new().cost(Cost::Count));
        msg.apply(&SendOptions::new());
        assert_eq!(msg.cost(), Cost::Count);
    }

    #[test]
    fn overrides_replace_only_set_fields() {
        let defaults = SendOptions::new()
            .cost(Cost::CountBalance)
            .sender(Sender::new("Shop").unwrap());
        let call = SendOptions::new().cost(Cost::Omit);

        let merged = defaults.overridden_by(&call);
        assert_eq!(merged.get_cost(), Some(Cost::Omit));

        let mut msg = message(&["79251234567"]);
        msg.apply(&merged);
        assert_eq!(msg.cost(), Cost::Omit);
        assert_eq!(msg.sender().map(Sender::as_str), Some("Shop"));
    }

    #[test]
    fn validate_leaves_recipients_to_the_provider() {
        assert_eq!(message(&[]).validate(), Ok(()));
        assert_eq!(message(&["79251234567", "  "]).validate(), Ok(()));
        assert_eq!(message(&["not a phone"]).validate(), Ok(()));
    }

    #[test]
    fn validate_accepts_empty_text() {
        let msg = Message::new(
            Login::new("user").unwrap(),
            Password::new("pass").unwrap(),
            "",
            vec!["79251234567".to_owned()],
        );
        assert!(msg.validate().is_ok());
    }

    #[test]
    fn option_codes_match_provider_values() {
        assert_eq!(Format::InlineVerbose.code(), 0);
        assert_eq!(Format::Json.code(), 3);
        assert_eq!(Cost::Omit.code(), 0);
        assert_eq!(Cost::WithoutSend.code(), 1);
        assert_eq!(Cost::Count.code(), 2);
        assert_eq!(Cost::CountBalance.code(), 3);
        assert_eq!(Charset::Koi8R.as_str(), "koi8-r");
        assert_eq!(Translit::Lookalike.code(), 2);
    }
}
