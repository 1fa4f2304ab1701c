use crate::domain::validation::ValidationError;
use crate::domain::value::{Login, MessageId, Password, Sender};

/// Response format requested from SMSC.RU (`fmt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Provider default: `OK - N SMS, ID - M` lines.
    #[default]
    InlineVerbose,
    /// Comma-separated numbers.
    Inline,
    Xml,
    Json,
}

impl Format {
    /// Form field name used by SMSC.RU (`fmt`).
    pub const FIELD: &'static str = "fmt";

    pub fn code(self) -> u8 {
        match self {
            Self::InlineVerbose => 0,
            Self::Inline => 1,
            Self::Xml => 2,
            Self::Json => 3,
        }
    }
}

/// Whether SMSC.RU should report cost information, and whether to send at all (`cost`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cost {
    /// Send normally, no cost in the response.
    #[default]
    Omit,
    /// Estimate only: the message is not sent.
    WithoutSend,
    /// Send and report the cost.
    Count,
    /// Send and report both cost and remaining balance.
    CountBalance,
}

impl Cost {
    /// Form field name used by SMSC.RU (`cost`).
    pub const FIELD: &'static str = "cost";

    pub fn code(self) -> u8 {
        match self {
            Self::Omit => 0,
            Self::WithoutSend => 1,
            Self::Count => 2,
            Self::CountBalance => 3,
        }
    }
}

/// Encoding of the message text (`charset`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    #[default]
    Utf8,
    Windows1251,
    Koi8R,
}

impl Charset {
    /// Form field name used by SMSC.RU (`charset`).
    pub const FIELD: &'static str = "charset";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Windows1251 => "windows-1251",
            Self::Koi8R => "koi8-r",
        }
    }
}

/// Transliteration applied by SMSC.RU before delivery (`translit`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Translit {
    #[default]
    Off,
    /// Cyrillic is rewritten with latin letters (`privet`).
    Latin,
    /// Cyrillic is rewritten with look-alike latin glyphs (`npuBeT`).
    Lookalike,
}

impl Translit {
    /// Form field name used by SMSC.RU (`translit`).
    pub const FIELD: &'static str = "translit";

    pub fn code(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Latin => 1,
            Self::Lookalike => 2,
        }
    }
}

/// Optional send parameters.
///
/// Setters chain and the last call for a field wins:
///
/// ```rust
/// use smsc::{Cost, SendOptions};
///
/// let options = SendOptions::new().cost(Cost::Count).cost(Cost::CountBalance);
/// assert_eq!(options.get_cost(), Some(Cost::CountBalance));
/// ```
///
/// Unset fields leave the message untouched, which is how client-wide defaults and
/// per-call options combine (see [`SendOptions::overridden_by`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOptions {
    cost: Option<Cost>,
    charset: Option<Charset>,
    translit: Option<Translit>,
    sender: Option<Sender>,
    id: Option<MessageId>,
    op: Option<bool>,
    subject: Option<String>,
}

impl SendOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cost-reporting mode.
    pub fn cost(mut self, cost: Cost) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Set the text encoding. UTF-8 is used when never set.
    pub fn charset(mut self, charset: Charset) -> Self {
        self.charset = Some(charset);
        self
    }

    pub fn translit(mut self, translit: Translit) -> Self {
        self.translit = Some(translit);
        self
    }

    /// Set the sender name shown to recipients.
    pub fn sender(mut self, sender: Sender) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Assign your own message id instead of letting SMSC.RU generate one.
    pub fn id(mut self, id: MessageId) -> Self {
        self.id = Some(id);
        self
    }

    /// Request per-phone delivery detail (`phones` array in the response).
    pub fn per_phone_detail(mut self, enabled: bool) -> Self {
        self.op = Some(enabled);
        self
    }

    /// Subject line used by the e-mail and MMS gateways (`subj`).
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn get_cost(&self) -> Option<Cost> {
        self.cost
    }

    /// Combine two option sets; fields set in `overrides` replace fields set in `self`.
    pub fn overridden_by(&self, overrides: &SendOptions) -> SendOptions {
        SendOptions {
            cost: overrides.cost.or(self.cost),
            charset: overrides.charset.or(self.charset),
            translit: overrides.translit.or(self.translit),
            sender: overrides.sender.clone().or_else(|| self.sender.clone()),
            id: overrides.id.clone().or_else(|| self.id.clone()),
            op: overrides.op.or(self.op),
            subject: overrides.subject.clone().or_else(|| self.subject.clone()),
        }
    }
}

/// A single outbound send request, built fresh for every call.
#[derive(Debug, Clone)]
pub struct Message {
    login: Login,
    password: Password,
    text: String,
    phones: Vec<String>,
    format: Format,
    charset: Charset,
    cost: Cost,
    translit: Translit,
    sender: Option<Sender>,
    id: Option<MessageId>,
    op: bool,
    subject: Option<String>,
}

impl Message {
    /// Build a message that asks for a JSON response in UTF-8.
    pub fn new(
        login: Login,
        password: Password,
        text: impl Into<String>,
        phones: Vec<String>,
    ) -> Self {
        Self {
            login,
            password,
            text: text.into(),
            phones,
            format: Format::Json,
            charset: Charset::Utf8,
            cost: Cost::Omit,
            translit: Translit::Off,
            sender: None,
            id: None,
            op: false,
            subject: None,
        }
    }

    /// Copy every field set in `options` onto the message.
    pub fn apply(&mut self, options: &SendOptions) {
        if let Some(cost) = options.cost {
            self.cost = cost;
        }
        if let Some(charset) = options.charset {
            self.charset = charset;
        }
        if let Some(translit) = options.translit {
            self.translit = translit;
        }
        if let Some(sender) = options.sender.as_ref() {
            self.sender = Some(sender.clone());
        }
        if let Some(id) = options.id.as_ref() {
            self.id = Some(id.clone());
        }
        if let Some(op) = options.op {
            self.op = op;
        }
        if let Some(subject) = options.subject.as_ref() {
            self.subject = Some(subject.clone());
        }
    }

    /// Check the message before it is encoded.
    ///
    /// Nothing is rejected yet: text, recipients, and phone formats are left to the provider.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    pub fn login(&self) -> &Login {
        &self.login
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn translit(&self) -> Translit {
        self.translit
    }

    pub fn sender(&self) -> Option<&Sender> {
        self.sender.as_ref()
    }

    pub fn id(&self) -> Option<&MessageId> {
        self.id.as_ref()
    }

    pub fn per_phone_detail(&self) -> bool {
        self.op
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }
}
