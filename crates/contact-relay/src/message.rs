//! Contact form parsing, validation and mail composition

use crate::RelayError;
use serde_json::Value;

/// Raw submission as posted by the site.
///
/// A field counts as present when its JSON value is truthy. Non-string
/// scalars are kept in their textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// A submission with every required field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

/// Fully composed mail, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_owned()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => present(Some(s.clone())),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

impl ContactForm {
    /// Only a body that is not JSON at all fails. Any other shape parses,
    /// possibly with every field missing.
    pub fn parse(body: &[u8]) -> Result<Self, RelayError> {
        let value: Value = serde_json::from_slice(body)?;
        Ok(Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        let Value::Object(fields) = value else {
            return Self::default();
        };
        let field = |key: &str| fields.get(key).and_then(field_text);
        Self {
            name: field("name"),
            email: field("email"),
            subject: field("subject"),
            message: field("message"),
        }
    }

    /// Empty strings count as missing.
    pub fn validate(self) -> Result<ContactMessage, RelayError> {
        match (present(self.name), present(self.email), present(self.message)) {
            (Some(name), Some(email), Some(message)) => Ok(ContactMessage {
                name,
                email,
                subject: present(self.subject),
                message,
            }),
            _ => Err(RelayError::MissingFields),
        }
    }
}

impl ContactMessage {
    pub fn subject_line(&self) -> String {
        format!(
            "Portfolio Message: {}",
            self.subject.as_deref().unwrap_or("No Subject")
        )
    }

    pub fn html_body(&self) -> String {
        let message = escape_html(&self.message).replace('\n', "<br>");
        format!(
            "<h3>New Contact Message</h3>\n\
             <p><strong>Name:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Message:</strong><br>{}</p>\n",
            escape_html(&self.name),
            escape_html(&self.email),
            message,
        )
    }

    /// Address the message from the relay account to the site owner,
    /// with replies going back to the submitter.
    pub fn compose(&self, from: &str, to: &str) -> OutboundMail {
        OutboundMail {
            from: from.to_owned(),
            to: to.to_owned(),
            reply_to: self.email.clone(),
            subject: self.subject_line(),
            html: self.html_body(),
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
