use serde::{Deserialize, Serialize};

use super::feedback::{position_summary, quadrant_summary};
use super::report::StoredReport;

pub const EMAIL_SUBJECT: &str = "Your MINDTRX Assessment Results";

/// Who a result should be sent to.
///
/// Missing fields deserialize as empty strings and are rejected by
/// [`EmailRequest::validated`], the same as blank ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailRequest {
    pub name: String,
    pub email: String,
}

impl EmailRequest {
    /// Trimmed copy of the request, or the reason it cannot be delivered.
    pub fn validated(&self) -> Result<EmailRequest, DeliveryError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DeliveryError::InvalidRecipient(
                "recipient name is required".to_string(),
            ));
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(DeliveryError::InvalidRecipient(
                "recipient email is required".to_string(),
            ));
        }
        if !looks_like_address(email) {
            return Err(DeliveryError::InvalidRecipient(format!(
                "'{email}' is not a deliverable email address"
            )));
        }

        Ok(EmailRequest {
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}

fn looks_like_address(raw: &str) -> bool {
    let mut parts = raw.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && !raw.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

/// Fully rendered message ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub content_type: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReceipt {
    pub message_id: String,
}

/// Outbound transport for rendered result emails.
pub trait ReportMailer: Send + Sync {
    fn send(&self, email: OutboundEmail) -> Result<DeliveryReceipt, DeliveryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("invalid recipient: {0}")]
    InvalidRecipient(String),
    #[error("mail transport unavailable: {0}")]
    Transport(String),
    #[error("email delivery is not configured")]
    NotConfigured,
}

/// Render the results email for `report`.
///
/// `public_url` must not end in a slash.
pub fn render_report_email(
    report: &StoredReport,
    recipient: &EmailRequest,
    from: &str,
    public_url: &str,
) -> OutboundEmail {
    OutboundEmail {
        from: from.to_string(),
        to: recipient.email.clone(),
        subject: EMAIL_SUBJECT.to_string(),
        content_type: mime::TEXT_HTML_UTF_8.to_string(),
        html: render_report_html(report, &recipient.name, public_url),
    }
}

fn render_report_html(report: &StoredReport, name: &str, public_url: &str) -> String {
    let scores = &report.scores;
    let code = escape_html(report.code.as_str());
    let link = format!(
        "{}/results?code={}",
        escape_html(public_url),
        encode_query_value(report.code.as_str())
    );
    let year = report.created_at.format("%Y");

    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Your MINDTRX Results</title></head>\n<body>\n",
    );
    html.push_str("<h1>MINDTRX</h1>\n<p>Inner Mind Integration Inventory</p>\n");
    html.push_str(&format!("<h2>Hello {},</h2>\n", escape_html(name)));
    html.push_str(
        "<p>Thank you for completing the MINDTRX assessment. Here are your results:</p>\n",
    );
    html.push_str(&format!("<p>Report Code</p>\n<p><code>{code}</code></p>\n"));
    html.push_str(&format!(
        "<table><tr><td>Communication</td><td>{}/50</td></tr><tr><td>Trust</td><td>{}/50</td></tr></table>\n",
        scores.comm50, scores.trust50
    ));
    html.push_str(&format!(
        "<h3>Your Quadrant</h3>\n<p><strong>{}</strong></p>\n<p>{}</p>\n",
        scores.quadrant,
        escape_html(quadrant_summary(scores.quadrant))
    ));
    html.push_str(&format!(
        "<p>Position: {}</p>\n<p>{}</p>\n",
        scores.position,
        escape_html(position_summary(scores.position))
    ));
    html.push_str(&format!(
        "<p>You can view your complete results anytime by visiting:</p>\n<p><a href=\"{link}\">View Full Report</a></p>\n"
    ));
    html.push_str(&format!(
        "<p>&copy; {year} MINDTRX. All rights reserved.</p>\n</body>\n</html>\n"
    ));
    html
}

fn encode_query_value(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
