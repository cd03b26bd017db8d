use crate::domain::entities::waitlist_entry::WaitlistEntry;

const BRAND_NAME: &str = "Konecbo";

pub const WAITLIST_NOTIFICATION_SUBJECT: &str = "New Waitlist Registration - Konecbo";

/// Subject plus both bodies of a rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Escapes the characters that are significant in HTML text and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

fn registered_at_label(entry: &WaitlistEntry) -> String {
    entry.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Admin notification for a new signup.
pub fn waitlist_registration_email(entry: &WaitlistEntry) -> RenderedEmail {
    let registered_at = registered_at_label(entry);

    let fields = [
        field_row("Name", &escape_html(&entry.name)),
        field_row("Email", &escape_html(&entry.email)),
        field_row("Research Interests", &escape_html(&entry.research_interests)),
        field_row("Registered At", &registered_at),
    ]
    .concat();

    let html = wrap_email("New Waitlist Registration", &fields);

    let text = format!(
        "New Waitlist Registration - {brand}\n\n\
         Name: {name}\n\
         Email: {email}\n\
         Research Interests: {interests}\n\
         Registered At: {registered_at}",
        brand = BRAND_NAME,
        name = entry.name,
        email = entry.email,
        interests = entry.research_interests,
    );

    RenderedEmail {
        subject: WAITLIST_NOTIFICATION_SUBJECT.to_string(),
        html,
        text,
    }
}

/// `value_html` must already be escaped.
fn field_row(label: &str, value_html: &str) -> String {
    format!(
        r#"<div style="margin:15px 0;">
        <div style="font-weight:bold;color:#4F46E5;">{label}:</div>
        <div style="margin-top:5px;padding:10px;background:#ffffff;border-radius:4px;">{value_html}</div>
      </div>"#
    )
}

pub fn wrap_email(headline: &str, body_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head><meta charset="utf-8"></head>
  <body style="margin:0;padding:24px;font-family:Arial,Helvetica,sans-serif;line-height:1.6;color:#333333;">
    <div style="max-width:600px;margin:0 auto;">
      <div style="background:#4F46E5;color:#ffffff;padding:20px;border-radius:8px 8px 0 0;">
        <h1 style="margin:0;font-size:22px;">{headline}</h1>
      </div>
      <div style="background:#f9fafb;padding:20px;border-radius:0 0 8px 8px;">
      {body_html}
      </div>
      <p style="margin:14px 0 0;font-size:12px;color:#9ca3af;">Sent by the {brand} waitlist</p>
    </div>
  </body>
</html>
"#,
        brand = BRAND_NAME,
    )
}
