/// Subject for the first feedback request
pub const FEEDBACK_SUBJECT: &str = "How was your move? Share your feedback";

/// Subject for the follow-up when the customer hasn't answered
pub const REMINDER_SUBJECT: &str = "Reminder: How was your move? Share your feedback";

pub fn subject(is_reminder: bool) -> &'static str {
    if is_reminder {
        REMINDER_SUBJECT
    } else {
        FEEDBACK_SUBJECT
    }
}

/// Render the feedback email body
///
/// Name and link are escaped before substitution.
pub fn render_feedback_html(customer_name: &str, feedback_link: &str) -> String {
    let name = escape_html(customer_name);
    let link = escape_html(feedback_link);

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
  </head>
  <body style="margin:0;padding:0;background-color:#f4f6f8;font-family:Arial,Helvetica,sans-serif;color:#1f2933;">
    <table role="presentation" width="100%" cellpadding="0" cellspacing="0" style="padding:32px 0;">
      <tr>
        <td align="center">
          <table role="presentation" width="600" cellpadding="0" cellspacing="0" style="background-color:#ffffff;border-radius:8px;padding:40px;">
            <tr>
              <td>
                <h1 style="font-size:24px;margin:0 0 16px;">Hi {name}!</h1>
                <p style="font-size:16px;line-height:24px;margin:0 0 16px;">
                  Thank you for booking your move through us. We hope everything went smoothly.
                </p>
                <p style="font-size:16px;line-height:24px;margin:0 0 24px;">
                  Would you take a minute to tell us how it went? Your feedback helps other
                  customers choose the right moving company and helps our partners improve.
                </p>
                <p style="text-align:center;margin:0 0 24px;">
                  <a href="{link}" style="display:inline-block;background-color:#2563eb;color:#ffffff;text-decoration:none;font-size:16px;font-weight:bold;padding:14px 28px;border-radius:6px;">Leave feedback</a>
                </p>
                <p style="font-size:13px;line-height:20px;color:#6b7280;margin:0;">
                  If the button doesn't work, copy this link into your browser:<br>
                  <a href="{link}" style="color:#2563eb;">{link}</a>
                </p>
              </td>
            </tr>
          </table>
        </td>
      </tr>
    </table>
  </body>
</html>"#
    )
}

/// Minimal HTML escaping for text and attribute contexts
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
