//! HTML body for the enquiry notification email.

#[cfg(test)]
#[path = "email_template_test.rs"]
mod email_template_test;

use crate::state::enquiry::EnquiryForm;

/// Placeholder shown for optional fields left blank.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Escape text for safe inclusion in HTML element content and attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn or_not_specified(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() { NOT_SPECIFIED.to_owned() } else { escape_html(value) }
}

/// Render the branded enquiry email.
///
/// Every user-supplied value is escaped. `year` fills the copyright footer.
pub fn render_enquiry_html(form: &EnquiryForm, year: i32) -> String {
    let name = escape_html(form.name.trim());
    let email = escape_html(form.email.trim());
    let organization = or_not_specified(&form.organization);
    let project_type = or_not_specified(&form.project_type);
    let message = escape_html(form.message.trim());

    format!(
        r##"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background: linear-gradient(135deg, #1a1a1a 0%, #333 100%); padding: 30px; border-radius: 10px 10px 0 0;">
    <h1 style="color: #ffffff; margin: 0; font-size: 24px;">New Project Enquiry</h1>
    <p style="color: #cccccc; margin: 10px 0 0 0;">3D Bharat - Infrastructure Monitoring</p>
  </div>
  <div style="background: #f9f9f9; padding: 30px; border: 1px solid #e0e0e0;">
    <h3 style="color: #333; margin-top: 0; border-bottom: 2px solid #007bff; padding-bottom: 10px;">Contact Details</h3>
    <table style="width: 100%; border-collapse: collapse;">
      <tr>
        <td style="padding: 10px 0; color: #666; width: 140px;"><strong>Name:</strong></td>
        <td style="padding: 10px 0; color: #333;">{name}</td>
      </tr>
      <tr>
        <td style="padding: 10px 0; color: #666;"><strong>Email:</strong></td>
        <td style="padding: 10px 0; color: #333;"><a href="mailto:{email}" style="color: #007bff;">{email}</a></td>
      </tr>
      <tr>
        <td style="padding: 10px 0; color: #666;"><strong>Organization:</strong></td>
        <td style="padding: 10px 0; color: #333;">{organization}</td>
      </tr>
      <tr>
        <td style="padding: 10px 0; color: #666;"><strong>Project Type:</strong></td>
        <td style="padding: 10px 0; color: #333;">{project_type}</td>
      </tr>
    </table>
    <h3 style="color: #333; margin-top: 25px; border-bottom: 2px solid #007bff; padding-bottom: 10px;">Message</h3>
    <div style="background: #ffffff; padding: 15px; border-radius: 5px; border-left: 4px solid #007bff;">
      <p style="color: #333; margin: 0; line-height: 1.6; white-space: pre-wrap;">{message}</p>
    </div>
  </div>
  <div style="background: #1a1a1a; padding: 20px; border-radius: 0 0 10px 10px; text-align: center;">
    <p style="color: #888; margin: 0; font-size: 12px;">This enquiry was submitted through the 3D Bharat website.</p>
    <p style="color: #666; margin: 10px 0 0 0; font-size: 11px;">&copy; {year} 3D Bharat. All rights reserved.</p>
  </div>
</div>"##
    )
}
