use super::*;

fn form() -> EnquiryForm {
    EnquiryForm {
        name: "Asha Rao".to_owned(),
        email: "asha@example.com".to_owned(),
        organization: String::new(),
        project_type: "Railway".to_owned(),
        message: "Need OHE survey\nfor 40 km".to_owned(),
    }
}

#[test]
fn escape_html_replaces_markup_characters() {
    assert_eq!(escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
}

#[test]
fn escape_html_leaves_plain_text_alone() {
    assert_eq!(escape_html("Bridge / Flyover"), "Bridge / Flyover");
}

#[test]
fn template_embeds_contact_fields() {
    let html = render_enquiry_html(&form(), 2026);
    assert!(html.contains(">Asha Rao</td>"));
    assert!(html.contains(r#"href="mailto:asha@example.com""#));
    assert!(html.contains(">Railway</td>"));
    assert!(html.contains("Need OHE survey\nfor 40 km"));
}

#[test]
fn template_marks_blank_optional_fields() {
    let mut f = form();
    f.project_type = "  ".to_owned();
    let html = render_enquiry_html(&f, 2026);
    assert_eq!(html.matches(NOT_SPECIFIED).count(), 2);
}

#[test]
fn template_footer_carries_year() {
    assert!(render_enquiry_html(&form(), 2031).contains("&copy; 2031 3D Bharat"));
}

#[test]
fn template_escapes_user_markup() {
    let mut f = form();
    f.message = "<script>alert(1)</script>".to_owned();
    let html = render_enquiry_html(&f, 2026);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}
