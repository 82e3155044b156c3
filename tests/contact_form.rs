//! Integration tests for the contact form as seen through the page.

use folio::{Field, MemoryStorage, NoticeVariant, Portfolio};

fn page() -> Portfolio {
    Portfolio::new(Box::new(MemoryStorage::with_entry("theme", "light"))).with_effects(None)
}

#[test]
fn test_complete_submission_clears_and_acknowledges() {
    let mut page = page();
    page.set_field(Field::Name, "Grace");
    page.set_field(Field::Email, "grace@example.com");
    page.set_field(Field::Message, "Let's talk about pipelines.");

    let sent = page.submit_contact().unwrap();
    assert_eq!(sent.email, "grace@example.com");
    assert!(page.form().is_empty());

    let visible = page.toaster().visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Message Sent!");
    assert_eq!(
        visible[0].description,
        "Thank you for reaching out. I'll get back to you soon."
    );
    assert_eq!(visible[0].variant, NoticeVariant::Default);
}

#[test]
fn test_missing_name_keeps_values() {
    let mut page = page();
    page.set_field(Field::Email, "a@b.com");
    page.set_field(Field::Message, "hi");

    let err = page.submit_contact().unwrap_err();
    assert_eq!(err.missing, vec![Field::Name]);
    assert_eq!(page.form().email, "a@b.com");
    assert_eq!(page.form().message, "hi");

    let visible = page.toaster().visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Missing Information");
    assert_eq!(visible[0].description, "Please fill in all required fields.");
    assert!(visible.iter().all(|n| n.title != "Message Sent!"));
}

#[test]
fn test_retry_after_failure_replaces_notice() {
    let mut page = page();
    assert!(page.submit_contact().is_err());

    page.set_field(Field::Name, "Ada");
    page.set_field(Field::Email, "ada@example.com");
    page.set_field(Field::Message, "Hello");
    assert!(page.submit_contact().is_ok());

    let visible = page.toaster().visible();
    assert_eq!(visible.len(), 1);
    assert!(!visible[0].is_destructive());
}

#[test]
fn test_failed_submit_renders_destructive_toast() {
    let mut page = page();
    page.set_field(Field::Name, "Ada");
    page.submit_contact().unwrap_err();

    let html = page.render_html().unwrap();
    assert!(html.contains("toast-destructive"));
    assert!(html.contains(r#"value="Ada""#));
}
