//! Integration tests for rendering the whole page.

use std::time::Duration;

use folio::{
    AppearanceMode, ClickTarget, Config, MemoryStorage, PointerEvent, Portfolio, Section,
};

fn page(mode: &str) -> Portfolio {
    Portfolio::new(Box::new(MemoryStorage::with_entry("theme", mode)))
}

#[test]
fn test_dark_mode_marks_root_and_label() {
    let html = page("dark").render_html().unwrap();
    assert!(html.contains(r#"class="dark" data-theme="dark""#));
    assert!(html.contains("Switch to light mode"));
}

#[test]
fn test_toggle_then_render() {
    let mut page = page("dark");
    page.click(
        PointerEvent::primary(0.0, 0.0).on(ClickTarget::ThemeToggle),
        Duration::ZERO,
    );
    assert_eq!(page.appearance(), AppearanceMode::Light);

    let html = page.render_html().unwrap();
    assert!(html.contains(r#"<html lang="en" data-theme="light">"#));
    assert!(html.contains("Switch to dark mode"));
}

#[test]
fn test_nav_click_highlights_section() {
    let mut page = page("light");
    page.click(
        PointerEvent::primary(0.0, 0.0).on(ClickTarget::NavLink(Section::Contact)),
        Duration::ZERO,
    );
    let html = page.render_html().unwrap();
    assert!(html.contains(r##"<a href="#contact" class="nav-link active""##));
    assert!(html.contains(r##"<a href="#about" class="nav-link">"##));
}

#[test]
fn test_every_section_present() {
    let html = page("light").render_html().unwrap();
    for section in Section::ALL {
        assert!(
            html.contains(&format!(r#"<section id="{}""#, section.id())),
            "missing section {section}"
        );
    }
    assert!(html.contains("All rights reserved."));
}

#[test]
fn test_skills_grouped_by_category() {
    let page = page("light");
    let html = page.render_html().unwrap();
    let groups = page.site().skills_by_category();
    assert_eq!(groups.len(), 4);
    assert_eq!(html.matches(r#"<div class="skill-card">"#).count(), groups.len());
    assert!(html.contains("<h3>Cloud Platforms</h3>"));
}

#[test]
fn test_custom_content_and_templates() {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("site.yaml");
    std::fs::write(
        &content,
        r#"
personal:
  name: Sam Ortiz
  title: SRE
  subtitle: Site Reliability Engineer
  description: Keeps the lights on.
  email: sam@example.com
  social:
    github: https://github.com/sam
    linkedin: https://linkedin.com/in/sam
  copyright_year: 2026
"#,
    )
    .unwrap();
    let templates = dir.path().join("templates");
    std::fs::create_dir(&templates).unwrap();
    std::fs::write(
        templates.join("hero.j2"),
        "<section id=\"about\">Hi, {{ site.personal.name }}</section>",
    )
    .unwrap();

    let config_path = dir.path().join("folio.yaml");
    std::fs::write(
        &config_path,
        "content: site.yaml\ntemplates: templates\nstorage:\n  path: prefs.json\n",
    )
    .unwrap();

    let config = Config::load(&config_path).unwrap();
    let page = Portfolio::from_config(&config).unwrap();
    let html = page.render_html().unwrap();

    assert!(html.contains("Hi, Sam Ortiz"));
    assert!(html.contains("2026 Sam Ortiz. All rights reserved."));
    assert!(html.contains(r#"<section id="projects""#));
}
