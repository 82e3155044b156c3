//! MiniJinja filter registration.

use minijinja::{Environment, Value};

/// Badge variant for a project status: `default` for production work,
/// `secondary` for everything else.
pub fn badge_variant(status: &str) -> &'static str {
    if status == "production" {
        "default"
    } else {
        "secondary"
    }
}

/// Registers the page filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("badge_variant", |status: String| -> String {
        badge_variant(&status).to_string()
    });

    // {{ "about" | anchor }} -> #about
    env.add_filter("anchor", |section: String| -> String {
        format!("#{}", section.trim_start_matches('#'))
    });

    // Inline styles are built by the crate, never from user input.
    env.add_filter("css", |value: Value| -> Value {
        Value::from_safe_string(value.to_string())
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str) -> String {
        let mut env = Environment::new();
        register_filters(&mut env);
        env.render_str(source, minijinja::context! {}).unwrap()
    }

    #[test]
    fn test_badge_variant() {
        assert_eq!(badge_variant("production"), "default");
        assert_eq!(badge_variant("active"), "secondary");
        assert_eq!(render(r#"{{ "production" | badge_variant }}"#), "default");
    }

    #[test]
    fn test_anchor() {
        assert_eq!(render(r#"{{ "projects" | anchor }}"#), "#projects");
        assert_eq!(render(r##"{{ "#contact" | anchor }}"##), "#contact");
    }
}
