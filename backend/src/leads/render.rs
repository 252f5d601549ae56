// src/leads/render.rs
//
// HTML fragments returned by POST /api/quote. HTMX swaps them into the
// form's #quoteResult slot, so they are never full pages.

use askama::Template;

use crate::leads::models::QuoteFields;

#[derive(Template)]
#[template(path = "fragments/quote_errors.html")]
struct QuoteErrors<'a> {
    errors: &'a [&'static str],
}

#[derive(Template)]
#[template(path = "fragments/quote_success.html")]
struct QuoteSuccess<'a> {
    name: &'a str,
    phone: &'a str,
    email: Option<&'a str>,
}

/// "Please fix:" box listing every validation message.
pub fn error_fragment(errors: &[&'static str]) -> askama::Result<String> {
    QuoteErrors { errors }.render()
}

/// Confirmation naming who we will call back, and the email when given.
pub fn success_fragment(fields: &QuoteFields) -> askama::Result<String> {
    QuoteSuccess {
        name: &fields.name,
        phone: &fields.phone,
        email: fields.email.as_deref(),
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: Option<&str>) -> QuoteFields {
        QuoteFields {
            name: name.to_string(),
            phone: "0400111222".to_string(),
            email: email.map(str::to_string),
            suburb: "Bondi".to_string(),
            service: "Residential painting".to_string(),
            message: "Repaint two bedrooms".to_string(),
            page: "/".to_string(),
        }
    }

    #[test]
    fn error_fragment_lists_each_message() {
        let html = error_fragment(&["Please enter your name.", "Please choose a service."])
            .expect("render");
        assert!(html.contains("Please fix:"));
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains("<li>Please enter your name.</li>"));
        assert!(html.contains("<li>Please choose a service.</li>"));
    }

    #[test]
    fn success_fragment_without_email() {
        let html = success_fragment(&fields("Jane Doe", None)).expect("render");
        assert!(html.contains("Request received"));
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("0400111222"));
        assert!(!html.contains(" or "));
    }

    #[test]
    fn success_fragment_with_email() {
        let html = success_fragment(&fields("Jane Doe", Some("jane@example.com"))).expect("render");
        assert!(html.contains(" or <span class=\"font-semibold\">jane@example.com</span>"));
    }

    #[test]
    fn echoed_values_are_escaped() {
        let html = success_fragment(&fields("<script>x</script>", None)).expect("render");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
