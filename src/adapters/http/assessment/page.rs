//! Server-rendered assessment page.
//!
//! One form, one "Predict Risk" button, and a stack of status banners above
//! it. The form always re-renders with the values that were submitted.

use std::fmt::Write;

use crate::domain::assessment::{FieldKind, FieldSpec, FormSchema, RawPatientInputs};
use crate::ports::ModelLoadError;

/// Styled status line shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Error(String),
    Success(String),
    Info(String),
    Warning(String),
}

impl Banner {
    fn class(&self) -> &'static str {
        match self {
            Banner::Error(_) => "banner error",
            Banner::Success(_) => "banner success",
            Banner::Info(_) => "banner info",
            Banner::Warning(_) => "banner warning",
        }
    }

    fn text(&self) -> &str {
        match self {
            Banner::Error(text)
            | Banner::Success(text)
            | Banner::Info(text)
            | Banner::Warning(text) => text,
        }
    }
}

const STYLE: &str = "\
body{font-family:sans-serif;max-width:42rem;margin:2rem auto;padding:0 1rem;color:#262730}\
label{display:block;margin-top:1rem;font-weight:600}\
input,select{width:100%;padding:.4rem;margin-top:.25rem;box-sizing:border-box}\
button{margin-top:1.5rem;padding:.6rem 1.2rem;font-size:1rem}\
.banner{padding:1rem;border-radius:.5rem;margin:1rem 0;white-space:pre-line}\
.error{background:#ffe0e0;color:#7d1a1a}\
.success{background:#dff5e1;color:#1b5e20}\
.info{background:#e0ecff;color:#0d3c78}\
.warning{background:#fff4d6;color:#6b4e00}";

/// Full page with the form and any banners.
pub fn render_form(schema: &FormSchema, values: &RawPatientInputs, banners: &[Banner]) -> String {
    let mut body = String::new();
    write_banners(&mut body, banners);

    body.push_str("<form method=\"post\" action=\"/predict\">\n");
    for field in &schema.fields {
        let value = values.value(field.key).unwrap_or_default();
        write_field(&mut body, field, value);
    }
    let _ = writeln!(
        body,
        "<button type=\"submit\">{}</button>\n</form>",
        escape_html(schema.submit_label)
    );

    layout(schema, &body)
}

/// Page shown when the model could not be loaded. No form is rendered.
pub fn render_startup_error(schema: &FormSchema, error: &ModelLoadError) -> String {
    let mut body = String::new();
    write_banners(&mut body, &[Banner::Error(error.to_string())]);
    layout(schema, &body)
}

fn layout(schema: &FormSchema, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Heart Disease Predictor</title>\n<style>{style}</style>\n</head>\n<body>\n\
         <h1>{title}</h1>\n<p>{subtitle}</p>\n{body}</body>\n</html>\n",
        style = STYLE,
        title = escape_html(schema.title),
        subtitle = escape_html(schema.subtitle),
        body = body,
    )
}

fn write_banners(out: &mut String, banners: &[Banner]) {
    for banner in banners {
        let _ = writeln!(
            out,
            "<div class=\"{}\" role=\"alert\">{}</div>",
            banner.class(),
            escape_html(banner.text())
        );
    }
}

fn write_field(out: &mut String, field: &FieldSpec, value: &str) {
    let key = escape_html(field.key);
    let _ = writeln!(out, "<label for=\"{}\">{}</label>", key, escape_html(field.label));
    match &field.kind {
        FieldKind::Integer { min, max } => {
            let _ = writeln!(
                out,
                "<input type=\"number\" id=\"{key}\" name=\"{key}\" min=\"{min}\" max=\"{max}\" step=\"1\" value=\"{value}\" required>",
                value = escape_html(value),
            );
        }
        FieldKind::Decimal { min, max, step } => {
            let _ = writeln!(
                out,
                "<input type=\"number\" id=\"{key}\" name=\"{key}\" min=\"{min:?}\" max=\"{max:?}\" step=\"{step}\" value=\"{value}\" required>",
                value = escape_html(value),
            );
        }
        FieldKind::Choice { options } => {
            let _ = writeln!(out, "<select id=\"{key}\" name=\"{key}\">");
            for option in options {
                let selected = if *option == value { " selected" } else { "" };
                let option = escape_html(option);
                let _ = writeln!(out, "<option value=\"{option}\"{selected}>{option}</option>");
            }
            out.push_str("</select>\n");
        }
    }
}

/// Escapes text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_has_every_field_and_one_button() {
        let schema = FormSchema::standard();
        let html = render_form(schema, &schema.initial_values(), &[]);

        for field in &schema.fields {
            assert!(html.contains(&format!("name=\"{}\"", field.key)), "missing {}", field.key);
        }
        assert_eq!(html.matches("<button").count(), 1);
        assert!(html.contains("Predict Risk"));
    }

    #[test]
    fn submitted_choice_stays_selected() {
        let schema = FormSchema::standard();
        let mut values = schema.initial_values();
        values.sex = "Female".to_string();

        let html = render_form(schema, &values, &[]);

        assert!(html.contains("<option value=\"Female\" selected>"));
        assert!(!html.contains("<option value=\"Male\" selected>"));
    }

    #[test]
    fn banners_are_escaped_and_styled() {
        let schema = FormSchema::standard();
        let html = render_form(
            schema,
            &schema.initial_values(),
            &[Banner::Warning("Failed to save patient data: <disk>".to_string())],
        );
        assert!(html.contains("class=\"banner warning\""));
        assert!(html.contains("&lt;disk&gt;"));
    }

    #[test]
    fn submitted_text_is_escaped() {
        let schema = FormSchema::standard();
        let mut values = schema.initial_values();
        values.age = "\"><script>".to_string();

        let html = render_form(schema, &values, &[]);

        assert!(!html.contains("<script>"));
    }

    #[test]
    fn startup_error_page_has_no_form() {
        let html = render_startup_error(
            FormSchema::standard(),
            &ModelLoadError::not_found("models/heart_disease_pipeline.json"),
        );
        assert!(html.contains("Model file not found"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(escape_html("a<b>&\"'"), "a&lt;b&gt;&amp;&quot;&#39;");
    }
}
