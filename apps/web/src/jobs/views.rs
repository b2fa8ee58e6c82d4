//! Server-rendered HTML for the preference form and the results page.

use serde_json::{Map, Value};

use crate::jobs::handlers::{FORM_PATH, RECOMMEND_PATH};

/// Wraps page content in the shared document shell.
fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
        body {{ font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }}
        .alert {{ background: #fde8e8; border: 1px solid #e0a0a0; padding: 0.75rem; }}
        .job {{ border: 1px solid #ccc; padding: 0.75rem; margin-bottom: 1rem; }}
        label {{ display: block; margin-top: 0.75rem; }}
    </style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape_html(title),
    )
}

pub fn render_form(alert: Option<&str>) -> String {
    let alert = alert
        .map(|message| format!(r#"<p class="alert" role="alert">{}</p>"#, escape_html(message)))
        .unwrap_or_default();

    let body = format!(
        r#"<h1>Find your next job</h1>
{alert}
<form action="{RECOMMEND_PATH}" method="post">
    <label for="personality">Personality</label>
    <input type="text" id="personality" name="personality">

    <label for="work_experience">Work experience (years, e.g. 2-5)</label>
    <input type="text" id="work_experience" name="work_experience">

    <label for="work_hours">Work hours per week (e.g. 35-40)</label>
    <input type="text" id="work_hours" name="work_hours">

    <label for="salary">Salary range (e.g. 50000-90000)</label>
    <input type="text" id="salary" name="salary">

    <p><button type="submit">Recommend jobs</button></p>
</form>"#
    );

    layout("Job preferences", &body)
}

pub fn render_results(jobs: &[Map<String, Value>]) -> String {
    let mut body = String::from("<h1>Recommended jobs</h1>\n");

    if jobs.is_empty() {
        body.push_str("<p>No recommendations matched your preferences.</p>\n");
    }

    for job in jobs {
        let heading = job
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("Recommended job");

        body.push_str(&format!(
            "<div class=\"job\">\n<h2>{}</h2>\n<dl>\n",
            escape_html(heading)
        ));
        for (key, value) in job {
            body.push_str(&format!(
                "<dt>{}</dt><dd>{}</dd>\n",
                escape_html(&humanize(key)),
                escape_html(&display_value(value))
            ));
        }
        body.push_str("</dl>\n</div>\n");
    }

    body.push_str(&format!(r#"<p><a href="{FORM_PATH}">Search again</a></p>"#));

    layout("Recommended jobs", &body)
}

/// "work_hours" → "Work hours"
fn humanize(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_form_has_all_preference_fields() {
        let html = render_form(None);
        for field in ["personality", "work_experience", "work_hours", "salary"] {
            assert!(html.contains(&format!(r#"name="{field}""#)), "missing {field}");
        }
        assert!(html.contains(&format!(r#"action="{RECOMMEND_PATH}""#)));
        assert!(!html.contains("class=\"alert\""));
    }

    #[test]
    fn test_form_shows_escaped_alert() {
        let html = render_form(Some("<b>oops</b>"));
        assert!(html.contains("&lt;b&gt;oops&lt;/b&gt;"));
        assert!(!html.contains("<b>oops</b>"));
    }

    #[test]
    fn test_results_render_every_attribute() {
        let jobs = vec![record(json!({
            "title": "Data Analyst",
            "salary": 72000,
            "work_hours": 40
        }))];

        let html = render_results(&jobs);

        assert!(html.contains("<h2>Data Analyst</h2>"));
        assert!(html.contains("<dt>Salary</dt><dd>72000</dd>"));
        assert!(html.contains("<dt>Work hours</dt><dd>40</dd>"));
    }

    #[test]
    fn test_results_empty_message() {
        let html = render_results(&[]);
        assert!(html.contains("No recommendations"));
        assert!(html.contains(&format!(r#"href="{FORM_PATH}""#)));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }
}
