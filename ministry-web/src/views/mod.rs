//! HTML rendering
//!
//! Pages are plain `format!` templates. Every interpolated user value goes
//! through [`escape`]; helpers here build the shared layout, navigation and
//! form widgets.

use axum::http::StatusCode;
use ministry_common::db::{FlashMessage, User};

pub mod apologetics;
pub mod auth;
pub mod counseling;
pub mod doctrine;
pub mod pages;
pub mod resources;
pub mod sermon;

/// A rendered page body with its title
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub body: String,
}

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Escape text for HTML element content and attribute values
///
/// # Examples
///
/// ```
/// use ministry_web::views::escape;
///
/// assert_eq!(escape("<b>\"Grace\" & 'truth'</b>"),
///            "&lt;b&gt;&quot;Grace&quot; &amp; &#39;truth&#39;&lt;/b&gt;");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Escape and keep line breaks
pub fn paragraphs(text: &str) -> String {
    escape(text).replace('\n', "<br>\n")
}

const STYLES: &str = r#"
        * { box-sizing: border-box; }
        body {
            margin: 0;
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #f6f4ef;
            color: #2b2b2b;
            line-height: 1.6;
        }
        header {
            background-color: #3b2f4a;
            color: #fff;
            padding: 14px 24px;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }
        header a { color: #f0e6ff; text-decoration: none; margin-right: 14px; }
        header .brand { font-weight: 700; font-size: 20px; }
        main { max-width: 1100px; margin: 24px auto; padding: 0 20px; }
        .flash { padding: 10px 14px; border-radius: 4px; margin-bottom: 10px; }
        .flash.success { background: #dff3e3; border: 1px solid #8ccf99; }
        .flash.info { background: #e3eef9; border: 1px solid #93b9e0; }
        .flash.warning { background: #fff4d6; border: 1px solid #e6c46b; }
        .flash.danger { background: #fbe1e1; border: 1px solid #e08d8d; }
        table { border-collapse: collapse; width: 100%; background: #fff; }
        th, td { border: 1px solid #ddd; padding: 8px; vertical-align: top; text-align: left; }
        th { background: #ece7f3; }
        .muted { color: #777; font-size: 0.9em; }
        .placeholder { color: #999; font-style: italic; }
        form.inline { display: inline; }
        label { display: block; margin-top: 10px; font-weight: 600; }
        input[type=text], input[type=email], input[type=password], input[type=date],
        input[type=url], input[type=number], select, textarea {
            width: 100%; padding: 6px; border: 1px solid #bbb; border-radius: 3px;
        }
        textarea { min-height: 120px; }
        button, .button {
            display: inline-block; margin-top: 12px; padding: 6px 14px;
            background: #5b4a75; color: #fff; border: none; border-radius: 3px;
            text-decoration: none; cursor: pointer;
        }
        button.danger { background: #a33b3b; }
        .card { background: #fff; border: 1px solid #ddd; border-radius: 4px; padding: 14px; margin-bottom: 14px; }
        .checklist label { font-weight: normal; display: inline-block; margin-right: 14px; }
"#;

/// Wrap a page body in the site layout
pub fn layout(page: &Page, user: Option<&User>, flashes: &[FlashMessage]) -> String {
    let account = match user {
        Some(user) => format!(
            r#"<a href="/dashboard">{}</a><a href="/profile">Profile</a><a href="/auth/logout">Log out</a>"#,
            escape(&user.display_name())
        ),
        None => r#"<a href="/auth/login">Log in</a><a href="/auth/register">Register</a>"#.to_string(),
    };

    let flash_html: String = flashes
        .iter()
        .map(|f| {
            format!(
                r#"<div class="flash {}">{}</div>"#,
                escape(&f.level),
                escape(&f.message)
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Ministry Tool</title>
    <style>{styles}</style>
</head>
<body>
    <header>
        <nav>
            <a class="brand" href="/">Ministry Tool</a>
            <a href="/doctrine/">Doctrine</a>
            <a href="/sermon/">Sermons</a>
            <a href="/counseling/">Counseling</a>
            <a href="/resources/library">Library</a>
            <a href="/apologetics/">Apologetics</a>
        </nav>
        <nav>{account}</nav>
    </header>
    <main>
        {flashes}
        <h1>{title}</h1>
        {body}
    </main>
</body>
</html>"#,
        title = escape(&page.title),
        styles = STYLES,
        account = account,
        flashes = flash_html,
        body = page.body,
    )
}

/// Stand-alone error page (no session context needed)
pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = match status {
        StatusCode::NOT_FOUND => "Page Not Found",
        StatusCode::FORBIDDEN => "Access Denied",
        StatusCode::BAD_REQUEST => "Invalid Request",
        _ => "Server Error",
    };
    let page = Page::new(
        title,
        format!(
            r#"<p>{}</p><p><a href="/">Return home</a></p>"#,
            escape(message)
        ),
    );
    layout(&page, None, &[])
}

/// `<option>` list with one value preselected
pub fn options<S: AsRef<str>>(values: &[S], selected: &str) -> String {
    values
        .iter()
        .map(|v| {
            let v = v.as_ref();
            format!(
                r#"<option value="{0}"{1}>{0}</option>"#,
                escape(v),
                if v == selected { " selected" } else { "" }
            )
        })
        .collect()
}

/// Hidden inputs for a repeated field
pub fn hidden_inputs<S: AsRef<str>>(name: &str, values: &[S]) -> String {
    values
        .iter()
        .map(|v| {
            format!(
                r#"<input type="hidden" name="{}" value="{}">"#,
                escape(name),
                escape(v.as_ref())
            )
        })
        .collect()
}

/// POST-only delete button with a confirmation prompt
pub fn delete_button(action: &str, label: &str) -> String {
    format!(
        r#"<form class="inline" method="post" action="{}" onsubmit="return confirm('Are you sure?');"><button class="danger" type="submit">{}</button></form>"#,
        escape(action),
        escape(label)
    )
}

/// Date as `YYYY-MM-DD` or an empty string
pub fn date_value(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_marks_selected() {
        let html = options(&["Grief", "Guilt"], "Guilt");
        assert!(html.contains(r#"<option value="Guilt" selected>Guilt</option>"#));
        assert!(html.contains(r#"<option value="Grief">Grief</option>"#));
    }

    #[test]
    fn test_layout_escapes_flash_and_title() {
        let page = Page::new("<Sermons>", "<p>body</p>");
        let flash = FlashMessage {
            id: 1,
            session_id: 1,
            level: "warning".to_string(),
            message: "<script>".to_string(),
            created_at: chrono::Utc::now(),
        };
        let html = layout(&page, None, &[flash]);
        assert!(html.contains("&lt;Sermons&gt;"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("/auth/login"));
    }
}
