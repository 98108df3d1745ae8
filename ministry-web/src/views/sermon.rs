//! Sermon builder and series planner

use ministry_common::db::{Sermon, SermonSeries};
use ministry_common::fields::{format_illustrations_text, format_outline_text};

use super::{date_value, delete_button, escape, paragraphs, Page};

pub fn index_page(logged_in: bool) -> Page {
    let links = if logged_in {
        r#"<p><a class="button" href="/sermon/build">New sermon</a>
<a class="button" href="/sermon/my_sermons">My sermons</a>
<a class="button" href="/sermon/series">My series</a></p>"#
    } else {
        r#"<p><a href="/auth/login?next=%2Fsermon%2Fbuild">Log in</a> to start building sermons.</p>"#
    };
    Page::new(
        "Sermon Builder",
        format!(
            "<p>Draft sermons with a structured outline and illustration ideas, then plan them into series.</p>{}",
            links
        ),
    )
}

/// Sermon form contents
#[derive(Debug, Clone, Default)]
pub struct SermonFormValues {
    pub title: String,
    pub scripture_passage: String,
    pub theme: String,
    pub content: String,
    pub outline_text: String,
    pub illustrations_text: String,
    pub sermon_date: String,
}

impl SermonFormValues {
    pub fn from_sermon(sermon: &Sermon) -> Self {
        Self {
            title: sermon.title.clone(),
            scripture_passage: sermon.scripture_passage.clone(),
            theme: sermon.theme.clone(),
            content: sermon.content.clone(),
            outline_text: format_outline_text(&sermon.outline_sections()),
            illustrations_text: format_illustrations_text(&sermon.illustration_list()),
            sermon_date: date_value(sermon.sermon_date),
        }
    }
}

pub fn sermon_form_page(heading: &str, action: &str, values: &SermonFormValues) -> Page {
    Page::new(
        heading,
        format!(
            r#"<form method="post" action="{action}">
    <label for="title">Title</label><input type="text" id="title" name="title" value="{title}" required>
    <label for="scripture_passage">Scripture passage</label>
    <input type="text" id="scripture_passage" name="scripture_passage" value="{scripture}" required>
    <label for="theme">Theme</label><input type="text" id="theme" name="theme" value="{theme}">
    <label for="sermon_date">Date</label><input type="date" id="sermon_date" name="sermon_date" value="{date}">
    <label for="outline">Outline</label>
    <textarea id="outline" name="outline" placeholder="Introduction&#10;- Context of scripture">{outline}</textarea>
    <label for="illustrations">Illustrations</label>
    <textarea id="illustrations" name="illustrations" placeholder="Personal Story: ...">{illustrations}</textarea>
    <label for="content">Content</label><textarea id="content" name="content">{content}</textarea>
    <button type="submit">Save sermon</button>
</form>"#,
            action = escape(action),
            title = escape(&values.title),
            scripture = escape(&values.scripture_passage),
            theme = escape(&values.theme),
            date = escape(&values.sermon_date),
            outline = escape(&values.outline_text),
            illustrations = escape(&values.illustrations_text),
            content = escape(&values.content),
        ),
    )
}

pub fn my_sermons_page(sermons: &[Sermon]) -> Page {
    let body = if sermons.is_empty() {
        r#"<p>No sermons yet. <a href="/sermon/build">Build one</a>.</p>"#.to_string()
    } else {
        let rows: String = sermons
            .iter()
            .map(|s| {
                format!(
                    r#"<tr><td><a href="/sermon/sermon/{id}">{title}</a></td><td>{scripture}</td><td>{date}</td></tr>"#,
                    id = s.id,
                    title = escape(&s.title),
                    scripture = escape(&s.scripture_passage),
                    date = date_value(s.sermon_date),
                )
            })
            .collect();
        format!(
            r#"<p><a class="button" href="/sermon/build">New sermon</a></p>
<table><tr><th>Title</th><th>Scripture</th><th>Date</th></tr>{}</table>"#,
            rows
        )
    };
    Page::new("My Sermons", body)
}

pub fn sermon_page(sermon: &Sermon, series: Option<&SermonSeries>, my_series: &[SermonSeries]) -> Page {
    let outline: String = sermon
        .outline_sections()
        .iter()
        .map(|section| {
            let points: String = section
                .points
                .iter()
                .map(|p| format!("<li>{}</li>", escape(p)))
                .collect();
            format!("<li><strong>{}</strong><ul>{}</ul></li>", escape(&section.title), points)
        })
        .collect();

    let illustrations: String = sermon
        .illustration_list()
        .iter()
        .map(|i| format!("<li><strong>{}</strong>: {}</li>", escape(&i.title), escape(&i.description)))
        .collect();

    let series_html = match series {
        Some(series) => format!(
            r#"<p>Part of <a href="/sermon/series/{}">{}</a>{}</p>"#,
            series.id,
            escape(&series.title),
            sermon
                .series_position
                .map(|p| format!(" (#{})", p))
                .unwrap_or_default()
        ),
        None => String::new(),
    };

    let attach = if my_series.is_empty() {
        String::new()
    } else {
        let choices: String = my_series
            .iter()
            .map(|s| {
                format!(
                    r#"<option value="{}"{}>{}</option>"#,
                    s.id,
                    if sermon.series_id == Some(s.id) { " selected" } else { "" },
                    escape(&s.title)
                )
            })
            .collect();
        format!(
            r#"<div class="card"><h2>Add to series</h2>
<form method="post" action="/sermon/sermon/add_to_series/{id}">
    <label for="series_id">Series</label>
    <select id="series_id" name="series_id"><option value="">Select a series</option>{choices}</select>
    <label for="position">Position</label>
    <input type="number" id="position" name="position" min="1" value="{position}">
    <button type="submit">Add</button>
</form></div>"#,
            id = sermon.id,
            choices = choices,
            position = sermon.series_position.map(|p| p.to_string()).unwrap_or_default(),
        )
    };

    Page::new(
        sermon.title.clone(),
        format!(
            r#"<p><strong>Scripture:</strong> {scripture}</p>
<p><strong>Theme:</strong> {theme}</p>
<p><strong>Date:</strong> {date}</p>
{series_html}
<h2>Outline</h2><ul>{outline}</ul>
<h2>Illustrations</h2><ul>{illustrations}</ul>
<h2>Content</h2><div class="card">{content}</div>
<p><a href="/sermon/sermon/{id}/edit">Edit</a> {delete} <a href="/sermon/my_sermons">Back</a></p>
{attach}"#,
            scripture = escape(&sermon.scripture_passage),
            theme = escape(&sermon.theme),
            date = date_value(sermon.sermon_date),
            series_html = series_html,
            outline = outline,
            illustrations = illustrations,
            content = paragraphs(&sermon.content),
            id = sermon.id,
            delete = delete_button(&format!("/sermon/sermon/{}/delete", sermon.id), "Delete"),
            attach = attach,
        ),
    )
}

pub fn series_list_page(series: &[SermonSeries]) -> Page {
    let rows: String = series
        .iter()
        .map(|s| {
            format!(
                r#"<tr><td><a href="/sermon/series/{id}">{title}</a></td><td>{theme}</td><td>{start}</td><td>{end}</td></tr>"#,
                id = s.id,
                title = escape(&s.title),
                theme = escape(&s.theme),
                start = date_value(s.start_date),
                end = date_value(s.end_date),
            )
        })
        .collect();
    Page::new(
        "My Sermon Series",
        format!(
            r#"<p><a class="button" href="/sermon/series/new">New series</a></p>
<table><tr><th>Title</th><th>Theme</th><th>Start</th><th>End</th></tr>{}</table>"#,
            rows
        ),
    )
}

/// Series form contents
#[derive(Debug, Clone, Default)]
pub struct SeriesFormValues {
    pub title: String,
    pub description: String,
    pub theme: String,
    pub start_date: String,
    pub end_date: String,
}

impl SeriesFormValues {
    pub fn from_series(series: &SermonSeries) -> Self {
        Self {
            title: series.title.clone(),
            description: series.description.clone(),
            theme: series.theme.clone(),
            start_date: date_value(series.start_date),
            end_date: date_value(series.end_date),
        }
    }
}

pub fn series_form_page(heading: &str, action: &str, values: &SeriesFormValues) -> Page {
    Page::new(
        heading,
        format!(
            r#"<form method="post" action="{action}">
    <label for="title">Title</label><input type="text" id="title" name="title" value="{title}" required>
    <label for="theme">Theme</label><input type="text" id="theme" name="theme" value="{theme}">
    <label for="description">Description</label><textarea id="description" name="description">{description}</textarea>
    <label for="start_date">Start date</label><input type="date" id="start_date" name="start_date" value="{start}">
    <label for="end_date">End date</label><input type="date" id="end_date" name="end_date" value="{end}">
    <button type="submit">Save series</button>
</form>"#,
            action = escape(action),
            title = escape(&values.title),
            theme = escape(&values.theme),
            description = escape(&values.description),
            start = escape(&values.start_date),
            end = escape(&values.end_date),
        ),
    )
}

pub fn series_page(series: &SermonSeries, sermons: &[Sermon]) -> Page {
    let rows: String = sermons
        .iter()
        .map(|s| {
            format!(
                r#"<tr><td>{position}</td><td><a href="/sermon/sermon/{id}">{title}</a></td><td>{scripture}</td><td>{date}</td></tr>"#,
                position = s.series_position.map(|p| p.to_string()).unwrap_or_default(),
                id = s.id,
                title = escape(&s.title),
                scripture = escape(&s.scripture_passage),
                date = date_value(s.sermon_date),
            )
        })
        .collect();

    Page::new(
        series.title.clone(),
        format!(
            r#"<p><strong>Theme:</strong> {theme}</p>
<p><strong>Dates:</strong> {start} to {end}</p>
<p>{description}</p>
<table><tr><th>#</th><th>Sermon</th><th>Scripture</th><th>Date</th></tr>{rows}</table>
<p><a href="/sermon/series/{id}/edit">Edit</a> {delete} <a href="/sermon/series">Back</a></p>"#,
            theme = escape(&series.theme),
            start = date_value(series.start_date),
            end = date_value(series.end_date),
            description = paragraphs(&series.description),
            rows = rows,
            id = series.id,
            delete = delete_button(&format!("/sermon/series/{}/delete", series.id), "Delete series"),
        ),
    )
}
