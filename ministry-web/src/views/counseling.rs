//! Counseling session notes

use ministry_common::db::CounselingSession;

use super::{delete_button, escape, options, paragraphs, Page};
use crate::services::suggestions::COUNSELING_TOPICS;

pub fn index_page(logged_in: bool) -> Page {
    let topics: String = COUNSELING_TOPICS
        .iter()
        .map(|t| format!("<li>{}</li>", escape(t)))
        .collect();
    let links = if logged_in {
        r#"<p><a class="button" href="/counseling/session/new">New session</a>
<a class="button" href="/counseling/my_sessions">My sessions</a></p>"#
    } else {
        r#"<p><a href="/auth/login?next=%2Fcounseling%2Fmy_sessions">Log in</a> to keep session notes.</p>"#
    };
    Page::new(
        "Counseling",
        format!(
            "<p>Private notes for pastoral counseling, with suggested passages for common topics.</p>{}<ul>{}</ul>",
            links, topics
        ),
    )
}

/// Session form contents
#[derive(Debug, Clone, Default)]
pub struct SessionFormValues {
    pub title: String,
    pub description: String,
    pub topic: String,
    pub notes: String,
    pub scripture_references: String,
}

impl SessionFormValues {
    pub fn from_session(session: &CounselingSession) -> Self {
        Self {
            title: session.title.clone(),
            description: session.description.clone(),
            topic: session.topic.clone(),
            notes: session.notes.clone(),
            scripture_references: session.scripture_list().join(", "),
        }
    }
}

pub fn session_form_page(heading: &str, action: &str, values: &SessionFormValues) -> Page {
    Page::new(
        heading,
        format!(
            r#"<form method="post" action="{action}">
    <label for="title">Title</label><input type="text" id="title" name="title" value="{title}" required>
    <label for="topic">Topic</label>
    <select id="topic" name="topic" required><option value="">Select a topic</option>{topics}</select>
    <label for="description">Description</label><textarea id="description" name="description">{description}</textarea>
    <label for="notes">Notes</label><textarea id="notes" name="notes">{notes}</textarea>
    <label for="scripture_references">Scripture references (comma separated)</label>
    <input type="text" id="scripture_references" name="scripture_references" value="{scripture}">
    <button type="submit">Save session</button>
</form>"#,
            action = escape(action),
            title = escape(&values.title),
            topics = options(&COUNSELING_TOPICS, &values.topic),
            description = escape(&values.description),
            notes = escape(&values.notes),
            scripture = escape(&values.scripture_references),
        ),
    )
}

pub fn my_sessions_page(sessions: &[CounselingSession]) -> Page {
    let rows: String = sessions
        .iter()
        .map(|s| {
            format!(
                r#"<tr><td><a href="/counseling/session/{id}">{title}</a></td><td>{topic}</td><td>{updated}</td></tr>"#,
                id = s.id,
                title = escape(&s.title),
                topic = escape(&s.topic),
                updated = s.updated_at.format("%Y-%m-%d"),
            )
        })
        .collect();
    Page::new(
        "My Counseling Sessions",
        format!(
            r#"<p><a class="button" href="/counseling/session/new">New session</a></p>
<table><tr><th>Title</th><th>Topic</th><th>Updated</th></tr>{}</table>"#,
            rows
        ),
    )
}

pub fn session_page(session: &CounselingSession, suggested: &[&str], advice: &str) -> Page {
    let scriptures: String = session
        .scripture_list()
        .iter()
        .map(|s| format!("<li>{}</li>", escape(s)))
        .collect();
    let suggestions: String = suggested
        .iter()
        .map(|s| format!("<li>{}</li>", escape(s)))
        .collect();

    Page::new(
        session.title.clone(),
        format!(
            r#"<p><strong>Topic:</strong> {topic}</p>
<p>{description}</p>
<h2>Notes</h2><div class="card">{notes}</div>
<h2>Scripture references</h2><ul>{scriptures}</ul>
<div class="card"><h2>Suggestions for {topic}</h2><ul>{suggestions}</ul><p class="muted">{advice}</p></div>
<p><a href="/counseling/session/{id}/edit">Edit</a> {delete} <a href="/counseling/my_sessions">Back</a></p>"#,
            topic = escape(&session.topic),
            description = paragraphs(&session.description),
            notes = paragraphs(&session.notes),
            scriptures = scriptures,
            suggestions = suggestions,
            advice = escape(advice),
            id = session.id,
            delete = delete_button(&format!("/counseling/session/{}/delete", session.id), "Delete"),
        ),
    )
}
