//! Home, dashboard, profile and user guide

use ministry_common::db::User;

use super::{escape, Page};
use crate::db::users::UserActivity;

pub fn home_page(user: Option<&User>) -> Page {
    let greeting = match user {
        Some(user) => format!(
            r#"<p>Welcome back, {}. Your <a href="/dashboard">dashboard</a> lists everything you have prepared.</p>"#,
            escape(&user.display_name())
        ),
        None => r#"<p><a href="/auth/login">Log in</a> or <a href="/auth/register">register</a> to save your work.</p>"#
            .to_string(),
    };

    Page::new(
        "Ministry Tool",
        format!(
            r#"{greeting}
<div class="card"><h2><a href="/doctrine/">Doctrine Comparison</a></h2>
<p>Compare what denominations teach, topic by topic, and save comparisons for later.</p></div>
<div class="card"><h2><a href="/sermon/">Sermon Builder</a></h2>
<p>Draft sermons with outlines and illustrations, and plan them into series.</p></div>
<div class="card"><h2><a href="/counseling/">Counseling Notes</a></h2>
<p>Keep private notes for counseling sessions with scripture suggestions by topic.</p></div>
<div class="card"><h2><a href="/resources/library">Resource Library</a></h2>
<p>Browse and import free study resources.</p></div>
<div class="card"><h2><a href="/apologetics/">Apologetics</a></h2>
<p>Work through common objections and prepare responses.</p></div>
<p class="muted"><a href="/user_guide">User guide</a></p>"#,
            greeting = greeting
        ),
    )
}

pub fn dashboard_page(user: &User, activity: &UserActivity) -> Page {
    Page::new(
        "Dashboard",
        format!(
            r#"<p>Signed in as <strong>{name}</strong>.</p>
<table>
    <tr><th>Sermons</th><td><a href="/sermon/my_sermons">{sermons}</a></td></tr>
    <tr><th>Sermon series</th><td><a href="/sermon/series">{series}</a></td></tr>
    <tr><th>Counseling sessions</th><td><a href="/counseling/my_sessions">{sessions}</a></td></tr>
    <tr><th>Saved comparisons</th><td><a href="/doctrine/my_comparisons">{comparisons}</a></td></tr>
    <tr><th>Apologetics responses</th><td>{responses}</td></tr>
</table>"#,
            name = escape(&user.display_name()),
            sermons = activity.sermons,
            series = activity.series,
            sessions = activity.counseling_sessions,
            comparisons = activity.comparisons,
            responses = activity.responses,
        ),
    )
}

pub fn profile_page(user: &User) -> Page {
    Page::new(
        "Profile",
        format!(
            r#"<div class="card">
<p><strong>Username:</strong> {username}</p>
<p><strong>Email:</strong> {email}</p>
<p><strong>Name:</strong> {first} {last}</p>
<p><strong>Role:</strong> {role}</p>
<p class="muted">Member since {since}</p>
</div>"#,
            username = escape(&user.username),
            email = escape(&user.email),
            first = escape(&user.first_name),
            last = escape(&user.last_name),
            role = user.role(),
            since = user.created_at.format("%Y-%m-%d"),
        ),
    )
}

pub fn user_guide_page() -> Page {
    Page::new(
        "User Guide",
        r#"<div class="card"><h2>Doctrine</h2>
<p>Pick at least two denominations and one topic on the compare page. Cells without a recorded belief read "No information available". Save a comparison to keep a snapshot of the results.</p></div>
<div class="card"><h2>Sermons</h2>
<p>Write the outline as headings with "-" bullet points beneath, and illustrations as "Title: description" lines. Sermons can be attached to one of your series with a position.</p></div>
<div class="card"><h2>Counseling</h2>
<p>Session notes are visible only to you. Choose a topic to get suggested passages.</p></div>
<div class="card"><h2>Resources</h2>
<p>The import page adds free e-Sword, Logos and amillennial resources. Running an import twice adds nothing new.</p></div>
<div class="card"><h2>Apologetics</h2>
<p>Browse objections by category and write responses linked to library resources.</p></div>"#,
    )
}
