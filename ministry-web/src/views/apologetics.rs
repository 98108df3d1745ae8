//! Apologetics categories, objections, responses and authors

use ministry_common::db::{
    ApologeticsCategory, ApologeticsObjection, ApologeticsResponse, Resource, TheologicalAuthor,
    TheologicalQuote, TheologicalWork,
};

use super::{delete_button, escape, paragraphs, Page};

pub fn index_page(categories: &[ApologeticsCategory]) -> Page {
    let cards: String = categories
        .iter()
        .map(|c| {
            format!(
                r#"<div class="card"><h2><a href="/apologetics/objections?category={}">{}</a></h2><p>{}</p></div>"#,
                c.id,
                escape(&c.name),
                escape(&c.description)
            )
        })
        .collect();
    Page::new(
        "Apologetics",
        format!(
            r#"<p><a class="button" href="/apologetics/objections">All objections</a>
<a class="button" href="/apologetics/authors?amillennial=1">Amillennial authors</a>
<a class="button" href="/apologetics/debate-preparation">Debate preparation</a></p>{}"#,
            cards
        ),
    )
}

fn objection_rows(objections: &[ApologeticsObjection]) -> String {
    objections
        .iter()
        .map(|o| {
            format!(
                r#"<tr><td><a href="/apologetics/objection/{}">{}</a></td><td>{}</td><td>{}/5</td></tr>"#,
                o.id,
                escape(&o.title),
                escape(&o.source),
                o.difficulty_level
            )
        })
        .collect()
}

pub fn objections_page(category: Option<&ApologeticsCategory>, objections: &[ApologeticsObjection]) -> Page {
    let title = match category {
        Some(category) => format!("Objections: {}", category.name),
        None => "All Objections".to_string(),
    };
    Page::new(
        title,
        format!(
            r#"<table><tr><th>Objection</th><th>Source</th><th>Difficulty</th></tr>{}</table>
<p><a href="/apologetics/">Back to categories</a></p>"#,
            objection_rows(objections)
        ),
    )
}

pub fn objection_page(
    objection: &ApologeticsObjection,
    category: Option<&ApologeticsCategory>,
    responses: &[ApologeticsResponse],
    related: &[Resource],
    user_id: Option<i64>,
) -> Page {
    let responses_html: String = responses
        .iter()
        .map(|r| {
            let actions = if user_id == Some(r.user_id) {
                format!(
                    r#"<p><a href="/apologetics/response/{id}/edit">Edit</a> {delete}</p>"#,
                    id = r.id,
                    delete = delete_button(&format!("/apologetics/response/{}/delete", r.id), "Delete")
                )
            } else {
                String::new()
            };
            format!(
                r#"<div class="card"><h3>{title}</h3><p>{text}</p><p class="muted">{refs}</p>{actions}</div>"#,
                title = escape(&r.title),
                text = paragraphs(&r.response_text),
                refs = escape(&r.scripture_references),
                actions = actions
            )
        })
        .collect();

    let related_html: String = related
        .iter()
        .map(|r| {
            format!(
                r#"<li><a href="/resources/resource/{}">{}</a> <span class="muted">{}</span></li>"#,
                r.id,
                escape(&r.title),
                escape(&r.author)
            )
        })
        .collect();

    let category_link = category
        .map(|c| {
            format!(
                r#"<p class="muted"><a href="/apologetics/objections?category={}">{}</a> | difficulty {}/5</p>"#,
                c.id,
                escape(&c.name),
                objection.difficulty_level
            )
        })
        .unwrap_or_default();

    Page::new(
        objection.title.clone(),
        format!(
            r#"{category_link}
<div class="card">{text}<p class="muted">Source: {source}</p></div>
<h2>Responses</h2>
{responses}
<p><a class="button" href="/apologetics/response/new/{id}">Write a response</a></p>
<h2>Related resources</h2><ul>{related}</ul>"#,
            category_link = category_link,
            text = paragraphs(&objection.objection_text),
            source = escape(&objection.source),
            responses = responses_html,
            id = objection.id,
            related = related_html,
        ),
    )
}

/// Response form contents
#[derive(Debug, Clone, Default)]
pub struct ResponseFormValues {
    pub title: String,
    pub response_text: String,
    pub scripture_references: String,
    pub resource_ids: Vec<i64>,
}

impl ResponseFormValues {
    pub fn from_response(response: &ApologeticsResponse) -> Self {
        Self {
            title: response.title.clone(),
            response_text: response.response_text.clone(),
            scripture_references: response.scripture_references.clone(),
            resource_ids: response.resource_ids(),
        }
    }
}

fn resource_options(resources: &[Resource], selected: &[i64]) -> String {
    resources
        .iter()
        .map(|r| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                r.id,
                if selected.contains(&r.id) { " selected" } else { "" },
                escape(&r.title)
            )
        })
        .collect()
}

pub fn response_form_page(
    heading: &str,
    action: &str,
    objection: &ApologeticsObjection,
    values: &ResponseFormValues,
    amillennial_resources: &[Resource],
    other_resources: &[Resource],
) -> Page {
    Page::new(
        heading,
        format!(
            r#"<div class="card"><strong>{objection_title}</strong><p>{objection_text}</p></div>
<form method="post" action="{action}">
    <label for="title">Title</label><input type="text" id="title" name="title" value="{title}" required>
    <label for="response_text">Response</label><textarea id="response_text" name="response_text" required>{text}</textarea>
    <label for="scripture_references">Scripture references</label>
    <input type="text" id="scripture_references" name="scripture_references" value="{refs}">
    <label for="resources">Linked resources</label>
    <select id="resources" name="resources" multiple size="8">
        <optgroup label="Amillennial resources">{amil}</optgroup>
        <optgroup label="Other resources">{other}</optgroup>
    </select>
    <button type="submit">Save response</button>
</form>
<p><a href="/apologetics/objection/{objection_id}">Cancel</a></p>"#,
            objection_title = escape(&objection.title),
            objection_text = paragraphs(&objection.objection_text),
            action = escape(action),
            title = escape(&values.title),
            text = escape(&values.response_text),
            refs = escape(&values.scripture_references),
            amil = resource_options(amillennial_resources, &values.resource_ids),
            other = resource_options(other_resources, &values.resource_ids),
            objection_id = objection.id,
        ),
    )
}

pub fn authors_page(authors: &[TheologicalAuthor], amillennial_only: bool) -> Page {
    let rows: String = authors
        .iter()
        .map(|a| {
            format!(
                r#"<tr><td><a href="/apologetics/author/{}">{}</a></td><td>{}</td><td>{}</td></tr>"#,
                a.id,
                escape(&a.name),
                escape(&a.timeperiod),
                escape(&a.tradition)
            )
        })
        .collect();
    let toggle = if amillennial_only {
        r#"<a href="/apologetics/authors">Show all authors</a>"#
    } else {
        r#"<a href="/apologetics/authors?amillennial=1">Only amillennial authors</a>"#
    };
    Page::new(
        if amillennial_only { "Amillennial Authors" } else { "Theological Authors" },
        format!(
            "<p>{}</p><table><tr><th>Name</th><th>Period</th><th>Tradition</th></tr>{}</table>",
            toggle, rows
        ),
    )
}

pub fn author_page(author: &TheologicalAuthor, works: &[TheologicalWork], quotes: &[TheologicalQuote]) -> Page {
    let works_html: String = works
        .iter()
        .map(|w| {
            let title = if w.url.is_empty() {
                escape(&w.title)
            } else {
                format!(r#"<a href="{}">{}</a>"#, escape(&w.url), escape(&w.title))
            };
            format!(
                "<li><strong>{}</strong>{} {}</li>",
                title,
                w.publication_year.map(|y| format!(" ({})", y)).unwrap_or_default(),
                escape(&w.description)
            )
        })
        .collect();

    let quotes_html: String = quotes
        .iter()
        .map(|q| {
            format!(
                r#"<blockquote class="card">{}<div class="muted">{} {}</div></blockquote>"#,
                paragraphs(&q.quote_text),
                escape(&q.source),
                escape(&q.topic)
            )
        })
        .collect();

    Page::new(
        author.name.clone(),
        format!(
            r#"<p class="muted">{period} | {tradition}</p>
<p>{bio}</p>
<h2>Works</h2><ul>{works}</ul>
<h2>Quotes</h2>{quotes}
<p><a href="/apologetics/authors">Back to authors</a></p>"#,
            period = escape(&author.timeperiod),
            tradition = escape(&author.tradition),
            bio = paragraphs(&author.bio),
            works = works_html,
            quotes = quotes_html,
        ),
    )
}

pub fn debate_preparation_page(
    categories: &[ApologeticsCategory],
    selected: Option<i64>,
    objections: &[ApologeticsObjection],
) -> Page {
    let choices: String = categories
        .iter()
        .map(|c| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                c.id,
                if selected == Some(c.id) { " selected" } else { "" },
                escape(&c.name)
            )
        })
        .collect();

    Page::new(
        "Debate Preparation",
        format!(
            r#"<form method="get" action="/apologetics/debate-preparation">
    <label for="category">Category</label>
    <select id="category" name="category"><option value="">All categories</option>{choices}</select>
    <button type="submit">Show objections</button>
</form>
<table><tr><th>Objection</th><th>Source</th><th>Difficulty</th></tr>{rows}</table>"#,
            choices = choices,
            rows = objection_rows(objections),
        ),
    )
}
