//! Resource library

use ministry_common::db::Resource;

use super::{delete_button, escape, options, paragraphs, Page};
use crate::db::resources::ResourceFilter;
use crate::services::catalogs::{CatalogSource, IMPORT_RESOURCE_TYPES, IMPORT_TOPICS, RESOURCE_TOPICS, RESOURCE_TYPES};

pub fn library_page(resources: &[Resource], types: &[String], topics: &[String], filter: &ResourceFilter) -> Page {
    let rows: String = resources
        .iter()
        .map(|r| {
            format!(
                r#"<tr><td><a href="/resources/resource/{id}">{title}</a>{flag}</td><td>{author}</td><td>{kind}</td><td>{topic}</td></tr>"#,
                id = r.id,
                title = escape(&r.title),
                flag = if r.is_amillennial { r#" <span class="muted">(amillennial)</span>"# } else { "" },
                author = escape(&r.author),
                kind = escape(&r.resource_type),
                topic = escape(&r.topic),
            )
        })
        .collect();

    let results = if resources.is_empty() {
        r#"<p class="placeholder">No resources match these filters.</p>"#.to_string()
    } else {
        format!(
            "<table><tr><th>Title</th><th>Author</th><th>Type</th><th>Topic</th></tr>{}</table>",
            rows
        )
    };

    Page::new(
        "Resource Library",
        format!(
            r#"<p><a class="button" href="/resources/resource/new">Add resource</a>
<a class="button" href="/resources/import">Import resources</a></p>
<form method="get" action="/resources/library" class="card">
    <label for="type">Type</label>
    <select id="type" name="type"><option value="">All types</option>{types}</select>
    <label for="topic">Topic</label>
    <select id="topic" name="topic"><option value="">All topics</option>{topics}</select>
    <label for="search">Search</label>
    <input type="text" id="search" name="search" value="{search}">
    <button type="submit">Filter</button>
</form>
{results}"#,
            types = options(types, filter.resource_type.as_deref().unwrap_or("")),
            topics = options(topics, filter.topic.as_deref().unwrap_or("")),
            search = escape(filter.search.as_deref().unwrap_or("")),
            results = results,
        ),
    )
}

pub fn resource_page(resource: &Resource, logged_in: bool) -> Page {
    let tags: String = resource
        .tag_list()
        .iter()
        .map(|t| format!(r#"<a href="/resources/library?search={0}">{0}</a> "#, escape(t)))
        .collect();
    let link = if resource.url.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p><a href="{0}" rel="noopener noreferrer">{0}</a></p>"#,
            escape(&resource.url)
        )
    };
    let actions = if logged_in {
        format!(
            r#"<a href="/resources/resource/{}/edit">Edit</a> {}"#,
            resource.id,
            delete_button(&format!("/resources/resource/{}/delete", resource.id), "Delete")
        )
    } else {
        String::new()
    };

    Page::new(
        resource.title.clone(),
        format!(
            r#"<p><strong>Author:</strong> {author}</p>
<p><strong>Type:</strong> {kind} | <strong>Topic:</strong> {topic}</p>
<p>{description}</p>
{link}
<div class="card">{content}</div>
<p class="muted">Tags: {tags}</p>
<p>{actions} <a href="/resources/library">Back to library</a></p>"#,
            author = escape(&resource.author),
            kind = escape(&resource.resource_type),
            topic = escape(&resource.topic),
            description = paragraphs(&resource.description),
            link = link,
            content = paragraphs(&resource.content),
            tags = tags,
            actions = actions,
        ),
    )
}

/// Resource form contents
#[derive(Debug, Clone, Default)]
pub struct ResourceFormValues {
    pub title: String,
    pub author: String,
    pub resource_type: String,
    pub topic: String,
    pub description: String,
    pub content: String,
    pub url: String,
    pub tags: String,
    pub is_amillennial: bool,
}

impl ResourceFormValues {
    pub fn from_resource(resource: &Resource) -> Self {
        Self {
            title: resource.title.clone(),
            author: resource.author.clone(),
            resource_type: resource.resource_type.clone(),
            topic: resource.topic.clone(),
            description: resource.description.clone(),
            content: resource.content.clone(),
            url: resource.url.clone(),
            tags: resource.tags.clone(),
            is_amillennial: resource.is_amillennial,
        }
    }
}

pub fn resource_form_page(heading: &str, action: &str, values: &ResourceFormValues) -> Page {
    Page::new(
        heading,
        format!(
            r#"<form method="post" action="{action}">
    <label for="title">Title</label><input type="text" id="title" name="title" value="{title}" required>
    <label for="author">Author</label><input type="text" id="author" name="author" value="{author}">
    <label for="resource_type">Type</label>
    <select id="resource_type" name="resource_type"><option value="">Select a type</option>{types}</select>
    <label for="topic">Topic</label>
    <select id="topic" name="topic"><option value="">Select a topic</option>{topics}</select>
    <label for="description">Description</label><textarea id="description" name="description">{description}</textarea>
    <label for="content">Content</label><textarea id="content" name="content">{content}</textarea>
    <label for="url">URL</label><input type="url" id="url" name="url" value="{url}">
    <label for="tags">Tags (comma separated)</label><input type="text" id="tags" name="tags" value="{tags}">
    <label class="checklist"><input type="checkbox" name="is_amillennial" value="1"{amil}> Amillennial resource</label>
    <button type="submit">Save resource</button>
</form>"#,
            action = escape(action),
            title = escape(&values.title),
            author = escape(&values.author),
            types = options(&RESOURCE_TYPES, &values.resource_type),
            topics = options(&RESOURCE_TOPICS, &values.topic),
            description = escape(&values.description),
            content = escape(&values.content),
            url = escape(&values.url),
            tags = escape(&values.tags),
            amil = if values.is_amillennial { " checked" } else { "" },
        ),
    )
}

pub fn import_page() -> Page {
    let sources: String = CatalogSource::ALL
        .iter()
        .map(|s| format!(r#"<option value="{}">{}</option>"#, s.key(), escape(s.label())))
        .collect();

    Page::new(
        "Import Resources",
        format!(
            r#"<p>Add free resources from the built-in catalogs. Resources already in the library (same URL or title) are skipped.</p>
<form method="post" action="/resources/import">
    <label for="source">Source</label>
    <select id="source" name="source"><option value="all">All sources</option>{sources}</select>
    <label for="resource_type">Type</label>
    <select id="resource_type" name="resource_type"><option value="">Any type</option>{types}</select>
    <label for="topic">Topic</label>
    <select id="topic" name="topic"><option value="">Any topic</option>{topics}</select>
    <button type="submit">Import</button>
</form>"#,
            sources = sources,
            types = options(&IMPORT_RESOURCE_TYPES, ""),
            topics = options(&IMPORT_TOPICS, ""),
        ),
    )
}
