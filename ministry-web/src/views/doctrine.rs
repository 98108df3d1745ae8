//! Denominations, beliefs and comparisons

use ministry_common::db::{Belief, ComparisonMatrix, Denomination, DoctrineComparison};

use super::{delete_button, escape, hidden_inputs, paragraphs, Page};

pub fn index_page(denominations: &[Denomination], is_admin: bool) -> Page {
    let rows: String = denominations
        .iter()
        .map(|d| {
            format!(
                r#"<tr><td><a href="/doctrine/denomination/{}">{}</a></td><td>{}</td></tr>"#,
                d.id,
                escape(&d.name),
                escape(&d.description)
            )
        })
        .collect();

    let admin = if is_admin {
        r#"<a class="button" href="/doctrine/denomination/new">Add denomination</a>"#
    } else {
        ""
    };

    Page::new(
        "Denominations",
        format!(
            r#"<p><a class="button" href="/doctrine/compare">Compare beliefs</a>
<a class="button" href="/doctrine/amillennial_comparison">Compare with amillennial theology</a>
<a class="button" href="/doctrine/my_comparisons">My comparisons</a> {admin}</p>
<table><tr><th>Name</th><th>Description</th></tr>{rows}</table>"#,
            admin = admin,
            rows = rows
        ),
    )
}

pub fn denomination_page(denomination: &Denomination, beliefs: &[Belief], is_admin: bool) -> Page {
    let rows: String = beliefs
        .iter()
        .map(|b| {
            let actions = if is_admin {
                format!(
                    r#"<td><a href="/doctrine/belief/{id}/edit">Edit</a> {delete}</td>"#,
                    id = b.id,
                    delete = delete_button(&format!("/doctrine/belief/{}/delete", b.id), "Delete")
                )
            } else {
                String::new()
            };
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td>{}</tr>",
                escape(&b.topic),
                paragraphs(&b.summary),
                escape(&b.scripture_references),
                actions
            )
        })
        .collect();

    let add_form = if is_admin {
        format!(
            r#"<div class="card"><h2>Add belief</h2>
<form method="post" action="/doctrine/denomination/{id}/belief">
    <label for="topic">Topic</label><input type="text" id="topic" name="topic" required>
    <label for="summary">Summary</label><textarea id="summary" name="summary" required></textarea>
    <label for="scripture_references">Scripture references</label>
    <input type="text" id="scripture_references" name="scripture_references">
    <button type="submit">Add belief</button>
</form></div>"#,
            id = denomination.id
        )
    } else {
        String::new()
    };

    let actions_header = if is_admin { "<th></th>" } else { "" };

    Page::new(
        denomination.name.clone(),
        format!(
            r#"<p>{description}</p>
<table><tr><th>Topic</th><th>Summary</th><th>Scripture</th>{actions_header}</tr>{rows}</table>
{add_form}
<p><a href="/doctrine/">Back to denominations</a></p>"#,
            description = paragraphs(&denomination.description),
            actions_header = actions_header,
            rows = rows,
            add_form = add_form
        ),
    )
}

pub fn new_denomination_page() -> Page {
    Page::new(
        "New Denomination",
        r#"<form method="post" action="/doctrine/denomination/new">
    <label for="name">Name</label><input type="text" id="name" name="name" required>
    <label for="description">Description</label><textarea id="description" name="description"></textarea>
    <button type="submit">Create</button>
</form>"#,
    )
}

pub fn edit_belief_page(belief: &Belief, denomination: &Denomination) -> Page {
    Page::new(
        format!("Edit belief: {}", belief.topic),
        format!(
            r#"<p class="muted">{denomination}</p>
<form method="post" action="/doctrine/belief/{id}/edit">
    <label for="topic">Topic</label><input type="text" id="topic" name="topic" value="{topic}" required>
    <label for="summary">Summary</label><textarea id="summary" name="summary" required>{summary}</textarea>
    <label for="scripture_references">Scripture references</label>
    <input type="text" id="scripture_references" name="scripture_references" value="{refs}">
    <button type="submit">Save</button>
</form>
<p><a href="/doctrine/denomination/{denomination_id}">Cancel</a></p>"#,
            denomination = escape(&denomination.name),
            id = belief.id,
            topic = escape(&belief.topic),
            summary = escape(&belief.summary),
            refs = escape(&belief.scripture_references),
            denomination_id = denomination.id,
        ),
    )
}

fn checkbox_list(name: &str, items: &[(String, String)], checked: &[String]) -> String {
    items
        .iter()
        .map(|(value, label)| {
            format!(
                r#"<label><input type="checkbox" name="{name}" value="{value}"{checked}> {label}</label>"#,
                name = name,
                value = escape(value),
                checked = if checked.contains(value) { " checked" } else { "" },
                label = escape(label)
            )
        })
        .collect()
}

pub fn compare_page(
    denominations: &[Denomination],
    topics: &[String],
    selected_ids: &[i64],
    selected_topics: &[String],
) -> Page {
    let denomination_items: Vec<(String, String)> = denominations
        .iter()
        .map(|d| (d.id.to_string(), d.name.clone()))
        .collect();
    let selected_ids: Vec<String> = selected_ids.iter().map(|id| id.to_string()).collect();
    let topic_items: Vec<(String, String)> = topics.iter().map(|t| (t.clone(), t.clone())).collect();

    Page::new(
        "Compare Beliefs",
        format!(
            r#"<form method="post" action="/doctrine/compare">
    <h2>Denominations</h2>
    <div class="checklist">{denominations}</div>
    <h2>Topics</h2>
    <div class="checklist">{topics}</div>
    <button type="submit">Compare</button>
</form>"#,
            denominations = checkbox_list("denominations", &denomination_items, &selected_ids),
            topics = checkbox_list("topics", &topic_items, selected_topics),
        ),
    )
}

/// Topic rows × denomination columns
pub fn matrix_table(matrix: &ComparisonMatrix) -> String {
    if matrix.rows.is_empty() {
        return r#"<p class="placeholder">No comparison results stored.</p>"#.to_string();
    }

    let header: String = matrix
        .denominations()
        .iter()
        .map(|name| format!("<th>{}</th>", escape(name)))
        .collect();

    let rows: String = matrix
        .rows
        .iter()
        .map(|row| {
            let cells: String = row
                .entries
                .iter()
                .map(|entry| {
                    if entry.is_placeholder() {
                        format!(r#"<td class="placeholder">{}</td>"#, escape(&entry.summary))
                    } else {
                        format!(
                            r#"<td>{}<div class="muted">{}</div></td>"#,
                            paragraphs(&entry.summary),
                            escape(&entry.scripture_references)
                        )
                    }
                })
                .collect();
            format!("<tr><th>{}</th>{}</tr>", escape(&row.topic), cells)
        })
        .collect();

    format!("<table><tr><th>Topic</th>{}</tr>{}</table>", header, rows)
}

pub fn comparison_results_page(matrix: &ComparisonMatrix, denomination_ids: &[i64], topics: &[String]) -> Page {
    let ids: Vec<String> = denomination_ids.iter().map(|id| id.to_string()).collect();
    Page::new(
        "Comparison Results",
        format!(
            r#"{table}
<div class="card"><h2>Save this comparison</h2>
<form method="post" action="/doctrine/save_comparison">
    {ids}{topics}
    <label for="title">Title</label><input type="text" id="title" name="title" required>
    <label for="description">Description</label><textarea id="description" name="description"></textarea>
    <button type="submit">Save</button>
</form></div>
<p><a href="/doctrine/compare">New comparison</a></p>"#,
            table = matrix_table(matrix),
            ids = hidden_inputs("denominations", &ids),
            topics = hidden_inputs("topics", topics),
        ),
    )
}

pub fn my_comparisons_page(comparisons: &[DoctrineComparison]) -> Page {
    let body = if comparisons.is_empty() {
        r#"<p>You have no saved comparisons. <a href="/doctrine/compare">Start one</a>.</p>"#.to_string()
    } else {
        let rows: String = comparisons
            .iter()
            .map(|c| {
                format!(
                    r#"<tr><td><a href="/doctrine/comparison/{id}">{title}</a></td><td>{created}</td><td><a href="/doctrine/comparison/{id}/edit">Edit</a> {delete}</td></tr>"#,
                    id = c.id,
                    title = escape(&c.title),
                    created = c.created_at.format("%Y-%m-%d"),
                    delete = delete_button(&format!("/doctrine/comparison/{}/delete", c.id), "Delete"),
                )
            })
            .collect();
        format!("<table><tr><th>Title</th><th>Saved</th><th></th></tr>{}</table>", rows)
    };
    Page::new("My Comparisons", body)
}

pub fn comparison_page(comparison: &DoctrineComparison) -> Page {
    Page::new(
        comparison.title.clone(),
        format!(
            r#"<p>{description}</p>
{table}
<p><a href="/doctrine/comparison/{id}/edit">Edit</a> {delete} <a href="/doctrine/my_comparisons">Back</a></p>"#,
            description = paragraphs(&comparison.description),
            table = matrix_table(&comparison.matrix()),
            id = comparison.id,
            delete = delete_button(&format!("/doctrine/comparison/{}/delete", comparison.id), "Delete"),
        ),
    )
}

pub fn edit_comparison_page(comparison: &DoctrineComparison) -> Page {
    Page::new(
        "Edit Comparison",
        format!(
            r#"<form method="post" action="/doctrine/comparison/{id}/edit">
    <label for="title">Title</label><input type="text" id="title" name="title" value="{title}" required>
    <label for="description">Description</label><textarea id="description" name="description">{description}</textarea>
    <button type="submit">Save</button>
</form>
<p><a href="/doctrine/comparison/{id}">Cancel</a></p>"#,
            id = comparison.id,
            title = escape(&comparison.title),
            description = escape(&comparison.description),
        ),
    )
}

pub fn anchor_comparison_page(
    anchor: &Denomination,
    others: &[Denomination],
    selected_ids: &[i64],
    matrix: Option<&ComparisonMatrix>,
    topics: &[String],
) -> Page {
    let items: Vec<(String, String)> = others
        .iter()
        .map(|d| (d.id.to_string(), d.name.clone()))
        .collect();
    let selected: Vec<String> = selected_ids.iter().map(|id| id.to_string()).collect();

    let results = match matrix {
        Some(matrix) => {
            let mut ids = vec![anchor.id.to_string()];
            ids.extend(selected.iter().cloned());
            format!(
                r#"{table}
<div class="card"><h2>Save this comparison</h2>
<form method="post" action="/doctrine/save_comparison">
    {ids}{topics}
    <label for="title">Title</label><input type="text" id="title" name="title" required>
    <label for="description">Description</label><textarea id="description" name="description"></textarea>
    <button type="submit">Save</button>
</form></div>"#,
                table = matrix_table(matrix),
                ids = hidden_inputs("denominations", &ids),
                topics = hidden_inputs("topics", topics),
            )
        }
        None => String::new(),
    };

    Page::new(
        format!("Compare with {}", anchor.name),
        format!(
            r#"<p>{description}</p>
<form method="get" action="/doctrine/amillennial_comparison">
    <input type="hidden" name="compare" value="true">
    <div class="checklist">{choices}</div>
    <button type="submit">Compare</button>
</form>
{results}"#,
            description = paragraphs(&anchor.description),
            choices = checkbox_list("denominations", &items, &selected),
            results = results,
        ),
    )
}
