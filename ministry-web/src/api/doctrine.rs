//! Doctrine pages: denominations, beliefs and comparisons

use axum::{
    extract::{Path, Query, State},
    response::{Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use tracing::info;

use super::context::{FlashLevel, RequestContext};
use super::form::FormFields;
use crate::db::comparisons::{self, NewComparison};
use crate::db::doctrine::{self, BeliefInput};
use crate::error::{AppError, AppResult};
use crate::services::comparison::{self, ComparisonError, ComparisonRequest};
use crate::views::doctrine as pages;
use crate::AppState;

/// Turn a comparison failure into a flash-and-redirect or an error page
async fn comparison_failure(
    state: &AppState,
    ctx: &RequestContext,
    err: ComparisonError,
    back: &str,
) -> AppResult<Response> {
    match err {
        err if err.is_validation() => {
            ctx.redirect_with(state, FlashLevel::Warning, &err.to_string(), back)
                .await
        }
        ComparisonError::AnchorMissing(_) => {
            ctx.redirect_with(state, FlashLevel::Warning, &err.to_string(), "/doctrine/")
                .await
        }
        ComparisonError::UnknownDenomination(id) => {
            Err(AppError::NotFound(format!("Denomination {} not found", id)))
        }
        ComparisonError::Store(e) => Err(e.into()),
        other => Err(AppError::Internal(other.to_string())),
    }
}

/// GET /doctrine/
pub async fn index(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    let denominations = doctrine::list_denominations(&state.db).await?;
    let is_admin = ctx.user.as_ref().is_some_and(|u| u.is_admin());
    ctx.render(&state, pages::index_page(&denominations, is_admin)).await
}

/// GET /doctrine/denomination/:id
pub async fn view_denomination(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let denomination = doctrine::find_denomination(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Denomination"))?;
    let beliefs = doctrine::beliefs_for_denomination(&state.db, id).await?;
    let is_admin = ctx.user.as_ref().is_some_and(|u| u.is_admin());
    ctx.render(&state, pages::denomination_page(&denomination, &beliefs, is_admin))
        .await
}

/// GET /doctrine/denomination/new
pub async fn new_denomination_form(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    ctx.require_admin()?;
    ctx.render(&state, pages::new_denomination_page()).await
}

/// POST /doctrine/denomination/new
pub async fn create_denomination(
    State(state): State<AppState>,
    ctx: RequestContext,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    ctx.require_admin()?;
    let name = form.text("name");
    let description = form.text("description");
    let back = "/doctrine/denomination/new";

    if name.is_empty() {
        return ctx.redirect_with(&state, FlashLevel::Warning, "Name is required.", back).await;
    }
    if doctrine::find_denomination_by_name(&state.db, &name).await?.is_some() {
        return ctx
            .redirect_with(
                &state,
                FlashLevel::Warning,
                "A denomination with that name already exists.",
                back,
            )
            .await;
    }

    match doctrine::create_denomination(&state.db, &name, &description).await {
        Ok(id) => {
            info!("Created denomination {} ({})", name, id);
            ctx.redirect_with(
                &state,
                FlashLevel::Success,
                "Denomination created successfully!",
                &format!("/doctrine/denomination/{}", id),
            )
            .await
        }
        Err(e) => ctx.write_failed(&state, "creating denomination", e, back).await,
    }
}

fn belief_input(form: &FormFields) -> BeliefInput {
    BeliefInput {
        topic: form.text("topic"),
        summary: form.text("summary"),
        scripture_references: form.text("scripture_references"),
    }
}

/// POST /doctrine/denomination/:id/belief
pub async fn add_belief(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    ctx.require_admin()?;
    doctrine::find_denomination(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Denomination"))?;

    let back = format!("/doctrine/denomination/{}", id);
    let input = belief_input(&form);
    if input.topic.is_empty() || input.summary.is_empty() {
        return ctx
            .redirect_with(&state, FlashLevel::Warning, "Topic and summary are required.", &back)
            .await;
    }

    match doctrine::create_belief(&state.db, id, &input).await {
        Ok(_) => ctx.redirect_with(&state, FlashLevel::Success, "Belief added successfully!", &back).await,
        Err(e) => ctx.write_failed(&state, "adding belief", e, &back).await,
    }
}

/// GET /doctrine/belief/:id/edit
pub async fn edit_belief_form(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    ctx.require_admin()?;
    let belief = doctrine::find_belief(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Belief"))?;
    let denomination = doctrine::find_denomination(&state.db, belief.denomination_id)
        .await?
        .ok_or_else(|| AppError::not_found("Denomination"))?;
    ctx.render(&state, pages::edit_belief_page(&belief, &denomination)).await
}

/// POST /doctrine/belief/:id/edit
pub async fn update_belief(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    ctx.require_admin()?;
    let belief = doctrine::find_belief(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Belief"))?;

    let input = belief_input(&form);
    if input.topic.is_empty() || input.summary.is_empty() {
        return ctx
            .redirect_with(
                &state,
                FlashLevel::Warning,
                "Topic and summary are required.",
                &format!("/doctrine/belief/{}/edit", id),
            )
            .await;
    }

    let back = format!("/doctrine/denomination/{}", belief.denomination_id);
    match doctrine::update_belief(&state.db, id, &input).await {
        Ok(()) => ctx.redirect_with(&state, FlashLevel::Success, "Belief updated successfully!", &back).await,
        Err(e) => ctx.write_failed(&state, "updating belief", e, &back).await,
    }
}

/// POST /doctrine/belief/:id/delete
pub async fn delete_belief(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    ctx.require_admin()?;
    let belief = doctrine::find_belief(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Belief"))?;

    let back = format!("/doctrine/denomination/{}", belief.denomination_id);
    match doctrine::delete_belief(&state.db, id).await {
        Ok(()) => ctx.redirect_with(&state, FlashLevel::Success, "Belief deleted.", &back).await,
        Err(e) => ctx.write_failed(&state, "deleting belief", e, &back).await,
    }
}

/// GET /doctrine/compare
pub async fn compare_form(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    ctx.require_user()?;
    let denominations = doctrine::list_denominations(&state.db).await?;
    let topics = doctrine::distinct_topics(&state.db).await?;
    ctx.render(&state, pages::compare_page(&denominations, &topics, &[], &[]))
        .await
}

/// POST /doctrine/compare
pub async fn compare(
    State(state): State<AppState>,
    ctx: RequestContext,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let back = "/doctrine/compare";

    let request = match ComparisonRequest::new(form.ids("denominations"), form.all("topics")) {
        Ok(request) => request,
        Err(e) => return comparison_failure(&state, &ctx, e, back).await,
    };

    match comparison::compare(&state.db, &request).await {
        Ok(matrix) => {
            let page = pages::comparison_results_page(&matrix, request.denomination_ids(), request.topics());
            ctx.render(&state, page).await
        }
        Err(e) => comparison_failure(&state, &ctx, e, back).await,
    }
}

/// POST /doctrine/save_comparison
///
/// Results are recomputed from the submitted ids and topics.
pub async fn save_comparison(
    State(state): State<AppState>,
    ctx: RequestContext,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    let user_id = ctx.require_user()?.id;
    let back = "/doctrine/compare";

    let title = form.text("title");
    if title.is_empty() {
        return ctx
            .redirect_with(&state, FlashLevel::Warning, "Missing required fields", back)
            .await;
    }

    let request = match ComparisonRequest::new(form.ids("denominations"), form.all("topics")) {
        Ok(request) => request,
        Err(e) => return comparison_failure(&state, &ctx, e, back).await,
    };
    let matrix = match comparison::compare(&state.db, &request).await {
        Ok(matrix) => matrix,
        Err(e) => return comparison_failure(&state, &ctx, e, back).await,
    };

    let description = form.text("description");
    let new_comparison = NewComparison {
        title: &title,
        description: &description,
        user_id,
        denomination_ids: request.denomination_ids(),
        topics: request.topics(),
        matrix: &matrix,
    };

    match comparisons::insert_comparison(&state.db, &new_comparison).await {
        Ok(id) => {
            info!("Saved comparison {} for user {}", id, user_id);
            ctx.redirect_with(
                &state,
                FlashLevel::Success,
                "Comparison saved successfully",
                &format!("/doctrine/comparison/{}", id),
            )
            .await
        }
        Err(e) => ctx.write_failed(&state, "saving comparison", e, back).await,
    }
}

/// GET /doctrine/my_comparisons
pub async fn my_comparisons(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    let user_id = ctx.require_user()?.id;
    let list = comparisons::comparisons_for_user(&state.db, user_id).await?;
    ctx.render(&state, pages::my_comparisons_page(&list)).await
}

const MY_COMPARISONS: &str = "/doctrine/my_comparisons";

/// GET /doctrine/comparison/:id
pub async fn view_comparison(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let comparison = comparisons::find_comparison(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Comparison"))?;
    if !ctx.owns(comparison.user_id) {
        return ctx
            .deny(&state, "You do not have permission to view this comparison.", MY_COMPARISONS)
            .await;
    }
    ctx.render(&state, pages::comparison_page(&comparison)).await
}

/// GET /doctrine/comparison/:id/edit
pub async fn edit_comparison_form(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let comparison = comparisons::find_comparison(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Comparison"))?;
    if !ctx.owns(comparison.user_id) {
        return ctx
            .deny(&state, "You do not have permission to edit this comparison.", MY_COMPARISONS)
            .await;
    }
    ctx.render(&state, pages::edit_comparison_page(&comparison)).await
}

/// POST /doctrine/comparison/:id/edit
pub async fn update_comparison(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let comparison = comparisons::find_comparison(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Comparison"))?;
    if !ctx.owns(comparison.user_id) {
        return ctx
            .deny(&state, "You do not have permission to edit this comparison.", MY_COMPARISONS)
            .await;
    }

    let title = form.text("title");
    let view = format!("/doctrine/comparison/{}", id);
    if title.is_empty() {
        return ctx
            .redirect_with(
                &state,
                FlashLevel::Warning,
                "Title is required.",
                &format!("{}/edit", view),
            )
            .await;
    }

    match comparisons::update_comparison_details(&state.db, id, &title, &form.text("description")).await {
        Ok(()) => {
            ctx.redirect_with(&state, FlashLevel::Success, "Comparison updated successfully!", &view)
                .await
        }
        Err(e) => ctx.write_failed(&state, "updating comparison", e, &view).await,
    }
}

/// POST /doctrine/comparison/:id/delete
pub async fn delete_comparison(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let comparison = comparisons::find_comparison(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Comparison"))?;
    if !ctx.owns(comparison.user_id) {
        return ctx
            .deny(&state, "You do not have permission to delete this comparison.", MY_COMPARISONS)
            .await;
    }

    match comparisons::delete_comparison(&state.db, id).await {
        Ok(()) => {
            ctx.redirect_with(&state, FlashLevel::Success, "Comparison deleted successfully!", MY_COMPARISONS)
                .await
        }
        Err(e) => ctx.write_failed(&state, "deleting comparison", e, MY_COMPARISONS).await,
    }
}

/// GET /doctrine/api/topics/:denomination_id
pub async fn denomination_topics(
    State(state): State<AppState>,
    Path(denomination_id): Path<i64>,
) -> AppResult<Json<Vec<String>>> {
    let mut topics: Vec<String> = Vec::new();
    for belief in doctrine::beliefs_for_denomination(&state.db, denomination_id).await? {
        if !topics.contains(&belief.topic) {
            topics.push(belief.topic);
        }
    }
    Ok(Json(topics))
}

/// GET /doctrine/amillennial_comparison
pub async fn anchor_comparison(
    State(state): State<AppState>,
    ctx: RequestContext,
    Query(query): Query<FormFields>,
) -> AppResult<Response> {
    ctx.require_user()?;

    let anchor = match comparison::load_anchor(&state.db, &state.config.anchor_denomination).await {
        Ok(anchor) => anchor,
        Err(e) => return comparison_failure(&state, &ctx, e, "/doctrine/").await,
    };
    let others: Vec<_> = doctrine::list_denominations(&state.db)
        .await?
        .into_iter()
        .filter(|d| d.id != anchor.denomination.id)
        .collect();

    let selected = query.ids("denominations");
    let matrix = if query.text("compare") == "true" {
        match comparison::compare_with_anchor(&state.db, &anchor, &selected).await {
            Ok(matrix) => Some(matrix),
            Err(e) if e.is_validation() => {
                ctx.flash(&state, FlashLevel::Warning, &e.to_string()).await?;
                None
            }
            Err(e) => return comparison_failure(&state, &ctx, e, "/doctrine/").await,
        }
    } else {
        None
    };

    let page = pages::anchor_comparison_page(
        &anchor.denomination,
        &others,
        &selected,
        matrix.as_ref(),
        &anchor.topics,
    );
    ctx.render(&state, page).await
}

/// GET /doctrine
pub async fn index_redirect() -> Redirect {
    Redirect::permanent("/doctrine/")
}

/// Doctrine routes
pub fn doctrine_routes() -> Router<AppState> {
    Router::new()
        .route("/doctrine", get(index_redirect))
        .route("/doctrine/", get(index))
        .route("/doctrine/denomination/new", get(new_denomination_form).post(create_denomination))
        .route("/doctrine/denomination/:id", get(view_denomination))
        .route("/doctrine/denomination/:id/belief", post(add_belief))
        .route("/doctrine/belief/:id/edit", get(edit_belief_form).post(update_belief))
        .route("/doctrine/belief/:id/delete", post(delete_belief))
        .route("/doctrine/compare", get(compare_form).post(compare))
        .route("/doctrine/save_comparison", post(save_comparison))
        .route("/doctrine/my_comparisons", get(my_comparisons))
        .route("/doctrine/comparison/:id", get(view_comparison))
        .route("/doctrine/comparison/:id/edit", get(edit_comparison_form).post(update_comparison))
        .route("/doctrine/comparison/:id/delete", post(delete_comparison))
        .route("/doctrine/api/topics/:denomination_id", get(denomination_topics))
        .route("/doctrine/amillennial_comparison", get(anchor_comparison))
}
