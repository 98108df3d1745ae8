//! Registration, login and logout

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use ministry_common::auth::{check_password_strength, hash_password_blocking, verify_password_blocking, Role};
use tracing::{info, warn};

use super::context::{session_cookie, FlashLevel, RequestContext};
use super::form::FormFields;
use crate::db::{sessions, users};
use crate::error::{is_local_path, AppResult};
use crate::views::auth::{login_page, register_page, RegisterValues};
use crate::AppState;

/// Replace the current session and redirect with a flash on the new one
async fn rotate_and_redirect(
    state: &AppState,
    ctx: &RequestContext,
    user_id: Option<i64>,
    level: FlashLevel,
    message: &str,
    to: &str,
) -> AppResult<Response> {
    let (session, token) =
        sessions::rotate_session(&state.db, ctx.session.id().await, user_id, state.config.session_ttl).await?;
    sessions::push_flash(&state.db, session.id, level.as_str(), message).await?;

    Ok((
        [(header::SET_COOKIE, session_cookie(&token, state.config.session_ttl))],
        Redirect::to(to),
    )
        .into_response())
}

/// GET /auth/login
pub async fn login_form(
    State(state): State<AppState>,
    ctx: RequestContext,
    Query(query): Query<FormFields>,
) -> AppResult<Response> {
    if ctx.user.is_some() {
        return Ok(Redirect::to("/").into_response());
    }
    let next = query.optional("next").filter(|n| is_local_path(n));
    ctx.render(&state, login_page("", next.as_deref())).await
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ctx: RequestContext,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    if ctx.user.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    let username = form.text("username");
    let password = form.raw("password").unwrap_or_default();
    let next = form.optional("next").filter(|n| is_local_path(n));

    let user = match users::find_by_username(&state.db, &username).await? {
        Some(user) => {
            let hash = user.password_hash.clone();
            verify_password_blocking(password.to_string(), hash)
                .await?
                .then_some(user)
        }
        None => None,
    };
    match user {
        Some(user) => {
            info!("User {} logged in", user.username);
            let target = next.as_deref().unwrap_or("/");
            rotate_and_redirect(
                &state,
                &ctx,
                Some(user.id),
                FlashLevel::Success,
                "Logged in successfully!",
                target,
            )
            .await
        }
        _ => {
            warn!("Failed login attempt for '{}'", username);
            ctx.flash(&state, FlashLevel::Danger, "Invalid username or password.").await?;
            ctx.render(&state, login_page(&username, next.as_deref())).await
        }
    }
}

/// GET|POST /auth/logout
pub async fn logout(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    let Some(user) = ctx.user.as_ref() else {
        return Ok(Redirect::to("/auth/login").into_response());
    };
    info!("User {} logged out", user.username);
    rotate_and_redirect(
        &state,
        &ctx,
        None,
        FlashLevel::Info,
        "You have been logged out.",
        "/auth/login",
    )
    .await
}

/// GET /auth/register
pub async fn register_form(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    if ctx.user.is_some() {
        return Ok(Redirect::to("/").into_response());
    }
    ctx.render(&state, register_page(&RegisterValues::default())).await
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ctx: RequestContext,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    if ctx.user.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    let values = RegisterValues {
        username: form.text("username"),
        email: form.text("email"),
        first_name: form.text("first_name"),
        last_name: form.text("last_name"),
    };
    let password = form.raw("password").unwrap_or_default();
    let password2 = form.raw("password2").unwrap_or_default();

    let problem = if values.username.is_empty() || values.email.is_empty() || password.is_empty() {
        Some((FlashLevel::Warning, "Please fill all required fields".to_string()))
    } else if password != password2 {
        Some((FlashLevel::Danger, "Passwords do not match".to_string()))
    } else if let Err(message) = check_password_strength(password) {
        Some((FlashLevel::Warning, message))
    } else if users::username_or_email_taken(&state.db, &values.username, &values.email).await? {
        Some((
            FlashLevel::Danger,
            "User with that username or email already exists.".to_string(),
        ))
    } else {
        None
    };

    if let Some((level, message)) = problem {
        ctx.flash(&state, level, &message).await?;
        return ctx.render(&state, register_page(&values)).await;
    }

    let password_hash = hash_password_blocking(password.to_string()).await?;
    let new_user = users::NewUser {
        username: values.username.clone(),
        email: values.email.clone(),
        password_hash,
        first_name: values.first_name.clone(),
        last_name: values.last_name.clone(),
        role: Role::User,
    };

    match users::create_user(&state.db, &new_user).await {
        Ok(id) => {
            info!("Registered user {} (id {})", new_user.username, id);
            ctx.redirect_with(
                &state,
                FlashLevel::Success,
                "Registration successful! Please log in.",
                "/auth/login",
            )
            .await
        }
        Err(e) => ctx.write_failed(&state, "creating your account", e, "/auth/register").await,
    }
}

/// Login, logout and registration routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", get(login_form).post(login))
        .route("/auth/logout", get(logout).post(logout))
        .route("/auth/register", get(register_form).post(register))
}
