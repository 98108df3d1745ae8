//! Login and registration forms

use super::{escape, Page};

pub fn login_page(username: &str, next: Option<&str>) -> Page {
    let next_input = next
        .map(|n| format!(r#"<input type="hidden" name="next" value="{}">"#, escape(n)))
        .unwrap_or_default();

    Page::new(
        "Log In",
        format!(
            r#"<div class="card">
<form method="post" action="/auth/login">
    {next_input}
    <label for="username">Username</label>
    <input type="text" id="username" name="username" value="{username}" required autofocus>
    <label for="password">Password</label>
    <input type="password" id="password" name="password" required>
    <button type="submit">Log In</button>
</form>
<p class="muted">No account yet? <a href="/auth/register">Register</a></p>
</div>"#,
            next_input = next_input,
            username = escape(username),
        ),
    )
}

/// Values echoed back into the registration form after a failed submit
#[derive(Debug, Clone, Default)]
pub struct RegisterValues {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

pub fn register_page(values: &RegisterValues) -> Page {
    Page::new(
        "Register",
        format!(
            r#"<div class="card">
<form method="post" action="/auth/register">
    <label for="username">Username</label>
    <input type="text" id="username" name="username" value="{username}" required>
    <label for="email">Email</label>
    <input type="email" id="email" name="email" value="{email}" required>
    <label for="first_name">First name</label>
    <input type="text" id="first_name" name="first_name" value="{first_name}">
    <label for="last_name">Last name</label>
    <input type="text" id="last_name" name="last_name" value="{last_name}">
    <label for="password">Password</label>
    <input type="password" id="password" name="password" required>
    <label for="password2">Confirm password</label>
    <input type="password" id="password2" name="password2" required>
    <button type="submit">Register</button>
</form>
<p class="muted">Already registered? <a href="/auth/login">Log in</a></p>
</div>"#,
            username = escape(&values.username),
            email = escape(&values.email),
            first_name = escape(&values.first_name),
            last_name = escape(&values.last_name),
        ),
    )
}
