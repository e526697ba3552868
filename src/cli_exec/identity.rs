use market_console::model::{Credentials, Registration, Role, UserProfile};
use time::format_description::well_known::Rfc3339;

use super::*;

fn print_profile(user: &UserProfile) {
    println!("id: {}", user.id);
    println!("name: {}", user.name);
    if !user.email.is_empty() {
        println!("email: {}", user.email);
    }
    println!("role: {}", user.role);
}

pub(super) fn handle_login_command(
    console: &Console,
    email: String,
    password: String,
    json: bool,
) -> Result<()> {
    let user = console
        .client
        .auth()
        .login(&Credentials { email, password })
        .context("login")?;
    if json {
        print_json(&user, "profile")?;
    } else {
        println!("Logged in as {} ({})", user.name, user.role);
    }
    Ok(())
}

pub(super) fn handle_register_command(
    console: &Console,
    name: String,
    email: String,
    password: String,
    role: Role,
    json: bool,
) -> Result<()> {
    let created = console
        .client
        .auth()
        .register(&Registration {
            name,
            email,
            password,
            role,
        })
        .context("register")?;
    if json {
        print_json(&created, "profile")?;
    } else {
        println!("Registered user {} ({})", created.id, created.role);
        println!("next: market-console login --email {}", created.email);
    }
    Ok(())
}

pub(super) fn handle_logout_command(console: &Console) -> Result<()> {
    console.client.auth().logout().context("logout")?;
    println!("Logged out");
    Ok(())
}

pub(super) fn handle_whoami_command(console: &Console, refresh: bool, json: bool) -> Result<()> {
    console.require_view(View::Dashboard)?;

    let user = if refresh {
        let user = console.client.users().get_profile().context("fetch profile")?;
        console.session().users().set(&user)?;
        user
    } else {
        console.require_user()?
    };
    let expires_at = console
        .session()
        .tokens()
        .expiry()
        .map(|t| t.format(&Rfc3339))
        .transpose()
        .context("format token expiry")?;

    if json {
        print_json(
            &serde_json::json!({
                "user": user,
                "expires_at": expires_at,
                "base_url": console.config.base_url,
            }),
            "whoami",
        )?;
    } else {
        print_profile(&user);
        if let Some(expires_at) = expires_at {
            println!("expires_at: {}", expires_at);
        }
        println!("backend: {}", console.config.base_url);
    }
    Ok(())
}
