//! Credential capture and removal.
//!
//! The authentication handshake itself happens outside this tool: the
//! user signs in through the vendor's web console (or a local auth proxy)
//! and captures the session cookie from their browser. `auth` stores that
//! blob; every later command reuses it.

use echoctl_config::FileStore;
use echoctl_core::{CredentialStore, keys};

use crate::cli::{AuthArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

/// Store the session cookie (and optional csrf token).
pub fn store_credentials(
    args: AuthArgs,
    store: &FileStore,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let (cookie, csrf) = match args.cookie {
        Some(cookie) => (cookie, args.csrf),
        None => {
            let cookie = prompt_cookie()?;
            let csrf = match args.csrf {
                Some(csrf) => Some(csrf),
                None => prompt_csrf()?,
            };
            (cookie, csrf)
        }
    };
    let cookie = cookie.trim();
    if cookie.is_empty() {
        return Err(CliError::Validation {
            field: "cookie".into(),
            reason: "session cookie cannot be empty".into(),
        });
    }

    store.set(keys::COOKIE, cookie)?;
    if let Some(csrf) = csrf.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        store.set(keys::CSRF, csrf)?;
    }

    output::success(
        &format!("Credentials saved to {}", store.path().display()),
        global,
    );
    output::success("Run: echoctl devices  -- to see your devices", global);
    Ok(())
}

/// Remove saved credentials.
pub fn logout(store: &FileStore, global: &GlobalOpts) -> Result<(), CliError> {
    store.clear()?;
    output::success("Logged out. Run `echoctl auth` to re-authenticate.", global);
    Ok(())
}

/// Prompt for the cookie blob without echoing it to the terminal.
fn prompt_cookie() -> Result<String, CliError> {
    output::plain_note(
        "Paste the session cookie captured from your browser's signed-in session.",
    );
    rpassword::prompt_password("Session cookie: ").map_err(CliError::Io)
}

/// Prompt for the csrf token; empty means derive it from the cookie.
fn prompt_csrf() -> Result<Option<String>, CliError> {
    let token: String = dialoguer::Input::new()
        .with_prompt("csrf token (leave empty to derive from the cookie)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(if token.is_empty() { None } else { Some(token) })
}
