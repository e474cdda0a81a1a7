use dioxus::prelude::*;
use shared_types::{Role, SessionToken, SESSION_STORAGE_KEY};

/// Browser session: the bearer token mirrored from `localStorage`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub token: Signal<Option<SessionToken>>,
    /// Becomes `true` once the stored token has been read back on startup.
    pub restored: Signal<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            token: Signal::new(None),
            restored: Signal::new(false),
        }
    }

    pub fn token(&self) -> Option<SessionToken> {
        self.token.read().clone()
    }

    pub fn is_restored(&self) -> bool {
        *self.restored.read()
    }

    /// Role of the signed-in user, if the token decodes. Called on every
    /// render; decode failures are logged once by `SessionSeed`.
    pub fn role(&self) -> Option<Role> {
        self.token.read().as_ref().and_then(|token| token.role().ok())
    }

    pub fn sign_in(&mut self, token: SessionToken) {
        document::eval(&store_script(token.as_str()));
        self.token.set(Some(token));
    }

    pub fn sign_out(&mut self) {
        document::eval(&clear_script());
        self.token.set(None);
        tracing::info!("Signed out");
    }
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Reads the stored token once at startup. Render once near the root.
#[component]
pub fn SessionSeed() -> Element {
    let mut session = use_session();

    use_effect(move || {
        spawn(async move {
            let stored = match document::eval(&read_script()).join::<Option<String>>().await {
                Ok(value) => restore_token(value),
                Err(e) => {
                    tracing::warn!(error = ?e, "Could not read session storage");
                    None
                }
            };
            session.token.set(stored);
            session.restored.set(true);
        });
    });

    rsx! {}
}

/// Wrap the raw `localStorage` value. An unreadable JWT is kept, since the
/// backend decides whether it is still valid, but is reported here once
/// rather than on every role lookup.
fn restore_token(raw: Option<String>) -> Option<SessionToken> {
    let token = raw.and_then(SessionToken::new)?;
    if let Err(e) = token.role() {
        tracing::warn!(error = %e, "Stored token is not a readable JWT");
    }
    Some(token)
}

fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

fn read_script() -> String {
    format!("return localStorage.getItem({});", js_string(SESSION_STORAGE_KEY))
}

fn store_script(token: &str) -> String {
    format!(
        "localStorage.setItem({}, {});",
        js_string(SESSION_STORAGE_KEY),
        js_string(token)
    )
}

fn clear_script() -> String {
    format!("localStorage.removeItem({});", js_string(SESSION_STORAGE_KEY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scripts_target_the_token_slot() {
        assert_eq!(read_script(), r#"return localStorage.getItem("token");"#);
        assert_eq!(clear_script(), r#"localStorage.removeItem("token");"#);
    }

    #[test]
    fn restore_keeps_unreadable_tokens_and_drops_blanks() {
        assert_eq!(restore_token(None), None);
        assert_eq!(restore_token(Some("  ".to_string())), None);
        let kept = restore_token(Some("opaque".to_string())).unwrap();
        assert_eq!(kept.as_str(), "opaque");
        assert!(kept.role().is_err());
    }

    #[test]
    fn stored_token_is_quoted() {
        assert_eq!(
            store_script(r#"a.b"c"#),
            r#"localStorage.setItem("token", "a.b\"c");"#
        );
    }
}
