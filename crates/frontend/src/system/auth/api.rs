use arcus_core::system::auth::{AuthError, CredentialStore, Session};
use gloo_timers::future::TimeoutFuture;

use crate::shared::config::{AppConfig, AuthConfig};

/// Simulated round trip of a login attempt. Without a provided config the
/// embedded default applies.
pub fn login_delay_ms(config: Option<&AppConfig>) -> u32 {
    config.map_or_else(|| AuthConfig::default().login_delay_ms, |c| c.auth.login_delay_ms)
}

/// Checks the credentials against `store` after a simulated round trip of
/// `delay_ms`.
pub async fn login(
    store: &CredentialStore,
    email: String,
    password: String,
    delay_ms: u32,
) -> Result<Session, AuthError> {
    TimeoutFuture::new(delay_ms).await;

    let issued_at = chrono::Utc::now().timestamp_millis();
    store.authenticate(&email, &password, issued_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::parse_config;

    #[test]
    fn test_login_delay_follows_config() {
        let fast = parse_config("[auth]\nlogin_delay_ms = 0\n").unwrap();
        assert_eq!(login_delay_ms(Some(&fast)), 0);

        let slow = parse_config("[auth]\nlogin_delay_ms = 2500\n").unwrap();
        assert_eq!(login_delay_ms(Some(&slow)), 2500);
    }

    #[test]
    fn test_login_delay_defaults_without_config() {
        assert_eq!(login_delay_ms(None), 1000);
        assert_eq!(login_delay_ms(Some(&AppConfig::default())), 1000);
    }
}
