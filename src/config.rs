//! Application configuration loaded from environment variables.
//!
//! - `PAISA_API_URL` — base URL of the API gateway (defaults to the local
//!   development gateway).
//! - `PAISA_EMAIL` / `PAISA_PASSWORD` — optional credentials for
//!   non-interactive login; when one is set both must be present.

/// Default API gateway endpoint.
const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub gateway: GatewayConfig,
}

/// Gateway-specific configuration values.
#[derive(Debug)]
pub struct GatewayConfig {
    pub base_url: String,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Loads the application configuration from environment variables.
///
/// The gateway URL defaults to `http://localhost:8080` and can be
/// overridden with `PAISA_API_URL`. Login credentials are optional
/// (the TUI prompts interactively) but when one is set both must be
/// present.
///
/// # Errors
///
/// Returns [`PaisaError::Config`](crate::PaisaError::Config) if only
/// one of the two credential variables is set.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let base_url =
        non_empty_var("PAISA_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let email = non_empty_var("PAISA_EMAIL");
    let password = non_empty_var("PAISA_PASSWORD");

    match (&email, &password) {
        (Some(_), None) => {
            return Err(crate::PaisaError::Config(
                "PAISA_EMAIL is set but PAISA_PASSWORD is missing".to_string(),
            ));
        }
        (None, Some(_)) => {
            return Err(crate::PaisaError::Config(
                "PAISA_PASSWORD is set but PAISA_EMAIL is missing".to_string(),
            ));
        }
        _ => {}
    }

    Ok(AppConfig {
        gateway: GatewayConfig {
            base_url,
            email,
            password,
        },
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper that temporarily sets env vars, runs `f`, then restores originals.
    ///
    /// # Safety
    ///
    /// Tests using this helper must run with `--test-threads=1` or otherwise
    /// ensure no other threads read these env vars concurrently.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let originals: Vec<(&str, Option<String>)> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            // SAFETY: config tests run single-threaded (see test runner config).
            unsafe {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values, same single-threaded context.
            unsafe {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn defaults_without_env_vars() {
        with_env(
            &[
                ("PAISA_API_URL", None),
                ("PAISA_EMAIL", None),
                ("PAISA_PASSWORD", None),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.gateway.base_url, DEFAULT_API_URL);
                assert!(config.gateway.email.is_none());
                assert!(config.gateway.password.is_none());
            },
        );
    }

    #[test]
    fn loads_credentials_from_env() {
        with_env(
            &[
                ("PAISA_API_URL", None),
                ("PAISA_EMAIL", Some("dev@example.com")),
                ("PAISA_PASSWORD", Some("hunter2")),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.gateway.email.as_deref(), Some("dev@example.com"));
                assert_eq!(config.gateway.password.as_deref(), Some("hunter2"));
            },
        );
    }

    #[test]
    fn custom_gateway_url() {
        with_env(
            &[
                ("PAISA_API_URL", Some("https://wallet.example.com")),
                ("PAISA_EMAIL", None),
                ("PAISA_PASSWORD", None),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.gateway.base_url, "https://wallet.example.com");
            },
        );
    }

    #[test]
    fn rejects_email_without_password() {
        with_env(
            &[
                ("PAISA_EMAIL", Some("dev@example.com")),
                ("PAISA_PASSWORD", None),
            ],
            || {
                let err = fetch_config().unwrap_err();
                assert!(err.to_string().contains("PAISA_PASSWORD is missing"));
            },
        );
    }

    #[test]
    fn rejects_password_without_email() {
        with_env(
            &[
                ("PAISA_EMAIL", None),
                ("PAISA_PASSWORD", Some("hunter2")),
            ],
            || {
                let err = fetch_config().unwrap_err();
                assert!(err.to_string().contains("PAISA_EMAIL is missing"));
            },
        );
    }

    #[test]
    fn empty_values_treated_as_absent() {
        with_env(
            &[
                ("PAISA_API_URL", Some("")),
                ("PAISA_EMAIL", Some("")),
                ("PAISA_PASSWORD", Some("")),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.gateway.base_url, DEFAULT_API_URL);
                assert!(config.gateway.email.is_none());
                assert!(config.gateway.password.is_none());
            },
        );
    }
}
