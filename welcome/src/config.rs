use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8081".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        Ok(Config {
            service_host,
            service_port,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
        tracing::info!("  API docs served at: {}", crate::routes::SWAGGER_UI);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, MutexGuard, OnceLock};

    // Tests mutate process-wide env vars, so they take this lock.
    fn env_lock() -> MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }

    fn clear_env_vars() {
        unsafe {
            env::remove_var("SERVICE_HOST");
            env::remove_var("SERVICE_PORT");
        }
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = env_lock();
        clear_env_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.service_port, 8081);
    }

    #[test]
    fn test_config_with_overrides() {
        let _guard = env_lock();
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_HOST", "127.0.0.1");
            env::set_var("SERVICE_PORT", "9191");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.service_port, 9191);

        clear_env_vars();
    }

    #[test]
    fn test_invalid_port() {
        let _guard = env_lock();
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));

        clear_env_vars();
    }
}
