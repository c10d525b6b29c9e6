use std::env;
use std::path::PathBuf;
use tracing::warn;

/// Everything the pipeline needs for one run, resolved at startup from the
/// environment and CLI overrides. Nothing reads the environment after this.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the durable CSV dataset, read and fully rewritten each run.
    pub data_file: PathBuf,
    pub timeout_seconds: u64,
    pub user_agent: String,
    /// SMTP settings; `None` disables notification entirely.
    pub email: Option<EmailConfig>,
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub sender: String,
    pub recipient: String,
    pub password: String,
    pub smtp_host: String,
    pub smtp_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("jobs.csv"),
            timeout_seconds: 10,
            user_agent: format!("jobwatch/{}", env!("CARGO_PKG_VERSION")),
            email: None,
        }
    }
}

impl Config {
    /// Builds a config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let data_file = env::var("JOBWATCH_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_file);

        let timeout_seconds = match env::var("JOBWATCH_TIMEOUT_SECS") {
            Ok(raw) => match raw.parse() {
                Ok(secs) => secs,
                Err(_) => {
                    warn!("Ignoring unparseable JOBWATCH_TIMEOUT_SECS={:?}", raw);
                    defaults.timeout_seconds
                }
            },
            Err(_) => defaults.timeout_seconds,
        };

        let user_agent = env::var("JOBWATCH_USER_AGENT").unwrap_or(defaults.user_agent);

        Self {
            data_file,
            timeout_seconds,
            user_agent,
            email: EmailConfig::from_env(),
        }
    }
}

impl EmailConfig {
    /// Reads SMTP settings from the environment. All of EMAIL_SENDER,
    /// EMAIL_RECIPIENT, EMAIL_PASSWORD and SMTP_HOST must be present;
    /// otherwise notification is disabled for the run rather than letting
    /// the transport fail mid-send with an obscure error.
    pub fn from_env() -> Option<Self> {
        let required = ["EMAIL_SENDER", "EMAIL_RECIPIENT", "EMAIL_PASSWORD", "SMTP_HOST"];
        let missing: Vec<&str> = required
            .iter()
            .filter(|name| env::var(name).map_or(true, |v| v.is_empty()))
            .copied()
            .collect();
        if !missing.is_empty() {
            warn!(
                "Email notification disabled, missing settings: {}",
                missing.join(", ")
            );
            return None;
        }

        let smtp_port = match env::var("SMTP_PORT") {
            Ok(raw) => match raw.parse() {
                Ok(port) => port,
                Err(_) => {
                    warn!("Ignoring unparseable SMTP_PORT={:?}, using 587", raw);
                    587
                }
            },
            Err(_) => 587,
        };

        Some(Self {
            sender: env::var("EMAIL_SENDER").ok()?,
            recipient: env::var("EMAIL_RECIPIENT").ok()?,
            password: env::var("EMAIL_PASSWORD").ok()?,
            smtp_host: env::var("SMTP_HOST").ok()?,
            smtp_port,
        })
    }
}
