use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use anyhow::{Context, Result};
use zeroize::{Zeroize, Zeroizing};

/// The application's configuration.
#[derive(Clone)]
pub struct Config {
    /// The secret used to sign session tokens.
    pub session_secret: Zeroizing<Vec<u8>>,
    /// Whether the portal runs in production (enables `Secure` cookies).
    pub production: bool,
    /// The address the server binds to.
    pub bind_addr: SocketAddr,
    /// Optional JSON file with the initial users, organizations and TCCs.
    pub data_file: Option<PathBuf>,
    /// The directory holding uploaded TCC documents.
    pub files_dir: PathBuf,
    /// The directory served for static assets.
    pub public_dir: PathBuf,
}

impl Config {
    /// Creates a new `Config` from environment variables.
    ///
    /// A missing `SESSION_SECRET` is fatal: no session can be signed or
    /// verified without it.
    pub fn from_env() -> Result<Self> {
        let mut secret = env::var("SESSION_SECRET")
            .context("SESSION_SECRET must be set (generate with: openssl rand -base64 32)")?;

        if secret.trim().is_empty() {
            secret.zeroize();
            anyhow::bail!("SESSION_SECRET must not be empty");
        }

        let session_secret = Zeroizing::new(secret.as_bytes().to_vec());
        secret.zeroize();

        let production = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string()) == "production";

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .context("Invalid BIND_ADDR")?;

        Ok(Self {
            session_secret,
            production,
            bind_addr,
            data_file: env::var("DATA_FILE").ok().map(PathBuf::from),
            files_dir: env::var("FILES_DIR")
                .unwrap_or_else(|_| "files/tcc".to_string())
                .into(),
            public_dir: env::var("PUBLIC_DIR")
                .unwrap_or_else(|_| "files/public".to_string())
                .into(),
        })
    }

    /// Builds a development configuration around the given secret.
    pub fn with_secret(secret: &[u8]) -> Self {
        Self {
            session_secret: Zeroizing::new(secret.to_vec()),
            production: false,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_file: None,
            files_dir: PathBuf::from("files/tcc"),
            public_dir: PathBuf::from("files/public"),
        }
    }
}
