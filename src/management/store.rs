use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use futures::AsyncWriteExt;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    Error, Result,
    config::Config,
    types::{Token, User},
};

#[cfg(unix)]
const OWNER_ONLY: u32 = 0o600;

/// The two files that keep a login alive between invocations.
#[derive(Debug, Clone)]
pub struct LocalStore {
    token_path: PathBuf,
    user_path: PathBuf,
}

impl LocalStore {
    pub fn new(token_path: impl Into<PathBuf>, user_path: impl Into<PathBuf>) -> Self {
        Self {
            token_path: token_path.into(),
            user_path: user_path.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.token_file, &config.user_file)
    }

    pub async fn save_token(&self, token: &Token) -> Result<()> {
        save(&self.token_path, token).await
    }

    pub async fn load_token(&self) -> Result<Token> {
        load(&self.token_path).await
    }

    pub async fn save_user(&self, user: &User) -> Result<()> {
        save(&self.user_path, user).await
    }

    pub async fn load_user(&self) -> Result<User> {
        load(&self.user_path).await
    }

    pub fn token_path(&self) -> &Path {
        &self.token_path
    }

    pub fn user_path(&self) -> &Path {
        &self.user_path
    }
}

/// Writes `value` as indented JSON, replacing whatever the file held before.
///
/// On unix the file is readable and writable by the owner only, including
/// when it already existed with wider permissions.
pub async fn save<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        async_fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_string_pretty(value)?;

    let mut options = async_fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use async_fs::unix::OpenOptionsExt;
        options.mode(OWNER_ONLY);
    }

    let mut file = options.open(path).await?;
    file.write_all(json.as_bytes()).await?;
    file.flush().await?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        async_fs::set_permissions(path, std::fs::Permissions::from_mode(OWNER_ONLY)).await?;
    }

    tracing::debug!(path = %path.display(), "saved");
    Ok(())
}

/// Reads and deserializes a file written by [`save`].
///
/// # Errors
///
/// - [`Error::NotLoggedIn`] when the file does not exist
/// - [`Error::CorruptFile`] when it does not hold the expected JSON shape
pub async fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = match async_fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::NotLoggedIn {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(Error::Io(e)),
    };

    serde_json::from_str(&content).map_err(|source| Error::CorruptFile {
        path: path.to_path_buf(),
        source,
    })
}
