use std::env;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use search_index::Catalog;

/// Path of a JSON catalog to serve instead of the bundled one.
pub const CATALOG_PATH_ENV: &str = "SEARCH_CATALOG_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    pub catalog_path: Option<PathBuf>,
}

/// Accepts a missing env file, rejects one that cannot be read or parsed.
fn check_env_file<T>(result: dotenvy::Result<T>) -> anyhow::Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(dotenvy::Error::Io(ref e)) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).context("failed to load .env"),
    }
}

impl ServerConfig {
    /// Reads the configuration from the environment, after loading `.env` if present.
    pub fn from_env() -> anyhow::Result<Self> {
        check_env_file(dotenvy::dotenv())?;

        Ok(Self::from_var(env::var_os(CATALOG_PATH_ENV)))
    }

    fn from_var(catalog_path: Option<OsString>) -> Self {
        let catalog_path = catalog_path
            .filter(|m| !m.to_string_lossy().trim().is_empty())
            .map(PathBuf::from);

        Self { catalog_path }
    }

    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        match self.catalog_path {
            Some(ref p) => Catalog::load(p)
                .with_context(|| format!("failed to load catalog from {}", p.display())),
            None => Ok(Catalog::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn catalog_path_is_optional() {
        assert_eq!(ServerConfig::from_var(None), ServerConfig::default());
        assert_eq!(
            ServerConfig::from_var(Some("  ".into())),
            ServerConfig::default()
        );
    }

    #[test]
    fn catalog_path_is_read() {
        let config = ServerConfig::from_var(Some("/srv/catalog.json".into()));

        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/catalog.json")));
    }

    #[cfg(unix)]
    #[test]
    fn catalog_path_may_be_non_utf8() {
        use std::os::unix::ffi::OsStringExt;

        let raw = b"/srv/\xff\xfe.json".to_vec();
        let config = ServerConfig::from_var(Some(OsString::from_vec(raw.clone())));

        assert_eq!(
            config.catalog_path.map(|m| m.into_os_string().into_vec()),
            Some(raw)
        );
    }

    #[test]
    fn missing_env_file_is_fine() {
        let dir = tempfile::tempdir().unwrap();

        check_env_file(dotenvy::from_path(dir.path().join(".env"))).unwrap();
    }

    #[test]
    fn malformed_env_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is not an env file").unwrap();

        let e = check_env_file(dotenvy::from_path(file.path())).unwrap_err();
        assert!(e.to_string().contains(".env"));
    }

    #[test]
    fn loads_bundled_catalog_by_default() {
        let catalog = ServerConfig::default().load_catalog().unwrap();

        assert_eq!(catalog.len(), Catalog::builtin().len());
    }

    #[test]
    fn loads_catalog_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "a", "title": "Alpha", "url": "/a"}}]"#).unwrap();

        let config = ServerConfig {
            catalog_path: Some(file.path().to_owned()),
        };

        assert_eq!(config.load_catalog().unwrap().len(), 1);
    }

    #[test]
    fn missing_catalog_names_the_path() {
        let config = ServerConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.json")),
        };

        let e = config.load_catalog().unwrap_err();
        assert!(e.to_string().contains("/nonexistent/catalog.json"));
    }
}
