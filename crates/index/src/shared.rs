use std::sync::{Arc, OnceLock};

use crate::Catalog;

static SHARED: OnceLock<Arc<Catalog>> = OnceLock::new();

/// Installs the process-wide catalog.
///
/// This can only happen once and must happen before the first call to [`shared`]. If a catalog
/// is already in place, the rejected catalog is returned.
pub fn install(catalog: Catalog) -> Result<(), Catalog> {
    let mut catalog = Some(catalog);
    SHARED.get_or_init(|| Arc::new(catalog.take().expect("catalog is taken twice!")));

    match catalog {
        Some(m) => Err(m),
        None => Ok(()),
    }
}

/// Returns the process-wide catalog.
///
/// Falls back to [`Catalog::builtin`] if nothing has been installed.
pub fn shared() -> Arc<Catalog> {
    SHARED
        .get_or_init(|| {
            tracing::debug!("no catalog installed, using the bundled catalog");
            Arc::new(Catalog::builtin())
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The catalog is process-wide, so everything that touches it lives in one test.
    #[test]
    fn first_install_wins() {
        let custom = Catalog::from_json_str(r#"[{"id": "only", "title": "Only", "url": "/"}]"#)
            .unwrap();

        assert!(install(custom).is_ok());
        assert_eq!(shared().len(), 1);

        let rejected = install(Catalog::builtin()).unwrap_err();
        assert_eq!(rejected.len(), 6);
        assert_eq!(shared().len(), 1);
    }
}
