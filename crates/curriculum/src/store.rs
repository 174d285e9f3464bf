//! The curriculum document store — a single read-only SQLite fetch.
//!
//! The loader never performs writes and never holds the connection beyond
//! the one fetch: the pool is opened, queried once, and closed on every
//! path. Any failure downgrades to the sample curriculum with a classified
//! reason; nothing here aborts startup.

use crate::sample::SAMPLE_CURRICULUM;
use mentor_config::CurriculumStoreConfig;
use mentor_core::curriculum::{CurriculumDocument, Section};
use mentor_core::error::CurriculumError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use tracing::{error, info, warn};
use uuid::Uuid;

/// The outcome of the one startup fetch: the rendered text plus where it
/// came from. The text is baked into the system prompt unchanged for the
/// lifetime of the session.
#[derive(Debug, Clone)]
pub struct LoadedCurriculum {
    /// The rendered curriculum text
    pub text: String,

    /// Whether the text came from the store or the sample fallback
    pub provenance: Provenance,
}

/// Where a session's curriculum text came from.
#[derive(Debug, Clone)]
pub enum Provenance {
    /// Fetched and rendered from the document store
    Store { document_id: String, title: String },

    /// The built-in sample, substituted for the given reason
    Fallback { reason: CurriculumError },
}

impl LoadedCurriculum {
    pub fn is_fallback(&self) -> bool {
        matches!(self.provenance, Provenance::Fallback { .. })
    }
}

/// Fetch the configured curriculum document and render it, falling back to
/// [`SAMPLE_CURRICULUM`] on any failure. Called once per process lifetime,
/// at startup — never per user turn.
pub async fn load_curriculum(config: &CurriculumStoreConfig) -> LoadedCurriculum {
    match fetch_document(config).await {
        Ok(document) => {
            let title = document
                .title
                .clone()
                .unwrap_or_else(|| mentor_core::curriculum::DEFAULT_DOCUMENT_TITLE.into());
            info!(document_id = %document.id, %title, "Curriculum loaded from store");
            LoadedCurriculum {
                text: document.render_text(),
                provenance: Provenance::Store {
                    document_id: document.id,
                    title,
                },
            }
        }
        Err(reason) => {
            if reason.is_store_failure() {
                error!(%reason, "Curriculum fetch failed, using sample content");
            } else {
                warn!(%reason, "Curriculum unavailable, using sample content");
            }
            LoadedCurriculum {
                text: SAMPLE_CURRICULUM.to_string(),
                provenance: Provenance::Fallback { reason },
            }
        }
    }
}

/// Attempt the single document fetch.
async fn fetch_document(
    config: &CurriculumStoreConfig,
) -> Result<CurriculumDocument, CurriculumError> {
    let Some(database_url) = config.database_url.as_deref() else {
        return Err(CurriculumError::NotConfigured);
    };
    let Some(document_id) = config.document_id.as_deref() else {
        return Err(CurriculumError::NotConfigured);
    };

    // The store's native id type — reject before touching the connection
    let id = Uuid::parse_str(document_id)
        .map_err(|e| CurriculumError::InvalidId(format!("{document_id}: {e}")))?;

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| CurriculumError::StoreUnavailable(format!("invalid database URL: {e}")))?
        .read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| CurriculumError::StoreUnavailable(format!("failed to connect: {e}")))?;

    // One fetch, then release the connection whatever the outcome
    let raw = fetch_raw_document(&pool, &config.table, &id.to_string()).await;
    pool.close().await;

    parse_document(&id.to_string(), &raw?)
}

async fn fetch_raw_document(
    pool: &SqlitePool,
    table: &str,
    id: &str,
) -> Result<String, CurriculumError> {
    // Table names cannot be bound as parameters; config validation already
    // restricts them to bare identifiers.
    let query = format!("SELECT document FROM {table} WHERE id = ?");

    let row = sqlx::query(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| CurriculumError::StoreUnavailable(format!("query failed: {e}")))?
        .ok_or_else(|| CurriculumError::MissingDocument(id.to_string()))?;

    row.try_get("document")
        .map_err(|e| CurriculumError::MalformedDocument(format!("document column: {e}")))
}

/// Parse a raw JSON document into a [`CurriculumDocument`].
///
/// A document without a `sections` field is malformed in its entirety —
/// no partial render is produced from it.
fn parse_document(id: &str, raw: &str) -> Result<CurriculumDocument, CurriculumError> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| CurriculumError::MalformedDocument(format!("invalid JSON: {e}")))?;

    let Some(sections_value) = value.get("sections") else {
        return Err(CurriculumError::MalformedDocument(
            "missing 'sections' field".into(),
        ));
    };

    let sections: Vec<Section> = serde_json::from_value(sections_value.clone())
        .map_err(|e| CurriculumError::MalformedDocument(format!("sections: {e}")))?;

    let title = value
        .get("title")
        .and_then(|t| t.as_str())
        .map(String::from);

    Ok(CurriculumDocument {
        id: id.to_string(),
        title,
        sections,
    })
}
