//! High-level database service layer.
//!
//! Repository-agnostic persistence operations used by the HTTP handlers.
//! These work with any [`DocumentRepository`] implementation and apply the
//! concerns that must be identical for every backend (audit timestamps,
//! limit semantics).
//!
//! # Usage
//!
//! ```no_run
//! use tarot_blog::db::{services, Collection, DocumentFilter, LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!
//!     let filter = DocumentFilter::new().eq("sign", "aries");
//!     let docs = services::get_documents(&repo, Collection::Horoscope, &filter, Some(30)).await?;
//!     println!("Found {} horoscopes", docs.len());
//!
//!     Ok(())
//! }
//! ```

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde_json::Value;

use super::collection::{Collection, Storable};
use super::document::{Document, DocumentFilter, DocumentId};
use super::repository::{DocumentRepository, RepositoryResult};

/// Audit field set on insert.
pub const CREATED_AT_FIELD: &str = "created_at";
/// Audit field set on insert. Nothing updates documents, so it always equals `created_at`.
pub const UPDATED_AT_FIELD: &str = "updated_at";

// ==================== Health & Connection ====================

/// Check if the store is reachable.
pub async fn health_check<R>(repo: &R) -> RepositoryResult<bool>
where
    R: DocumentRepository + ?Sized,
{
    repo.health_check().await
}

/// List the collections present in the store.
pub async fn list_collections<R>(repo: &R) -> RepositoryResult<Vec<String>>
where
    R: DocumentRepository + ?Sized,
{
    repo.list_collection_names().await
}

// ==================== Document Operations ====================

/// Persist a record in its collection and return the store-assigned id.
///
/// The record is serialized field for field and stamped with
/// `created_at`/`updated_at`.
pub async fn create_document<T, R>(repo: &R, record: &T) -> RepositoryResult<DocumentId>
where
    T: Storable,
    R: DocumentRepository + ?Sized,
{
    let collection = T::COLLECTION;
    let mut document = record.to_document()?;
    stamp_timestamps(&mut document, Utc::now());

    match repo.insert_document(collection, document).await {
        Ok(id) => {
            info!("Inserted document {} into '{}'", id, collection);
            Ok(id)
        }
        Err(e) => {
            warn!("Insert into '{}' failed: {}", collection, e);
            Err(e.with_collection(collection.name()))
        }
    }
}

/// Fetch up to `limit` documents of a collection matching `filter`.
///
/// `None` and `Some(0)` both mean "no limit". Each returned document carries
/// its identifier as a string `id` field.
pub async fn get_documents<R>(
    repo: &R,
    collection: Collection,
    filter: &DocumentFilter,
    limit: Option<usize>,
) -> RepositoryResult<Vec<Document>>
where
    R: DocumentRepository + ?Sized,
{
    let limit = limit.filter(|n| *n > 0);
    let documents = repo
        .find_documents(collection, filter, limit)
        .await
        .map_err(|e| e.with_collection(collection.name()))?;

    debug!(
        "Fetched {} document(s) from '{}' (filter clauses: {}, limit: {:?})",
        documents.len(),
        collection,
        filter.len(),
        limit
    );
    Ok(documents)
}

fn stamp_timestamps(document: &mut Document, now: DateTime<Utc>) {
    let stamp = Value::String(now.to_rfc3339());
    document.insert(CREATED_AT_FIELD.to_string(), stamp.clone());
    document.insert(UPDATED_AT_FIELD.to_string(), stamp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::models::{Horoscope, HoroscopePeriod, ReadingSession, ZodiacSign};

    fn horoscope(sign: ZodiacSign) -> Horoscope {
        Horoscope {
            sign,
            period: HoroscopePeriod::Daily,
            title: "Today".to_string(),
            content: "Something shifts.".to_string(),
            date_from: None,
            date_to: None,
        }
    }

    #[tokio::test]
    async fn test_create_document_uses_storable_collection() {
        let repo = LocalRepository::new();
        let id = create_document(&repo, &horoscope(ZodiacSign::Aries))
            .await
            .unwrap();

        assert!(!id.as_str().is_empty());
        assert_eq!(repo.document_count(Collection::Horoscope), 1);
        assert_eq!(repo.document_count(Collection::PaidReading), 0);
    }

    #[tokio::test]
    async fn test_create_document_stamps_timestamps() {
        let repo = LocalRepository::new();
        create_document(&repo, &horoscope(ZodiacSign::Leo))
            .await
            .unwrap();

        let stored = &repo.raw_documents(Collection::Horoscope)[0];
        let created = stored[CREATED_AT_FIELD].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(created).is_ok());
        assert_eq!(stored[CREATED_AT_FIELD], stored[UPDATED_AT_FIELD]);
    }

    #[tokio::test]
    async fn test_get_documents_zero_limit_is_unlimited() {
        let repo = LocalRepository::new();
        for _ in 0..4 {
            create_document(&repo, &horoscope(ZodiacSign::Gemini))
                .await
                .unwrap();
        }

        let all = get_documents(&repo, Collection::Horoscope, &DocumentFilter::new(), Some(0))
            .await
            .unwrap();
        assert_eq!(all.len(), 4);

        let two = get_documents(&repo, Collection::Horoscope, &DocumentFilter::new(), Some(2))
            .await
            .unwrap();
        assert_eq!(two.len(), 2);
    }

    #[tokio::test]
    async fn test_picked_cards_round_trip_in_order() {
        let repo = LocalRepository::new();
        let session = ReadingSession {
            prompt: None,
            picked_cards: vec!["The Fool".to_string(), "The Tower".to_string()],
            notes: None,
        };
        let id = create_document(&repo, &session).await.unwrap();

        let docs = get_documents(&repo, Collection::ReadingSession, &DocumentFilter::new(), None)
            .await
            .unwrap();
        assert_eq!(docs[0]["id"], id.as_str());
        assert_eq!(
            docs[0]["picked_cards"],
            serde_json::json!(["The Fool", "The Tower"])
        );
    }

    #[tokio::test]
    async fn test_create_document_propagates_store_failure() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);

        let err = create_document(&repo, &horoscope(ZodiacSign::Libra))
            .await
            .unwrap_err();
        assert_eq!(err.context().collection.as_deref(), Some("horoscope"));
        assert!(err.to_string().contains("not healthy"));
    }
}
