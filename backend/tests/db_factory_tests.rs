//! Tests for db::factory module - repository creation and configuration.

mod support;

use std::io::Write;
use std::str::FromStr;

use tarot_blog::db::factory::{RepositoryBuilder, RepositoryFactory, RepositoryType};
use tarot_blog::db::RepositoryConfig;

#[test]
fn test_repository_type_from_str_mongo() {
    assert_eq!(RepositoryType::from_str("mongo").unwrap(), RepositoryType::Mongo);
    assert_eq!(RepositoryType::from_str("MongoDB").unwrap(), RepositoryType::Mongo);
}

#[test]
fn test_repository_type_from_str_local() {
    assert_eq!(RepositoryType::from_str("local").unwrap(), RepositoryType::Local);
    assert_eq!(RepositoryType::from_str("LOCAL").unwrap(), RepositoryType::Local);
}

#[test]
fn test_repository_type_from_str_invalid() {
    let result = RepositoryType::from_str("postgres");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Unknown repository type"));
}

#[test]
fn test_repository_type_from_env_default() {
    support::with_scoped_env(&[("REPOSITORY_TYPE", None), ("DATABASE_URL", None)], || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
    });
}

#[test]
fn test_repository_type_from_env_with_database_url() {
    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", None),
            ("DATABASE_URL", Some("mongodb://localhost:27017")),
        ],
        || {
            assert_eq!(RepositoryType::from_env(), RepositoryType::Mongo);
        },
    );
}

#[test]
fn test_repository_type_from_env_explicit_overrides_url() {
    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", Some("local")),
            ("DATABASE_URL", Some("mongodb://localhost:27017")),
        ],
        || {
            assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
        },
    );
}

#[test]
fn test_repository_type_from_env_invalid_defaults_to_local() {
    support::with_scoped_env(
        &[("REPOSITORY_TYPE", Some("invalid")), ("DATABASE_URL", None)],
        || {
            assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
        },
    );
}

#[tokio::test]
async fn test_create_local_via_factory() {
    let repo = RepositoryFactory::create(RepositoryType::Local, None)
        .await
        .unwrap();
    assert!(repo.health_check().await.unwrap());
    assert!(repo.is_in_memory());
}

#[tokio::test]
async fn test_create_mongo_without_config_fails() {
    let result = RepositoryFactory::create(RepositoryType::Mongo, None).await;
    let err = result.err().unwrap().to_string();

    #[cfg(feature = "mongo-repo")]
    assert!(err.contains("requires MongoConfig"));
    #[cfg(not(feature = "mongo-repo"))]
    assert!(err.contains("feature not enabled"));
}

#[tokio::test]
async fn test_builder_with_explicit_local_type() {
    let repo = RepositoryBuilder::new()
        .repository_type(RepositoryType::Local)
        .build()
        .await
        .unwrap();
    assert!(repo.list_collection_names().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_factory_from_env_uses_local_without_url() {
    let result = support::with_scoped_env(
        &[("REPOSITORY_TYPE", None), ("DATABASE_URL", None)],
        || RepositoryBuilder::new().from_env(),
    );
    let repo = result.unwrap().build().await.unwrap();
    assert!(repo.health_check().await.unwrap());
}

#[cfg(not(feature = "mongo-repo"))]
#[test]
fn test_builder_from_env_with_url_requires_mongo_feature() {
    let result = support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", None),
            ("DATABASE_URL", Some("mongodb://localhost:27017")),
        ],
        || RepositoryBuilder::new().from_env(),
    );
    let err = result.err().unwrap();
    assert!(err.to_string().contains("feature not enabled"));
}

#[tokio::test]
async fn test_factory_from_local_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[repository]\ntype = \"local\"").unwrap();

    let repo = RepositoryFactory::from_config_file(file.path()).await.unwrap();
    assert!(repo.health_check().await.unwrap());
}

#[tokio::test]
async fn test_factory_from_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = RepositoryFactory::from_config_file(dir.path().join("missing.toml")).await;
    assert!(result.is_err());
}

#[test]
fn test_repository_config_parses_mongo_section() {
    let config = RepositoryConfig::from_str(
        r#"
        [repository]
        type = "mongo"

        [mongo]
        database_url = "mongodb://localhost:27017"
        database_name = "tarot"
        app_name = "tarot-blog"
        max_pool_size = 10
        "#,
    )
    .unwrap();

    assert_eq!(config.repository_type().unwrap(), RepositoryType::Mongo);
    assert_eq!(config.mongo.database_name, "tarot");
    assert_eq!(config.mongo.max_pool_size, Some(10));

    let mongo = config.to_mongo_config();
    #[cfg(feature = "mongo-repo")]
    {
        let mongo = mongo.unwrap().unwrap();
        assert_eq!(mongo.database_url, "mongodb://localhost:27017");
        assert_eq!(mongo.app_name.as_deref(), Some("tarot-blog"));
    }
    #[cfg(not(feature = "mongo-repo"))]
    assert!(mongo.is_err());
}

#[test]
fn test_repository_config_rejects_unknown_type() {
    let config = RepositoryConfig::from_str("[repository]\ntype = \"sqlite\"").unwrap();
    assert!(config.repository_type().is_err());
    assert!(config.to_mongo_config().is_err());
}
