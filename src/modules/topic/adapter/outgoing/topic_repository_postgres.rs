use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::topic::application::ports::outgoing::{
    CreateTopicData, TopicRepository, TopicRepositoryError, TopicResult,
};

// SeaORM entity imports
use super::sea_orm_entity::{ActiveModel as TopicActiveModel, Model as TopicModel};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(
        &self,
        data: CreateTopicData,
    ) -> Result<TopicResult, TopicRepositoryError> {
        let active = TopicActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            user_id: Set(data.owner.into_inner()),
            ..Default::default()
        };

        let inserted: TopicModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_repository_result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topic::application::domain::entities::UserId;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, RuntimeErr};

    fn create_test_topic_model(id: Uuid, name: &str, user_id: &str) -> TopicModel {
        let now = Utc::now().fixed_offset();

        TopicModel {
            id,
            name: name.to_string(),
            user_id: user_id.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_topic_success() {
        let topic_id = Uuid::new_v4();

        let input = CreateTopicData {
            name: "Rust".to_string(),
            owner: UserId::new("u1"),
        };

        let inserted_model = create_test_topic_model(topic_id, "Rust", "u1");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![inserted_model.clone()]])
            .into_connection();

        let repo = TopicRepositoryPostgres::new(Arc::new(db));

        let result = repo.create_topic(input).await;

        assert!(result.is_ok());
        let topic = result.unwrap();

        assert_eq!(topic.id, topic_id);
        assert_eq!(topic.name, "Rust");
        assert_eq!(topic.owner, UserId::new("u1"));
    }

    #[tokio::test]
    async fn test_create_topic_keeps_untrimmed_values() {
        let topic_id = Uuid::new_v4();

        let input = CreateTopicData {
            name: "  Rust Ownership  ".to_string(),
            owner: UserId::new(" u1 "),
        };

        let inserted_model = create_test_topic_model(topic_id, "  Rust Ownership  ", " u1 ");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![inserted_model]])
            .into_connection();

        let repo = TopicRepositoryPostgres::new(Arc::new(db));

        let result = repo.create_topic(input).await;

        assert!(result.is_ok());
        let topic = result.unwrap();

        assert_eq!(topic.name, "  Rust Ownership  ");
        assert_eq!(topic.owner.as_str(), " u1 ");
    }

    #[tokio::test]
    async fn test_create_topic_database_error() {
        let input = CreateTopicData {
            name: "Fail".to_string(),
            owner: UserId::new("u1"),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![sea_orm::DbErr::Query(RuntimeErr::Internal(
                "insert failed".into(),
            ))])
            .into_connection();

        let repo = TopicRepositoryPostgres::new(Arc::new(db));

        let result = repo.create_topic(input).await;

        assert!(matches!(
            result,
            Err(TopicRepositoryError::DatabaseError(_))
        ));
    }

    #[test]
    fn test_repository_is_cloneable() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = TopicRepositoryPostgres::new(Arc::new(db));

        let _ = repo.clone();
        assert!(true);
    }
}
