use crate::modules::topic::application::domain::entities::UserId;
use crate::modules::topic::application::ports::outgoing::TopicResult;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

// The owning user lives in an external system, so user_id is free-form text
// with no foreign key behind it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub name: String,

    pub user_id: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_repository_result(&self) -> TopicResult {
        TopicResult {
            id: self.id,
            name: self.name.clone(),
            owner: UserId::new(self.user_id.clone()),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
