use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{address, user_account};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurant")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub cuisine_type: Option<String>,
    pub opening_hours: Option<String>,
    /// Stamped at creation, never rewritten afterwards.
    pub registration_date: DateTimeWithTimeZone,
    pub address_id: Uuid,
    pub contact_information: Json,
    /// Ordered JSON array of image references.
    pub images: Json,
    pub owner_id: Uuid,
    pub open: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Address,
    Owner,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Address => Entity::belongs_to(address::Entity)
                .from(Column::AddressId)
                .to(address::Column::Id)
                .into(),
            Relation::Owner => Entity::belongs_to(user_account::Entity)
                .from(Column::OwnerId)
                .to(user_account::Column::Id)
                .into(),
        }
    }
}

impl Related<address::Entity> for Entity {
    fn to() -> RelationDef { Relation::Address.def() }
}

impl Related<user_account::Entity> for Entity {
    fn to() -> RelationDef { Relation::Owner.def() }
}

impl ActiveModelBehavior for ActiveModel {}
