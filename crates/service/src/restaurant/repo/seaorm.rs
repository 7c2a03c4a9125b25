use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use models::{address, restaurant, user_account};

use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::restaurant::domain::{Address, AddressInput, NewRestaurant, Restaurant, RestaurantDto, UserAccount};
use crate::restaurant::repository::{AddressRepository, RestaurantRepository, UserRepository};

/// SeaORM-backed repository implementations.
pub struct SeaOrmRestaurantRepository {
    pub db: DatabaseConnection,
}

fn to_domain_address(a: address::Model) -> Address {
    Address {
        id: a.id,
        street: a.street,
        city: a.city,
        state: a.state,
        postal_code: a.postal_code,
        country: a.country,
    }
}

fn to_domain(r: restaurant::Model, a: address::Model) -> Restaurant {
    Restaurant {
        id: r.id,
        name: r.name,
        description: r.description,
        cuisine_type: r.cuisine_type,
        opening_hours: r.opening_hours,
        registration_date: r.registration_date.with_timezone(&Utc),
        address: to_domain_address(a),
        contact_information: serde_json::from_value(r.contact_information).unwrap_or_default(),
        images: serde_json::from_value(r.images).unwrap_or_default(),
        owner_id: r.owner_id,
        open: r.open,
    }
}

fn require_address(
    pair: (restaurant::Model, Option<address::Model>),
) -> Result<Restaurant, ServiceError> {
    let (r, a) = pair;
    let a = a.ok_or_else(|| ServiceError::Db(format!("restaurant {} has no address row", r.id)))?;
    Ok(to_domain(r, a))
}

fn json_of<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ServiceError> {
    serde_json::to_value(value).map_err(|e| ServiceError::Db(e.to_string()))
}

#[async_trait]
impl RestaurantRepository for SeaOrmRestaurantRepository {
    async fn create(&self, new: NewRestaurant) -> Result<Restaurant, ServiceError> {
        let am = restaurant::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(new.name),
            description: Set(new.description),
            cuisine_type: Set(new.cuisine_type),
            opening_hours: Set(new.opening_hours),
            registration_date: Set(new.registration_date.into()),
            address_id: Set(new.address.id),
            contact_information: Set(json_of(&new.contact_information)?),
            images: Set(json_of(&new.images)?),
            owner_id: Set(new.owner_id),
            open: Set(new.open),
        };
        let inserted = am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(to_domain(inserted, address_model_of(new.address)))
    }

    async fn save(&self, r: Restaurant) -> Result<Restaurant, ServiceError> {
        // Restaurant and address rows change together.
        let txn = self.db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

        let mut ram: restaurant::ActiveModel = restaurant::Entity::find_by_id(r.id)
            .one(&txn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .ok_or_else(|| ServiceError::not_found("restaurant", r.id))?
            .into();
        ram.name = Set(r.name.clone());
        ram.description = Set(r.description.clone());
        ram.cuisine_type = Set(r.cuisine_type.clone());
        ram.opening_hours = Set(r.opening_hours.clone());
        ram.contact_information = Set(json_of(&r.contact_information)?);
        ram.images = Set(json_of(&r.images)?);
        ram.open = Set(r.open);
        ram.update(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;

        let mut aam: address::ActiveModel = address::Entity::find_by_id(r.address.id)
            .one(&txn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .ok_or_else(|| ServiceError::not_found("address", r.address.id))?
            .into();
        aam.street = Set(r.address.street.clone());
        aam.city = Set(r.address.city.clone());
        aam.state = Set(r.address.state.clone());
        aam.postal_code = Set(r.address.postal_code.clone());
        aam.country = Set(r.address.country.clone());
        aam.update(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;

        txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(r)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = restaurant::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }

    async fn find_all(&self) -> Result<Vec<Restaurant>, ServiceError> {
        let rows = restaurant::Entity::find()
            .find_also_related(address::Entity)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        rows.into_iter().map(require_address).collect()
    }

    async fn find_all_paginated(&self, opts: Pagination) -> Result<Vec<Restaurant>, ServiceError> {
        let (page_idx, per_page) = opts.normalize();
        let rows = restaurant::Entity::find()
            .find_also_related(address::Entity)
            .order_by_asc(restaurant::Column::RegistrationDate)
            .paginate(&self.db, per_page)
            .fetch_page(page_idx)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        rows.into_iter().map(require_address).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Restaurant>, ServiceError> {
        let row = restaurant::Entity::find_by_id(id)
            .find_also_related(address::Entity)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        row.map(require_address).transpose()
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Option<Restaurant>, ServiceError> {
        let row = restaurant::Entity::find()
            .filter(restaurant::Column::OwnerId.eq(owner_id))
            .find_also_related(address::Entity)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        row.map(require_address).transpose()
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Restaurant>, ServiceError> {
        let rows = restaurant::Entity::find()
            .filter(
                Condition::any()
                    .add(restaurant::Column::Name.contains(keyword))
                    .add(restaurant::Column::CuisineType.contains(keyword))
                    .add(restaurant::Column::Description.contains(keyword)),
            )
            .find_also_related(address::Entity)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        rows.into_iter().map(require_address).collect()
    }
}

fn address_model_of(a: Address) -> address::Model {
    address::Model {
        id: a.id,
        street: a.street,
        city: a.city,
        state: a.state,
        postal_code: a.postal_code,
        country: a.country,
        created_at: Utc::now().into(),
    }
}

pub struct SeaOrmAddressRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl AddressRepository for SeaOrmAddressRepository {
    async fn save(&self, input: AddressInput) -> Result<Address, ServiceError> {
        let city = input
            .city
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| ServiceError::Validation("city required".into()))?;
        let created = address::create(&self.db, input.street, &city, input.state, input.postal_code, input.country).await?;
        Ok(to_domain_address(created))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = address::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserAccount>, ServiceError> {
        let row = user_account::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(row.map(|u| UserAccount {
            id: u.id,
            email: u.email,
            full_name: u.full_name,
            favourites: serde_json::from_value(u.favourites).unwrap_or_default(),
        }))
    }

    async fn save_favourites(&self, user_id: Uuid, favourites: Vec<RestaurantDto>) -> Result<(), ServiceError> {
        let value = json_of(&favourites)?;
        user_account::set_favourites(&self.db, user_id, value).await?;
        Ok(())
    }
}
