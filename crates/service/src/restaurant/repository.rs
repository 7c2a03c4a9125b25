use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{Address, AddressInput, NewRestaurant, Restaurant, RestaurantDto, UserAccount};
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Restaurant store contract.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn create(&self, new: NewRestaurant) -> Result<Restaurant, ServiceError>;
    /// Persist changes to an existing restaurant (and its address fields).
    /// The registration date is never rewritten.
    async fn save(&self, restaurant: Restaurant) -> Result<Restaurant, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Restaurant>, ServiceError>;
    async fn find_all_paginated(&self, opts: Pagination) -> Result<Vec<Restaurant>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Restaurant>, ServiceError>;
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Option<Restaurant>, ServiceError>;
    /// Keyword match against name, cuisine type and description.
    async fn search(&self, keyword: &str) -> Result<Vec<Restaurant>, ServiceError>;
}

/// Address store contract. `delete` exists for the create-compensation path.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn save(&self, input: AddressInput) -> Result<Address, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// User store contract: lookups plus the favourites-sequence swap.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserAccount>, ServiceError>;
    /// Replace the user's favourites sequence in one atomic write.
    async fn save_favourites(&self, user_id: Uuid, favourites: Vec<RestaurantDto>) -> Result<(), ServiceError>;
}

/// Simple in-memory repositories for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockRestaurantRepository {
        rows: Mutex<Vec<Restaurant>>, // insertion order preserved
        fail_next_create: AtomicBool,
    }

    impl MockRestaurantRepository {
        /// Make the next `create` fail, to exercise compensation paths.
        pub fn fail_next_create(&self) {
            self.fail_next_create.store(true, Ordering::SeqCst);
        }

        pub fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl RestaurantRepository for MockRestaurantRepository {
        async fn create(&self, new: NewRestaurant) -> Result<Restaurant, ServiceError> {
            if self.fail_next_create.swap(false, Ordering::SeqCst) {
                return Err(ServiceError::Db("injected insert failure".into()));
            }
            let restaurant = Restaurant {
                id: Uuid::new_v4(),
                name: new.name,
                description: new.description,
                cuisine_type: new.cuisine_type,
                opening_hours: new.opening_hours,
                registration_date: new.registration_date,
                address: new.address,
                contact_information: new.contact_information,
                images: new.images,
                owner_id: new.owner_id,
                open: new.open,
            };
            self.rows.lock().unwrap().push(restaurant.clone());
            Ok(restaurant)
        }

        async fn save(&self, restaurant: Restaurant) -> Result<Restaurant, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows
                .iter_mut()
                .find(|r| r.id == restaurant.id)
                .ok_or_else(|| ServiceError::not_found("restaurant", restaurant.id))?;
            *slot = restaurant.clone();
            Ok(restaurant)
        }

        async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|r| r.id != id);
            Ok(rows.len() < before)
        }

        async fn find_all(&self) -> Result<Vec<Restaurant>, ServiceError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find_all_paginated(&self, opts: Pagination) -> Result<Vec<Restaurant>, ServiceError> {
            let (_, per_page) = opts.normalize();
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .skip(opts.offset() as usize)
                .take(per_page as usize)
                .cloned()
                .collect())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Restaurant>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
        }

        async fn find_by_owner(&self, owner_id: Uuid) -> Result<Option<Restaurant>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|r| r.owner_id == owner_id).cloned())
        }

        async fn search(&self, keyword: &str) -> Result<Vec<Restaurant>, ServiceError> {
            let matches = |field: &Option<String>| field.as_deref().is_some_and(|v| v.contains(keyword));
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|r| matches(&r.name) || matches(&r.cuisine_type) || matches(&r.description))
                .cloned()
                .collect())
        }
    }

    #[derive(Default)]
    pub struct MockAddressRepository {
        rows: Mutex<HashMap<Uuid, Address>>, // key: address id
    }

    impl MockAddressRepository {
        pub fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl AddressRepository for MockAddressRepository {
        async fn save(&self, input: AddressInput) -> Result<Address, ServiceError> {
            let city = input
                .city
                .filter(|c| !c.trim().is_empty())
                .ok_or_else(|| ServiceError::Validation("city required".into()))?;
            let address = Address {
                id: Uuid::new_v4(),
                street: input.street,
                city,
                state: input.state,
                postal_code: input.postal_code,
                country: input.country,
            };
            self.rows.lock().unwrap().insert(address.id, address.clone());
            Ok(address)
        }

        async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }
    }

    #[derive(Default)]
    pub struct MockUserRepository {
        users: Mutex<HashMap<Uuid, UserAccount>>, // key: user id
    }

    impl MockUserRepository {
        /// Seed a user for a test scenario.
        pub fn insert(&self, user: UserAccount) {
            self.users.lock().unwrap().insert(user.id, user);
        }

        pub fn favourites_of(&self, user_id: Uuid) -> Vec<RestaurantDto> {
            self.users
                .lock()
                .unwrap()
                .get(&user_id)
                .map(|u| u.favourites.clone())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<UserAccount>, ServiceError> {
            Ok(self.users.lock().unwrap().get(&id).cloned())
        }

        async fn save_favourites(&self, user_id: Uuid, favourites: Vec<RestaurantDto>) -> Result<(), ServiceError> {
            let mut users = self.users.lock().unwrap();
            let user = users
                .get_mut(&user_id)
                .ok_or_else(|| ServiceError::not_found("user", user_id))?;
            user.favourites = favourites;
            Ok(())
        }
    }
}
