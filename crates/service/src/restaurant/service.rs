use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::domain::{
    Address, AddressInput, CreateRestaurantRequest, NewRestaurant, Restaurant, RestaurantDto,
    UpdatePolicy,
};
use super::repository::{AddressRepository, RestaurantRepository, UserRepository};
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Restaurant service configuration
#[derive(Clone, Debug, Default)]
pub struct RestaurantConfig {
    pub update_policy: UpdatePolicy,
}

impl RestaurantConfig {
    /// Read the policy from the configs crate, rejecting unknown names.
    pub fn from_app_config(cfg: &configs::AppConfig) -> Result<Self, ServiceError> {
        let update_policy = cfg
            .service
            .update_policy
            .parse::<UpdatePolicy>()
            .map_err(ServiceError::Validation)?;
        Ok(Self { update_policy })
    }
}

/// Restaurant business service independent of web framework.
///
/// The sole business-logic authority between external callers and the three
/// stores; every durable state change goes through the repository traits.
pub struct RestaurantService<R: RestaurantRepository, A: AddressRepository, U: UserRepository> {
    restaurants: Arc<R>,
    addresses: Arc<A>,
    users: Arc<U>,
    cfg: RestaurantConfig,
}

impl<R: RestaurantRepository, A: AddressRepository, U: UserRepository> RestaurantService<R, A, U> {
    pub fn new(restaurants: Arc<R>, addresses: Arc<A>, users: Arc<U>, cfg: RestaurantConfig) -> Self {
        Self { restaurants, addresses, users, cfg }
    }

    /// Register a new restaurant for `owner_id`.
    ///
    /// The address is persisted first; if the restaurant insert then fails,
    /// the already-written address is deleted again so the two-step create
    /// leaves nothing behind.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::restaurant::domain::{AddressInput, CreateRestaurantRequest};
    /// use service::restaurant::repository::mock::{MockAddressRepository, MockRestaurantRepository, MockUserRepository};
    /// use service::restaurant::service::{RestaurantConfig, RestaurantService};
    /// let svc = RestaurantService::new(
    ///     Arc::new(MockRestaurantRepository::default()),
    ///     Arc::new(MockAddressRepository::default()),
    ///     Arc::new(MockUserRepository::default()),
    ///     RestaurantConfig::default(),
    /// );
    /// let request = CreateRestaurantRequest {
    ///     name: Some("Cafe X".into()),
    ///     address: Some(AddressInput { city: Some("Paris".into()), ..Default::default() }),
    ///     ..Default::default()
    /// };
    /// let created = tokio_test::block_on(svc.create_restaurant(request, uuid::Uuid::new_v4())).unwrap();
    /// assert_eq!(created.address.city, "Paris");
    /// assert!(!created.open);
    /// ```
    #[instrument(skip(self, request), fields(owner_id = %owner_id))]
    pub async fn create_restaurant(
        &self,
        request: CreateRestaurantRequest,
        owner_id: Uuid,
    ) -> Result<Restaurant, ServiceError> {
        let address_input = validate_address(request.address.as_ref())?;

        if self.restaurants.find_by_owner(owner_id).await?.is_some() {
            return Err(ServiceError::Conflict(format!(
                "owner {} already has a restaurant",
                owner_id
            )));
        }

        let address = self.addresses.save(address_input).await?;
        let new = NewRestaurant {
            name: request.name,
            description: request.description,
            cuisine_type: request.cuisine_type,
            opening_hours: request.opening_hours,
            registration_date: Utc::now(),
            address: address.clone(),
            contact_information: request.contact_information.unwrap_or_default(),
            images: request.images,
            owner_id,
            open: false,
        };

        match self.restaurants.create(new).await {
            Ok(created) => {
                info!(restaurant_id = %created.id, owner_id = %owner_id, "restaurant_created");
                Ok(created)
            }
            Err(e) => {
                // Compensate the address written in step one.
                if let Err(cleanup) = self.addresses.delete(address.id).await {
                    warn!(address_id = %address.id, error = %cleanup, "address_compensation_failed");
                }
                Err(e)
            }
        }
    }

    /// Apply `request` to an existing restaurant under the configured
    /// [`UpdatePolicy`]. The registration date is never touched.
    #[instrument(skip(self, request), fields(restaurant_id = %restaurant_id))]
    pub async fn update_restaurant(
        &self,
        restaurant_id: Uuid,
        request: CreateRestaurantRequest,
    ) -> Result<Restaurant, ServiceError> {
        let existing = self.find_restaurant_by_id(restaurant_id).await?;
        let mut updated = existing.clone();

        match self.cfg.update_policy {
            UpdatePolicy::OverwritePopulated => {
                // Guard on the current value, incoming value taken as-is.
                if existing.name.is_some() {
                    updated.name = request.name;
                }
                if existing.description.is_some() {
                    updated.description = request.description;
                }
                if existing.cuisine_type.is_some() {
                    updated.cuisine_type = request.cuisine_type;
                }
                if existing.opening_hours.is_some() {
                    updated.opening_hours = request.opening_hours;
                }
            }
            UpdatePolicy::PatchProvided => {
                if request.name.is_some() {
                    updated.name = request.name;
                }
                if request.description.is_some() {
                    updated.description = request.description;
                }
                if request.cuisine_type.is_some() {
                    updated.cuisine_type = request.cuisine_type;
                }
                if request.opening_hours.is_some() {
                    updated.opening_hours = request.opening_hours;
                }
            }
        }
        // An absent address leaves the current one untouched under either
        // policy; a restaurant must never lose its address.
        if let Some(input) = request.address {
            apply_address(&mut updated.address, input);
        }

        let saved = self.restaurants.save(updated).await?;
        info!(restaurant_id = %restaurant_id, "restaurant_updated");
        Ok(saved)
    }

    /// Permanently remove a restaurant.
    #[instrument(skip(self), fields(restaurant_id = %restaurant_id))]
    pub async fn delete_restaurant(&self, restaurant_id: Uuid) -> Result<(), ServiceError> {
        if !self.restaurants.delete(restaurant_id).await? {
            return Err(ServiceError::not_found("restaurant", restaurant_id));
        }
        info!(restaurant_id = %restaurant_id, "restaurant_deleted");
        Ok(())
    }

    /// Every restaurant, in store order.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, ServiceError> {
        self.restaurants.find_all().await
    }

    /// Page through restaurants ordered by registration date.
    pub async fn list_restaurants_paginated(&self, opts: Pagination) -> Result<Vec<Restaurant>, ServiceError> {
        self.restaurants.find_all_paginated(opts).await
    }

    /// Keyword search, delegated entirely to the store.
    pub async fn search_restaurants(&self, keyword: &str) -> Result<Vec<Restaurant>, ServiceError> {
        self.restaurants.search(keyword.trim()).await
    }

    pub async fn find_restaurant_by_id(&self, restaurant_id: Uuid) -> Result<Restaurant, ServiceError> {
        self.restaurants
            .find_by_id(restaurant_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("restaurant", restaurant_id))
    }

    /// The single restaurant owned by `owner_id` (ownership is one-to-one).
    pub async fn find_restaurant_by_owner(&self, owner_id: Uuid) -> Result<Restaurant, ServiceError> {
        self.restaurants
            .find_by_owner(owner_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("restaurant not found with owner id {}", owner_id)))
    }

    /// Toggle a restaurant in the user's favourites: add a snapshot if it is
    /// absent, drop every entry with that id if it is present. The new
    /// sequence is computed from the fetched state and written back in a
    /// single store call. Returns the snapshot built from the restaurant's
    /// current fields either way.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::restaurant::domain::{AddressInput, CreateRestaurantRequest, UserAccount};
    /// use service::restaurant::repository::mock::{MockAddressRepository, MockRestaurantRepository, MockUserRepository};
    /// use service::restaurant::service::{RestaurantConfig, RestaurantService};
    /// let users = Arc::new(MockUserRepository::default());
    /// let user_id = uuid::Uuid::new_v4();
    /// users.insert(UserAccount { id: user_id, email: "u@e.com".into(), full_name: "U".into(), favourites: vec![] });
    /// let svc = RestaurantService::new(
    ///     Arc::new(MockRestaurantRepository::default()),
    ///     Arc::new(MockAddressRepository::default()),
    ///     users.clone(),
    ///     RestaurantConfig::default(),
    /// );
    /// let request = CreateRestaurantRequest {
    ///     name: Some("Cafe X".into()),
    ///     address: Some(AddressInput { city: Some("Paris".into()), ..Default::default() }),
    ///     ..Default::default()
    /// };
    /// let created = tokio_test::block_on(svc.create_restaurant(request, uuid::Uuid::new_v4())).unwrap();
    /// let dto = tokio_test::block_on(svc.toggle_favourite(created.id, user_id)).unwrap();
    /// assert_eq!(dto.title.as_deref(), Some("Cafe X"));
    /// assert_eq!(users.favourites_of(user_id).len(), 1);
    /// ```
    #[instrument(skip(self), fields(restaurant_id = %restaurant_id, user_id = %user_id))]
    pub async fn toggle_favourite(
        &self,
        restaurant_id: Uuid,
        user_id: Uuid,
    ) -> Result<RestaurantDto, ServiceError> {
        let restaurant = self.find_restaurant_by_id(restaurant_id).await?;
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("user", user_id))?;

        let dto = restaurant.to_dto();
        let was_favourite = user.favourites.iter().any(|f| f.id == restaurant_id);
        let favourites: Vec<RestaurantDto> = if was_favourite {
            user.favourites.into_iter().filter(|f| f.id != restaurant_id).collect()
        } else {
            let mut favourites = user.favourites;
            favourites.push(dto.clone());
            favourites
        };

        self.users.save_favourites(user_id, favourites).await?;
        info!(
            restaurant_id = %restaurant_id,
            user_id = %user_id,
            favourite = !was_favourite,
            "favourite_toggled"
        );
        Ok(dto)
    }

    /// Flip the open/closed flag.
    #[instrument(skip(self), fields(restaurant_id = %restaurant_id))]
    pub async fn update_restaurant_status(&self, restaurant_id: Uuid) -> Result<Restaurant, ServiceError> {
        let mut restaurant = self.find_restaurant_by_id(restaurant_id).await?;
        restaurant.open = !restaurant.open;
        let saved = self.restaurants.save(restaurant).await?;
        info!(restaurant_id = %restaurant_id, open = saved.open, "restaurant_status_updated");
        Ok(saved)
    }
}

/// A create request must carry an address with a non-empty city.
fn validate_address(address: Option<&AddressInput>) -> Result<AddressInput, ServiceError> {
    let input = address.ok_or_else(|| ServiceError::Validation("address is required".into()))?;
    match input.city.as_deref().map(str::trim) {
        Some(city) if !city.is_empty() => Ok(input.clone()),
        _ => Err(ServiceError::Validation("address city is required".into())),
    }
}

/// Patch the existing address in place, keeping its identity. An empty city
/// is ignored so a persisted address never loses its city.
fn apply_address(address: &mut Address, input: AddressInput) {
    if let Some(city) = input.city.filter(|c| !c.trim().is_empty()) {
        address.city = city;
    }
    if input.street.is_some() {
        address.street = input.street;
    }
    if input.state.is_some() {
        address.state = input.state;
    }
    if input.postal_code.is_some() {
        address.postal_code = input.postal_code;
    }
    if input.country.is_some() {
        address.country = input.country;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restaurant::domain::{ContactInformation, UserAccount};
    use crate::restaurant::repository::mock::{
        MockAddressRepository, MockRestaurantRepository, MockUserRepository,
    };

    type MockService =
        RestaurantService<MockRestaurantRepository, MockAddressRepository, MockUserRepository>;

    struct Fixture {
        restaurants: Arc<MockRestaurantRepository>,
        addresses: Arc<MockAddressRepository>,
        users: Arc<MockUserRepository>,
        svc: MockService,
    }

    fn fixture_with_policy(update_policy: UpdatePolicy) -> Fixture {
        let restaurants = Arc::new(MockRestaurantRepository::default());
        let addresses = Arc::new(MockAddressRepository::default());
        let users = Arc::new(MockUserRepository::default());
        let svc = RestaurantService::new(
            restaurants.clone(),
            addresses.clone(),
            users.clone(),
            RestaurantConfig { update_policy },
        );
        Fixture { restaurants, addresses, users, svc }
    }

    fn fixture() -> Fixture {
        fixture_with_policy(UpdatePolicy::PatchProvided)
    }

    fn paris_request(name: &str) -> CreateRestaurantRequest {
        CreateRestaurantRequest {
            name: Some(name.to_string()),
            description: Some("small corner cafe".into()),
            cuisine_type: Some("french".into()),
            opening_hours: Some("Mon-Sun 9:00-22:00".into()),
            address: Some(AddressInput {
                street: Some("1 Rue de Rivoli".into()),
                city: Some("Paris".into()),
                ..Default::default()
            }),
            contact_information: Some(ContactInformation {
                email: Some("hello@cafex.fr".into()),
                ..Default::default()
            }),
            images: vec!["front.jpg".into(), "menu.jpg".into()],
        }
    }

    fn seed_user(f: &Fixture) -> Uuid {
        let user_id = Uuid::new_v4();
        f.users.insert(UserAccount {
            id: user_id,
            email: "diner@example.com".into(),
            full_name: "Diner".into(),
            favourites: vec![],
        });
        user_id
    }

    #[tokio::test]
    async fn create_returns_persisted_restaurant() {
        let f = fixture();
        let before = Utc::now();
        let created = f.svc.create_restaurant(paris_request("Cafe X"), Uuid::new_v4()).await.unwrap();

        assert!(!created.id.is_nil());
        assert_eq!(created.name.as_deref(), Some("Cafe X"));
        assert_eq!(created.address.city, "Paris");
        assert!(created.registration_date >= before);
        assert!(!created.open);
        assert_eq!(created.images.len(), 2);
        assert_eq!(f.addresses.len(), 1);
        assert_eq!(f.restaurants.len(), 1);
    }

    #[tokio::test]
    async fn create_without_city_persists_nothing() {
        let f = fixture();
        let mut request = paris_request("Cafe X");
        request.address = Some(AddressInput { street: Some("somewhere".into()), ..Default::default() });

        let err = f.svc.create_restaurant(request, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(f.addresses.is_empty());
        assert!(f.restaurants.is_empty());
    }

    #[tokio::test]
    async fn create_without_address_is_rejected() {
        let f = fixture();
        let mut request = paris_request("Cafe X");
        request.address = None;

        let err = f.svc.create_restaurant(request, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn blank_city_counts_as_missing() {
        let f = fixture();
        let mut request = paris_request("Cafe X");
        request.address = Some(AddressInput { city: Some("   ".into()), ..Default::default() });

        let err = f.svc.create_restaurant(request, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(f.addresses.is_empty());
    }

    #[tokio::test]
    async fn second_restaurant_for_same_owner_conflicts() {
        let f = fixture();
        let owner_id = Uuid::new_v4();
        f.svc.create_restaurant(paris_request("Cafe X"), owner_id).await.unwrap();

        let err = f.svc.create_restaurant(paris_request("Cafe Y"), owner_id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(f.restaurants.len(), 1);
    }

    #[tokio::test]
    async fn failed_restaurant_insert_compensates_address() {
        let f = fixture();
        f.restaurants.fail_next_create();

        let err = f.svc.create_restaurant(paris_request("Cafe X"), Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
        assert!(f.addresses.is_empty(), "compensation must remove the persisted address");
        assert!(f.restaurants.is_empty());
    }

    #[tokio::test]
    async fn find_by_id_is_idempotent() {
        let f = fixture();
        let created = f.svc.create_restaurant(paris_request("Cafe X"), Uuid::new_v4()).await.unwrap();

        let first = f.svc.find_restaurant_by_id(created.id).await.unwrap();
        let second = f.svc.find_restaurant_by_id(created.id).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn find_by_id_unknown_carries_id_in_message() {
        let f = fixture();
        let missing = Uuid::new_v4();

        let err = f.svc.find_restaurant_by_id(missing).await.unwrap_err();
        match err {
            ServiceError::NotFound(msg) => assert!(msg.contains(&missing.to_string())),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn delete_then_find_is_not_found() {
        let f = fixture();
        let created = f.svc.create_restaurant(paris_request("Cafe X"), Uuid::new_v4()).await.unwrap();

        f.svc.delete_restaurant(created.id).await.unwrap();
        let err = f.svc.find_restaurant_by_id(created.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_unknown_is_not_found() {
        let f = fixture();
        let err = f.svc.delete_restaurant(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn find_by_owner_returns_the_owned_restaurant() {
        let f = fixture();
        let owner_id = Uuid::new_v4();
        let created = f.svc.create_restaurant(paris_request("Cafe X"), owner_id).await.unwrap();

        let found = f.svc.find_restaurant_by_owner(owner_id).await.unwrap();
        assert_eq!(found.id, created.id);

        let err = f.svc.find_restaurant_by_owner(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn status_flip_twice_restores_original() {
        let f = fixture();
        let created = f.svc.create_restaurant(paris_request("Cafe X"), Uuid::new_v4()).await.unwrap();
        assert!(!created.open);

        let once = f.svc.update_restaurant_status(created.id).await.unwrap();
        assert!(once.open);
        let twice = f.svc.update_restaurant_status(created.id).await.unwrap();
        assert_eq!(twice.open, created.open);
    }

    #[tokio::test]
    async fn toggle_favourite_adds_then_removes() {
        let f = fixture();
        let user_id = seed_user(&f);
        let created = f.svc.create_restaurant(paris_request("Cafe X"), Uuid::new_v4()).await.unwrap();

        let dto = f.svc.toggle_favourite(created.id, user_id).await.unwrap();
        assert_eq!(dto.id, created.id);
        assert_eq!(dto.title.as_deref(), Some("Cafe X"));
        assert_eq!(f.users.favourites_of(user_id).len(), 1);

        let dto_again = f.svc.toggle_favourite(created.id, user_id).await.unwrap();
        assert_eq!(dto_again.id, created.id);
        assert_eq!(f.users.favourites_of(user_id).len(), 0);
    }

    #[tokio::test]
    async fn toggle_favourite_returns_current_snapshot_on_removal() {
        let f = fixture();
        let user_id = seed_user(&f);
        let created = f.svc.create_restaurant(paris_request("Cafe X"), Uuid::new_v4()).await.unwrap();
        f.svc.toggle_favourite(created.id, user_id).await.unwrap();

        // The restaurant changes after the favourite was stored.
        let mut patch = CreateRestaurantRequest::default();
        patch.name = Some("Cafe X Deluxe".into());
        f.svc.update_restaurant(created.id, patch).await.unwrap();

        let removal_dto = f.svc.toggle_favourite(created.id, user_id).await.unwrap();
        assert_eq!(removal_dto.title.as_deref(), Some("Cafe X Deluxe"));
        assert!(f.users.favourites_of(user_id).is_empty());
    }

    #[tokio::test]
    async fn toggle_favourite_unknown_restaurant_or_user() {
        let f = fixture();
        let user_id = seed_user(&f);
        let created = f.svc.create_restaurant(paris_request("Cafe X"), Uuid::new_v4()).await.unwrap();

        let err = f.svc.toggle_favourite(Uuid::new_v4(), user_id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let err = f.svc.toggle_favourite(created.id, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_patch_provided_keeps_absent_fields() {
        let f = fixture();
        let created = f.svc.create_restaurant(paris_request("Cafe X"), Uuid::new_v4()).await.unwrap();

        let mut patch = CreateRestaurantRequest::default();
        patch.name = Some("Cafe X Deluxe".into());
        let updated = f.svc.update_restaurant(created.id, patch).await.unwrap();

        assert_eq!(updated.name.as_deref(), Some("Cafe X Deluxe"));
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.cuisine_type, created.cuisine_type);
        assert_eq!(updated.registration_date, created.registration_date);
    }

    #[tokio::test]
    async fn update_overwrite_populated_reproduces_legacy_guard() {
        let f = fixture_with_policy(UpdatePolicy::OverwritePopulated);
        let mut request = paris_request("Cafe X");
        request.opening_hours = None; // currently unpopulated field
        let created = f.svc.create_restaurant(request, Uuid::new_v4()).await.unwrap();

        let mut update = CreateRestaurantRequest::default();
        update.opening_hours = Some("Mon-Fri 8:00-18:00".into());
        let updated = f.svc.update_restaurant(created.id, update).await.unwrap();

        // Unpopulated field is skipped even though the request provides it;
        // populated fields take the absent incoming value.
        assert_eq!(updated.opening_hours, None);
        assert_eq!(updated.name, None);
        assert_eq!(updated.description, None);
    }

    #[tokio::test]
    async fn update_patches_address_in_place() {
        let f = fixture();
        let created = f.svc.create_restaurant(paris_request("Cafe X"), Uuid::new_v4()).await.unwrap();

        let mut patch = CreateRestaurantRequest::default();
        patch.address = Some(AddressInput { city: Some("Lyon".into()), ..Default::default() });
        let updated = f.svc.update_restaurant(created.id, patch).await.unwrap();

        assert_eq!(updated.address.id, created.address.id);
        assert_eq!(updated.address.city, "Lyon");
        assert_eq!(updated.address.street, created.address.street);
    }

    #[tokio::test]
    async fn update_unknown_restaurant_is_not_found() {
        let f = fixture();
        let err = f.svc.update_restaurant(Uuid::new_v4(), paris_request("X")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn search_matches_name_cuisine_and_description() {
        let f = fixture();
        f.svc.create_restaurant(paris_request("Cafe X"), Uuid::new_v4()).await.unwrap();

        let mut other = paris_request("Trattoria");
        other.description = Some("wood-fired pizza".into());
        other.cuisine_type = Some("italian".into());
        f.svc.create_restaurant(other, Uuid::new_v4()).await.unwrap();

        assert_eq!(f.svc.search_restaurants("Cafe").await.unwrap().len(), 1);
        assert_eq!(f.svc.search_restaurants("italian").await.unwrap().len(), 1);
        assert_eq!(f.svc.search_restaurants("pizza").await.unwrap().len(), 1);
        assert!(f.svc.search_restaurants("sushi").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_returns_every_restaurant() {
        let f = fixture();
        f.svc.create_restaurant(paris_request("Cafe X"), Uuid::new_v4()).await.unwrap();
        f.svc.create_restaurant(paris_request("Cafe Y"), Uuid::new_v4()).await.unwrap();

        assert_eq!(f.svc.list_restaurants().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn list_paginated_slices_pages() {
        let f = fixture();
        for i in 0..5 {
            f.svc
                .create_restaurant(paris_request(&format!("Cafe {}", i)), Uuid::new_v4())
                .await
                .unwrap();
        }

        let page1 = f.svc.list_restaurants_paginated(Pagination { page: 1, per_page: 2 }).await.unwrap();
        let page3 = f.svc.list_restaurants_paginated(Pagination { page: 3, per_page: 2 }).await.unwrap();
        assert_eq!(page1.len(), 2);
        assert_eq!(page3.len(), 1);
    }

    #[tokio::test]
    async fn config_policy_parsing_round_trips() {
        let mut app = configs::AppConfig::default();
        app.service.update_policy = "overwrite_populated".into();
        let cfg = RestaurantConfig::from_app_config(&app).unwrap();
        assert_eq!(cfg.update_policy, UpdatePolicy::OverwritePopulated);

        app.service.update_policy = "upsert".into();
        assert!(RestaurantConfig::from_app_config(&app).is_err());
    }
}
