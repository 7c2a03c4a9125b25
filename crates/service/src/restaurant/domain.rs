use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted address (business view).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: Uuid,
    pub street: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Address fields as supplied by a caller; nothing is persisted yet, so the
/// city is still optional here and validated by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressInput {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInformation {
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
}

/// Create/update request shape. All descriptive fields are optional; the
/// address is required (with a city) for creation only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRestaurantRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cuisine_type: Option<String>,
    pub opening_hours: Option<String>,
    pub address: Option<AddressInput>,
    pub contact_information: Option<ContactInformation>,
    pub images: Vec<String>,
}

/// Restaurant (business view) with its owned address embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub cuisine_type: Option<String>,
    pub opening_hours: Option<String>,
    pub registration_date: DateTime<Utc>,
    pub address: Address,
    pub contact_information: ContactInformation,
    pub images: Vec<String>,
    pub owner_id: Uuid,
    pub open: bool,
}

/// Fields for a restaurant that is about to be inserted; the address has
/// already been persisted at this point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRestaurant {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cuisine_type: Option<String>,
    pub opening_hours: Option<String>,
    pub registration_date: DateTime<Utc>,
    pub address: Address,
    pub contact_information: ContactInformation,
    pub images: Vec<String>,
    pub owner_id: Uuid,
    pub open: bool,
}

/// Denormalized favourites-list element. A snapshot taken when the favourite
/// was added; it does not follow later changes to the restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDto {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Vec<String>,
}

/// User (business view): only what the favourite toggle needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub favourites: Vec<RestaurantDto>,
}

/// Patch semantics for `update_restaurant`.
///
/// Two readings exist for partial updates: guard each assignment on the
/// *current* field value, or on the *incoming* one. Both are selectable so
/// callers can keep the legacy behavior where they depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Overwrite a field only when its current value is populated, even if
    /// the incoming value is absent (legacy behavior).
    OverwritePopulated,
    /// Apply exactly the fields the request provides (partial update).
    PatchProvided,
}

impl Default for UpdatePolicy {
    fn default() -> Self { UpdatePolicy::PatchProvided }
}

impl std::str::FromStr for UpdatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overwrite_populated" => Ok(UpdatePolicy::OverwritePopulated),
            "patch_provided" => Ok(UpdatePolicy::PatchProvided),
            other => Err(format!("unknown update policy: {}", other)),
        }
    }
}

impl Restaurant {
    /// Projection used as the favourites-list element.
    pub fn to_dto(&self) -> RestaurantDto {
        RestaurantDto {
            id: self.id,
            title: self.name.clone(),
            description: self.description.clone(),
            images: self.images.clone(),
        }
    }
}
