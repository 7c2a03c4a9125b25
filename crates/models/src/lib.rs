pub mod errors;
pub mod db;
pub mod address;
pub mod user_account;
pub mod restaurant;
