use async_trait::async_trait;

use crate::person::models::{Person, PersonFields};
use rollcall_common::error::RollcallResult;

/// Storage for the `person` table.
///
/// Every mutation returns the full table as read back right after the
/// write, so callers can echo the current state to the client.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn list(&self) -> RollcallResult<Vec<Person>>;

    /// Zero or one rows; an unknown identifier is not an error.
    async fn get_by_uuid(&self, uuid: &str) -> RollcallResult<Vec<Person>>;

    async fn create(&self, person: Person) -> RollcallResult<Vec<Person>>;

    /// Rewrites name and nickname of the row with `uuid`. The identifier
    /// itself is immutable.
    async fn update(&self, uuid: &str, fields: PersonFields) -> RollcallResult<Vec<Person>>;

    async fn delete(&self, uuid: &str) -> RollcallResult<Vec<Person>>;
}
