use earcheck_core::model::AgeGroup;
use storage::repository::SessionStore;
use tracing::debug;

use crate::error::ProfileError;

/// Stores the user's self-reported age group.
///
/// Personalization only: nothing in scoring reads this back.
#[derive(Clone)]
pub struct ProfileService {
    store: SessionStore,
}

impl ProfileService {
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// Persist the selected age group.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError` if the store write fails.
    pub async fn select_age_group(&self, group: AgeGroup) -> Result<(), ProfileError> {
        self.store.set_age_group(group).await?;
        debug!(%group, "age group selected");
        Ok(())
    }

    /// The stored age group, if any.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError` if the store read fails.
    pub async fn age_group(&self) -> Result<Option<AgeGroup>, ProfileError> {
        Ok(self.store.age_group().await?)
    }
}
