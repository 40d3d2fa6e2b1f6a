use crate::domain::Coordinate;
use crate::preferences::{KeyValueStore, PreferenceError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

const FAVORITES: &str = "favorites";
const LAST_LOCATION: &str = "last_location";

/// Typed access to a [`KeyValueStore`].
#[derive(Debug)]
pub struct Preferences<S> {
    store: S,
}

impl<S> Preferences<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Preferences { store }
    }

    pub async fn get<T>(&self, key: &str) -> Result<Option<T>, PreferenceError>
    where
        T: DeserializeOwned,
    {
        match self.store.get_value(key).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), PreferenceError>
    where
        T: Serialize,
    {
        self.store.set_value(key, serde_json::to_value(value)?).await
    }

    pub async fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        self.store.remove(key).await
    }

    /// Ids of the favorite books, in the order they were added.
    pub async fn favorites(&self) -> Result<Vec<String>, PreferenceError> {
        Ok(self.get(FAVORITES).await?.unwrap_or_default())
    }

    pub async fn is_favorite(&self, book_id: &str) -> Result<bool, PreferenceError> {
        Ok(self.favorites().await?.iter().any(|id| id == book_id))
    }

    /// Adds or removes the book, returns whether it is a favorite afterwards.
    pub async fn toggle_favorite(&self, book_id: &str) -> Result<bool, PreferenceError> {
        let mut favorites = self.favorites().await?;
        let is_favorite = match favorites.iter().position(|id| id == book_id) {
            Some(index) => {
                favorites.remove(index);
                false
            }
            None => {
                favorites.push(book_id.to_string());
                true
            }
        };

        self.set(FAVORITES, &favorites).await?;
        Ok(is_favorite)
    }

    pub async fn last_location(&self) -> Result<Option<Coordinate>, PreferenceError> {
        self.get(LAST_LOCATION).await
    }

    pub async fn remember_location(&self, coordinate: Coordinate) -> Result<(), PreferenceError> {
        self.set(LAST_LOCATION, &coordinate).await?;
        info!("💾 Remembered location {}", coordinate);
        Ok(())
    }
}
