//! Games service.

use std::sync::Arc;

use async_trait::async_trait;
use atelier::catalog::{Game, GameData, GameUuid};
use mockall::automock;

use crate::{
    domain::games::errors::GamesServiceError,
    store::{
        CatalogStore, Direction, Filter, Query, Table,
        rows::{decode, decode_all, decode_first, encode},
    },
};

#[derive(Clone)]
pub struct StoreGamesService {
    store: Arc<dyn CatalogStore>,
}

impl StoreGamesService {
    #[must_use]
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    async fn select(&self, query: Query) -> Result<Vec<Game>, GamesServiceError> {
        let rows = self
            .store
            .select(Table::Games, query.order_by("created_at", Direction::Desc))
            .await?;

        Ok(decode_all(rows)?)
    }
}

#[async_trait]
impl GamesService for StoreGamesService {
    async fn list_games(&self) -> Result<Vec<Game>, GamesServiceError> {
        self.select(Query::new()).await
    }

    async fn list_enabled_games(&self) -> Result<Vec<Game>, GamesServiceError> {
        self.select(Query::new().eq("is_enabled", true)).await
    }

    async fn create_game(&self, game: GameData) -> Result<Game, GamesServiceError> {
        let row = self.store.insert(Table::Games, encode(&game)?).await?;

        Ok(decode(row)?)
    }

    async fn update_game(&self, game: GameUuid, data: GameData) -> Result<Game, GamesServiceError> {
        let rows = self
            .store
            .update(Table::Games, Filter::eq("id", game), encode(&data)?)
            .await?;

        Ok(decode_first(rows)?)
    }

    async fn delete_game(&self, game: GameUuid) -> Result<(), GamesServiceError> {
        let deleted = self
            .store
            .delete(Table::Games, Filter::eq("id", game))
            .await?;

        if deleted == 0 {
            return Err(GamesServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait GamesService: Send + Sync {
    /// Retrieves all games, newest first, including hidden ones.
    async fn list_games(&self) -> Result<Vec<Game>, GamesServiceError>;

    /// Retrieves the games shown in the public showcase.
    async fn list_enabled_games(&self) -> Result<Vec<Game>, GamesServiceError>;

    /// Creates a game.
    async fn create_game(&self, game: GameData) -> Result<Game, GamesServiceError>;

    /// Replaces the editable fields of a game.
    async fn update_game(&self, game: GameUuid, data: GameData) -> Result<Game, GamesServiceError>;

    /// Deletes a game.
    async fn delete_game(&self, game: GameUuid) -> Result<(), GamesServiceError>;
}
