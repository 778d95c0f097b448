//! List-item persistence.

use crate::entity::ListItem;
use crate::error::AppError;
use sqlx::PgPool;

const SELECT_ITEM: &str = r#"SELECT id, "listId" AS list_id, entry FROM list_item WHERE id = $1"#;
const INSERT_ITEM: &str = r#"INSERT INTO list_item ("listId", entry) VALUES ($1, $2)
    RETURNING id, "listId" AS list_id, entry"#;

pub struct ItemService;

impl ItemService {
    pub async fn fetch(pool: &PgPool, id: i64) -> Result<Option<ListItem>, AppError> {
        tracing::debug!(id, "fetch item");
        let item = sqlx::query_as::<_, ListItem>(SELECT_ITEM)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(item)
    }

    /// Insert an item under an existing list. The caller verifies the list.
    pub async fn create(pool: &PgPool, list_id: i64, entry: &str) -> Result<ListItem, AppError> {
        tracing::debug!(list_id, "create item");
        let item = sqlx::query_as::<_, ListItem>(INSERT_ITEM)
            .bind(list_id)
            .bind(entry)
            .fetch_one(pool)
            .await?;
        Ok(item)
    }

    /// Write back a patched item's entry.
    pub async fn save(pool: &PgPool, item: &ListItem) -> Result<(), AppError> {
        let Some(id) = item.id else {
            return Err(AppError::BadRequest("item has no id".into()));
        };
        tracing::debug!(id, "save item");
        sqlx::query("UPDATE list_item SET entry = $2 WHERE id = $1")
            .bind(id)
            .bind(&item.entry)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), AppError> {
        tracing::debug!(id, "delete item");
        sqlx::query("DELETE FROM list_item WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
