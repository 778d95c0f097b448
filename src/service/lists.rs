//! List persistence. Every operation takes the pool explicitly; writes that
//! touch more than one row run in a transaction.

use crate::entity::{List, ListItem};
use crate::error::AppError;
use sqlx::PgPool;

#[derive(sqlx::FromRow)]
struct ListRow {
    id: i64,
    name: String,
}

const SELECT_ITEMS: &str =
    r#"SELECT id, "listId" AS list_id, entry FROM list_item WHERE "listId" = $1 ORDER BY id"#;
const INSERT_ITEM: &str = r#"INSERT INTO list_item ("listId", entry) VALUES ($1, $2)
    RETURNING id, "listId" AS list_id, entry"#;

pub struct ListService;

impl ListService {
    /// Fetch a list with its ordered items. None when absent.
    pub async fn fetch(pool: &PgPool, id: i64) -> Result<Option<List>, AppError> {
        tracing::debug!(id, "fetch list");
        let Some(row) = sqlx::query_as::<_, ListRow>("SELECT id, name FROM list WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let items = sqlx::query_as::<_, ListItem>(SELECT_ITEMS)
            .bind(row.id)
            .fetch_all(pool)
            .await?;
        Ok(Some(List {
            id: Some(row.id),
            name: row.name,
            items,
        }))
    }

    pub async fn exists(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM list WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Insert the list row, stamp the item back-references with the new id,
    /// then insert the item rows. One transaction.
    pub async fn create(pool: &PgPool, mut list: List) -> Result<List, AppError> {
        tracing::debug!(name = %list.name, items = list.items.len(), "create list");
        let mut tx = pool.begin().await?;
        let row =
            sqlx::query_as::<_, ListRow>("INSERT INTO list (name) VALUES ($1) RETURNING id, name")
                .bind(&list.name)
                .fetch_one(&mut *tx)
                .await?;
        list.id = Some(row.id);
        list.adopt_items();

        let mut saved = Vec::with_capacity(list.items.len());
        for item in &list.items {
            let item = sqlx::query_as::<_, ListItem>(INSERT_ITEM)
                .bind(row.id)
                .bind(&item.entry)
                .fetch_one(&mut *tx)
                .await?;
            saved.push(item);
        }
        tx.commit().await?;

        list.items = saved;
        Ok(list)
    }

    /// Write back a patched list: the name plus every owned item's entry.
    pub async fn save(pool: &PgPool, list: &List) -> Result<(), AppError> {
        let Some(id) = list.id else {
            return Err(AppError::BadRequest("list has no id".into()));
        };
        tracing::debug!(id, "save list");
        let mut tx = pool.begin().await?;
        sqlx::query("UPDATE list SET name = $2 WHERE id = $1")
            .bind(id)
            .bind(&list.name)
            .execute(&mut *tx)
            .await?;
        for item in &list.items {
            let Some(item_id) = item.id else { continue };
            sqlx::query(r#"UPDATE list_item SET entry = $2 WHERE id = $1 AND "listId" = $3"#)
                .bind(item_id)
                .bind(&item.entry)
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    /// Delete by id; the foreign key cascades to the owned items.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), AppError> {
        tracing::debug!(id, "delete list");
        sqlx::query("DELETE FROM list WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
