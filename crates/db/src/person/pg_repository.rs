use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgExecutor, PgPool, Row};

use crate::person::models::{Person, PersonFields};
use crate::person::repositories::PersonRepository;
use rollcall_common::error::{RollcallError, RollcallResult};

const SELECT_PEOPLE: &str =
    "select coalesce(name, '') as name, coalesce(nickname, '') as nickname, \
     coalesce(uuid, '') as uuid from person";

const SELECT_PERSON_BY_UUID: &str =
    "select coalesce(name, '') as name, coalesce(nickname, '') as nickname, \
     coalesce(uuid, '') as uuid from person where uuid = $1";

#[derive(Clone)]
pub struct PgPersonRepository {
    pool: PgPool,
}

impl PgPersonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_person_row(row: PgRow) -> RollcallResult<Person> {
        Ok(Person {
            uuid: row.try_get("uuid").map_err(db_error)?,
            name: row.try_get("name").map_err(db_error)?,
            nickname: row.try_get("nickname").map_err(db_error)?,
        })
    }

    async fn select_all<'e>(executor: impl PgExecutor<'e>) -> RollcallResult<Vec<Person>> {
        let rows = sqlx::query(SELECT_PEOPLE)
            .fetch_all(executor)
            .await
            .map_err(db_error)?;

        rows.into_iter().map(Self::map_person_row).collect()
    }
}

fn db_error(e: sqlx::Error) -> RollcallError {
    RollcallError::Database(e.to_string())
}

#[async_trait]
impl PersonRepository for PgPersonRepository {
    async fn list(&self) -> RollcallResult<Vec<Person>> {
        Self::select_all(&self.pool).await
    }

    async fn get_by_uuid(&self, uuid: &str) -> RollcallResult<Vec<Person>> {
        let rows = sqlx::query(SELECT_PERSON_BY_UUID)
            .bind(uuid)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        rows.into_iter().map(Self::map_person_row).collect()
    }

    async fn create(&self, person: Person) -> RollcallResult<Vec<Person>> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        sqlx::query("insert into person (name, nickname, uuid) values ($1, $2, $3)")
            .bind(&person.name)
            .bind(&person.nickname)
            .bind(&person.uuid)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        let people = Self::select_all(&mut *tx).await?;
        tx.commit().await.map_err(db_error)?;

        tracing::debug!(uuid = %person.uuid, "person created");
        Ok(people)
    }

    async fn update(&self, uuid: &str, fields: PersonFields) -> RollcallResult<Vec<Person>> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let result = sqlx::query("update person set name = $1, nickname = $2 where uuid = $3")
            .bind(&fields.name)
            .bind(&fields.nickname)
            .bind(uuid)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        let people = Self::select_all(&mut *tx).await?;
        tx.commit().await.map_err(db_error)?;

        tracing::debug!(uuid, rows_affected = result.rows_affected(), "person updated");
        Ok(people)
    }

    async fn delete(&self, uuid: &str) -> RollcallResult<Vec<Person>> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let result = sqlx::query("delete from person where uuid = $1")
            .bind(uuid)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        let people = Self::select_all(&mut *tx).await?;
        tx.commit().await.map_err(db_error)?;

        tracing::debug!(uuid, rows_affected = result.rows_affected(), "person deleted");
        Ok(people)
    }
}
