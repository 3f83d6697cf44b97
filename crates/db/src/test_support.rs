//! Helpers for tests that run against a live Postgres named by
//! `TEST_DATABASE_URL`. Each pool gets its own schema so that tests
//! asserting on the whole table do not see each other's rows.

use sqlx::postgres::PgConnectOptions;
use sqlx::PgPool;
use uuid::Uuid;

use crate::create_pool;

pub const CREATE_PERSON_TABLE: &str =
    "create table if not exists person (name text, nickname text, uuid text)";

/// A pool bound to its own schema. Call [`TestDb::teardown`] at the end of
/// the test to drop the schema; a test that panics first leaves it behind.
pub struct TestDb {
    pub pool: PgPool,
    schema: String,
    base: PgConnectOptions,
}

/// Fresh schema holding an empty `person` table.
/// Returns `None` when `TEST_DATABASE_URL` is unset.
pub async fn isolated_db() -> Option<TestDb> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let base: PgConnectOptions = url.parse().expect("TEST_DATABASE_URL should parse");
    let schema = format!("rollcall_test_{}", Uuid::new_v4().simple());

    let admin = create_pool(base.clone(), 1)
        .await
        .expect("db should connect");
    sqlx::query(&format!("create schema {schema}"))
        .execute(&admin)
        .await
        .expect("create test schema");
    admin.close().await;

    let pool = create_pool(base.clone().options([("search_path", schema.as_str())]), 2)
        .await
        .expect("db should connect");
    sqlx::query(CREATE_PERSON_TABLE)
        .execute(&pool)
        .await
        .expect("create person table");

    Some(TestDb { pool, schema, base })
}

impl TestDb {
    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub async fn teardown(self) {
        self.pool.close().await;

        let admin = create_pool(self.base, 1)
            .await
            .expect("db should connect");
        sqlx::query(&format!("drop schema if exists {} cascade", self.schema))
            .execute(&admin)
            .await
            .expect("drop test schema");
        admin.close().await;
    }
}

pub async fn schema_exists(pool: &PgPool, schema: &str) -> bool {
    sqlx::query_scalar::<_, bool>(
        "select exists (select 1 from information_schema.schemata where schema_name = $1)",
    )
    .bind(schema)
    .fetch_one(pool)
    .await
    .expect("query schemata")
}

pub async fn insert_person(pool: &PgPool, name: &str, nickname: &str) -> String {
    let uuid = Uuid::new_v4().to_string();
    sqlx::query("insert into person (name, nickname, uuid) values ($1, $2, $3)")
        .bind(name)
        .bind(nickname)
        .bind(&uuid)
        .execute(pool)
        .await
        .expect("insert person");
    uuid
}

pub async fn count_people(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("select count(*) from person")
        .fetch_one(pool)
        .await
        .expect("count people")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn teardown_drops_the_schema() {
        let db = match isolated_db().await {
            Some(db) => db,
            None => return,
        };
        let schema = db.schema().to_owned();
        let observer = create_pool(db.base.clone(), 1)
            .await
            .expect("db should connect");
        assert!(schema_exists(&observer, &schema).await);

        db.teardown().await;

        assert!(!schema_exists(&observer, &schema).await);
        observer.close().await;
    }
}
