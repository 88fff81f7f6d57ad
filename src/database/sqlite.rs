use crate::config::RosterConfig;
use crate::database::{Database, SqlParam};
use crate::domain::Record;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{Value, json};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Column, Pool, Row, Sqlite, TypeInfo, ValueRef};

pub struct SqliteDatabase {
    pool: Pool<Sqlite>,
}

impl SqliteDatabase {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Open a pool against an existing database. Nothing is created.
    pub async fn connect(config: &RosterConfig) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .with_context(|| format!("Failed to create pool on {}", config.database_url))?;

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn select(&self, query: &str, params: &[SqlParam]) -> Result<Vec<Record>> {
        tracing::debug!(query, ?params, "running select");

        let mut statement = sqlx::query(query);
        for param in params {
            statement = match param {
                SqlParam::Int(val) => statement.bind(*val),
                SqlParam::Real(val) => statement.bind(*val),
                SqlParam::Text(val) => statement.bind(val.clone()),
            };
        }

        let rows = statement
            .fetch_all(&self.pool)
            .await
            .with_context(|| format!("Failed to run query: {}", query))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            records.push(row_to_record(row)?);
        }

        Ok(records)
    }
}

fn row_to_record(row: &SqliteRow) -> Result<Record> {
    let mut record = Record::new();
    for (idx, column) in row.columns().iter().enumerate() {
        record.insert(column.name().to_string(), column_value_to_json(row, idx)?);
    }
    Ok(record)
}

// decode by the storage class of the value itself, a column's declared type
// says nothing about what sqlite actually stored in it
fn column_value_to_json(row: &SqliteRow, idx: usize) -> Result<Value> {
    let raw = row.try_get_raw(idx)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let type_name = raw.type_info().name().to_owned();

    let value = match type_name.as_str() {
        "INTEGER" => json!(row.try_get::<i64, _>(idx)?),
        "REAL" => json!(row.try_get::<f64, _>(idx)?),
        "TEXT" => json!(row.try_get::<String, _>(idx)?),
        "BLOB" => {
            let bytes = row.try_get::<Vec<u8>, _>(idx)?;
            json!(String::from_utf8_lossy(&bytes))
        }
        // anything else, fall back to text
        _ => json!(row.try_get::<String, _>(idx)?),
    };

    Ok(value)
}
