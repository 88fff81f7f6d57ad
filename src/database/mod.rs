use crate::domain::Record;
use anyhow::Result;
use async_trait::async_trait;

pub mod sqlite;

/// A typed positional query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i64),
    Real(f64),
    Text(String),
}

// a database can be shared between request handlers
// sqlx::Pool is thread safe
// generic row access, store specific implementations live next to this file ("sqlite.rs")
#[async_trait]
pub trait Database: Send + Sync {
    /// Run `query` with `params` bound in order and return every row it produces.
    async fn select(&self, query: &str, params: &[SqlParam]) -> Result<Vec<Record>>;
}
