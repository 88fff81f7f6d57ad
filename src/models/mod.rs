use crate::database::{Database, SqlParam};
use crate::domain::{Limit, Record};
use anyhow::{Result, anyhow};
use derive_more::derive::Display;
use std::str::FromStr;
use std::sync::Arc;

/// The tables this service knows how to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Entity {
    #[display("employees")]
    Employees,
    #[display("customers")]
    Customers,
}

impl Entity {
    pub fn table(&self) -> &'static str {
        match self {
            Entity::Employees => "employees",
            Entity::Customers => "customers",
        }
    }

    pub fn id_column(&self) -> &'static str {
        match self {
            Entity::Employees => "employeeNumber",
            Entity::Customers => "customerNumber",
        }
    }

    // table and column are fixed literals, only the limit is a parameter
    fn list_top_n_query(&self) -> String {
        format!(
            "SELECT * FROM {} ORDER BY {} ASC LIMIT ?",
            self.table(),
            self.id_column()
        )
    }
}

impl FromStr for Entity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "employees" => Ok(Entity::Employees),
            "customers" => Ok(Entity::Customers),
            other => Err(anyhow!(
                "Unknown entity {}, expected \"employees\" or \"customers\"",
                other
            )),
        }
    }
}

pub struct EntityModel {
    db: Arc<dyn Database>,
    entity: Entity,
}

impl EntityModel {
    pub fn new(db: Arc<dyn Database>, entity: Entity) -> Self {
        Self { db, entity }
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    /// First `limit` rows ordered by ascending identifier.
    pub async fn list_top_n(&self, limit: Limit) -> Result<Vec<Record>> {
        self.db
            .select(
                &self.entity.list_top_n_query(),
                &[SqlParam::Int(limit.get())],
            )
            .await
    }
}
