use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Connection string of a private in-memory SQLite database.
const IN_MEMORY_SQLITE: &str = "sqlite::memory:";

/// Test context owning the database of a single test.
///
/// Each context gets its own in-memory SQLite database, so tests never observe each other's
/// rows. The database is dropped with the context.
pub struct TestContext {
    /// Connection to the in-memory database.
    ///
    /// `None` only for a context created with [`TestContext::empty`].
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a context without a database, for tests that only need fixtures.
    pub fn empty() -> Self {
        Self { db: None }
    }

    /// Creates a context connected to a fresh in-memory database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Connected context with an empty schema
    /// - `Err(TestError::Database)` - SQLite connection failed
    pub async fn in_memory() -> Result<Self, TestError> {
        let db = Database::connect(IN_MEMORY_SQLITE).await?;

        Ok(Self { db: Some(db) })
    }

    /// Executes the given CREATE TABLE statements in order.
    ///
    /// Connects first if the context was created without a database.
    ///
    /// # Returns
    /// - `Ok(())` - All tables created
    /// - `Err(TestError::Database)` - Connection or a statement failed
    pub async fn create_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect(IN_MEMORY_SQLITE).await?);
        }

        if let Some(db) = &self.db {
            for stmt in &stmts {
                db.execute(stmt).await?;
            }
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::empty()
    }
}
