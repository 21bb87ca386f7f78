//! Property repository.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use rentfolio_shared::types::{OwnerId, PropertyId};
use rentfolio_shared::{AppError, AppResult};

use crate::db::{Database, Property};

/// Input form for creating a property.
#[derive(Debug, Clone)]
pub struct NewProperty {
    /// Owning tenant.
    pub owner_id: OwnerId,
    /// Display title.
    pub title: String,
    /// Assessed value for property-tax computation.
    pub assessed_value: Option<Decimal>,
    /// Property tax rate in percent.
    pub tax_rate_percent: Option<Decimal>,
}

/// Owner-scoped property access.
#[derive(Debug, Clone)]
pub struct PropertyRepository {
    db: Arc<Database>,
}

impl PropertyRepository {
    /// Creates a repository over the shared database.
    #[must_use]
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Inserts a new property.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if the store is unavailable.
    pub fn create(&self, input: NewProperty) -> AppResult<Property> {
        let property = Property {
            id: PropertyId::new(),
            owner_id: input.owner_id,
            title: input.title,
            assessed_value: input.assessed_value,
            tax_rate_percent: input.tax_rate_percent,
            created_at: Utc::now(),
        };
        self.db.write()?.properties.push(property.clone());
        Ok(property)
    }

    /// Fetches one property.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for missing or foreign-owned rows.
    pub fn get(&self, owner_id: OwnerId, id: PropertyId) -> AppResult<Property> {
        self.db
            .read()?
            .properties
            .iter()
            .find(|p| p.id == id && p.owner_id == owner_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("property {id}")))
    }

    /// Lists the owner's properties, newest first.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if the store is unavailable.
    pub fn list(&self, owner_id: OwnerId) -> AppResult<Vec<Property>> {
        let mut properties: Vec<Property> = self
            .db
            .read()?
            .properties
            .iter()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect();
        properties.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(properties)
    }

    /// Number of properties the owner holds; drives equal budget splits.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if the store is unavailable.
    pub fn count(&self, owner_id: OwnerId) -> AppResult<u32> {
        let n = self
            .db
            .read()?
            .properties
            .iter()
            .filter(|p| p.owner_id == owner_id)
            .count();
        Ok(u32::try_from(n).unwrap_or(u32::MAX))
    }

    /// Replaces a property's mutable fields.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for missing or foreign-owned rows.
    pub fn update(&self, owner_id: OwnerId, updated: Property) -> AppResult<()> {
        let mut tables = self.db.write()?;
        let row = tables
            .properties
            .iter_mut()
            .find(|p| p.id == updated.id && p.owner_id == owner_id)
            .ok_or_else(|| AppError::NotFound(format!("property {}", updated.id)))?;
        row.title = updated.title;
        row.assessed_value = updated.assessed_value;
        row.tax_rate_percent = updated.tax_rate_percent;
        Ok(())
    }

    /// Deletes a property.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for missing or foreign-owned rows.
    pub fn delete(&self, owner_id: OwnerId, id: PropertyId) -> AppResult<()> {
        let mut tables = self.db.write()?;
        let before = tables.properties.len();
        tables
            .properties
            .retain(|p| !(p.id == id && p.owner_id == owner_id));
        if tables.properties.len() == before {
            return Err(AppError::NotFound(format!("property {id}")));
        }
        Ok(())
    }
}
