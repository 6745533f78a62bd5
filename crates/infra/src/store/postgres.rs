//! Postgres-backed stock and supplier queries.
//!
//! Expected schema (owned by inventory management / supplier onboarding):
//!
//! ```sql
//! CREATE TABLE category (
//!     code  TEXT PRIMARY KEY,
//!     label TEXT NOT NULL
//! );
//! CREATE TABLE stock_item (
//!     id             UUID PRIMARY KEY,
//!     name           TEXT NOT NULL,
//!     category_code  TEXT NOT NULL REFERENCES category (code),
//!     units_in_stock BIGINT NOT NULL,
//!     reorder_level  BIGINT NOT NULL
//! );
//! CREATE TABLE supplier (
//!     id    UUID PRIMARY KEY,
//!     name  VARCHAR(40) NOT NULL,
//!     email VARCHAR(60) NOT NULL UNIQUE
//! );
//! CREATE TABLE supplier_category (
//!     supplier_id   UUID NOT NULL REFERENCES supplier (id),
//!     category_code TEXT NOT NULL REFERENCES category (code),
//!     position      INT  NOT NULL,
//!     PRIMARY KEY (supplier_id, category_code)
//! );
//! ```
//!
//! Ids are UUIDv7, so ordering by id is creation order.

use std::sync::Arc;

use sqlx::{FromRow, PgPool, Row};
use tracing::{instrument, Span};
use uuid::Uuid;

use restock_core::{DomainError, EntityId};
use restock_inventory::{Category, CategoryCode, StockItem, StockItemId};
use restock_parties::{ContactAddress, Supplier, SupplierId};

use super::{StockQuery, StoreError, SupplierDirectory};

/// Postgres-backed catalog.
///
/// Uses the SQLx connection pool, which is `Send + Sync`; the catalog can be
/// shared across request handlers behind an `Arc`.
#[derive(Debug, Clone)]
pub struct PostgresCatalog {
    pool: Arc<PgPool>,
}

impl PostgresCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;
        Ok(Self::new(pool))
    }
}

#[async_trait::async_trait]
impl StockQuery for PostgresCatalog {
    #[instrument(skip(self), fields(item_count), err)]
    async fn items_below_reorder_level(&self) -> Result<Vec<StockItem>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT
                i.id,
                i.name,
                i.units_in_stock,
                i.reorder_level,
                c.code  AS category_code,
                c.label AS category_label
            FROM stock_item i
            JOIN category c ON c.code = i.category_code
            WHERE i.units_in_stock < i.reorder_level
            ORDER BY i.id ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("items_below_reorder_level", e))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let row = StockItemRow::from_row(&row)
                .map_err(|e| map_sqlx_error("items_below_reorder_level", e))?;
            items.push(row.into_item()?);
        }

        Span::current().record("item_count", items.len());
        Ok(items)
    }
}

#[async_trait::async_trait]
impl SupplierDirectory for PostgresCatalog {
    #[instrument(skip(self), fields(supplier_count), err)]
    async fn suppliers(&self) -> Result<Vec<Supplier>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT
                s.id    AS supplier_id,
                s.name  AS supplier_name,
                s.email AS supplier_email,
                c.code  AS category_code,
                c.label AS category_label
            FROM supplier s
            LEFT JOIN supplier_category sc ON sc.supplier_id = s.id
            LEFT JOIN category c ON c.code = sc.category_code
            ORDER BY s.id ASC, sc.position ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("suppliers", e))?;

        let mut flat = Vec::with_capacity(rows.len());
        for row in rows {
            let row = SupplierCategoryRow::from_row(&row).map_err(|e| map_sqlx_error("suppliers", e))?;
            flat.push(row);
        }

        let suppliers = assemble_suppliers(flat)?;
        Span::current().record("supplier_count", suppliers.len());
        Ok(suppliers)
    }
}

fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => StoreError::query(
            operation,
            format!("database error: {}", db_err.message()),
        ),
        sqlx::Error::ColumnNotFound(col) => {
            StoreError::InvalidRecord(format!("{operation}: missing column {col}"))
        }
        sqlx::Error::ColumnDecode { index, source } => {
            StoreError::InvalidRecord(format!("{operation}: cannot decode column {index}: {source}"))
        }
        other => StoreError::query(operation, other.to_string()),
    }
}

fn invalid(what: &str, err: DomainError) -> StoreError {
    StoreError::InvalidRecord(format!("{what}: {err}"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StockItemRow {
    id: Uuid,
    name: String,
    units_in_stock: i64,
    reorder_level: i64,
    category_code: String,
    category_label: String,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for StockItemRow {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(StockItemRow {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            units_in_stock: row.try_get("units_in_stock")?,
            reorder_level: row.try_get("reorder_level")?,
            category_code: row.try_get("category_code")?,
            category_label: row.try_get("category_label")?,
        })
    }
}

impl StockItemRow {
    fn into_item(self) -> Result<StockItem, StoreError> {
        let code = CategoryCode::new(self.category_code)
            .map_err(|e| invalid(&format!("stock item {}", self.id), e))?;
        StockItem::new(
            StockItemId::new(EntityId::from_uuid(self.id)),
            self.name,
            Category::new(code, self.category_label),
            self.units_in_stock,
            self.reorder_level,
        )
        .map_err(|e| invalid(&format!("stock item {}", self.id), e))
    }
}

/// One supplier × declared-category row (category columns are NULL for a
/// supplier that declares nothing).
#[derive(Debug, Clone, PartialEq, Eq)]
struct SupplierCategoryRow {
    supplier_id: Uuid,
    supplier_name: String,
    supplier_email: String,
    category_code: Option<String>,
    category_label: Option<String>,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for SupplierCategoryRow {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(SupplierCategoryRow {
            supplier_id: row.try_get("supplier_id")?,
            supplier_name: row.try_get("supplier_name")?,
            supplier_email: row.try_get("supplier_email")?,
            category_code: row.try_get("category_code")?,
            category_label: row.try_get("category_label")?,
        })
    }
}

struct PartialSupplier {
    id: Uuid,
    name: String,
    email: String,
    categories: Vec<Category>,
}

impl PartialSupplier {
    fn finish(self) -> Result<Supplier, StoreError> {
        let what = format!("supplier {}", self.id);
        let contact = ContactAddress::parse(self.email).map_err(|e| invalid(&what, e))?;
        Supplier::new(
            SupplierId::new(EntityId::from_uuid(self.id)),
            self.name,
            contact,
            self.categories,
        )
        .map_err(|e| invalid(&what, e))
    }
}

/// Fold flat join rows (ordered by supplier, then category position) into
/// suppliers, keeping both orders.
fn assemble_suppliers(rows: Vec<SupplierCategoryRow>) -> Result<Vec<Supplier>, StoreError> {
    let mut suppliers = Vec::new();
    let mut current: Option<PartialSupplier> = None;

    for row in rows {
        let continues = current.as_ref().is_some_and(|p| p.id == row.supplier_id);
        if !continues {
            if let Some(done) = current.take() {
                suppliers.push(done.finish()?);
            }
            current = Some(PartialSupplier {
                id: row.supplier_id,
                name: row.supplier_name,
                email: row.supplier_email,
                categories: Vec::new(),
            });
        }

        if let (Some(code), Some(label), Some(partial)) =
            (row.category_code, row.category_label, current.as_mut())
        {
            let code = CategoryCode::new(code)
                .map_err(|e| invalid(&format!("supplier {}", partial.id), e))?;
            partial.categories.push(Category::new(code, label));
        }
    }

    if let Some(done) = current {
        suppliers.push(done.finish()?);
    }
    Ok(suppliers)
}
