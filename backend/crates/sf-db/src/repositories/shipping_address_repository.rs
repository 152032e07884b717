//! One shipping address per user, keyed by `user_id`.

use crate::Result as DbErrorResult;

use sf_core::Address;

use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct AddressRow {
    pincode: String,
    address: String,
    city: String,
    state: String,
}

impl From<AddressRow> for Address {
    fn from(r: AddressRow) -> Self {
        Address {
            pincode: r.pincode,
            address: r.address,
            city: r.city,
            state: r.state,
        }
    }
}

pub struct ShippingAddressRepository {
    pool: SqlitePool,
}

impl ShippingAddressRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> DbErrorResult<Option<Address>> {
        let row = sqlx::query_as::<_, AddressRow>(
            r#"
                SELECT pincode, address, city, state
                FROM shipping_addresses
                WHERE user_id = ?
            "#,
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Address::from))
    }

    /// Insert or overwrite the user's address and return the stored row.
    ///
    /// A single statement, so concurrent writers resolve last-write-wins.
    pub async fn upsert(&self, user_id: Uuid, address: &Address) -> DbErrorResult<Address> {
        let row = sqlx::query_as::<_, AddressRow>(
            r#"
                INSERT INTO shipping_addresses (user_id, pincode, address, city, state, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
                ON CONFLICT(user_id) DO UPDATE SET
                    pincode = excluded.pincode,
                    address = excluded.address,
                    city = excluded.city,
                    state = excluded.state,
                    updated_at = excluded.updated_at
                RETURNING pincode, address, city, state
            "#,
        )
        .bind(user_id.to_string())
        .bind(&address.pincode)
        .bind(&address.address)
        .bind(&address.city)
        .bind(&address.state)
        .bind(Utc::now().timestamp())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }
}
