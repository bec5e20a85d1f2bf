//! SQLite repository implementation.
//!
//! Implements the repository traits from `scheduleflow_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use scheduleflow_core::partner::{ContactId, Partner, PartnerContact, PartnerId};
use scheduleflow_core::storage::{
    PartnerContactRepository, PartnerRepository, RepositoryError, Result,
};

use super::conversions::{format_datetime, parse_datetime, row_to_contact, row_to_partner};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// One connection, driven on its own thread by `tokio-rusqlite`, serves
/// both partners and contacts. Each mutation runs in its own transaction.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// PartnerRepository implementation
// ============================================================================

#[async_trait]
impl PartnerRepository for SqliteRepository {
    async fn find_all_partners(&self) -> Result<Vec<Partner>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_PARTNERS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_partner).map_err(wrap_err)?;

                let mut partners = Vec::new();
                for row_result in rows {
                    partners.push(row_result.map_err(wrap_err)?);
                }
                Ok(partners)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Partner", "unknown"))
    }

    async fn find_partner_by_id(&self, id: PartnerId) -> Result<Option<Partner>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_PARTNER_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_partner) {
                    Ok(partner) => Ok(Some(partner)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Partner", id.to_string()))
    }

    async fn find_partners_by_name_contains(&self, name: &str) -> Result<Vec<Partner>> {
        let name = name.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_PARTNERS_BY_NAME_CONTAINS)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([&name], row_to_partner).map_err(wrap_err)?;

                let mut partners = Vec::new();
                for row_result in rows {
                    partners.push(row_result.map_err(wrap_err)?);
                }
                Ok(partners)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Partner", "unknown"))
    }

    async fn save_partner(&self, partner: &Partner) -> Result<Partner> {
        let mut saved = partner.clone();
        let id_label = partner
            .id
            .map_or_else(|| "unknown".to_string(), |id| id.to_string());
        let company_name = partner.company_name.clone();
        let main_phone = partner.main_phone.clone();
        let address = partner.address.clone();
        let description = partner.description.clone();
        let created_at = format_datetime(&partner.created_at);
        let updated_at = format_datetime(&partner.updated_at);
        let existing_id = partner.id;

        let (id, stored_created_at) = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let saved_row = match existing_id {
                    None => {
                        tx.execute(
                            schema::INSERT_PARTNER,
                            rusqlite::params![
                                company_name,
                                main_phone,
                                address,
                                description,
                                created_at,
                                updated_at
                            ],
                        )
                        .map_err(wrap_err)?;
                        (tx.last_insert_rowid(), None)
                    }
                    Some(id) => {
                        // No row back means no such partner, which maps to NotFound.
                        let stored_created_at = tx
                            .query_row(
                                schema::UPDATE_PARTNER,
                                rusqlite::params![
                                    id,
                                    company_name,
                                    main_phone,
                                    address,
                                    description,
                                    updated_at
                                ],
                                |row| parse_datetime(&row.get::<_, String>(0)?),
                            )
                            .map_err(wrap_err)?;
                        (id, Some(stored_created_at))
                    }
                };
                tx.commit().map_err(wrap_err)?;
                Ok(saved_row)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Partner", id_label))?;

        saved.id = Some(id);
        if let Some(created_at) = stored_created_at {
            saved.created_at = created_at;
        }
        Ok(saved)
    }

    async fn delete_partner_by_id(&self, id: PartnerId) -> Result<()> {
        // Contacts go with it through ON DELETE CASCADE.
        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_PARTNER, [id]).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Partner", id.to_string()))
    }

    async fn count_partners(&self) -> Result<u64> {
        self.conn
            .call(|conn| {
                let count: i64 = conn
                    .query_row(schema::COUNT_PARTNERS, [], |row| row.get(0))
                    .map_err(wrap_err)?;
                Ok(count as u64)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Partner", "unknown"))
    }
}

// ============================================================================
// PartnerContactRepository implementation
// ============================================================================

#[async_trait]
impl PartnerContactRepository for SqliteRepository {
    async fn find_contacts_by_partner_id(
        &self,
        partner_id: PartnerId,
    ) -> Result<Vec<PartnerContact>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CONTACTS_BY_PARTNER_ID)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([partner_id], row_to_contact)
                    .map_err(wrap_err)?;

                let mut contacts = Vec::new();
                for row_result in rows {
                    contacts.push(row_result.map_err(wrap_err)?);
                }
                Ok(contacts)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "PartnerContact", "unknown"))
    }

    async fn find_contact_by_id(&self, id: ContactId) -> Result<Option<PartnerContact>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_CONTACT_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_contact) {
                    Ok(contact) => Ok(Some(contact)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "PartnerContact", id.to_string()))
    }

    async fn save_contact(&self, contact: &PartnerContact) -> Result<PartnerContact> {
        let mut saved = contact.clone();
        let id_label = contact
            .id
            .map_or_else(|| "unknown".to_string(), |id| id.to_string());
        let partner_id = contact.partner_id;
        let name = contact.name.clone();
        let position = contact.position.clone();
        let department = contact.department.clone();
        let phone = contact.phone.clone();
        let email = contact.email.clone();
        let created_at = format_datetime(&contact.created_at);
        let updated_at = format_datetime(&contact.updated_at);
        let existing_id = contact.id;

        let (id, stored_created_at) = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let saved_row = match existing_id {
                    None => {
                        tx.execute(
                            schema::INSERT_CONTACT,
                            rusqlite::params![
                                partner_id,
                                name,
                                position,
                                department,
                                phone,
                                email,
                                created_at,
                                updated_at
                            ],
                        )
                        .map_err(wrap_err)?;
                        (tx.last_insert_rowid(), None)
                    }
                    Some(id) => {
                        let stored_created_at = tx
                            .query_row(
                                schema::UPDATE_CONTACT,
                                rusqlite::params![
                                    id,
                                    partner_id,
                                    name,
                                    position,
                                    department,
                                    phone,
                                    email,
                                    updated_at
                                ],
                                |row| parse_datetime(&row.get::<_, String>(0)?),
                            )
                            .map_err(wrap_err)?;
                        (id, Some(stored_created_at))
                    }
                };
                tx.commit().map_err(wrap_err)?;
                Ok(saved_row)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "PartnerContact", id_label))?;

        saved.id = Some(id);
        if let Some(created_at) = stored_created_at {
            saved.created_at = created_at;
        }
        Ok(saved)
    }

    async fn delete_contact_by_id(&self, id: ContactId) -> Result<()> {
        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_CONTACT, [id]).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "PartnerContact", id.to_string()))
    }
}
