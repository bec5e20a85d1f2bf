//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use chrono::{DateTime, Utc};
use rusqlite::Row;

use scheduleflow_core::partner::{Partner, PartnerContact};

/// Convert a SQLite row to a Partner.
///
/// Expected columns: id, company_name, main_phone, address, description, created_at, updated_at
pub fn row_to_partner(row: &Row) -> rusqlite::Result<Partner> {
    let id: i64 = row.get(0)?;
    let company_name: String = row.get(1)?;
    let main_phone: Option<String> = row.get(2)?;
    let address: Option<String> = row.get(3)?;
    let description: Option<String> = row.get(4)?;
    let created_at: String = row.get(5)?;
    let updated_at: String = row.get(6)?;

    Ok(Partner {
        id: Some(id),
        company_name,
        main_phone,
        address,
        description,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Convert a SQLite row to a PartnerContact.
///
/// Expected columns: id, partner_id, name, position, department, phone, email, created_at, updated_at
pub fn row_to_contact(row: &Row) -> rusqlite::Result<PartnerContact> {
    let id: i64 = row.get(0)?;
    let partner_id: i64 = row.get(1)?;
    let name: String = row.get(2)?;
    let position: Option<String> = row.get(3)?;
    let department: Option<String> = row.get(4)?;
    let phone: Option<String> = row.get(5)?;
    let email: Option<String> = row.get(6)?;
    let created_at: String = row.get(7)?;
    let updated_at: String = row.get(8)?;

    Ok(PartnerContact {
        id: Some(id),
        partner_id,
        name,
        position,
        department,
        phone,
        email,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Parse a datetime from RFC 3339 string.
pub fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        let dt = DateTime::parse_from_rfc3339("2025-03-01T09:15:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let formatted = format_datetime(&dt);
        assert!(formatted.starts_with("2025-03-01"));
        assert!(formatted.contains("09:15:00"));
    }

    #[test]
    fn test_datetime_survives_formatting() {
        let now = Utc::now();
        let parsed = parse_datetime(&format_datetime(&now)).unwrap();
        assert_eq!(parsed, now);
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn test_row_to_partner_reads_nullable_columns() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let partner = conn
            .query_row(
                "SELECT 3, 'Acme', NULL, 'Seoul', NULL, '2025-03-01T09:15:00+00:00', '2025-03-02T09:15:00+00:00'",
                [],
                row_to_partner,
            )
            .unwrap();

        assert_eq!(partner.id, Some(3));
        assert_eq!(partner.company_name, "Acme");
        assert_eq!(partner.main_phone, None);
        assert_eq!(partner.address.as_deref(), Some("Seoul"));
        assert!(partner.updated_at > partner.created_at);
    }

    #[test]
    fn test_row_to_contact() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let contact = conn
            .query_row(
                "SELECT 8, 3, 'Kim', 'Manager', NULL, NULL, 'kim@acme.test', '2025-03-01T09:15:00+00:00', '2025-03-01T09:15:00+00:00'",
                [],
                row_to_contact,
            )
            .unwrap();

        assert_eq!(contact.id, Some(8));
        assert_eq!(contact.partner_id, 3);
        assert_eq!(contact.position.as_deref(), Some("Manager"));
        assert_eq!(contact.department, None);
        assert_eq!(contact.email.as_deref(), Some("kim@acme.test"));
    }
}
