//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create all tables.
///
/// `foreign_keys` is a per-connection pragma, so it is part of the batch run
/// on every open.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Partners table
CREATE TABLE IF NOT EXISTS partners (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    company_name TEXT NOT NULL,
    main_phone TEXT,
    address TEXT,
    description TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Partner contacts table
CREATE TABLE IF NOT EXISTS partner_contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    partner_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    position TEXT,
    department TEXT,
    phone TEXT,
    email TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (partner_id) REFERENCES partners(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_partner_contacts_partner_id ON partner_contacts(partner_id);
"#;

// Partner queries
pub const INSERT_PARTNER: &str = r#"
INSERT INTO partners (company_name, main_phone, address, description, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const SELECT_ALL_PARTNERS: &str = r#"
SELECT id, company_name, main_phone, address, description, created_at, updated_at
FROM partners
ORDER BY id ASC
"#;

pub const SELECT_PARTNER_BY_ID: &str = r#"
SELECT id, company_name, main_phone, address, description, created_at, updated_at
FROM partners
WHERE id = ?1
"#;

// instr() is case-sensitive, LIKE is not for ASCII.
pub const SELECT_PARTNERS_BY_NAME_CONTAINS: &str = r#"
SELECT id, company_name, main_phone, address, description, created_at, updated_at
FROM partners
WHERE instr(company_name, ?1) > 0
ORDER BY id ASC
"#;

// Updates never touch created_at; RETURNING hands the stored value back.
pub const UPDATE_PARTNER: &str = r#"
UPDATE partners
SET company_name = ?2, main_phone = ?3, address = ?4, description = ?5, updated_at = ?6
WHERE id = ?1
RETURNING created_at
"#;

pub const DELETE_PARTNER: &str = r#"
DELETE FROM partners
WHERE id = ?1
"#;

pub const COUNT_PARTNERS: &str = r#"
SELECT COUNT(*) FROM partners
"#;

// Partner contact queries
pub const INSERT_CONTACT: &str = r#"
INSERT INTO partner_contacts (partner_id, name, position, department, phone, email, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

pub const SELECT_CONTACT_BY_ID: &str = r#"
SELECT id, partner_id, name, position, department, phone, email, created_at, updated_at
FROM partner_contacts
WHERE id = ?1
"#;

pub const SELECT_CONTACTS_BY_PARTNER_ID: &str = r#"
SELECT id, partner_id, name, position, department, phone, email, created_at, updated_at
FROM partner_contacts
WHERE partner_id = ?1
ORDER BY id ASC
"#;

pub const UPDATE_CONTACT: &str = r#"
UPDATE partner_contacts
SET partner_id = ?2, name = ?3, position = ?4, department = ?5, phone = ?6, email = ?7, updated_at = ?8
WHERE id = ?1
RETURNING created_at
"#;

pub const DELETE_CONTACT: &str = r#"
DELETE FROM partner_contacts
WHERE id = ?1
"#;
