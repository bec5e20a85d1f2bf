use chrono::{DateTime, Utc};

/// Store-assigned identifier of a partner.
pub type PartnerId = i64;

/// Store-assigned identifier of a partner contact.
pub type ContactId = i64;

/// A business partner (company) tracked by the system.
///
/// `id` is `None` until the partner has been persisted; the store assigns it
/// on insert and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partner {
    pub id: Option<PartnerId>,
    pub company_name: String,
    pub main_phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Partner {
    /// Creates a new, not yet persisted partner.
    pub fn new(company_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            company_name: company_name.into(),
            main_phone: None,
            address: None,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the main phone number.
    pub fn with_main_phone(mut self, main_phone: impl Into<String>) -> Self {
        self.main_phone = Some(main_phone.into());
        self
    }

    /// Sets the address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a specific ID (useful for testing).
    pub fn with_id(mut self, id: PartnerId) -> Self {
        self.id = Some(id);
        self
    }
}

/// A contact person working for a [`Partner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerContact {
    pub id: Option<ContactId>,
    pub partner_id: PartnerId,
    pub name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PartnerContact {
    /// Creates a new, not yet persisted contact for the given partner.
    pub fn new(partner_id: PartnerId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            partner_id,
            name: name.into(),
            position: None,
            department: None,
            phone: None,
            email: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets a specific ID (useful for testing).
    pub fn with_id(mut self, id: ContactId) -> Self {
        self.id = Some(id);
        self
    }
}
