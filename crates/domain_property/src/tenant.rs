//! Tenants

use serde::{Deserialize, Serialize};

use core_kernel::TenantId;

/// A person renting one or more units
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    /// Unique identifier
    pub id: TenantId,
    /// Full name
    pub name: String,
    /// Phone number
    pub phone: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// National identity card number
    pub identity_card: Option<String>,
}

/// Data for creating a new tenant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTenant {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub identity_card: Option<String>,
}

impl NewTenant {
    /// Creates a new tenant record with the required fields
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: None,
            email: None,
            identity_card: None,
        }
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the identity card number
    pub fn with_identity_card(mut self, identity_card: impl Into<String>) -> Self {
        self.identity_card = Some(identity_card.into());
        self
    }
}

/// Partial update for a tenant; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TenantPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub identity_card: Option<String>,
}

impl TenantPatch {
    /// Returns true if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.identity_card.is_none()
    }
}
