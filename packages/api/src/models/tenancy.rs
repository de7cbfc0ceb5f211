use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient::Fields;

/// A tenant occupying one of the caller's properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub property: Option<String>,
    pub rent: Option<f64>,
}

impl TryFrom<Map<String, Value>> for Tenant {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let f = Fields::from(map);
        Ok(Tenant {
            id: f.id(&["id", "_id", "tenantId"])?,
            name: f.text(&["name", "tenantName", "fullName"]),
            email: f.opt_string(&["email"]),
            phone: f.opt_string(&["phone", "mobile"]),
            property: f.opt_string(&["property", "propertyName"]),
            rent: f.opt_f64(&["rent", "rentAmount"]),
        })
    }
}

/// An outstanding or settled charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Due {
    pub id: String,
    /// Who owes it (tenant name) or what it is for.
    pub name: String,
    pub amount: Option<f64>,
    pub due_date: Option<String>,
    pub status: Option<String>,
    pub property: Option<String>,
}

impl TryFrom<Map<String, Value>> for Due {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let f = Fields::from(map);
        Ok(Due {
            id: f.id(&["id", "_id"])?,
            name: f.text(&["name", "tenantName", "title"]),
            amount: f.opt_f64(&["amount", "dueAmount"]),
            due_date: f.opt_string(&["due_date", "dueDate"]),
            status: f.opt_string(&["status"]),
            property: f.opt_string(&["property", "propertyName"]),
        })
    }
}

impl Due {
    pub fn is_paid(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("paid"))
    }
}

/// Local form draft for adding a tenant. Owned by the form until submit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_id: String,
    pub rent: String,
}

impl TenantDraft {
    /// First problem that keeps the draft from being submitted.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err("Please enter a valid email");
        }
        if self.property_id.trim().is_empty() {
            return Err("Choose a property");
        }
        if !self.rent.trim().is_empty() && self.rent.trim().parse::<f64>().is_err() {
            return Err("Rent must be a number");
        }
        Ok(())
    }
}
