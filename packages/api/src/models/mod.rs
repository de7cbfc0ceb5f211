//! Typed records produced by the endpoint adapters.
//!
//! The backend is loose about field names and types: ids arrive as `id`,
//! `_id` or both, as strings or numbers; amounts arrive as numbers or numeric
//! strings. Records decode from a JSON object through [`lenient::Fields`],
//! which reads the first usable value among a list of candidate keys, so
//! every record exposes one type per field.

mod activity;
mod property;
mod tenancy;
mod user;

pub use activity::{Notification, WorkOrder};
pub use property::{Listing, Property};
pub use tenancy::{Due, Tenant, TenantDraft};
pub use user::{LoginGrant, Profile};

pub(crate) mod lenient {
    use serde_json::{Map, Value};

    fn scalar_to_string(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// A raw JSON object read by candidate keys, in order.
    pub struct Fields(Map<String, Value>);

    impl From<Map<String, Value>> for Fields {
        fn from(map: Map<String, Value>) -> Self {
            Fields(map)
        }
    }

    impl Fields {
        fn first<T>(&self, keys: &[&str], convert: impl Fn(&Value) -> Option<T>) -> Option<T> {
            keys.iter()
                .filter_map(|key| self.0.get(*key))
                .find_map(convert)
        }

        /// String or number id; a record without one is rejected.
        pub fn id(&self, keys: &[&str]) -> Result<String, String> {
            self.first(keys, scalar_to_string)
                .filter(|id| !id.trim().is_empty())
                .ok_or_else(|| format!("missing id (expected one of {})", keys.join(", ")))
        }

        /// String or number; missing or null is empty.
        pub fn text(&self, keys: &[&str]) -> String {
            self.opt_string(keys).unwrap_or_default()
        }

        /// Non-blank string or number.
        pub fn opt_string(&self, keys: &[&str]) -> Option<String> {
            self.first(keys, |v| scalar_to_string(v).filter(|s| !s.trim().is_empty()))
        }

        /// Number or numeric string (`"12,500"` included).
        pub fn opt_f64(&self, keys: &[&str]) -> Option<f64> {
            self.first(keys, |v| match v {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().replace(',', "").parse().ok(),
                _ => None,
            })
        }

        pub fn opt_u32(&self, keys: &[&str]) -> Option<u32> {
            self.first(keys, |v| match v {
                Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            })
        }

        /// Bool, `0`/`1`, or `"true"`/`"false"`; missing is `false`.
        pub fn flag(&self, keys: &[&str]) -> bool {
            self.first(keys, |v| match v {
                Value::Bool(b) => Some(*b),
                Value::Number(n) => n.as_i64().map(|n| n != 0),
                Value::String(s) => Some(s.eq_ignore_ascii_case("true")),
                _ => None,
            })
            .unwrap_or(false)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use serde_json::json;

        fn fields(value: Value) -> Fields {
            match value {
                Value::Object(map) => Fields::from(map),
                _ => panic!("not an object"),
            }
        }

        #[test]
        fn test_first_usable_key_wins() {
            let f = fields(json!({ "id": null, "_id": "64f1c", "name": "", "title": "Maple" }));
            assert_eq!(f.id(&["id", "_id"]).unwrap(), "64f1c");
            assert_eq!(f.text(&["name", "title"]), "Maple");
            assert!(f.id(&["propertyId"]).is_err());
        }

        #[test]
        fn test_numbers_and_flags() {
            let f = fields(json!({ "rent": "abc", "rentAmount": "12,500", "units": "8", "isRead": 0 }));
            assert_eq!(f.opt_f64(&["rent", "rentAmount"]), Some(12500.0));
            assert_eq!(f.opt_u32(&["units"]), Some(8));
            assert!(!f.flag(&["read", "isRead"]));
            assert!(!f.flag(&["missing"]));
        }
    }
}
