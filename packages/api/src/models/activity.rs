use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient::Fields;

/// A message addressed to the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Notification {
    pub id: String,
    pub name: String,
    pub message: Option<String>,
    pub created_at: Option<String>,
    pub read: bool,
}

impl TryFrom<Map<String, Value>> for Notification {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let f = Fields::from(map);
        Ok(Notification {
            id: f.id(&["id", "_id"])?,
            name: f.text(&["name", "title", "subject"]),
            message: f.opt_string(&["message", "body"]),
            created_at: f.opt_string(&["created_at", "createdAt"]),
            read: f.flag(&["read", "isRead"]),
        })
    }
}

/// A maintenance job assigned to a worker or raised by a manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct WorkOrder {
    pub id: String,
    pub name: String,
    pub property: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub scheduled_for: Option<String>,
}

impl TryFrom<Map<String, Value>> for WorkOrder {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let f = Fields::from(map);
        Ok(WorkOrder {
            id: f.id(&["id", "_id"])?,
            name: f.text(&["name", "title", "task"]),
            property: f.opt_string(&["property", "propertyName"]),
            status: f.opt_string(&["status"]),
            priority: f.opt_string(&["priority"]),
            scheduled_for: f.opt_string(&["scheduled_for", "scheduledFor", "date"]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_notification_read_flag() {
        let n: Notification = serde_json::from_value(json!({
            "_id": "n1",
            "title": "Rent reminder",
            "isRead": 1,
        }))
        .unwrap();
        assert!(n.read);
        assert_eq!(n.name, "Rent reminder");

        let n: Notification = serde_json::from_value(json!({ "id": "n2" })).unwrap();
        assert!(!n.read);
    }

    #[test]
    fn test_notification_with_title_and_name() {
        let n: Notification = serde_json::from_value(json!({
            "_id": "n3",
            "id": "n3",
            "name": "Lease renewal",
            "title": "Lease renewal due",
            "createdAt": "2024-03-12T09:30:00Z",
        }))
        .unwrap();
        assert_eq!(n.name, "Lease renewal");
        assert_eq!(n.created_at.as_deref(), Some("2024-03-12T09:30:00Z"));
    }

    #[test]
    fn test_work_order_aliases() {
        let w: WorkOrder = serde_json::from_value(json!({
            "id": 12,
            "task": "Fix leaking tap",
            "priority": "high",
        }))
        .unwrap();
        assert_eq!(w.id, "12");
        assert_eq!(w.name, "Fix leaking tap");
        assert_eq!(w.priority.as_deref(), Some("high"));
    }
}
