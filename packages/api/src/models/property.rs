use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient::Fields;

/// A building or unit under management.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub rent: Option<f64>,
    pub units: Option<u32>,
    pub status: Option<String>,
}

impl TryFrom<Map<String, Value>> for Property {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let f = Fields::from(map);
        Ok(Property {
            id: f.id(&["id", "_id", "propertyId"])?,
            name: f.text(&["name", "propertyName", "title"]),
            address: f.opt_string(&["address"]),
            city: f.opt_string(&["city"]),
            rent: f.opt_f64(&["rent", "rentAmount"]),
            units: f.opt_u32(&["units", "totalUnits"]),
            status: f.opt_string(&["status"]),
        })
    }
}

/// A property offered for sale by a seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub price: Option<f64>,
    pub location: Option<String>,
    pub status: Option<String>,
}

impl TryFrom<Map<String, Value>> for Listing {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let f = Fields::from(map);
        Ok(Listing {
            id: f.id(&["id", "_id"])?,
            name: f.text(&["name", "title", "propertyName"]),
            price: f.opt_f64(&["price", "askingPrice"]),
            location: f.opt_string(&["location", "city"]),
            status: f.opt_string(&["status"]),
        })
    }
}
