//! [`api::Navigate`] over the Dioxus router.

use api::{NavMode, Navigate};
use dioxus::router::Navigator;

use crate::Route;

pub struct RouterBridge(pub Navigator);

impl Navigate for RouterBridge {
    fn navigate(&self, path: &str, mode: NavMode) {
        let route = match path.parse::<Route>() {
            Ok(route) => route,
            Err(e) => {
                tracing::warn!("Cannot navigate to {path}: {e}");
                return;
            }
        };
        match mode {
            NavMode::Push => {
                self.0.push(route);
            }
            NavMode::Replace => {
                self.0.replace(route);
            }
        }
    }

    fn back(&self) {
        self.0.go_back();
    }
}
