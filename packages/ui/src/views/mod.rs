mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod properties;
pub use properties::PropertiesView;

mod property_detail;
pub use property_detail::PropertyDetailView;

mod tenants;
pub use tenants::TenantsView;

mod dues;
pub use dues::{outstanding, DuesSummary, DuesView};

mod notifications;
pub use notifications::NotificationsView;

mod profile;
pub use profile::ProfileView;

mod work_orders;
pub use work_orders::WorkOrdersView;

mod listings;
pub use listings::ListingsView;
