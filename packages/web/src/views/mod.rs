mod layout;
pub use layout::{NotFound, Protected, Shell};

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod screens;
pub use screens::{
    Dues, Listings, Notifications, Profile, Properties, PropertyDetail, Tenants, WorkOrders,
};
