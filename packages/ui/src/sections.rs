//! Which screens each role's dashboard offers.

use store::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Properties,
    Tenants,
    Dues,
    WorkOrders,
    Listings,
    Notifications,
    Profile,
}

impl Section {
    /// Path segment under the role prefix.
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Properties => "properties",
            Section::Tenants => "tenants",
            Section::Dues => "dues",
            Section::WorkOrders => "work-orders",
            Section::Listings => "listings",
            Section::Notifications => "notifications",
            Section::Profile => "profile",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Properties => "Properties",
            Section::Tenants => "Tenants",
            Section::Dues => "Dues",
            Section::WorkOrders => "Work orders",
            Section::Listings => "Listings",
            Section::Notifications => "Notifications",
            Section::Profile => "Profile",
        }
    }
}

/// Sections shown in the navbar and dashboard for `role`, in display order.
pub fn sections_for(role: Role) -> &'static [Section] {
    use Section::*;
    match role {
        Role::Landlord => &[Properties, Tenants, Dues, Notifications, Profile],
        Role::Tenant => &[Dues, Notifications, Profile],
        Role::PropertyManager => &[Properties, Tenants, Dues, WorkOrders, Notifications, Profile],
        Role::SubOwner => &[Properties, Dues, Notifications, Profile],
        Role::RegionalManager => &[Properties, WorkOrders, Notifications, Profile],
        Role::Seller => &[Listings, Notifications, Profile],
        Role::Worker => &[WorkOrders, Notifications, Profile],
    }
}

pub fn offers(role: Role, section: Section) -> bool {
    sections_for(role).contains(&section)
}
