//! User and role models
//!
//! Six fixed role types gate the dashboard screens. The permission table
//! here is authorization metadata threaded through to callers; the editing
//! sessions themselves never consult it.

use serde::{Deserialize, Serialize};

/// The six dashboard roles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Storekeeper,
    Purchaser,
    Salesperson,
    Captain,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Manager => write!(f, "Manager"),
            Role::Storekeeper => write!(f, "Storekeeper"),
            Role::Purchaser => write!(f, "Purchaser"),
            Role::Salesperson => write!(f, "Salesperson"),
            Role::Captain => write!(f, "Captain"),
        }
    }
}

/// A permission granting access to a resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Permission {
    pub resource: Resource,
    pub actions: Vec<Action>,
}

/// Resources the dashboard manages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Vendor,
    Product,
    Category,
    Inventory,
    Purchase,
    Sale,
    Transfer,
    Shipment,
    Vehicle,
    Employee,
    Customer,
}

impl Resource {
    pub const ALL: [Resource; 11] = [
        Resource::Vendor,
        Resource::Product,
        Resource::Category,
        Resource::Inventory,
        Resource::Purchase,
        Resource::Sale,
        Resource::Transfer,
        Resource::Shipment,
        Resource::Vehicle,
        Resource::Employee,
        Resource::Customer,
    ];
}

/// Actions that can be performed on resources
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::View, Action::Create, Action::Edit, Action::Delete];
}

fn all_actions() -> Vec<Action> {
    Action::ALL.to_vec()
}

fn perm(resource: Resource, actions: &[Action]) -> Permission {
    Permission {
        resource,
        actions: actions.to_vec(),
    }
}

/// Permission table per role
pub fn role_permissions(role: Role) -> Vec<Permission> {
    use Action::*;
    use Resource::*;

    match role {
        Role::Admin => Resource::ALL
            .into_iter()
            .map(|r| Permission {
                resource: r,
                actions: all_actions(),
            })
            .collect(),
        Role::Manager => Resource::ALL
            .into_iter()
            .map(|r| perm(r, &[View, Create, Edit]))
            .collect(),
        Role::Storekeeper => vec![
            perm(Inventory, &[View, Create, Edit]),
            perm(Transfer, &[View, Create, Edit, Delete]),
            perm(Product, &[View]),
            perm(Category, &[View]),
        ],
        Role::Purchaser => vec![
            perm(Purchase, &[View, Create, Edit, Delete]),
            perm(Vendor, &[View, Create, Edit]),
            perm(Product, &[View, Create, Edit]),
            perm(Category, &[View, Create, Edit]),
            perm(Inventory, &[View]),
        ],
        Role::Salesperson => vec![
            perm(Sale, &[View, Create, Edit, Delete]),
            perm(Customer, &[View, Create, Edit]),
            perm(Product, &[View]),
            perm(Inventory, &[View]),
        ],
        Role::Captain => vec![
            perm(Shipment, &[View, Edit]),
            perm(Vehicle, &[View]),
            perm(Sale, &[View]),
        ],
    }
}

/// Check whether a role may perform an action on a resource
pub fn can(role: Role, resource: Resource, action: Action) -> bool {
    role_permissions(role)
        .iter()
        .any(|p| p.resource == resource && p.actions.contains(&action))
}
