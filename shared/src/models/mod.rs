//! Domain models for the Logistics & Inventory Dashboard

mod customer;
mod employee;
mod inventory;
mod line_item;
mod product;
mod purchase;
mod sale;
mod shipment;
mod transfer;
mod user;
mod vehicle;
mod vendor;

pub use customer::*;
pub use employee::*;
pub use inventory::*;
pub use line_item::*;
pub use product::*;
pub use purchase::*;
pub use sale::*;
pub use shipment::*;
pub use transfer::*;
pub use user::*;
pub use vehicle::*;
pub use vendor::*;
