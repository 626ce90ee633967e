//! Logistics & Inventory Dashboard - Client
//!
//! The application logic behind the dashboard screens: a typed gateway to
//! the per-entity REST collections and the editing sessions for the
//! transactional documents (purchases, sales, transfers, shipments).
//!
//! The presentation layer renders whatever these types hold; nothing here
//! touches the DOM, and nothing here decides what a role is allowed to do.

pub mod auth;
pub mod config;
pub mod error;
pub mod gateway;
pub mod options;
pub mod session;

pub use auth::AuthContext;
pub use config::Config;
pub use error::{ClientError, ClientResult};
pub use gateway::{Collection, Gateway};
pub use session::{
    ItemEditor, PurchaseSession, SaleSession, SessionMode, ShipmentSession, TransferSession,
};
