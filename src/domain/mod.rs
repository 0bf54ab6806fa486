//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Notification value type.
pub mod notification;
/// Port definitions.
pub mod ports;
/// Screen identifiers.
pub mod screen;
/// Serde utilities.
pub mod serde_utils;

pub use entities::{Category, Product, ProductId, ProductStatus, WizardForm};
pub use errors::ApiError;
pub use notification::{Notification, NotificationLevel};
pub use ports::{FlavorDataPort, NotificationPort};
pub use screen::Screen;
