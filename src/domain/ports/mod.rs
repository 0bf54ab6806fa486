mod flavor_data_port;
mod notification_port;

pub use flavor_data_port::{FlavorDataPort, ProductQuery, ProductSort, TrendsQuery};
pub use notification_port::NotificationPort;
