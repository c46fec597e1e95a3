pub mod customer;
pub mod flight;
pub mod mission;
pub mod module;

pub use customer::Entity as Customer;
pub use flight::Entity as Flight;
pub use mission::Entity as Mission;
pub use mission::MissionStatus;
pub use module::Entity as Module;
