pub mod service_card;

pub use service_card::ServiceCard;
