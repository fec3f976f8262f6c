pub mod lead;

pub use lead::Entity as LeadEntity;
