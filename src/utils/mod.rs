pub mod csv_handler;
pub mod ip;
pub mod json_value;

pub use ip::{UNKNOWN_IP, client_ip, client_ip_from_headers};
