mod current;
mod fixed;
mod ip_lookup;
mod position;
mod provider;

pub use current::get_current_location;
pub use fixed::FixedLocationProvider;
pub use ip_lookup::IpLocationProvider;
pub use position::{LocationError, LocationOptions, Position};
pub use provider::LocationProvider;
