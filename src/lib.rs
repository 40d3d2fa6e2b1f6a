pub mod app_config;
pub mod books;
mod coordinate_deserializer;
pub mod domain;
mod extensions;
pub mod http_client;
pub mod location;
pub mod map_url;
pub mod preferences;
pub mod proximity;
#[cfg(test)]
mod scratch_dir;
pub mod submission;
