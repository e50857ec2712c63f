pub mod analysis;
pub mod config;
pub mod state;
pub mod theme;

#[cfg(feature = "backend")]
pub mod cli;
#[cfg(feature = "backend")]
pub mod server;

#[cfg(all(test, feature = "backend"))]
pub(crate) mod test_support;



#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
