pub mod analyze;
pub mod health;
pub mod serve;

#[cfg(test)]
#[path = "analyze_test.rs"]
mod analyze_test;
