pub mod errors;
pub mod db;
pub mod room;
pub mod owner;
pub mod review;

#[cfg(test)]
mod tests;
