pub mod dispatcher;
pub mod events;
pub mod frontend;
pub mod preferences;
pub mod resolver;
pub mod services;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;
