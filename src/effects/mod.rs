//! Effect system: how played cards mutate the table state.

pub mod resolver;

pub use resolver::resolve;
