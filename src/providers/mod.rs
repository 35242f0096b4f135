pub mod dolarapi;

pub use dolarapi::{DolarApiProvider, DolarQuote};
