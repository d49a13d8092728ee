pub mod filter_key;

pub use filter_key::filter_key;
