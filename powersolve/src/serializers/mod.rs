mod json;

pub use json::to_puzzle as from_json;
