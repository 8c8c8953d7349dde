pub mod input;
pub mod recommendation;
pub mod tier;
