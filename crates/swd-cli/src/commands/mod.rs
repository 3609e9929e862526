pub mod chat;
pub mod dice;
pub mod roll;
