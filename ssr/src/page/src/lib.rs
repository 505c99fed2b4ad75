pub mod player;
pub mod top_global;
