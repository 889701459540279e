pub mod assign;
pub mod history;
pub mod suggest;
