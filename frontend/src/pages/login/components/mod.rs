pub mod form;
pub mod messages;
