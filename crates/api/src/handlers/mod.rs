pub mod attempts;
pub mod request;
pub mod training_data;
