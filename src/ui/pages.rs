//! Pages module
//! Full-page views for the information hub

pub mod about;
pub mod home;
pub mod interest;
pub mod prevention;
pub mod settings;
pub mod solution;
pub mod survey;
