pub mod booking;
pub mod contact;
pub mod directory;
pub mod mail;
pub mod notifications;
pub mod validation;
