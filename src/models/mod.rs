pub mod appointment;
pub mod contact;
pub mod dentist;
pub mod hours;
pub mod service;

pub use appointment::{Appointment, AppointmentStatus};
pub use contact::ContactMessage;
pub use dentist::Dentist;
pub use hours::BusinessHours;
pub use service::ServiceOffering;
