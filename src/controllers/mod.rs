pub mod reminder_controller;
pub mod vehicle_controller;
