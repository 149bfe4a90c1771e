// Menu module
// Interactive console front end

mod choice;
mod controller;

pub use choice::MenuChoice;
pub use controller::MenuController;
