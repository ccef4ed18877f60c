pub mod clock;
pub mod doctor;
pub mod parse;
pub mod rename;
pub mod undo;
