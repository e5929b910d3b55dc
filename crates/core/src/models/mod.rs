pub mod agenda;
pub mod time_slot;
pub mod week;
