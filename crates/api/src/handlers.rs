pub mod slots;
pub mod week;
