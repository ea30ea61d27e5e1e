pub(crate) mod decimal;
pub mod log;
pub(crate) mod sentinel;
