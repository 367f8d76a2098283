//! Movement domain: system modules for the controller tick.

pub(crate) mod input;
pub(crate) mod tick;

pub(crate) use tick::run_controller_tick;
