pub mod blehostd;
pub mod logging;
