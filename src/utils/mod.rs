pub mod logging;
pub mod pagination;
