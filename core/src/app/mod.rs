#[cfg(feature = "app_panic_handler")]
pub mod panic_handler;
#[cfg(feature = "app_env")]
pub mod env;
#[cfg(feature = "app_tracing")]
pub mod tracing;
#[cfg(feature = "app_storage")]
pub mod storage;
