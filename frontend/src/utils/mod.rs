pub mod logo;
#[cfg(target_arch = "wasm32")]
pub mod storage;
