pub mod contact;
pub mod content;
pub mod greeting;
pub mod navigation;
pub mod newsletter;
pub mod relay;
pub mod skills;
pub mod telemetry;

#[cfg(not(target_arch = "wasm32"))]
pub mod backend;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
