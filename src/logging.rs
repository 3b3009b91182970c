//! Logging
//!
//! Routes `tracing` events to the browser console.

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

/// Install the console subscriber. Call once, before mounting.
pub fn init(level: Level) {
    let config = WASMLayerConfigBuilder::new().set_max_level(level).build();
    tracing_wasm::set_as_global_default_with_config(config);
}
