// Adapters layer: concrete implementations for external systems.
// Chart rendering lives here; the local file sink stays under src/config.

pub mod chart;
