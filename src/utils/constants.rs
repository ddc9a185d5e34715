pub const UNAVAILABLE_PRIORITY: i32 = -1; // Reported by any backend that cannot be used
pub const STOCK_PRIORITY: i32 = 0; // Built-in model, always the fallback
pub const EXTENSION_PRIORITY: i32 = 100; // Dedicated aerodynamics extensions preempt stock

pub const MIN_AIR_SPEED: f64 = 1e-6; // m/s, below this the stock model reports no force
