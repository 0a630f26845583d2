// DOM wiring and pointer tuning constants for the web frontend.

// Element ids created inside the host container
pub const CANVAS_ID: &str = "rack-room-canvas";
pub const OVERLAY_ID: &str = "rack-room-overlay";

// Inline styles (the container is the positioning context for the overlay)
pub const CONTAINER_STYLE: &str = "position: relative; display: inline-block;";
pub const CANVAS_STYLE: &str = "display: block; touch-action: none;";
pub const OVERLAY_STYLE: &str = "position: absolute; top: 10px; left: 10px; \
    background: rgba(255,255,255,0.7); color: #000; padding: 10px; \
    font: 14px system-ui, sans-serif; pointer-events: none;";

// Pointer buttons (PointerEvent.button)
pub const BUTTON_PRIMARY: i16 = 0;
pub const BUTTON_MIDDLE: i16 = 1;
pub const BUTTON_SECONDARY: i16 = 2;

// Wheel deltas smaller than this are ignored (trackpad jitter)
pub const WHEEL_DEADZONE: f64 = 0.5;

// Render
pub const MSAA_SAMPLES: u32 = 4;
