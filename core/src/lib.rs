pub mod ambient;
pub mod availability;
pub mod scroll;
pub mod view;
pub mod weather;

pub use ambient::{ambient_tone, AmbientTone, MIDNIGHT_BAND_VIEWPORTS};
pub use availability::{
    AvailabilityCheck, AvailabilityPhase, CHECK_LATENCY_MS, CONFIRM_DISPLAY_MS,
};
pub use scroll::{region_progress, stage_index, ScrollMetrics};
pub use view::View;
pub use weather::{
    WeatherPreset, WeatherStatus, NOTICE_DELAY_MS, NOTICE_VISIBLE_MS, PRESET_RAINY, PRESET_SUNNY,
};
