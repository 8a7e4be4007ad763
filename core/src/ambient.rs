use crate::scroll::ScrollMetrics;
use crate::view::View;
use crate::weather::WeatherStatus;

/// The home view goes midnight once the bottom of the document is within
/// this many viewport heights. Absolute geometry, not normalized progress.
pub const MIDNIGHT_BAND_VIEWPORTS: f64 = 1.5;

/// Background tone behind the active view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AmbientTone {
    Daylight,
    Overcast,
    Midnight,
    Spa,
    Dining,
}

impl AmbientTone {
    pub fn hex(self) -> &'static str {
        match self {
            AmbientTone::Daylight => "#F9F6F0",
            AmbientTone::Overcast => "#E8EAE6",
            AmbientTone::Midnight => "#1A2A3A",
            AmbientTone::Spa => "#F4F7F2",
            AmbientTone::Dining => "#1B3022",
        }
    }

    /// Light tones keep the dark ink foreground; dark tones flip it.
    pub fn is_dark(self) -> bool {
        matches!(
            self,
            AmbientTone::Midnight | AmbientTone::Dining
        )
    }
}

/// Pure tone selection. Spa and dining pin their own tones; home swaps to
/// midnight near the document bottom; everything else follows the weather.
pub fn ambient_tone(view: View, status: WeatherStatus, metrics: ScrollMetrics) -> AmbientTone {
    match view {
        View::Spa => AmbientTone::Spa,
        View::Dining => AmbientTone::Dining,
        View::Home => {
            let midnight_start =
                metrics.content_height - metrics.viewport_height * MIDNIGHT_BAND_VIEWPORTS;
            if metrics.offset > midnight_start {
                AmbientTone::Midnight
            } else {
                weather_tone(status)
            }
        }
        View::Suites | View::History | View::Reservations => weather_tone(status),
    }
}

fn weather_tone(status: WeatherStatus) -> AmbientTone {
    match status {
        WeatherStatus::Rainy => AmbientTone::Overcast,
        WeatherStatus::Sunny => AmbientTone::Daylight,
    }
}
