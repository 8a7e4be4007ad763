/// Delay before the one-shot atmospheric notice is shown after session start.
pub const NOTICE_DELAY_MS: u32 = 2_000;
/// How long the notice stays visible before auto-dismissing.
pub const NOTICE_VISIBLE_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherStatus {
    Sunny,
    Rainy,
}

/// One of exactly two canonical presets; both fields flip together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeatherPreset {
    pub temp_f: i32,
    pub status: WeatherStatus,
}

pub const PRESET_SUNNY: WeatherPreset = WeatherPreset {
    temp_f: 82,
    status: WeatherStatus::Sunny,
};

pub const PRESET_RAINY: WeatherPreset = WeatherPreset {
    temp_f: 78,
    status: WeatherStatus::Rainy,
};

impl WeatherPreset {
    pub fn toggled(self) -> Self {
        match self.status {
            WeatherStatus::Sunny => PRESET_RAINY,
            WeatherStatus::Rainy => PRESET_SUNNY,
        }
    }

    pub fn is_raining(self) -> bool {
        self.status == WeatherStatus::Rainy
    }
}

impl Default for WeatherPreset {
    fn default() -> Self {
        PRESET_SUNNY
    }
}

impl WeatherStatus {
    pub fn label(self) -> &'static str {
        match self {
            WeatherStatus::Sunny => "Sunny",
            WeatherStatus::Rainy => "Rainy",
        }
    }
}
