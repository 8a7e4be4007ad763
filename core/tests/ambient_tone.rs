use palm_classic_core::{
    ambient_tone, AmbientTone, ScrollMetrics, View, WeatherStatus, MIDNIGHT_BAND_VIEWPORTS,
};

fn metrics(offset: f64) -> ScrollMetrics {
    ScrollMetrics {
        offset,
        viewport_height: 800.0,
        content_height: 4_000.0,
    }
}

#[test]
fn spa_and_dining_ignore_weather_and_scroll() {
    for status in [WeatherStatus::Sunny, WeatherStatus::Rainy] {
        for offset in [0.0, 1_500.0, 3_900.0] {
            assert_eq!(
                ambient_tone(View::Spa, status, metrics(offset)),
                AmbientTone::Spa
            );
            assert_eq!(
                ambient_tone(View::Dining, status, metrics(offset)),
                AmbientTone::Dining
            );
        }
    }
}

#[test]
fn home_at_top_follows_weather() {
    assert_eq!(
        ambient_tone(View::Home, WeatherStatus::Sunny, metrics(0.0)),
        AmbientTone::Daylight
    );
    assert_eq!(
        ambient_tone(View::Home, WeatherStatus::Rainy, metrics(0.0)),
        AmbientTone::Overcast
    );
    assert_eq!(AmbientTone::Daylight.hex(), "#F9F6F0");
    assert_eq!(AmbientTone::Overcast.hex(), "#E8EAE6");
}

#[test]
fn home_near_bottom_goes_midnight_regardless_of_weather() {
    // offset == content - viewport puts us inside the 1.5-viewport band.
    let bottom = metrics(4_000.0 - 800.0);
    for status in [WeatherStatus::Sunny, WeatherStatus::Rainy] {
        assert_eq!(ambient_tone(View::Home, status, bottom), AmbientTone::Midnight);
    }
    assert_eq!(AmbientTone::Midnight.hex(), "#1A2A3A");
}

#[test]
fn midnight_band_boundary_is_exclusive() {
    // Exactly at the start of the band the weather tone still holds;
    // one pixel past it the midnight tone takes over.
    let band_start = 4_000.0 - 800.0 * MIDNIGHT_BAND_VIEWPORTS;
    assert_eq!(
        ambient_tone(View::Home, WeatherStatus::Sunny, metrics(band_start)),
        AmbientTone::Daylight
    );
    assert_eq!(
        ambient_tone(View::Home, WeatherStatus::Sunny, metrics(band_start + 1.0)),
        AmbientTone::Midnight
    );
}

#[test]
fn secondary_views_follow_weather_only() {
    for view in [View::Suites, View::History, View::Reservations] {
        // Deep scroll must not trigger the midnight band off-home.
        let deep = metrics(3_900.0);
        assert_eq!(
            ambient_tone(view, WeatherStatus::Sunny, deep),
            AmbientTone::Daylight
        );
        assert_eq!(
            ambient_tone(view, WeatherStatus::Rainy, deep),
            AmbientTone::Overcast
        );
    }
}

#[test]
fn degenerate_geometry_keeps_home_in_weather_tone() {
    let empty = ScrollMetrics::default();
    assert_eq!(
        ambient_tone(View::Home, WeatherStatus::Sunny, empty),
        AmbientTone::Daylight
    );
}
