//! Simulated-year scenario table
//!
//! The game clock narrates the space age: debris starts falling after
//! Gagarin's flight and thickens every era, and milestone years carry a
//! caption. A year without a caption is not an error - the caption task
//! falls back to the bare year number.

/// Milestone captions shown next to the year readout.
pub const PHRASES: &[(i32, &str)] = &[
    (1957, "First Sputnik"),
    (1961, "Gagarin flew!"),
    (1969, "Armstrong got on the Moon!"),
    (1971, "First orbital space station Salyut-1"),
    (1981, "Flight of the Shuttle Columbia"),
    (1998, "ISS start building"),
    (2011, "Messenger launch to Mercury"),
    (2020, "Take the plasma gun! Shoot the garbage!"),
];

/// Caption for exactly this year, if one is defined.
pub fn caption(year: i32) -> Option<&'static str> {
    PHRASES
        .iter()
        .find(|(entry, _)| *entry == year)
        .map(|(_, text)| *text)
}

/// Ticks the spawner idles between debris launches, or `None` while the
/// orbit is still clean.
pub fn spawn_delay(year: i32) -> Option<u32> {
    match year {
        ..1961 => None,
        1961..1969 => Some(20),
        1969..1981 => Some(14),
        1981..1995 => Some(10),
        1995..2010 => Some(8),
        2010..2020 => Some(6),
        2020.. => Some(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_debris_before_gagarin() {
        assert_eq!(spawn_delay(1957), None);
        assert_eq!(spawn_delay(1960), None);
        assert_eq!(spawn_delay(1961), Some(20));
    }

    #[test]
    fn spawn_interval_shrinks_over_time() {
        let mut previous = u32::MAX;
        for year in [1961, 1969, 1981, 1995, 2010, 2020] {
            let delay = spawn_delay(year).unwrap();
            assert!(delay < previous);
            previous = delay;
        }
    }

    #[test]
    fn caption_lookup() {
        assert_eq!(caption(1961), Some("Gagarin flew!"));
        assert_eq!(caption(1962), None);
    }
}
