//! Button definitions and ADC band decoding for the XY DevKit v1
//!
//! Six buttons share one ADC channel through a resistor divider; each
//! press pulls the channel to a distinct voltage.  A reading is decoded
//! by finding the calibration band that contains it.  BOOT is a plain
//! GPIO and never appears in the band table.

use crate::error::ConfigError;

/// All physical buttons on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    // Resistor ladder (ADC1 channel 5)
    Rec,
    Mode,
    Play,
    Set,
    VolDown,
    VolUp,
    // Discrete digital button
    Boot,
}

impl ButtonId {
    pub const COUNT: usize = 7;

    /// Poll order.  Handlers of a tick run in this order.
    pub const ALL: [ButtonId; Self::COUNT] = [
        ButtonId::Rec,
        ButtonId::Mode,
        ButtonId::Play,
        ButtonId::Set,
        ButtonId::VolDown,
        ButtonId::VolUp,
        ButtonId::Boot,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_analog(self) -> bool {
        !matches!(self, ButtonId::Boot)
    }

    pub const fn name(self) -> &'static str {
        match self {
            ButtonId::Rec => "Rec",
            ButtonId::Mode => "Mode",
            ButtonId::Play => "Play",
            ButtonId::Set => "Set",
            ButtonId::VolDown => "Vol Down",
            ButtonId::VolUp => "Vol Up",
            ButtonId::Boot => "Boot",
        }
    }
}

impl core::fmt::Display for ButtonId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Calibrated millivolt range for one ladder button, `[min_mv, max_mv)`.
///
/// Half-open so that neighbouring bands may share an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoltageBand {
    pub id: ButtonId,
    pub min_mv: u16,
    pub max_mv: u16,
}

impl VoltageBand {
    pub const fn new(id: ButtonId, min_mv: u16, max_mv: u16) -> Self {
        Self { id, min_mv, max_mv }
    }

    #[inline]
    pub const fn contains(&self, mv: u16) -> bool {
        mv >= self.min_mv && mv < self.max_mv
    }

    const fn overlaps(&self, other: &VoltageBand) -> bool {
        self.min_mv < other.max_mv && other.min_mv < self.max_mv
    }
}

// Nominal ladder voltages: Rec 2.41V, Mode 1.98V, Play 1.65V,
// Set 1.11V, VolDown 0.82V, VolUp 0.38V.
pub const XY_DEVKIT_BANDS: &[VoltageBand] = &[
    VoltageBand::new(ButtonId::Rec, 2200, 2600),
    VoltageBand::new(ButtonId::Mode, 1800, 2100),
    VoltageBand::new(ButtonId::Play, 1500, 1800),
    VoltageBand::new(ButtonId::Set, 1000, 1300),
    VoltageBand::new(ButtonId::VolDown, 700, 1000),
    VoltageBand::new(ButtonId::VolUp, 280, 500),
];

/// Gesture timing for every button on this board.
pub const DEBOUNCE_MS: u32 = 30;
pub const LONG_PRESS_MS: u32 = 1000;

/// Maps ADC millivolts to the ladder button being held, if any.
///
/// The table is checked once in [`BandClassifier::new`]; after that
/// at most one band can contain any reading.
#[derive(Debug, Clone, Copy)]
pub struct BandClassifier<'a> {
    bands: &'a [VoltageBand],
}

impl<'a> BandClassifier<'a> {
    pub fn new(bands: &'a [VoltageBand]) -> Result<Self, ConfigError> {
        for (i, band) in bands.iter().enumerate() {
            if !band.id.is_analog() {
                return Err(ConfigError::NotAnalog(band.id));
            }
            if band.min_mv >= band.max_mv {
                return Err(ConfigError::EmptyBand {
                    id: band.id,
                    min_mv: band.min_mv,
                    max_mv: band.max_mv,
                });
            }
            for other in &bands[i + 1..] {
                if other.id == band.id {
                    return Err(ConfigError::DuplicateButton(band.id));
                }
                if band.overlaps(other) {
                    return Err(ConfigError::Overlap {
                        first: band.id,
                        second: other.id,
                    });
                }
            }
        }
        Ok(Self { bands })
    }

    /// `None` for open circuit and for readings between bands.
    pub fn classify(&self, mv: u16) -> Option<ButtonId> {
        self.bands.iter().find(|b| b.contains(mv)).map(|b| b.id)
    }

    pub fn bands(&self) -> &'a [VoltageBand] {
        self.bands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> BandClassifier<'static> {
        BandClassifier::new(XY_DEVKIT_BANDS).unwrap()
    }

    #[test]
    fn decodes_board_ladder() {
        let c = board();
        assert_eq!(c.classify(2400), Some(ButtonId::Rec));
        assert_eq!(c.classify(1900), Some(ButtonId::Mode));
        assert_eq!(c.classify(1650), Some(ButtonId::Play));
        assert_eq!(c.classify(1110), Some(ButtonId::Set));
        assert_eq!(c.classify(820), Some(ButtonId::VolDown));
        assert_eq!(c.classify(380), Some(ButtonId::VolUp));
    }

    #[test]
    fn gaps_and_out_of_range_are_no_button() {
        let c = board();
        assert_eq!(c.classify(50), None);
        assert_eq!(c.classify(3000), None);
        assert_eq!(c.classify(1400), None);
        assert_eq!(c.classify(600), None);
        assert_eq!(c.classify(2150), None);
    }

    #[test]
    fn shared_endpoint_belongs_to_upper_band() {
        let c = board();
        assert_eq!(c.classify(1800), Some(ButtonId::Mode));
        assert_eq!(c.classify(1799), Some(ButtonId::Play));
        assert_eq!(c.classify(1000), Some(ButtonId::Set));
        assert_eq!(c.classify(999), Some(ButtonId::VolDown));
        assert_eq!(c.classify(2600), None);
        assert_eq!(c.classify(280), Some(ButtonId::VolUp));
    }

    #[test]
    fn board_table_is_pairwise_disjoint() {
        for (i, a) in XY_DEVKIT_BANDS.iter().enumerate() {
            for b in &XY_DEVKIT_BANDS[i + 1..] {
                assert!(!a.overlaps(b), "{} overlaps {}", a.id, b.id);
            }
        }
    }

    #[test]
    fn every_reading_matches_at_most_one_band() {
        let c = board();
        for mv in 0..=3300u16 {
            let hits = c.bands().iter().filter(|b| b.contains(mv)).count();
            assert!(hits <= 1, "{mv} mV matched {hits} bands");
        }
    }

    #[test]
    fn rejects_overlap() {
        let bands = [
            VoltageBand::new(ButtonId::Play, 1500, 1850),
            VoltageBand::new(ButtonId::Mode, 1800, 2100),
        ];
        assert_eq!(
            BandClassifier::new(&bands).unwrap_err(),
            ConfigError::Overlap {
                first: ButtonId::Play,
                second: ButtonId::Mode
            }
        );
    }

    #[test]
    fn rejects_empty_and_inverted_bands() {
        let bands = [VoltageBand::new(ButtonId::Set, 1300, 1300)];
        assert!(matches!(
            BandClassifier::new(&bands),
            Err(ConfigError::EmptyBand { id: ButtonId::Set, .. })
        ));
        let bands = [VoltageBand::new(ButtonId::Set, 1300, 1000)];
        assert!(matches!(
            BandClassifier::new(&bands),
            Err(ConfigError::EmptyBand { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_and_digital_ids() {
        let bands = [
            VoltageBand::new(ButtonId::VolUp, 280, 500),
            VoltageBand::new(ButtonId::VolUp, 600, 700),
        ];
        assert_eq!(
            BandClassifier::new(&bands).unwrap_err(),
            ConfigError::DuplicateButton(ButtonId::VolUp)
        );

        let bands = [VoltageBand::new(ButtonId::Boot, 0, 100)];
        assert_eq!(
            BandClassifier::new(&bands).unwrap_err(),
            ConfigError::NotAnalog(ButtonId::Boot)
        );
    }
}
