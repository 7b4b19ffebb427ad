use super::xml::XmlElement;

pub const LOW_FUZZY_WEIGHT: f64 = 0.6;
pub const HIGH_FUZZY_WEIGHT: f64 = 0.4;
pub const FULL_MATCH_AND_REPS_WEIGHT: f64 = 0.33;

/// A raw match band as reported under a file's `<analyse>` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    New,
    Fuzzy50,
    Fuzzy75,
    Fuzzy85,
    Fuzzy95,
    InternalFuzzy50,
    InternalFuzzy75,
    InternalFuzzy85,
    InternalFuzzy95,
    Exact,
    Perfect,
    InContextExact,
    Repeated,
    CrossFileRepeated,
    Locked,
    Total,
}

const BAND_COUNT: usize = 16;

impl Band {
    pub const ALL: [Band; BAND_COUNT] = [
        Band::New,
        Band::Fuzzy50,
        Band::Fuzzy75,
        Band::Fuzzy85,
        Band::Fuzzy95,
        Band::InternalFuzzy50,
        Band::InternalFuzzy75,
        Band::InternalFuzzy85,
        Band::InternalFuzzy95,
        Band::Exact,
        Band::Perfect,
        Band::InContextExact,
        Band::Repeated,
        Band::CrossFileRepeated,
        Band::Locked,
        Band::Total,
    ];

    /// Element name and optional `min` discriminator locating this band.
    pub fn selector(self) -> (&'static str, Option<&'static str>) {
        match self {
            Band::New => ("new", None),
            Band::Fuzzy50 => ("fuzzy", Some("50")),
            Band::Fuzzy75 => ("fuzzy", Some("75")),
            Band::Fuzzy85 => ("fuzzy", Some("85")),
            Band::Fuzzy95 => ("fuzzy", Some("95")),
            Band::InternalFuzzy50 => ("internalFuzzy", Some("50")),
            Band::InternalFuzzy75 => ("internalFuzzy", Some("75")),
            Band::InternalFuzzy85 => ("internalFuzzy", Some("85")),
            Band::InternalFuzzy95 => ("internalFuzzy", Some("95")),
            Band::Exact => ("exact", None),
            Band::Perfect => ("perfect", None),
            Band::InContextExact => ("inContextExact", None),
            Band::Repeated => ("repeated", None),
            Band::CrossFileRepeated => ("crossFileRepeated", None),
            Band::Locked => ("locked", None),
            Band::Total => ("total", None),
        }
    }
}

/// Word count of the first direct child named `element` (and matching `min`
/// when given). Missing nodes, missing attributes and unparsable values all
/// count as zero.
pub fn lookup_word_count(analyse: &XmlElement, element: &str, min: Option<&str>) -> u64 {
    let node = match min {
        Some(min) => analyse.child_with_attr(element, "min", min),
        None => analyse.child(element),
    };

    node.and_then(|n| n.attr("words"))
        .and_then(|words| words.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

/// Every raw band of one file, indexed in `Band::ALL` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawBands([u64; BAND_COUNT]);

impl RawBands {
    pub fn read(analyse: &XmlElement) -> Self {
        let mut counts = [0u64; BAND_COUNT];
        for (slot, band) in counts.iter_mut().zip(Band::ALL) {
            let (element, min) = band.selector();
            *slot = lookup_word_count(analyse, element, min);
        }
        Self(counts)
    }

    pub fn get(&self, band: Band) -> u64 {
        self.0[band as usize]
    }

    pub fn with(mut self, band: Band, words: u64) -> Self {
        self.0[band as usize] = words;
        self
    }

    fn sum(&self, bands: &[Band]) -> u64 {
        bands
            .iter()
            .map(|b| self.get(*b))
            .fold(0, u64::saturating_add)
    }

    pub fn grouped(&self) -> GroupedBands {
        let full_match = self.sum(&[Band::Exact, Band::Perfect, Band::InContextExact]);
        let repetitions = self.sum(&[Band::Repeated, Band::CrossFileRepeated]);

        // Locked words fall into no group.
        GroupedBands {
            no_match: self.sum(&[
                Band::New,
                Band::Fuzzy50,
                Band::Fuzzy75,
                Band::InternalFuzzy50,
                Band::InternalFuzzy75,
            ]),
            low_fuzzy: self.sum(&[Band::Fuzzy85, Band::InternalFuzzy85]),
            high_fuzzy: self.sum(&[Band::Fuzzy95, Band::InternalFuzzy95]),
            full_match,
            repetitions,
            full_match_and_reps: full_match.saturating_add(repetitions),
            total_gross: self.get(Band::Total),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupedBands {
    pub no_match: u64,
    pub low_fuzzy: u64,
    pub high_fuzzy: u64,
    pub full_match: u64,
    pub repetitions: u64,
    pub full_match_and_reps: u64,
    pub total_gross: u64,
}

impl GroupedBands {
    pub fn weighted_net(&self) -> u64 {
        weighted_word_count(
            self.no_match,
            self.low_fuzzy,
            self.high_fuzzy,
            self.full_match_and_reps,
        )
    }
}

/// Billing word count. Each discounted band is rounded half-to-even before
/// summing, and the sum is rounded the same way, as the legacy macro did.
pub fn weighted_word_count(
    no_match: u64,
    low_fuzzy: u64,
    high_fuzzy: u64,
    full_match_and_reps: u64,
) -> u64 {
    let weighted = no_match as f64
        + (low_fuzzy as f64 * LOW_FUZZY_WEIGHT).round_ties_even()
        + (high_fuzzy as f64 * HIGH_FUZZY_WEIGHT).round_ties_even()
        + (full_match_and_reps as f64 * FULL_MATCH_AND_REPS_WEIGHT).round_ties_even();

    weighted.round_ties_even() as u64
}
