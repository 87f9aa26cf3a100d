/// The daily prayers tracked by the provider.
///
/// Variant order is irrelevant; the daily sequence is [`PrayerKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrayerKind {
    Imsak,
    Fajr,
    Syuruk,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerKind {
    /// Canonical daily order. Current/next resolution walks this array.
    pub const ALL: [PrayerKind; 7] = [
        PrayerKind::Imsak,
        PrayerKind::Fajr,
        PrayerKind::Syuruk,
        PrayerKind::Dhuhr,
        PrayerKind::Asr,
        PrayerKind::Maghrib,
        PrayerKind::Isha,
    ];

    /// Field name in the provider payload.
    pub fn key(&self) -> &'static str {
        match self {
            PrayerKind::Imsak => "imsak",
            PrayerKind::Fajr => "fajr",
            PrayerKind::Syuruk => "syuruk",
            PrayerKind::Dhuhr => "dhuhr",
            PrayerKind::Asr => "asr",
            PrayerKind::Maghrib => "maghrib",
            PrayerKind::Isha => "isha",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            PrayerKind::Imsak => "Imsak",
            PrayerKind::Fajr => "Subuh",
            PrayerKind::Syuruk => "Syuruk",
            PrayerKind::Dhuhr => "Zohor",
            PrayerKind::Asr => "Asar",
            PrayerKind::Maghrib => "Maghrib",
            PrayerKind::Isha => "Isya",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.key() == s)
    }
}
