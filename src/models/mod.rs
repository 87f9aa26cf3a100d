pub mod daily_record;
pub mod prayer_kind;
pub mod schedule;
pub mod zone;

pub use daily_record::{DailyRecord, Lookup, YearBundle};
pub use prayer_kind::PrayerKind;
pub use schedule::{Marker, PrayerEvent, ResolvedSchedule, TodayView};
pub use zone::Zone;
