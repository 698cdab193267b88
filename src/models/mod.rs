pub mod clock_time;
pub mod daily_record;
pub mod entry;
pub mod period;
pub mod shift;
pub mod track;
