// Board geometry
//
// Maps between pixels on the Gantt board and minutes/rows. The horizontal
// axis starts at the visible window's first hour; row n holds the nth room.

use crate::models::settings::TimeScale;
use crate::utils::time::{ClockTime, Interval, MINUTES_PER_HOUR};

pub const GANTT_START_HOUR: i32 = 7;
pub const GANTT_END_HOUR: i32 = 19;
pub const MIDDAY_HOUR: i32 = 13;
/// Horizontal scale of the whole-day board
pub const PIXELS_PER_MINUTE: f64 = 3.0;
pub const ROW_HEIGHT: f64 = 80.0;
/// Width of the room label column left of the time axis
pub const LABEL_WIDTH: f64 = 160.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub start_hour: i32,
    pub end_hour: i32,
    pub pixels_per_minute: f64,
    pub row_height: f64,
    pub label_width: f64,
}

impl BoardGeometry {
    /// Geometry for one of the board's time scales. Half-day scales are
    /// drawn at twice the horizontal zoom.
    pub fn for_scale(scale: TimeScale) -> Self {
        let (start_hour, end_hour, pixels_per_minute) = match scale {
            TimeScale::Morning => (GANTT_START_HOUR, MIDDAY_HOUR, PIXELS_PER_MINUTE * 2.0),
            TimeScale::Afternoon => (MIDDAY_HOUR, GANTT_END_HOUR, PIXELS_PER_MINUTE * 2.0),
            TimeScale::All => (GANTT_START_HOUR, GANTT_END_HOUR, PIXELS_PER_MINUTE),
        };
        Self {
            start_hour,
            end_hour,
            pixels_per_minute,
            row_height: ROW_HEIGHT,
            label_width: LABEL_WIDTH,
        }
    }

    /// First visible minute; drags and drops never land before it.
    pub fn window_start(&self) -> i32 {
        self.start_hour * MINUTES_PER_HOUR
    }

    pub fn window_end(&self) -> i32 {
        self.end_hour * MINUTES_PER_HOUR
    }

    pub fn total_hours(&self) -> i32 {
        self.end_hour - self.start_hour
    }

    pub fn total_width(&self) -> f64 {
        f64::from(self.total_hours() * MINUTES_PER_HOUR) * self.pixels_per_minute
    }

    /// Minutes covered by a pixel distance. A board without a positive,
    /// finite scale moves nothing.
    pub fn minutes_for_pixels(&self, pixels: f64) -> f64 {
        if !(self.pixels_per_minute.is_finite() && self.pixels_per_minute > 0.0) {
            return 0.0;
        }
        pixels / self.pixels_per_minute
    }

    /// Board row under a vertical offset. Rows above the grid are negative,
    /// as is every row of a board without a positive row height.
    pub fn row_at(&self, y: f64) -> i64 {
        if !(self.row_height.is_finite() && self.row_height > 0.0) || y.is_nan() {
            return -1;
        }
        (y / self.row_height).floor() as i64
    }

    /// Left edge of a time on the time axis (label column excluded).
    pub fn x_for(&self, time: ClockTime) -> f64 {
        f64::from(time.minutes().saturating_sub(self.window_start())) * self.pixels_per_minute
    }

    pub fn width_for(&self, interval: &Interval) -> f64 {
        f64::from(interval.duration()) * self.pixels_per_minute
    }

    /// Hour labels with their x offset, one per grid line.
    pub fn hour_marks(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        (self.start_hour..=self.end_hour).map(move |hour| {
            let offset = f64::from((hour - self.start_hour) * MINUTES_PER_HOUR);
            (hour, offset * self.pixels_per_minute)
        })
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::for_scale(TimeScale::All)
    }
}
