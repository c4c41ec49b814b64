//! # kairos-calendar
//!
//! Gregorian date handling for calendar-day stratified post-processing.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["MonthDay (Feb 29 allowed)"] -->|"MonthDay::all()"| B["366 calendar pairs"]
//!     C["CalendarDate"] -->|".month_day()"| A
//!     C -->|".next()"| C
//!     C -->|"date_sequence()"| D["Vec of CalendarDate"]
//!     E["YearRange"] -->|".contains(year)"| F["eligible?"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use kairos_calendar::{CalendarDate, MonthDay, UpperBound, YearRange, date_sequence};
//!
//! let leap = MonthDay::new(2, 29).unwrap();
//! assert_eq!(leap.ordinal(), 60);
//!
//! let start = CalendarDate::new(2000, 2, 28).unwrap();
//! let dates = date_sequence(start, 3); // Feb 28, Feb 29, Mar 1
//!
//! let calibration = YearRange::new(1990, 2000, UpperBound::Exclusive).unwrap();
//! assert!(!calibration.contains(2000));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month_day` | `(month, day)` calendar pair newtype and iteration |
//! | `date` | Gregorian date with year context |
//! | `sequence` | Date sequence generation |
//! | `year_range` | Eligible-year ranges with explicit upper-bound semantics |
//! | `error` | Error types |

mod date;
mod error;
mod month_day;
mod sequence;
mod year_range;

pub use date::{CalendarDate, is_leap_year};
pub use error::CalendarError;
pub use month_day::MonthDay;
pub use sequence::date_sequence;
pub use year_range::{UpperBound, YearRange};
