mod number_format;
mod time_utils;

pub use number_format::{ChangeClass, LooseNumber, format_change_pct, format_currency, parse_float};
pub use time_utils::{AppInstant, current_year, epoch_ms_to_time_string};
