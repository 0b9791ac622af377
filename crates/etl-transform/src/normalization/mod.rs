//! Field normalization functions.
//!
//! - **datetime**: date standardization to `YYYY-MM-DD`
//! - **categorical**: gender and region canonicalization
//! - **text**: casing, email, and phone cleanup
//! - **numeric**: numeric parsing and risk-score coercion
//!
//! Every function here is idempotent.

pub mod categorical;
pub mod datetime;
pub mod numeric;
pub mod text;

pub use categorical::{GenderFallback, REGIONS, normalize_gender, normalize_region};
pub use datetime::{DATE_INPUT_FORMATS, format_date, normalize_date, parse_date};
pub use numeric::{coerce_risk_score, parse_f64};
pub use text::{normalize_email, normalize_name, normalize_phone, title_case};
