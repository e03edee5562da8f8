mod bundle;
mod format;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, is_rtl, set_lang};
pub use format::{fmt_missing_price, fmt_price};
pub use locales::{DEFAULT_LANG, LocaleMeta, locales};
pub use render::{t, tr, vars};
