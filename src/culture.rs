//! Number rendering configuration
//!
//! Failure messages render fractional numbers with the decimal separator of
//! the ambient culture rather than a fixed format. A [`Culture`] is resolved
//! from the most specific source available:
//!
//! 1. an explicit override on the validator ([`Validator::with_culture`]);
//! 2. a thread-local override installed with [`Culture::scope`];
//! 3. the process default, read once from `LC_ALL`, `LC_NUMERIC` or `LANG`.
//!
//! # Example
//!
//! ```rust
//! use affirm::Culture;
//!
//! let german = Culture::from_locale("de_DE.UTF-8");
//! assert_eq!(german.decimal_separator(), ',');
//! assert_eq!(german.localize("4.2"), "4,2");
//!
//! {
//!     let _scope = german.scope();
//!     assert_eq!(Culture::current(), german);
//! }
//! ```
//!
//! [`Validator::with_culture`]: crate::Validator::with_culture

use std::cell::Cell;
use std::marker::PhantomData;
use std::sync::OnceLock;

/// Environment variables consulted for the process default, in precedence order.
const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

/// Languages whose conventional decimal separator is a comma.
const DECIMAL_COMMA_LANGUAGES: &[&str] = &[
    "be", "bg", "ca", "cs", "da", "de", "el", "es", "et", "fi", "fr", "hr", "hu", "id", "is", "it",
    "lt", "lv", "nb", "nl", "nn", "no", "pl", "pt", "ro", "ru", "sk", "sl", "sr", "sv", "tr", "uk",
    "vi",
];

/// Territories that use a decimal point although their language does not.
const DECIMAL_POINT_TERRITORIES: &[(&str, &str)] = &[
    ("de", "CH"),
    ("de", "LI"),
    ("it", "CH"),
    ("es", "MX"),
    ("es", "US"),
];

thread_local! {
    static OVERRIDE: Cell<Option<Culture>> = const { Cell::new(None) };
}

static PROCESS_DEFAULT: OnceLock<Culture> = OnceLock::new();

/// Formatting conventions applied to numbers in failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Culture {
    decimal_separator: char,
}

impl Culture {
    /// The culture-independent convention: `.` as decimal separator.
    pub const INVARIANT: Culture = Culture {
        decimal_separator: '.',
    };

    /// Create a culture with the given decimal separator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::Culture;
    ///
    /// let culture = Culture::with_decimal_separator(',');
    /// assert_eq!(culture.localize("-0.5"), "-0,5");
    /// ```
    pub const fn with_decimal_separator(decimal_separator: char) -> Self {
        Culture { decimal_separator }
    }

    /// The decimal separator used for fractional numbers.
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Parse a POSIX locale name such as `de_DE.UTF-8` or `fr_CA@euro`.
    ///
    /// `C`, `POSIX`, empty and unknown locales map to [`Culture::INVARIANT`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::Culture;
    ///
    /// assert_eq!(Culture::from_locale("fr_FR").decimal_separator(), ',');
    /// assert_eq!(Culture::from_locale("de_CH.UTF-8").decimal_separator(), '.');
    /// assert_eq!(Culture::from_locale("en_US.UTF-8"), Culture::INVARIANT);
    /// assert_eq!(Culture::from_locale("C"), Culture::INVARIANT);
    /// ```
    pub fn from_locale(locale: &str) -> Self {
        let name = locale.split(['.', '@']).next().unwrap_or_default();
        let mut parts = name.split(['_', '-']);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let territory = parts.next().unwrap_or_default().to_ascii_uppercase();

        let comma_language = DECIMAL_COMMA_LANGUAGES.contains(&language.as_str());
        let point_territory = DECIMAL_POINT_TERRITORIES
            .iter()
            .any(|(lang, terr)| *lang == language && *terr == territory);

        if comma_language && !point_territory {
            Culture::with_decimal_separator(',')
        } else {
            Culture::INVARIANT
        }
    }

    /// Resolve a culture from the locale environment variables.
    ///
    /// The first non-empty value of `LC_ALL`, `LC_NUMERIC`, `LANG` wins.
    pub fn from_env() -> Self {
        Culture::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let locale = LOCALE_VARIABLES
            .iter()
            .find_map(|key| lookup(*key).filter(|value| !value.is_empty()));

        let culture = locale
            .as_deref()
            .map_or(Culture::INVARIANT, Culture::from_locale);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            locale = locale.as_deref().unwrap_or("<unset>"),
            decimal_separator = %culture.decimal_separator,
            "resolved culture from environment"
        );

        culture
    }

    /// The culture in effect on the current thread.
    ///
    /// Returns the innermost [`Culture::scope`] override, or the process
    /// default when no override is active.
    pub fn current() -> Self {
        OVERRIDE
            .with(Cell::get)
            .unwrap_or_else(|| *PROCESS_DEFAULT.get_or_init(Culture::from_env))
    }

    /// Make this culture current on this thread until the guard is dropped.
    ///
    /// Scopes nest; dropping a guard restores whatever was current before it.
    #[must_use = "the culture reverts as soon as the guard is dropped"]
    pub fn scope(self) -> CultureScope {
        let previous = OVERRIDE.with(|cell| cell.replace(Some(self)));
        CultureScope {
            previous,
            _thread_bound: PhantomData,
        }
    }

    /// Substitute this culture's decimal separator into a `.`-formatted number.
    pub fn localize(&self, number: &str) -> String {
        if self.decimal_separator == '.' {
            number.to_owned()
        } else {
            number.replace('.', self.decimal_separator.encode_utf8(&mut [0; 4]))
        }
    }
}

impl Default for Culture {
    fn default() -> Self {
        Culture::INVARIANT
    }
}

/// Guard returned by [`Culture::scope`].
#[derive(Debug)]
pub struct CultureScope {
    previous: Option<Culture>,
    // The override lives in a thread-local, so the guard must not cross threads.
    _thread_bound: PhantomData<*const ()>,
}

impl Drop for CultureScope {
    fn drop(&mut self) {
        OVERRIDE.with(|cell| cell.set(self.previous));
    }
}
