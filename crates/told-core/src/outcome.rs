//! The tagged result of every performance query.
//!
//! A query can produce a definite number, a number flagged as outside the
//! validated data envelope, a verdict that the configuration has no certified
//! data, or nothing at all because inputs are missing. Keeping these as
//! distinct variants means "no value", "not authorized" and "offscale but
//! present" can never be confused downstream.

/// Which side of the validated envelope an input fell on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Offscale {
    /// Informational: likely still representative.
    Below,
    /// Cautionary: extrapolated and unverified.
    Above,
}

/// Envelope classification; `Above` outranks `Below` outranks `Within`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Envelope {
    #[default]
    Within,
    Below,
    Above,
}

impl Envelope {
    /// The more severe of two classifications.
    #[must_use]
    pub fn worst(self, other: Self) -> Self {
        self.max(other)
    }

    pub fn offscale(self) -> Option<Offscale> {
        match self {
            Self::Within => None,
            Self::Below => Some(Offscale::Below),
            Self::Above => Some(Offscale::Above),
        }
    }
}

impl From<Offscale> for Envelope {
    fn from(side: Offscale) -> Self {
        match side {
            Offscale::Below => Self::Below,
            Offscale::Above => Self::Above,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome<T = f64> {
    /// Within the validated envelope.
    Value(T),
    /// Outside the envelope. Regression fits still extrapolate a value;
    /// table lookups stop at the boundary and carry none.
    Offscale { value: Option<T>, side: Offscale },
    /// No certified data for this configuration.
    NotAuthorized,
    /// Inputs are insufficient (e.g. no runway selected).
    Unavailable,
}

impl<T> Outcome<T> {
    /// Tag a computed value with an envelope classification.
    pub fn classified(value: T, envelope: Envelope) -> Self {
        match envelope.offscale() {
            None => Self::Value(value),
            Some(side) => Self::Offscale { value: Some(value), side },
        }
    }

    /// Transform the numeric payload, leaving the tag untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Self::Value(v) => Outcome::Value(f(v)),
            Self::Offscale { value, side } => Outcome::Offscale { value: value.map(f), side },
            Self::NotAuthorized => Outcome::NotAuthorized,
            Self::Unavailable => Outcome::Unavailable,
        }
    }

    /// Feed the payload into a further fallible step (e.g. another table
    /// lookup). The more severe envelope of the two steps wins; a step that
    /// yields no payload ends the chain with its own tag.
    pub fn and_then<U, F: FnOnce(T) -> Outcome<U>>(self, f: F) -> Outcome<U> {
        match self {
            Self::Value(v) => f(v),
            Self::Offscale { value: Some(v), side } => match f(v) {
                Outcome::Value(u) => Outcome::Offscale { value: Some(u), side },
                Outcome::Offscale { value, side: next } => Outcome::Offscale {
                    value,
                    side: Envelope::from(side).worst(next.into()).offscale().unwrap_or(side),
                },
                other => other,
            },
            Self::Offscale { value: None, side } => Outcome::Offscale { value: None, side },
            Self::NotAuthorized => Outcome::NotAuthorized,
            Self::Unavailable => Outcome::Unavailable,
        }
    }

    /// The payload, if one was computed.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) | Self::Offscale { value: Some(v), .. } => Some(v),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(v) | Self::Offscale { value: Some(v), .. } => Some(v),
            _ => None,
        }
    }

    /// Envelope classification; `None` for results that carry no envelope.
    pub fn envelope(&self) -> Option<Envelope> {
        match self {
            Self::Value(_) => Some(Envelope::Within),
            Self::Offscale { side, .. } => Some((*side).into()),
            Self::NotAuthorized | Self::Unavailable => None,
        }
    }

    pub fn is_offscale(&self) -> bool {
        matches!(self, Self::Offscale { .. })
    }
}
