//! Sequences of primitive values.
//!
//! The primitive families are [`Sequence`]s of `char`, `i32`, `i64` and `f64`
//! with a few extra operations each: ranges, arithmetic reductions and
//! conversions between the families. Every generic operation applies as well.
//!
//! Conversions here are named `as_*` and take no mapper; the generic
//! `to_ints`, `to_longs`, ... on [`Sequence`] take one.

use strand_core::SeqResult;

use crate::Sequence;

pub type CharSeq = Sequence<char>;
pub type IntSequence = Sequence<i32>;
pub type LongSequence = Sequence<i64>;
pub type DoubleSequence = Sequence<f64>;

#[allow(clippy::cast_precision_loss, reason = "averages are approximate by nature")]
fn average_of(total: f64, count: usize) -> Option<f64> {
    (count > 0).then(|| total / count as f64)
}

// ── i32 ──

impl Sequence<i32> {
    /// `from` to `to`, both inclusive. Counts down when `from > to`.
    pub fn range(from: i32, to: i32) -> IntSequence {
        Sequence::from_iterable(move || -> Box<dyn Iterator<Item = i32>> {
            if from <= to {
                Box::new(from..=to)
            } else {
                Box::new((to..=from).rev())
            }
        })
    }

    /// `from` and every integer after it up to `i32::MAX`.
    pub fn range_from(from: i32) -> IntSequence {
        Sequence::from_iterable(move || from..=i32::MAX)
    }

    /// Sum widened to `i64`.
    pub fn sum(&self) -> SeqResult<i64> {
        self.fold(0i64, |total, n| total + i64::from(n))
    }

    /// Arithmetic mean, `None` when empty.
    pub fn average(&self) -> SeqResult<Option<f64>> {
        let (total, count) = self.fold((0i64, 0usize), |(total, count), n| {
            (total + i64::from(n), count + 1)
        })?;
        #[allow(clippy::cast_precision_loss, reason = "averages are approximate by nature")]
        let total = total as f64;
        Ok(average_of(total, count))
    }

    /// Code points as characters. Invalid code points become U+FFFD.
    pub fn as_chars(&self) -> CharSeq {
        self.map(|n| {
            u32::try_from(n)
                .ok()
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        })
    }

    /// Widens each element to `i64`.
    pub fn as_longs(&self) -> LongSequence {
        self.map(i64::from)
    }

    /// Converts each element to `f64` exactly.
    pub fn as_doubles(&self) -> DoubleSequence {
        self.map(f64::from)
    }
}

// ── i64 ──

impl Sequence<i64> {
    /// `from` to `to`, both inclusive. Counts down when `from > to`.
    pub fn range(from: i64, to: i64) -> LongSequence {
        Sequence::from_iterable(move || -> Box<dyn Iterator<Item = i64>> {
            if from <= to {
                Box::new(from..=to)
            } else {
                Box::new((to..=from).rev())
            }
        })
    }

    /// `from`, `from + 1`, ... up to `i64::MAX`.
    pub fn range_from(from: i64) -> LongSequence {
        Sequence::from_iterable(move || from..=i64::MAX)
    }

    /// Wrapping sum.
    pub fn sum(&self) -> SeqResult<i64> {
        self.fold(0i64, i64::wrapping_add)
    }

    /// The arithmetic mean, or `None` for an empty sequence.
    #[allow(clippy::cast_precision_loss, reason = "averages are approximate by nature")]
    pub fn average(&self) -> SeqResult<Option<f64>> {
        let (total, count) = self.fold((0f64, 0usize), |(total, count), n| {
            (total + n as f64, count + 1)
        })?;
        Ok(average_of(total, count))
    }

    /// Truncating conversion to `i32`.
    #[allow(clippy::cast_possible_truncation, reason = "truncation is the documented behavior")]
    pub fn as_ints(&self) -> IntSequence {
        self.map(|n| n as i32)
    }

    /// Converts each element to the nearest `f64`.
    #[allow(clippy::cast_precision_loss, reason = "large longs round to the nearest double")]
    pub fn as_doubles(&self) -> DoubleSequence {
        self.map(|n| n as f64)
    }
}

// ── f64 ──

impl Sequence<f64> {
    /// Floating-point sum in traversal order.
    pub fn sum(&self) -> SeqResult<f64> {
        self.fold(0.0, |total, x| total + x)
    }

    /// The arithmetic mean, or `None` for an empty sequence.
    pub fn average(&self) -> SeqResult<Option<f64>> {
        let (total, count) = self.fold((0.0, 0usize), |(total, count), x| (total + x, count + 1))?;
        Ok(average_of(total, count))
    }

    /// Truncates toward zero, saturating at the `i32` bounds. NaN becomes 0.
    #[allow(clippy::cast_possible_truncation, reason = "float to int casts saturate")]
    pub fn as_ints(&self) -> IntSequence {
        self.map(|x| x as i32)
    }

    /// Truncates toward zero, saturating at the `i64` bounds. NaN becomes 0.
    #[allow(clippy::cast_possible_truncation, reason = "float to int casts saturate")]
    pub fn as_longs(&self) -> LongSequence {
        self.map(|x| x as i64)
    }

    /// Sorts by [`f64::total_cmp`]: negative NaN first, positive NaN last.
    pub fn sorted_total(&self) -> DoubleSequence {
        self.sorted_by(f64::total_cmp)
    }

    /// The smallest element under [`f64::total_cmp`].
    pub fn min_total(&self) -> SeqResult<Option<f64>> {
        self.min_by(f64::total_cmp)
    }

    /// The largest element under [`f64::total_cmp`].
    pub fn max_total(&self) -> SeqResult<Option<f64>> {
        self.max_by(f64::total_cmp)
    }
}

// ── char ──

impl Sequence<char> {
    /// The characters of `text`.
    pub fn chars(text: &str) -> CharSeq {
        Sequence::of(text.chars().collect::<Vec<_>>())
    }

    /// `from` to `to`, both inclusive, skipping the surrogate gap.
    /// Counts down when `from > to`.
    pub fn char_range(from: char, to: char) -> CharSeq {
        Sequence::from_iterable(move || -> Box<dyn Iterator<Item = char>> {
            if from <= to {
                Box::new(from..=to)
            } else {
                Box::new((to..=from).rev())
            }
        })
    }

    /// Code points.
    #[allow(clippy::cast_possible_wrap, reason = "code points are below 0x110000")]
    pub fn as_ints(&self) -> IntSequence {
        self.map(|c| u32::from(c) as i32)
    }

    /// Collects the characters into a `String`.
    pub fn as_string(&self) -> SeqResult<String> {
        self.collect_into(String::new())
    }

    /// Full Unicode upper-casing. One character may become several.
    pub fn to_upper_case(&self) -> CharSeq {
        self.flat_map_iter(char::to_uppercase)
    }

    /// Full Unicode lower-casing.
    pub fn to_lower_case(&self) -> CharSeq {
        self.flat_map_iter(char::to_lowercase)
    }
}

#[cfg(test)]
mod tests;
