//! Ranking model: validated (name, score) entries and the column geometry
//! shared by every scoreboard layout.

use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;

use crate::rendering::font::Font;
use crate::{Error, Result};

/// A numeric score as supplied by the caller
///
/// Integers and reals are kept apart so that `30` is displayed as `30` and
/// `30.0` as `30.0`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Int(i64),
    Real(f64),
}

impl Score {
    pub fn value(&self) -> f64 {
        match *self {
            Score::Int(v) => v as f64,
            Score::Real(v) => v,
        }
    }

    /// Exact numeric ordering. Integers are never rounded through `f64`, so
    /// distinct scores beyond 2^53 still compare unequal. NaN sorts as in
    /// [`f64::total_cmp`].
    pub fn total_cmp(&self, other: &Score) -> Ordering {
        match (*self, *other) {
            (Score::Int(a), Score::Int(b)) => a.cmp(&b),
            (Score::Real(a), Score::Real(b)) => a.total_cmp(&b),
            (Score::Int(a), Score::Real(b)) => cmp_int_real(a, b),
            (Score::Real(a), Score::Int(b)) => cmp_int_real(b, a).reverse(),
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Score::Int(_) => true,
            Score::Real(v) => v.is_finite(),
        }
    }
}

fn cmp_int_real(i: i64, r: f64) -> Ordering {
    // 2^63, the first float above every i64
    const I64_END: f64 = 9_223_372_036_854_775_808.0;
    if r.is_nan() {
        return (i as f64).total_cmp(&r);
    }
    if r >= I64_END {
        return Ordering::Less;
    }
    if r < -I64_END {
        return Ordering::Greater;
    }
    // r is in i64 range, so its integer part converts exactly
    let whole = r.trunc() as i64;
    i.cmp(&whole)
        .then_with(|| 0.0_f64.partial_cmp(&r.fract()).unwrap_or(Ordering::Equal))
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Score::Int(v) => write!(f, "{v}"),
            Score::Real(v) if v.fract() == 0.0 && v.abs() < 1e16 => write!(f, "{v:.1}"),
            Score::Real(v) => write!(f, "{v}"),
        }
    }
}

impl From<i32> for Score {
    fn from(v: i32) -> Self {
        Score::Int(v.into())
    }
}

impl From<u32> for Score {
    fn from(v: u32) -> Self {
        Score::Int(v.into())
    }
}

impl From<i64> for Score {
    fn from(v: i64) -> Self {
        Score::Int(v)
    }
}

impl From<f64> for Score {
    fn from(v: f64) -> Self {
        Score::Real(v)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub score: Score,
}

impl Entry {
    pub fn new(name: impl Into<String>, score: impl Into<Score>) -> Self {
        Self {
            name: name.into(),
            score: score.into(),
        }
    }
}

/// Validated entries in display order
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    entries: Vec<Entry>,
}

impl Ranking {
    /// Validate `pairs` and sort them by descending score.
    ///
    /// The sort is stable: entries with equal scores keep their input order
    /// and still receive distinct sequential ranks.
    pub fn normalize<I, N, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<Score>,
    {
        let mut ranking = Self::positional(pairs)?;
        if ranking.entries.is_empty() {
            return Err(Error::validation("a leaderboard needs at least one entry"));
        }
        ranking
            .entries
            .sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(ranking)
    }

    /// Validate `pairs` without reordering them
    pub fn positional<I, N, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<Score>,
    {
        let entries = pairs
            .into_iter()
            .map(|(name, score)| Entry::new(name, score))
            .collect::<Vec<_>>();
        for (i, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(Error::validation(format!("entry {i} has an empty name")));
            }
            if !entry.score.is_finite() {
                return Err(Error::validation(format!(
                    "entry {i} ({}) has a non-finite score",
                    entry.name
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries paired with their 1-based rank
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &Entry)> {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e))
    }
}

/// Column widths that keep every row aligned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Widest rank label (`"1"`, `"10"`, ...)
    pub rank_width: u32,
    pub name_width: u32,
    pub score_width: u32,
    /// Tallest line among the fonts used
    pub text_height: u32,
}

/// Measure the widest name (in `name_font`) and the widest rank label and
/// score string (in `score_font`).
pub fn layout_metrics(ranking: &Ranking, name_font: Font, score_font: Font) -> LayoutMetrics {
    let name_width = ranking
        .entries
        .iter()
        .map(|e| name_font.text_width(&e.name))
        .max()
        .unwrap_or(0);
    let score_width = ranking
        .entries
        .iter()
        .map(|e| score_font.text_width(&e.score.to_string()))
        .max()
        .unwrap_or(0);
    let rank_width = score_font.text_width(&ranking.len().to_string());
    LayoutMetrics {
        rank_width,
        name_width,
        score_width,
        text_height: name_font.line_height().max(score_font.line_height()),
    }
}
