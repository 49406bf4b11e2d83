//! Hover text scramble for navigation labels.
//!
//! Each item carries a generation counter. Starting or cancelling an
//! animation bumps it, and a [`ScrambleToken`] is only honoured while its
//! generation is current, so a frame callback that outlives a pointer-leave
//! cannot write stale text back over the restored label.

use crate::constants::{SCRAMBLE_ALPHABET, SCRAMBLE_STEPS};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrambleToken {
    index: usize,
    generation: u64,
}

impl ScrambleToken {
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrambleStep {
    /// Animation continues; the label now reads this text.
    Running(String),
    /// Final step; the text equals the canonical label.
    Done(String),
    /// The token was invalidated by a leave or a newer enter. Nothing was written.
    Stale,
}

#[derive(Clone, Debug)]
struct NavItem {
    canonical: String,
    display: String,
    generation: u64,
    step: u32,
    active: bool,
}

#[derive(Clone, Debug)]
pub struct NavLabels {
    items: Vec<NavItem>,
    total_steps: u32,
}

impl NavLabels {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = labels
            .into_iter()
            .map(|l| {
                let canonical = l.into();
                NavItem {
                    display: canonical.clone(),
                    canonical,
                    generation: 0,
                    step: 0,
                    active: false,
                }
            })
            .collect();
        Self {
            items,
            total_steps: SCRAMBLE_STEPS,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn display(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(|it| it.display.as_str())
    }

    pub fn canonical(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(|it| it.canonical.as_str())
    }

    pub fn is_animating(&self, index: usize) -> bool {
        self.items.get(index).map(|it| it.active).unwrap_or(false)
    }

    /// Pointer entered an item: restart its animation and hand out a fresh token.
    pub fn enter(&mut self, index: usize) -> Option<ScrambleToken> {
        let item = self.items.get_mut(index)?;
        item.generation = item.generation.wrapping_add(1);
        item.step = 0;
        item.active = true;
        Some(ScrambleToken {
            index,
            generation: item.generation,
        })
    }

    /// Pointer left an item: invalidate any in-flight token and restore the label.
    pub fn leave(&mut self, index: usize) -> Option<&str> {
        let item = self.items.get_mut(index)?;
        item.generation = item.generation.wrapping_add(1);
        item.active = false;
        item.display.clone_from(&item.canonical);
        Some(item.display.as_str())
    }

    /// Enter an item and run its first frame immediately, so the label changes
    /// on the same event rather than a frame later.
    pub fn begin<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
    ) -> Option<(ScrambleToken, ScrambleStep)> {
        let token = self.enter(index)?;
        let first = self.advance(token, rng);
        Some((token, first))
    }

    /// Run one frame of the animation owned by `token`.
    pub fn advance<R: Rng + ?Sized>(&mut self, token: ScrambleToken, rng: &mut R) -> ScrambleStep {
        let total = self.total_steps;
        let Some(item) = self.items.get_mut(token.index) else {
            return ScrambleStep::Stale;
        };
        if !item.active || item.generation != token.generation {
            return ScrambleStep::Stale;
        }
        item.step = (item.step + 1).min(total);
        item.display = scramble_frame(&item.canonical, item.step, total, rng);
        if item.step >= total {
            item.active = false;
            ScrambleStep::Done(item.display.clone())
        } else {
            ScrambleStep::Running(item.display.clone())
        }
    }
}

/// Text shown at `step` of `total`: the revealed prefix is canonical, the rest random.
pub fn scramble_frame<R: Rng + ?Sized>(canonical: &str, step: u32, total: u32, rng: &mut R) -> String {
    let len = canonical.chars().count();
    let revealed = if total == 0 {
        len as f32
    } else {
        (step as f32 / total as f32) * len as f32
    };
    canonical
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            if (i as f32) < revealed {
                ch
            } else {
                SCRAMBLE_ALPHABET[rng.gen_range(0..SCRAMBLE_ALPHABET.len())] as char
            }
        })
        .collect()
}
