// SPDX-License-Identifier: MPL-2.0
//! Cat-of-the-day content used by the demo screen.
//!
//! A refresh picks the next cat from a fixed list after a simulated delay.

use chrono::{DateTime, Local};
use std::time::Duration;

/// One entry of the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cat {
    pub name: &'static str,
    /// Breed or place the cat comes from.
    pub origin: &'static str,
    pub glyph: &'static str,
    pub fact: &'static str,
}

pub const CATS: &[Cat] = &[
    Cat {
        name: "Miso",
        origin: "Japanese Bobtail, Japan",
        glyph: "🐈",
        fact: "Cats spend roughly two thirds of the day asleep.",
    },
    Cat {
        name: "Pixel",
        origin: "Siamese, Thailand",
        glyph: "🐱",
        fact: "A group of kittens is called a kindle.",
    },
    Cat {
        name: "Biscuit",
        origin: "British Shorthair, United Kingdom",
        glyph: "😺",
        fact: "Cats have a third eyelid called the haw.",
    },
    Cat {
        name: "Nimbus",
        origin: "Bombay, United States",
        glyph: "🐈‍⬛",
        fact: "Most cats cannot taste sweetness.",
    },
    Cat {
        name: "Clementine",
        origin: "Turkish Van, Turkey",
        glyph: "😸",
        fact: "A cat's whiskers are roughly as wide as its body.",
    },
];

/// Which cat is shown and when the feed last changed.
#[derive(Debug, Clone, Default)]
pub struct CatFeed {
    index: usize,
    refresh_count: u32,
    last_refreshed: Option<DateTime<Local>>,
}

impl CatFeed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> &'static Cat {
        &CATS[self.index % CATS.len()]
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn refresh_count(&self) -> u32 {
        self.refresh_count
    }

    #[must_use]
    pub fn last_refreshed(&self) -> Option<DateTime<Local>> {
        self.last_refreshed
    }

    /// Shows the cat at `index` and stamps the refresh time.
    pub fn show(&mut self, index: usize, at: DateTime<Local>) {
        self.index = index % CATS.len();
        self.refresh_count = self.refresh_count.saturating_add(1);
        self.last_refreshed = Some(at);
    }
}

/// Index of the cat following `current`.
#[must_use]
pub fn next_index(current: usize) -> usize {
    (current + 1) % CATS.len()
}

/// Simulates fetching a new cat: waits `duration`, then returns the next index.
pub async fn refresh(duration: Duration, current: usize) -> usize {
    log::debug!("fetching cat after {} ms", duration.as_millis());
    tokio::time::sleep(duration).await;
    next_index(current)
}
