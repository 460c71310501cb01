use atomic_float::AtomicF32;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::OnceLock;

use crate::config::SimConfig;

/// Colour a fresh home trail starts from
pub const HOME_FADE_START: [f32; 3] = [1.0, 1.0, 1.0];
/// Colour a fresh food trail starts from
pub const FOOD_FADE_START: [f32; 3] = [0.4, 0.3, 0.9];

/// Which of the two trails a marker belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PheromoneKind {
    /// Laid by hungry ants, followed by ants carrying food
    Home,
    /// Laid by ants carrying food, followed by hungry ants
    Food,
}

/// One trail marker. Written concurrently by ants; races are last-writer-wins.
#[derive(Debug)]
pub struct Pheromone {
    present: AtomicBool,
    level: AtomicF32,
    decay_rate: f32,
    deposited_at: AtomicU64,
}

impl Pheromone {
    fn new(level: f32, decay_rate: f32) -> Self {
        Self {
            present: AtomicBool::new(false),
            level: AtomicF32::new(level),
            decay_rate,
            deposited_at: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        self.present.load(Ordering::Relaxed)
    }

    /// Current strength; edges read this live
    #[inline]
    pub fn level(&self) -> f32 {
        self.level.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn decay_rate(&self) -> f32 {
        self.decay_rate
    }

    #[inline]
    pub fn deposited_at(&self) -> u64 {
        self.deposited_at.load(Ordering::Relaxed)
    }

    fn set_level(&self, level: f32) {
        self.level.store(level.max(0.0), Ordering::Relaxed);
    }

    fn deposit(&self, strength: f32, now: u64) {
        self.present.store(true, Ordering::Relaxed);
        self.set_level(strength);
        self.deposited_at.store(now, Ordering::Relaxed);
    }

    /// Drop the level by one decay step, never below zero
    fn weaken(&self) {
        let next = (self.level() - self.decay_rate).max(0.0);
        self.level.store(next, Ordering::Relaxed);
    }
}

/// Renderer colours for both trails; allocated on an ant's first visit
#[derive(Debug)]
pub struct Fade {
    home: [AtomicF32; 3],
    food: [AtomicF32; 3],
}

impl Fade {
    fn new() -> Self {
        Self {
            home: HOME_FADE_START.map(AtomicF32::new),
            food: FOOD_FADE_START.map(AtomicF32::new),
        }
    }

    fn channels(&self, kind: PheromoneKind) -> &[AtomicF32; 3] {
        match kind {
            PheromoneKind::Home => &self.home,
            PheromoneKind::Food => &self.food,
        }
    }

    fn reset(&self) {
        for (ch, v) in self.home.iter().zip(HOME_FADE_START) {
            ch.store(v, Ordering::Relaxed);
        }
        for (ch, v) in self.food.iter().zip(FOOD_FADE_START) {
            ch.store(v, Ordering::Relaxed);
        }
    }

    pub fn colour(&self, kind: PheromoneKind) -> [f32; 3] {
        let ch = self.channels(kind);
        [
            ch[0].load(Ordering::Relaxed),
            ch[1].load(Ordering::Relaxed),
            ch[2].load(Ordering::Relaxed),
        ]
    }

    /// Unclamped: colours may go negative
    fn darken(&self, kind: PheromoneKind, by: f32) {
        for ch in self.channels(kind) {
            ch.fetch_sub(by, Ordering::Relaxed);
        }
    }
}

/// One grid square
#[derive(Debug)]
pub struct Cell {
    pub(crate) nest: bool,
    pub(crate) food: bool,
    ant: AtomicBool,
    home: Pheromone,
    food_trail: Pheromone,
    fade: OnceLock<Fade>,
}

impl Cell {
    /// Empty cell: no flags, default strengths, fade not yet allocated
    pub fn new(config: &SimConfig) -> Self {
        Self {
            nest: false,
            food: false,
            ant: AtomicBool::new(false),
            home: Pheromone::new(config.alpha, config.gamma),
            food_trail: Pheromone::new(config.beta, config.gamma / 3.0),
            fade: OnceLock::new(),
        }
    }

    #[inline]
    pub fn is_nest(&self) -> bool {
        self.nest
    }

    #[inline]
    pub fn is_food(&self) -> bool {
        self.food
    }

    #[inline]
    pub fn has_ant(&self) -> bool {
        self.ant.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn set_ant(&self, present: bool) {
        self.ant.store(present, Ordering::Relaxed);
    }

    #[inline]
    pub fn pheromone(&self, kind: PheromoneKind) -> &Pheromone {
        match kind {
            PheromoneKind::Home => &self.home,
            PheromoneKind::Food => &self.food_trail,
        }
    }

    /// Mark the trail present with the given strength, stamped at `now`
    pub fn deposit(&self, kind: PheromoneKind, strength: f32, now: u64) {
        self.pheromone(kind).deposit(strength, now);
    }

    /// Restart both fade colours, allocating them on first use
    pub fn refresh_fade(&self) {
        self.fade.get_or_init(Fade::new).reset();
    }

    pub fn fade(&self) -> Option<&Fade> {
        self.fade.get()
    }

    /// Apply one decay event to `kind` if its marker is older than `decay_after`.
    /// Returns whether anything changed.
    pub(crate) fn decay_trail(&self, kind: PheromoneKind, now: u64, decay_after: u64) -> bool {
        let trail = self.pheromone(kind);
        if now.saturating_sub(trail.deposited_at()) <= decay_after {
            return false;
        }
        if let Some(fade) = self.fade.get() {
            fade.darken(kind, trail.decay_rate());
        }
        trail.weaken();
        true
    }
}
