//! Drag controller
//!
//! Turns pointer events and timer callbacks into [`Effect`]s for the page to
//! apply. The controller never touches the DOM and never sleeps: delays come
//! back to the caller as [`Effect::Schedule`] and are fed in again through
//! [`DragController::on_timer`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{DropGeometry, DropZone, classify_drop, within_evade_radius};
use super::rect::Rect;
use super::state::{
    EvasionState, HeartPlacement, PendingDodge, Phase, PointerId, PointerSample,
    PointerSession,
};
use crate::settings::{BurstParams, GameConfig};

/// CSS animation played on the feedback line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackAnim {
    Shake,
    Pulse,
}

/// Delayed callbacks the controller asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Land the dodge started with this sequence number
    DodgeMove { seq: u32 },
    /// End the cooldown of the dodge with this sequence number
    DodgeCooldown { seq: u32 },
}

/// A change the page should make
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Drag started: follow the pointer 1:1, grabbing cursor
    Grab,
    /// Drag ended: springy transition back on, grab cursor
    Release,
    PlaceHeart(HeartPlacement),
    /// Shrink and fade the trash can where it currently is
    DodgeStart { offset: Vec2 },
    /// Put the trash can at this offset, full size and opacity
    MoveTrash(Vec2),
    Feedback { text: String, anim: FeedbackAnim },
    /// Hide the interactive card and reveal the success panel
    ShowSuccess,
    Burst(BurstParams),
    /// Repeat the burst every `interval_ms` until cancelled
    StartBurstLoop { interval_ms: u32, params: BurstParams },
    Schedule { delay_ms: u32, timer: Timer },
}

/// The whole interactive session
#[derive(Debug, Clone)]
pub struct DragController {
    config: GameConfig,
    rng: Pcg32,
    session: Option<PointerSession>,
    heart: HeartPlacement,
    evasion: EvasionState,
    phase: Phase,
}

impl DragController {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config: config.validated(),
            rng: Pcg32::seed_from_u64(seed),
            session: None,
            heart: HeartPlacement::Anchored,
            evasion: EvasionState::default(),
            phase: Phase::default(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Confirmations given so far (saturates at the required count once won)
    pub fn confirmations(&self) -> usize {
        match self.phase {
            Phase::Idle { confirmations } => confirmations,
            Phase::Won => self.config.confirmations_required(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The contact currently being followed, if any
    pub fn tracked_pointer(&self) -> Option<PointerId> {
        self.session.map(|s| s.pointer)
    }

    pub fn heart(&self) -> HeartPlacement {
        self.heart
    }

    pub fn trash_offset(&self) -> Vec2 {
        self.evasion.offset
    }

    pub fn is_cooling(&self) -> bool {
        self.evasion.cooling
    }

    /// Pointer down on the heart
    ///
    /// `origin` is the heart's current left/top in px. Ignored while another
    /// contact is already dragging.
    pub fn begin_drag(&mut self, pointer: PointerSample, origin: Vec2) -> Vec<Effect> {
        if self.session.is_some() {
            return Vec::new();
        }
        self.session = Some(PointerSession {
            pointer: pointer.id,
            start: pointer.pos,
            origin,
        });
        self.heart = HeartPlacement::At(origin);
        vec![Effect::Grab]
    }

    /// Pointer moved; `trash` is the trash can's rendered box right now
    pub fn update_drag(&mut self, pointer: PointerSample, trash: Rect) -> Vec<Effect> {
        let Some(session) = self.session else {
            return Vec::new();
        };
        if session.pointer != pointer.id {
            return Vec::new();
        }

        let pos = session.position_for(pointer.pos);
        self.heart = HeartPlacement::At(pos);
        let mut effects = vec![Effect::PlaceHeart(self.heart)];

        let close = within_evade_radius(pointer.pos, &trash, self.config.evade_radius);
        if close && !self.evasion.cooling {
            self.start_dodge(false, &mut effects);
        }
        effects
    }

    /// Pointer released; boxes are measured after the last move was applied
    pub fn end_drag(&mut self, pointer: PointerSample, geometry: &DropGeometry) -> Vec<Effect> {
        match self.session {
            Some(session) if session.pointer == pointer.id => {}
            _ => return Vec::new(),
        }
        self.session = None;

        let mut effects = vec![Effect::Release];
        let zone = classify_drop(geometry);
        log::debug!("Drop classified as {:?} in {:?}", zone, self.phase);

        match (self.phase, zone) {
            (Phase::Won, _) | (_, DropZone::Miss) => self.return_heart(&mut effects),
            (Phase::Idle { confirmations }, DropZone::Love) => {
                self.on_love_drop(confirmations, &mut effects)
            }
            (Phase::Idle { .. }, DropZone::Trash) => self.on_trash_drop(&mut effects),
        }
        effects
    }

    /// A timer requested through [`Effect::Schedule`] fired
    pub fn on_timer(&mut self, timer: Timer) -> Vec<Effect> {
        let mut effects = Vec::new();
        match timer {
            Timer::DodgeMove { seq } => {
                if seq != self.evasion.seq {
                    return effects;
                }
                let Some(pending) = self.evasion.pending.take() else {
                    return effects;
                };
                self.evasion.offset = pending.offset;
                effects.push(Effect::MoveTrash(pending.offset));
                if pending.announce {
                    let text = self.random_trash_phrase();
                    effects.push(Effect::Feedback {
                        text,
                        anim: FeedbackAnim::Shake,
                    });
                }
                effects.push(Effect::Schedule {
                    delay_ms: self.config.dodge_cooldown_ms,
                    timer: Timer::DodgeCooldown { seq },
                });
            }
            Timer::DodgeCooldown { seq } => {
                if seq == self.evasion.seq {
                    self.evasion.cooling = false;
                }
            }
        }
        effects
    }

    fn on_love_drop(&mut self, confirmations: usize, effects: &mut Vec<Effect>) {
        let required = self.config.confirmations_required();
        if confirmations < required {
            let text = self.config.confirm_phrases[confirmations].clone();
            effects.push(Effect::Feedback {
                text,
                anim: FeedbackAnim::Pulse,
            });
            self.phase = Phase::Idle {
                confirmations: confirmations + 1,
            };
            log::info!("Confirmation {}/{}", confirmations + 1, required);
            self.return_heart(effects);
            self.reset_trash(effects);
        } else {
            self.phase = Phase::Won;
            log::info!("All {} confirmations given, celebrating", required);
            effects.push(Effect::Feedback {
                text: self.config.success_message.clone(),
                anim: FeedbackAnim::Pulse,
            });
            self.return_heart(effects);
            effects.push(Effect::ShowSuccess);
            effects.push(Effect::Burst(self.config.burst));
            effects.push(Effect::StartBurstLoop {
                interval_ms: self.config.burst_interval_ms,
                params: self.config.burst,
            });
        }
    }

    fn on_trash_drop(&mut self, effects: &mut Vec<Effect>) {
        log::info!("Heart dropped in the trash");
        effects.push(Effect::Feedback {
            text: self.config.trash_drop_message.clone(),
            anim: FeedbackAnim::Shake,
        });
        self.return_heart(effects);
        // Forced: runs even mid-cooldown, and keeps the drop message on screen
        self.start_dodge(true, effects);
    }

    fn return_heart(&mut self, effects: &mut Vec<Effect>) {
        self.heart = HeartPlacement::Anchored;
        effects.push(Effect::PlaceHeart(HeartPlacement::Anchored));
    }

    /// Send the trash can home, dropping any dodge that has not landed yet
    fn reset_trash(&mut self, effects: &mut Vec<Effect>) {
        if self.evasion.pending.take().is_some() {
            // Its cooldown timer was never scheduled
            self.evasion.cooling = false;
        }
        self.evasion.offset = Vec2::ZERO;
        effects.push(Effect::MoveTrash(Vec2::ZERO));
    }

    /// Shrink now, move after a short delay, cool down after that
    ///
    /// Cooldown is set before anything is scheduled.
    fn start_dodge(&mut self, forced: bool, effects: &mut Vec<Effect>) {
        self.evasion.cooling = true;
        self.evasion.seq = self.evasion.seq.wrapping_add(1);
        let offset = self.random_offset();
        self.evasion.pending = Some(PendingDodge {
            offset,
            announce: !forced,
        });
        log::debug!(
            "Trash dodging to ({:.0}, {:.0}){}",
            offset.x,
            offset.y,
            if forced { " [forced]" } else { "" }
        );

        effects.push(Effect::DodgeStart {
            offset: self.evasion.offset,
        });
        effects.push(Effect::Schedule {
            delay_ms: self.config.dodge_move_delay_ms,
            timer: Timer::DodgeMove {
                seq: self.evasion.seq,
            },
        });
    }

    /// New offset from the layout position, leaning upward
    fn random_offset(&mut self) -> Vec2 {
        let x = self
            .rng
            .random_range(-self.config.evade_range_x..=self.config.evade_range_x);
        let y = self
            .rng
            .random_range(-self.config.evade_range_up..=self.config.evade_range_down);
        Vec2::new(x, y)
    }

    fn random_trash_phrase(&mut self) -> String {
        let idx = self.rng.random_range(0..self.config.trash_phrases.len());
        self.config.trash_phrases[idx].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    const LOVE: Rect = Rect {
        left: 40.0,
        top: 500.0,
        width: 120.0,
        height: 120.0,
    };
    const TRASH: Rect = Rect {
        left: 240.0,
        top: 500.0,
        width: 120.0,
        height: 120.0,
    };
    const HEART_SIZE: f32 = 80.0;

    /// Controller plus a fake clock that fires scheduled timers in order
    struct Harness {
        ctrl: DragController,
        now: u32,
        queue: Vec<(u32, Timer)>,
        log: Vec<(u32, Effect)>,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_config(GameConfig::default())
        }

        fn with_config(config: GameConfig) -> Self {
            Self {
                ctrl: DragController::new(config, 42),
                now: 0,
                queue: Vec::new(),
                log: Vec::new(),
            }
        }

        fn apply(&mut self, effects: Vec<Effect>) -> Vec<Effect> {
            for effect in &effects {
                if let Effect::Schedule { delay_ms, timer } = effect {
                    self.queue.push((self.now + delay_ms, *timer));
                }
                self.log.push((self.now, effect.clone()));
            }
            effects
        }

        /// Advance the clock, firing due timers in deadline order
        fn advance(&mut self, ms: u32) {
            let target = self.now + ms;
            loop {
                self.queue.sort_by_key(|(due, _)| *due);
                let next = self.queue.first().copied();
                match next {
                    Some((due, timer)) if due <= target => {
                        self.queue.remove(0);
                        self.now = due;
                        let effects = self.ctrl.on_timer(timer);
                        self.apply(effects);
                    }
                    _ => break,
                }
            }
            self.now = target;
        }

        /// Trash box as rendered with the current offset
        fn trash(&self) -> Rect {
            TRASH.translated(self.ctrl.trash_offset())
        }

        /// Drag from the heart's rest spot and release with its centre at `to`
        fn drop_at(&mut self, to: Vec2) -> Vec<Effect> {
            let start = Vec2::new(200.0, 200.0);
            let origin = start;
            let e = self.ctrl.begin_drag(PointerSample::mouse(start.x, start.y), origin);
            self.apply(e);
            let geometry = DropGeometry {
                heart: Rect::from_center(to, HEART_SIZE, HEART_SIZE),
                love: LOVE,
                trash: self.trash(),
            };
            self.ctrl.end_drag(PointerSample::mouse(to.x, to.y), &geometry)
        }

        fn drop_on_love(&mut self) -> Vec<Effect> {
            let e = self.drop_at(LOVE.center());
            self.apply(e)
        }

        fn trash_moves(&self) -> Vec<u32> {
            self.log
                .iter()
                .filter(|(_, e)| matches!(e, Effect::MoveTrash(off) if *off != Vec2::ZERO))
                .map(|(t, _)| *t)
                .collect()
        }
    }

    fn feedback(effects: &[Effect]) -> Option<(&str, FeedbackAnim)> {
        effects.iter().find_map(|e| match e {
            Effect::Feedback { text, anim } => Some((text.as_str(), *anim)),
            _ => None,
        })
    }

    #[test]
    fn test_begin_drag_grabs() {
        let mut h = Harness::new();
        let effects = h.ctrl.begin_drag(PointerSample::mouse(10.0, 10.0), Vec2::new(50.0, 60.0));
        assert_eq!(effects, vec![Effect::Grab]);
        assert!(h.ctrl.is_dragging());
        assert_eq!(h.ctrl.tracked_pointer(), Some(PointerId::Mouse));
        assert_eq!(h.ctrl.heart(), HeartPlacement::At(Vec2::new(50.0, 60.0)));
    }

    #[test]
    fn test_second_contact_is_ignored() {
        let mut h = Harness::new();
        h.ctrl.begin_drag(PointerSample::touch(1, 10.0, 10.0), Vec2::new(50.0, 50.0));
        assert!(
            h.ctrl
                .begin_drag(PointerSample::touch(2, 90.0, 90.0), Vec2::ZERO)
                .is_empty()
        );
        // Moves from the second finger do nothing
        assert!(
            h.ctrl
                .update_drag(PointerSample::touch(2, 95.0, 95.0), TRASH)
                .is_empty()
        );
        let effects = h.ctrl.update_drag(PointerSample::touch(1, 20.0, 15.0), TRASH);
        assert_eq!(
            effects,
            vec![Effect::PlaceHeart(HeartPlacement::At(Vec2::new(60.0, 55.0)))]
        );
    }

    #[test]
    fn test_update_and_end_without_session_are_noops() {
        let mut h = Harness::new();
        assert!(h.ctrl.update_drag(PointerSample::mouse(1.0, 1.0), TRASH).is_empty());
        let geometry = DropGeometry {
            heart: Rect::from_center(LOVE.center(), HEART_SIZE, HEART_SIZE),
            love: LOVE,
            trash: TRASH,
        };
        assert!(h.ctrl.end_drag(PointerSample::mouse(1.0, 1.0), &geometry).is_empty());
        assert_eq!(h.ctrl.confirmations(), 0);
    }

    #[test]
    fn test_end_from_other_pointer_keeps_session() {
        let mut h = Harness::new();
        h.ctrl.begin_drag(PointerSample::touch(7, 0.0, 0.0), Vec2::ZERO);
        let geometry = DropGeometry {
            heart: Rect::from_center(LOVE.center(), HEART_SIZE, HEART_SIZE),
            love: LOVE,
            trash: TRASH,
        };
        assert!(h.ctrl.end_drag(PointerSample::touch(8, 0.0, 0.0), &geometry).is_empty());
        assert!(h.ctrl.is_dragging());
        assert!(!h.ctrl.end_drag(PointerSample::touch(7, 0.0, 0.0), &geometry).is_empty());
        assert!(!h.ctrl.is_dragging());
    }

    #[test]
    fn test_first_love_drop_shows_first_phrase() {
        let mut h = Harness::new();
        let effects = h.drop_on_love();
        assert_eq!(
            feedback(&effects),
            Some(("Are you sure? 🥺", FeedbackAnim::Pulse))
        );
        assert_eq!(h.ctrl.phase(), Phase::Idle { confirmations: 1 });
        assert_eq!(h.ctrl.heart(), HeartPlacement::Anchored);
        assert!(effects.contains(&Effect::Release));
        assert!(effects.contains(&Effect::PlaceHeart(HeartPlacement::Anchored)));
        assert!(effects.contains(&Effect::MoveTrash(Vec2::ZERO)));
    }

    #[test]
    fn test_phrases_shown_in_order_then_win() {
        let mut h = Harness::new();
        let phrases = h.ctrl.config().confirm_phrases.clone();
        for (i, phrase) in phrases.iter().enumerate() {
            let effects = h.drop_on_love();
            assert_eq!(feedback(&effects).map(|f| f.0), Some(phrase.as_str()));
            assert_eq!(h.ctrl.confirmations(), i + 1);
        }

        let effects = h.drop_on_love();
        assert_eq!(h.ctrl.phase(), Phase::Won);
        assert_eq!(feedback(&effects).map(|f| f.0), Some("YAY! I LOVE YOU! ❤️"));
        assert!(effects.contains(&Effect::ShowSuccess));
        assert!(effects.contains(&Effect::Burst(BurstParams::default())));
        assert!(effects.contains(&Effect::StartBurstLoop {
            interval_ms: BURST_INTERVAL_MS,
            params: BurstParams::default(),
        }));
    }

    #[test]
    fn test_won_is_terminal() {
        let mut config = GameConfig::default();
        config.confirm_phrases = vec!["Sure?".to_string()];
        let mut h = Harness::with_config(config);
        h.drop_on_love();
        h.drop_on_love();
        assert_eq!(h.ctrl.phase(), Phase::Won);

        for to in [LOVE.center(), TRASH.center(), Vec2::new(0.0, 0.0)] {
            let effects = h.drop_at(to);
            assert_eq!(
                effects,
                vec![Effect::Release, Effect::PlaceHeart(HeartPlacement::Anchored)]
            );
            assert_eq!(h.ctrl.phase(), Phase::Won);
        }
        assert_eq!(h.ctrl.confirmations(), 1);
    }

    #[test]
    fn test_miss_returns_heart_without_state_change() {
        let mut h = Harness::new();
        let effects = h.drop_at(Vec2::new(200.0, 100.0));
        assert_eq!(
            effects,
            vec![Effect::Release, Effect::PlaceHeart(HeartPlacement::Anchored)]
        );
        assert_eq!(h.ctrl.confirmations(), 0);
    }

    #[test]
    fn test_trash_drop_rejects_and_forces_dodge() {
        let mut h = Harness::new();
        let effects = h.drop_at(TRASH.center());
        let effects = h.apply(effects);
        assert_eq!(
            feedback(&effects),
            Some(("Hey! I said NO! 😡", FeedbackAnim::Shake))
        );
        assert!(effects.contains(&Effect::PlaceHeart(HeartPlacement::Anchored)));
        assert!(effects.iter().any(|e| matches!(e, Effect::DodgeStart { .. })));
        assert!(h.ctrl.is_cooling());
        assert_eq!(h.ctrl.confirmations(), 0);

        h.advance(DODGE_MOVE_DELAY_MS);
        assert_ne!(h.ctrl.trash_offset(), Vec2::ZERO);
        // The drop message stays; no trash phrase on a forced dodge
        let after: Vec<_> = h
            .log
            .iter()
            .filter(|(t, _)| *t > 0)
            .map(|(_, e)| e.clone())
            .collect();
        assert!(feedback(&after).is_none());
    }

    #[test]
    fn test_trash_drop_forces_dodge_during_cooldown() {
        let mut h = Harness::new();
        // Spook the trash so it is cooling
        h.ctrl.begin_drag(PointerSample::mouse(0.0, 0.0), Vec2::ZERO);
        let c = TRASH.center();
        let e = h.ctrl.update_drag(PointerSample::mouse(c.x, c.y), TRASH);
        h.apply(e);
        assert!(h.ctrl.is_cooling());
        h.advance(DODGE_MOVE_DELAY_MS + 10);

        // Love far away so the moved trash can never overlaps it
        let geometry = DropGeometry {
            heart: Rect::from_center(h.trash().center(), HEART_SIZE, HEART_SIZE),
            love: Rect::new(-1000.0, -1000.0, 10.0, 10.0),
            trash: h.trash(),
        };
        let effects = h.ctrl.end_drag(PointerSample::mouse(0.0, 0.0), &geometry);
        let effects = h.apply(effects);
        assert!(effects.iter().any(|e| matches!(e, Effect::DodgeStart { .. })));

        // The older cooldown timer must not end the newer dodge's cooldown
        h.advance(DODGE_COOLDOWN_MS);
        assert!(h.ctrl.is_cooling());
        h.advance(DODGE_MOVE_DELAY_MS + DODGE_COOLDOWN_MS);
        assert!(!h.ctrl.is_cooling());
        assert_eq!(h.trash_moves().len(), 2);
    }

    #[test]
    fn test_proximity_dodge_timeline() {
        let mut h = Harness::new();
        h.ctrl.begin_drag(PointerSample::mouse(0.0, 0.0), Vec2::ZERO);
        let near = TRASH.center() + Vec2::new(100.0, 0.0);
        let e = h.ctrl.update_drag(PointerSample::mouse(near.x, near.y), TRASH);
        let effects = h.apply(e);
        assert!(effects.contains(&Effect::DodgeStart { offset: Vec2::ZERO }));
        assert!(h.ctrl.is_cooling());
        assert_eq!(h.ctrl.trash_offset(), Vec2::ZERO);

        h.advance(DODGE_MOVE_DELAY_MS);
        let offset = h.ctrl.trash_offset();
        assert_ne!(offset, Vec2::ZERO);
        assert!(offset.x.abs() <= EVADE_RANGE_X);
        assert!(offset.y >= -EVADE_RANGE_UP && offset.y <= EVADE_RANGE_DOWN);
        let (_, last) = h.log.last().unwrap();
        assert!(matches!(last, Effect::Schedule { .. }));
        let landed: Vec<_> = h
            .log
            .iter()
            .filter(|(t, _)| *t == DODGE_MOVE_DELAY_MS)
            .map(|(_, e)| e.clone())
            .collect();
        let (text, anim) = feedback(&landed).unwrap();
        assert_eq!(anim, FeedbackAnim::Shake);
        assert!(h.ctrl.config().trash_phrases.iter().any(|p| p == text));

        assert!(h.ctrl.is_cooling());
        h.advance(DODGE_COOLDOWN_MS - 1);
        assert!(h.ctrl.is_cooling());
        h.advance(1);
        assert!(!h.ctrl.is_cooling());
    }

    #[test]
    fn test_huge_config_ranges_still_dodge() {
        let config = GameConfig::from_json(r#"{"evade_range_x": 3e38, "evade_range_down": 3e38}"#)
            .unwrap();
        let mut h = Harness::with_config(config);
        h.ctrl.begin_drag(PointerSample::mouse(0.0, 0.0), Vec2::ZERO);
        let c = TRASH.center();
        let e = h.ctrl.update_drag(PointerSample::mouse(c.x, c.y), TRASH);
        h.apply(e);
        h.advance(DODGE_MOVE_DELAY_MS);

        let offset = h.ctrl.trash_offset();
        assert!(offset.is_finite());
        assert!(offset.x.abs() <= EVADE_RANGE_MAX);
        assert!(offset.y <= EVADE_RANGE_MAX);
    }

    #[test]
    fn test_far_pointer_does_not_dodge() {
        let mut h = Harness::new();
        h.ctrl.begin_drag(PointerSample::mouse(0.0, 0.0), Vec2::ZERO);
        let far = TRASH.center() + Vec2::new(0.0, -EVADE_RADIUS);
        let effects = h.ctrl.update_drag(PointerSample::mouse(far.x, far.y), TRASH);
        assert_eq!(effects.len(), 1);
        assert!(!h.ctrl.is_cooling());
    }

    #[test]
    fn test_love_drop_cancels_unlanded_dodge() {
        let mut h = Harness::new();
        h.ctrl.begin_drag(PointerSample::mouse(0.0, 0.0), Vec2::ZERO);
        let c = TRASH.center();
        let e = h.ctrl.update_drag(PointerSample::mouse(c.x, c.y), TRASH);
        h.apply(e);
        let geometry = DropGeometry {
            heart: Rect::from_center(LOVE.center(), HEART_SIZE, HEART_SIZE),
            love: LOVE,
            trash: TRASH,
        };
        let e = h.ctrl.end_drag(PointerSample::mouse(0.0, 0.0), &geometry);
        h.apply(e);
        assert!(!h.ctrl.is_cooling());

        h.advance(1000);
        assert_eq!(h.ctrl.trash_offset(), Vec2::ZERO);
        assert!(h.trash_moves().is_empty());
    }

    #[test]
    fn test_trash_center_but_outside_love_rejects() {
        let mut h = Harness::new();
        let effects = h.drop_at(Vec2::new(TRASH.left + 1.0, TRASH.bottom()));
        assert_eq!(feedback(&effects).map(|f| f.1), Some(FeedbackAnim::Shake));
        assert_eq!(h.ctrl.confirmations(), 0);
    }

    #[test]
    fn test_same_seed_same_dodges() {
        let run = || {
            let mut h = Harness::new();
            for _ in 0..3 {
                let e = h.drop_at(TRASH.center());
                h.apply(e);
                h.advance(1000);
            }
            h.ctrl.trash_offset()
        };
        assert_eq!(run(), run());
    }

    proptest! {
        #[test]
        fn prop_heart_follows_cumulative_displacement(
            start in (0.0f32..800.0, 0.0f32..600.0),
            origin in (0.0f32..400.0, 0.0f32..400.0),
            moves in prop::collection::vec((-50.0f32..50.0, -50.0f32..50.0), 1..40),
        ) {
            let mut ctrl = DragController::new(GameConfig::default(), 1);
            let start = Vec2::new(start.0, start.1);
            let origin = Vec2::new(origin.0, origin.1);
            ctrl.begin_drag(PointerSample::mouse(start.x, start.y), origin);

            let far_trash = Rect::new(-10_000.0, -10_000.0, 1.0, 1.0);
            let mut pos = start;
            for (dx, dy) in moves {
                pos += Vec2::new(dx, dy);
                ctrl.update_drag(PointerSample::mouse(pos.x, pos.y), far_trash);
                let HeartPlacement::At(heart) = ctrl.heart() else {
                    panic!("heart should be placed while dragging");
                };
                let expected = origin + (pos - start);
                prop_assert!((heart - expected).length() < 1e-2);
            }
        }

        #[test]
        fn prop_confirmations_monotonic(zones in prop::collection::vec(0u8..3, 1..30)) {
            let mut h = Harness::new();
            let required = h.ctrl.config().confirmations_required();
            let mut prev = 0;
            let mut won = false;
            for zone in zones {
                let to = match zone {
                    0 => LOVE.center(),
                    1 => h.trash().center(),
                    _ => Vec2::new(200.0, 50.0),
                };
                let was_love = zone == 0 && !won;
                let e = h.drop_at(to);
                h.apply(e);
                h.advance(700);

                let now = h.ctrl.confirmations();
                prop_assert!(now >= prev);
                prop_assert!(now - prev <= 1);
                if won {
                    prop_assert_eq!(h.ctrl.phase(), Phase::Won);
                }
                if was_love && prev < required {
                    prop_assert_eq!(now, prev + 1);
                }
                won = h.ctrl.phase() == Phase::Won;
                prev = now;
            }
        }

        #[test]
        fn prop_proximity_dodges_respect_cooldown(
            steps in prop::collection::vec(1u32..80, 1..200),
        ) {
            let mut h = Harness::new();
            h.ctrl.begin_drag(PointerSample::mouse(0.0, 0.0), Vec2::ZERO);
            for step in steps {
                // Chase the trash can wherever it is
                let c = h.trash().center();
                let trash = h.trash();
                let e = h.ctrl.update_drag(PointerSample::mouse(c.x, c.y), trash);
                h.apply(e);
                h.advance(step);
            }
            let moves = h.trash_moves();
            for pair in moves.windows(2) {
                prop_assert!(pair[1] - pair[0] >= DODGE_COOLDOWN_MS);
            }
        }

        #[test]
        fn prop_drop_in_trash_always_rejects(
            fx in 0.0f32..=1.0,
            fy in 0.0f32..=1.0,
            confirmed in 0usize..6,
        ) {
            let mut h = Harness::new();
            for _ in 0..confirmed {
                h.drop_on_love();
            }
            let center = Vec2::new(TRASH.left + fx * TRASH.width, TRASH.top + fy * TRASH.height);
            prop_assert!(!LOVE.contains(center));

            let effects = h.drop_at(center);
            prop_assert_eq!(
                feedback(&effects),
                Some(("Hey! I said NO! 😡", FeedbackAnim::Shake))
            );
            prop_assert!(effects.iter().any(|e| matches!(e, Effect::DodgeStart { .. })), "expected a DodgeStart effect");
            prop_assert_eq!(h.ctrl.phase(), Phase::Idle { confirmations: confirmed });
        }
    }

    #[test]
    fn test_pointer_id_kinds_differ() {
        assert_ne!(PointerId::Mouse, PointerId::Touch(0));
    }
}
