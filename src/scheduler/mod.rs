//! The cooperative tick loop.
//!
//! [Engine::tick] reads the clock once and polls every subsystem against its
//! own [Timer]; whatever is due does one unit of work and nothing blocks. The
//! host calls `tick` as often as it likes, typically in a tight loop.

mod input;
mod timer;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::audio::presets::{
    BUTTON_SOUND, GAME_OVER_MELODY, LADDER_MELODY, MOVE_SOUND, SNAKE_SOUND, START_MELODY,
};
use crate::audio::ToneEngine;
use crate::board::{Board, BoardNumber};
use crate::config::{Difficulty, GameConfig};
use crate::game::{GameState, MoveReport, WarpKind};
use crate::types::{
    CellRenderer, Clock, InputSource, PlayerId, Tick, ToneOutput, VictorDeterminableGame,
};

pub use input::{Button, PUSH_BUTTON_COUNT};
pub use timer::Timer;

/// milliseconds per animation frame
pub const MOVE_SPEED: Tick = 100;
/// milliseconds between cursor blinks
pub const FLASH_PERIOD: Tick = 500;
/// milliseconds between faces while the dice rolls
pub const DICE_FACE_PERIOD: Tick = 80;
/// milliseconds per elapsed-time unit
pub const ELAPSED_TIME_PERIOD: Tick = 10;
/// milliseconds between status refreshes
pub const DISPLAY_REFRESH_PERIOD: Tick = 10;
/// joystick dead time after it hands the turn over
pub const JOYSTICK_LOCKOUT: Tick = 800;

/// Which screen the engine is on
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Phase {
    /// power-up screen with the start melody
    Title,
    /// choosing board, difficulty and players
    Setup,
    #[allow(missing_docs)]
    Playing,
    /// a winner has been decided
    GameOver {
        #[allow(missing_docs)]
        winner: PlayerId,
    },
}

/// What the status display shows
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Status {
    #[allow(missing_docs)]
    pub phase: Phase,
    /// whose turn it is
    pub current_player: PlayerId,
    /// last digit of the turns taken so far
    pub turn_digit: u8,
    #[allow(missing_docs)]
    pub dice_face: u8,
    /// time units the current player has left, None when unlimited
    pub time_remaining: Option<u16>,
    #[allow(missing_docs)]
    pub difficulty: Difficulty,
    #[allow(missing_docs)]
    pub single_player: bool,
    #[allow(missing_docs)]
    pub paused: bool,
    /// the player's mute choice, which pausing does not change
    pub muted: bool,
}

#[derive(Debug, Clone)]
struct Timers {
    animation: Timer,
    flash: Timer,
    dice_face: Timer,
    elapsed: Timer,
    display: Timer,
    joystick: Timer,
}

impl Timers {
    fn new(now: Tick) -> Self {
        Timers {
            animation: Timer::new(MOVE_SPEED, now),
            flash: Timer::new(FLASH_PERIOD, now),
            dice_face: Timer::new(DICE_FACE_PERIOD, now),
            elapsed: Timer::new(ELAPSED_TIME_PERIOD, now),
            display: Timer::new(DISPLAY_REFRESH_PERIOD, now),
            joystick: Timer::new(0, now),
        }
    }
}

/// The whole game: state, audio and timers, plus the collaborators they drive
#[derive(Debug)]
pub struct Engine<C, R, A, I> {
    clock: C,
    renderer: R,
    audio: A,
    input: I,
    config: GameConfig,
    board_number: BoardNumber,
    game: GameState,
    tones: ToneEngine,
    rng: SmallRng,
    phase: Phase,
    paused: bool,
    muted: bool,
    pause_started: Tick,
    pause_delta: Tick,
    timers: Timers,
}

impl<C, R, A, I> Engine<C, R, A, I>
where
    C: Clock,
    R: CellRenderer,
    A: ToneOutput,
    I: InputSource,
{
    /// Power up on the title screen with the start melody playing
    pub fn new(config: GameConfig, clock: C, renderer: R, audio: A, input: I) -> Self {
        let now = clock.now();
        let game = GameState::new(
            Board::standard(config.board),
            config.difficulty,
            config.single_player,
        );
        let mut tones = ToneEngine::new(config.muted);
        tones.play_melody(&START_MELODY, now);

        info!(?config, "engine started");
        Engine {
            clock,
            renderer,
            audio,
            input,
            config,
            board_number: config.board,
            game,
            tones,
            rng: SmallRng::seed_from_u64(config.seed),
            phase: Phase::Title,
            paused: false,
            muted: config.muted,
            pause_started: now,
            pause_delta: 0,
            timers: Timers::new(now),
        }
    }

    /// Run one pass of the loop: pause, gameplay, animation, audio, status
    pub fn tick(&mut self) {
        let now = self.clock.now();
        let button = self.input.poll_discrete();

        match self.phase {
            Phase::Playing => self.play_tick(now, button),
            _ => self.menu_tick(now, button),
        }

        self.tones.update(now, &mut self.audio);

        if self.timers.display.fire(now) {
            let status = self.status();
            self.renderer.render_status(&status);
        }
    }

    fn menu_tick(&mut self, now: Tick, button: Option<Button>) {
        let button = match button {
            Some(button) => button,
            None => return,
        };

        match (self.phase, button) {
            (_, Button::ToggleMute) => self.toggle_mute(now),
            (Phase::Title, Button::Start) | (Phase::GameOver { .. }, Button::Start) => {
                self.enter_setup(now)
            }
            (Phase::Setup, Button::Start) => self.start_game(now),
            (Phase::Setup, Button::ToggleBoard) => {
                self.board_number = self.board_number.toggle();
                self.game.set_board(Board::standard(self.board_number));
                self.game.board().render_all(&mut self.renderer);
                debug!(board = %self.board_number, "board changed");
                self.tones.play_sound(BUTTON_SOUND, now);
            }
            (Phase::Setup, Button::SetDifficulty(difficulty)) => self.set_difficulty(difficulty, now),
            (Phase::Setup, Button::SinglePlayer(single)) => {
                self.game.set_single_player(single);
                self.tones.play_sound(BUTTON_SOUND, now);
            }
            _ => {}
        }
    }

    fn play_tick(&mut self, now: Tick, button: Option<Button>) {
        let button = match button {
            Some(Button::Pause) => {
                self.toggle_pause(now);
                None
            }
            Some(Button::ToggleMute) => {
                self.toggle_mute(now);
                None
            }
            Some(Button::SetDifficulty(difficulty)) => {
                self.set_difficulty(difficulty, now);
                None
            }
            other => other,
        };

        if !self.paused {
            self.gameplay(now, button);

            if self.timers.animation.fire(now) {
                self.game.drain_animation(&mut self.renderer);
            }
        }

        if let Some(winner) = self.game.get_winner() {
            self.end_game(winner, now);
        }
    }

    fn gameplay(&mut self, now: Tick, button: Option<Button>) {
        let current = self.game.current_player();

        if self.timers.joystick.is_due(now) {
            self.timers.joystick.set_period(0);
            if let Some(delta) = self.input.poll_directional() {
                let report = self.game.step_by(delta, current, &mut self.renderer);
                self.after_move(report, now);
                if report.warp.is_some() {
                    self.game.set_visibility(current, true, &mut self.renderer);
                    if self.game.pass_turn() != current {
                        self.timers.joystick.set_period(JOYSTICK_LOCKOUT);
                    }
                    self.restart_turn_timers(now);
                }
            }
            self.timers.joystick.reset(now);
        }

        match button {
            Some(Button::AdvanceOne) => self.advance(1, now),
            Some(Button::AdvanceTwo) => self.advance(2, now),
            Some(Button::ToggleDice) => {
                if self.game.dice_mut().toggle() {
                    self.rng = SmallRng::seed_from_u64(self.config.seed ^ u64::from(now));
                }
            }
            Some(Button::Step(mv)) => {
                let current = self.game.current_player();
                let report = self
                    .game
                    .step_by(mv.to_vector(), current, &mut self.renderer);
                self.after_move(report, now);
                self.game.set_visibility(current, true, &mut self.renderer);
                self.restart_turn_timers(now);
            }
            _ => {}
        }

        if self.game.dice_mut().take_finished() {
            let face = self.game.dice_mut().roll(&mut self.rng);
            debug!(face, "dice rolled");
            self.advance(face, now);
        }

        let current = self.game.current_player();
        if self.game.difficulty().time_limit().is_some() && self.timers.elapsed.fire(now) {
            self.game.tick_elapsed(current);
        }

        if self.timers.dice_face.fire(now) && self.game.dice().is_rolling() {
            self.game.dice_mut().advance_face();
        }

        if self.timers.flash.is_due_after(now, self.pause_delta) {
            self.game.flash_cursor(current, &mut self.renderer);
            self.pause_delta = 0;
            self.timers.flash.reset(now);
        }
    }

    fn advance(&mut self, n: u8, now: Tick) {
        let current = self.game.current_player();
        let report = self.game.advance_by(n, current, &mut self.renderer);
        self.after_move(report, now);
        self.game.set_visibility(current, true, &mut self.renderer);
        self.game.pass_turn();
        self.restart_turn_timers(now);
    }

    fn after_move(&mut self, report: MoveReport, now: Tick) {
        self.tones.play_sound(MOVE_SOUND, now);
        self.timers.animation.reset(now);
        self.game.drain_animation(&mut self.renderer);

        if let Some(warp) = report.warp {
            match warp.kind {
                WarpKind::Snake => self.tones.play_sound(SNAKE_SOUND, now),
                WarpKind::Ladder => self.tones.play_melody(&LADDER_MELODY, now),
            }
            self.game.drain_animation(&mut self.renderer);
        }
    }

    fn restart_turn_timers(&mut self, now: Tick) {
        self.timers.flash.reset(now);
        self.timers.elapsed.reset(now);
    }

    fn toggle_pause(&mut self, now: Tick) {
        self.paused = !self.paused;
        if self.paused {
            self.pause_started = now;
            self.tones.set_muted(true);
        } else {
            self.pause_delta = now.wrapping_sub(self.pause_started);
            self.tones.set_muted(self.muted);
        }
        debug!(paused = self.paused, "pause toggled");
    }

    fn toggle_mute(&mut self, now: Tick) {
        self.muted = !self.muted;
        if !self.paused {
            self.tones.set_muted(self.muted);
        }
        self.tones.play_sound(BUTTON_SOUND, now);
    }

    fn set_difficulty(&mut self, difficulty: Difficulty, now: Tick) {
        self.game.set_difficulty(difficulty, &mut self.renderer);
        self.tones.play_sound(BUTTON_SOUND, now);
    }

    fn enter_setup(&mut self, now: Tick) {
        self.tones.stop();
        self.tones.play_sound(BUTTON_SOUND, now);
        self.board_number = self.config.board;
        self.game.set_board(Board::standard(self.board_number));
        self.game.board().render_all(&mut self.renderer);
        self.set_phase(Phase::Setup);
    }

    fn start_game(&mut self, now: Tick) {
        self.tones.play_sound(BUTTON_SOUND, now);
        self.game.reset_players();
        self.paused = false;
        self.pause_delta = 0;
        self.timers = Timers::new(now);
        self.game.board().render_all(&mut self.renderer);
        self.game.draw_tokens(&mut self.renderer);
        self.set_phase(Phase::Playing);
    }

    fn end_game(&mut self, winner: PlayerId, now: Tick) {
        info!(%winner, turns = self.game.total_turns(), "game over");
        self.paused = false;
        self.tones.set_muted(self.muted);
        self.tones.play_melody(&GAME_OVER_MELODY, now);
        self.set_phase(Phase::GameOver { winner });
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!(from = ?self.phase, to = ?phase, "phase change");
        self.phase = phase;
    }

    /// Replace the board with a custom layout. Only takes effect on the setup
    /// screen, where it is drawn straight away; returns whether it was applied.
    pub fn load_board(&mut self, board: Board) -> bool {
        if self.phase != Phase::Setup {
            return false;
        }
        self.game.set_board(board);
        self.game.board().render_all(&mut self.renderer);
        true
    }

    /// a snapshot of what the status display shows
    pub fn status(&self) -> Status {
        let current = self.game.current_player();
        Status {
            phase: self.phase,
            current_player: current,
            turn_digit: (self.game.total_turns() % 10) as u8,
            dice_face: self.game.dice().face(),
            time_remaining: self.game.time_remaining(current),
            difficulty: self.game.difficulty(),
            single_player: self.game.is_single_player(),
            paused: self.paused,
            muted: self.muted,
        }
    }

    #[allow(missing_docs)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[allow(missing_docs)]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[allow(missing_docs)]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// direct access to the game, for hosts that script positions
    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    #[allow(missing_docs)]
    pub fn tones(&self) -> &ToneEngine {
        &self.tones
    }

    #[allow(missing_docs)]
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    #[allow(missing_docs)]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[allow(missing_docs)]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[allow(missing_docs)]
    pub fn audio(&self) -> &A {
        &self.audio
    }

    #[allow(missing_docs)]
    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    #[allow(missing_docs)]
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::audio::Pwm;
    use crate::board::BoardNumber;
    use crate::game::test_support::RecordingRenderer;
    use crate::types::{Glyph, Move, Position, Vector};

    #[derive(Debug, Default)]
    struct ManualClock {
        now: Tick,
    }

    impl Clock for ManualClock {
        fn now(&self) -> Tick {
            self.now
        }
    }

    #[derive(Debug, Default)]
    struct RecordingAudio {
        emitted: Vec<Pwm>,
        halts: usize,
    }

    impl ToneOutput for RecordingAudio {
        fn emit_tone(&mut self, pwm: Pwm) {
            self.emitted.push(pwm);
        }

        fn halt_oscillator(&mut self) {
            self.halts += 1;
        }
    }

    #[derive(Debug, Default)]
    struct ScriptedInput {
        buttons: VecDeque<Button>,
        joystick: VecDeque<Vector>,
    }

    impl InputSource for ScriptedInput {
        fn poll_directional(&mut self) -> Option<Vector> {
            self.joystick.pop_front()
        }

        fn poll_discrete(&mut self) -> Option<Button> {
            self.buttons.pop_front()
        }
    }

    #[derive(Debug, Default)]
    struct StatusRenderer {
        cells: RecordingRenderer,
        statuses: Vec<Status>,
    }

    impl CellRenderer for StatusRenderer {
        fn render_cell(&mut self, position: Position, glyph: Glyph) {
            self.cells.render_cell(position, glyph);
        }

        fn render_status(&mut self, status: &Status) {
            self.statuses.push(*status);
        }
    }

    type TestEngine = Engine<ManualClock, StatusRenderer, RecordingAudio, ScriptedInput>;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    }

    fn engine(config: GameConfig) -> TestEngine {
        init_tracing();
        Engine::new(
            config,
            ManualClock::default(),
            StatusRenderer::default(),
            RecordingAudio::default(),
            ScriptedInput::default(),
        )
    }

    fn press(engine: &mut TestEngine, button: Button) {
        engine.input_mut().buttons.push_back(button);
        engine.tick();
    }

    fn run_until(engine: &mut TestEngine, until: Tick) {
        while engine.clock_mut().now < until {
            engine.clock_mut().now += 1;
            engine.tick();
        }
    }

    fn playing(config: GameConfig) -> TestEngine {
        let mut e = engine(config);
        press(&mut e, Button::Start);
        press(&mut e, Button::Start);
        assert_eq!(e.phase(), Phase::Playing);
        e
    }

    fn multi_player() -> GameConfig {
        GameConfig {
            single_player: false,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_phase_flow() {
        let mut e = engine(GameConfig::default());
        assert_eq!(e.phase(), Phase::Title);
        assert!(e.tones().is_melody_playing());

        press(&mut e, Button::AdvanceOne);
        assert_eq!(e.phase(), Phase::Title);

        press(&mut e, Button::Start);
        assert_eq!(e.phase(), Phase::Setup);
        assert!(!e.tones().is_melody_playing());

        press(&mut e, Button::Start);
        assert_eq!(e.phase(), Phase::Playing);
        assert_eq!(
            e.renderer().cells.last_at(Position::new(0, 0)),
            Some(Glyph::Player(PlayerId::Player1))
        );
    }

    #[test]
    fn test_setup_choices() {
        let mut e = engine(GameConfig::default());
        press(&mut e, Button::Start);
        press(&mut e, Button::ToggleBoard);
        press(&mut e, Button::SetDifficulty(Difficulty::Medium));
        press(&mut e, Button::SinglePlayer(false));

        let status = e.status();
        assert_eq!(status.difficulty, Difficulty::Medium);
        assert!(!status.single_player);
        assert_eq!(
            e.game().board(),
            &Board::standard(BoardNumber::Two)
        );

        press(&mut e, Button::Start);
        assert_eq!(e.status().time_remaining, Some(9000));
    }

    #[test]
    fn test_load_board_only_in_setup() {
        let custom = Board::from_json(include_str!("../../fixtures/straight_ladder.json")).unwrap();
        let mut e = engine(GameConfig::default());
        assert!(!e.load_board(custom));
        press(&mut e, Button::Start);
        assert!(e.load_board(custom));
        press(&mut e, Button::Start);

        press(&mut e, Button::Step(Move::Left));
        // (0, 0) reflects to (7, 0), the foot of the ladder
        assert_eq!(e.game().position(PlayerId::Player1), Position::new(7, 14));
    }

    #[test]
    fn test_advance_passes_turn_and_animates() {
        let mut e = playing(multi_player());
        press(&mut e, Button::AdvanceTwo);

        assert_eq!(e.game().current_player(), PlayerId::Player2);
        assert_eq!(e.game().position(PlayerId::Player1), Position::new(2, 0));
        // queued origin plus two cells, one frame drained straight away
        assert_eq!(e.game().player(PlayerId::Player1).queue().len(), 2);

        let start = e.clock_mut().now;
        run_until(&mut e, start + MOVE_SPEED - 1);
        assert_eq!(e.game().player(PlayerId::Player1).queue().len(), 2);
        run_until(&mut e, start + MOVE_SPEED);
        assert_eq!(e.game().player(PlayerId::Player1).queue().len(), 1);
        run_until(&mut e, start + 2 * MOVE_SPEED);
        assert!(e.game().player(PlayerId::Player1).queue().is_empty());
    }

    #[test]
    fn test_single_player_keeps_turn() {
        let mut e = playing(GameConfig::default());
        press(&mut e, Button::AdvanceOne);
        assert_eq!(e.game().current_player(), PlayerId::Player1);
        assert_eq!(e.status().turn_digit, 1);
    }

    #[test]
    fn test_terminal_step_does_not_pass_turn() {
        let mut e = playing(multi_player());
        press(&mut e, Button::Step(Move::Right));
        assert_eq!(e.game().current_player(), PlayerId::Player1);
        assert_eq!(e.game().position(PlayerId::Player1), Position::new(1, 0));
        assert_eq!(e.status().turn_digit, 0);
    }

    #[test]
    fn test_joystick_warp_passes_turn_and_locks_out() {
        let mut e = playing(multi_player());
        e.game_mut().set_position(PlayerId::Player1, Position::new(1, 0));
        e.input_mut().joystick.push_back(Vector::new(0, 1));
        run_until(&mut e, 1);

        assert_eq!(e.game().position(PlayerId::Player1), Position::new(1, 3));
        assert_eq!(e.game().current_player(), PlayerId::Player2);
        assert!(e.tones().is_melody_playing());

        let switched = e.clock_mut().now;
        e.input_mut().joystick.push_back(Vector::new(1, 0));
        run_until(&mut e, switched + JOYSTICK_LOCKOUT - 1);
        assert_eq!(e.game().position(PlayerId::Player2), Position::new(0, 0));
        run_until(&mut e, switched + JOYSTICK_LOCKOUT);
        assert_eq!(e.game().position(PlayerId::Player2), Position::new(1, 0));
        // no warp, so player 2 keeps the turn
        assert_eq!(e.game().current_player(), PlayerId::Player2);
    }

    #[test]
    fn test_dice_roll() {
        let mut e = playing(GameConfig {
            seed: 3,
            ..GameConfig::default()
        });
        press(&mut e, Button::ToggleDice);
        assert!(e.game().dice().is_rolling());

        let face = e.game().dice().face();
        let start = e.clock_mut().now;
        run_until(&mut e, start + DICE_FACE_PERIOD);
        assert_eq!(e.game().dice().face(), face % 6 + 1);

        press(&mut e, Button::ToggleDice);
        let rolled = e.game().dice().face();
        assert!((1..=6).contains(&rolled));
        assert!(!e.game().dice().is_rolling());
        assert_eq!(e.game().player(PlayerId::Player1).turns(), 1);
        assert_ne!(e.game().position(PlayerId::Player1), Position::new(0, 0));
    }

    #[test]
    fn test_pause_freezes_animation_and_mutes() {
        let mut e = playing(GameConfig::default());
        press(&mut e, Button::AdvanceTwo);
        press(&mut e, Button::Pause);
        assert!(e.is_paused());
        assert!(e.tones().is_muted());

        let queued = e.game().player(PlayerId::Player1).queue().len();
        let start = e.clock_mut().now;
        run_until(&mut e, start + 5 * MOVE_SPEED);
        assert_eq!(e.game().player(PlayerId::Player1).queue().len(), queued);

        // mute and difficulty still respond while paused
        press(&mut e, Button::ToggleMute);
        assert!(e.status().muted);
        press(&mut e, Button::SetDifficulty(Difficulty::Hard));
        assert_eq!(e.status().difficulty, Difficulty::Hard);

        press(&mut e, Button::Pause);
        assert!(!e.is_paused());
        assert!(e.tones().is_muted());

        press(&mut e, Button::ToggleMute);
        assert!(!e.tones().is_muted());
    }

    #[test]
    fn test_difficulty_change_mid_game_clears_queues() {
        let mut e = playing(GameConfig::default());
        press(&mut e, Button::AdvanceTwo);
        assert_eq!(e.game().player(PlayerId::Player1).queue().len(), 2);

        press(&mut e, Button::SetDifficulty(Difficulty::Hard));
        assert!(e.game().player(PlayerId::Player1).queue().is_empty());
        assert_eq!(
            e.renderer().cells.last_at(Position::new(2, 0)),
            Some(Glyph::Player(PlayerId::Player1))
        );
        assert_eq!(e.status().time_remaining, Some(4500));
    }

    #[test]
    fn test_snake_sound_supersedes_move_sound() {
        let mut e = playing(GameConfig::default());
        e.game_mut().set_position(PlayerId::Player1, Position::new(2, 9));
        e.audio_mut().emitted.clear();

        press(&mut e, Button::AdvanceTwo);
        assert_eq!(e.game().position(PlayerId::Player1), Position::new(2, 7));
        let frequencies: Vec<u16> = e.audio().emitted.iter().map(|p| p.frequency).collect();
        assert_eq!(frequencies, vec![SNAKE_SOUND.frequency]);
        assert!(!e.tones().is_melody_playing());

        e.audio_mut().emitted.clear();
        press(&mut e, Button::Step(Move::Right));
        assert_eq!(e.game().position(PlayerId::Player1), Position::new(3, 7));
        let frequencies: Vec<u16> = e.audio().emitted.iter().map(|p| p.frequency).collect();
        assert_eq!(frequencies, vec![MOVE_SOUND.frequency]);
    }

    #[test]
    fn test_extreme_joystick_delta_does_not_stop_the_loop() {
        let mut e = playing(GameConfig::default());
        e.input_mut().joystick.push_back(Vector::new(i8::MIN, 0));
        run_until(&mut e, 1);
        assert_eq!(e.phase(), Phase::Playing);
        assert_eq!(e.game().position(PlayerId::Player1).y, 0);

        let start = e.clock_mut().now;
        run_until(&mut e, start + 10 * MOVE_SPEED);
        assert_eq!(e.phase(), Phase::Playing);
    }

    #[test]
    fn test_paused_input_is_ignored() {
        let mut e = playing(GameConfig::default());
        press(&mut e, Button::Pause);
        press(&mut e, Button::AdvanceOne);
        assert_eq!(e.game().position(PlayerId::Player1), Position::new(0, 0));
    }

    #[test]
    fn test_time_out_ends_game() {
        let mut e = playing(GameConfig {
            difficulty: Difficulty::Hard,
            ..GameConfig::default()
        });
        let start = e.clock_mut().now;
        run_until(&mut e, start + 4500 * ELAPSED_TIME_PERIOD - 1);
        assert_eq!(e.phase(), Phase::Playing);
        run_until(&mut e, start + 4500 * ELAPSED_TIME_PERIOD);
        assert_eq!(
            e.phase(),
            Phase::GameOver {
                winner: PlayerId::Player2
            }
        );
        assert!(e.tones().is_melody_playing());

        press(&mut e, Button::Start);
        assert_eq!(e.phase(), Phase::Setup);
    }

    #[test]
    fn test_reaching_finish_wins() {
        let mut e = playing(multi_player());
        e.game_mut().set_position(PlayerId::Player1, Position::new(1, 15));
        press(&mut e, Button::AdvanceOne);
        assert_eq!(
            e.phase(),
            Phase::GameOver {
                winner: PlayerId::Player1
            }
        );
    }

    #[test]
    fn test_status_refresh_and_audio_halt() {
        let mut e = playing(GameConfig::default());
        let before = e.renderer().statuses.len();
        let start = e.clock_mut().now;
        run_until(&mut e, start + 10 * DISPLAY_REFRESH_PERIOD);
        assert_eq!(e.renderer().statuses.len() - before, 10);
        assert_eq!(e.audio().halts, 1);
        assert!(!e.audio().emitted.is_empty());
    }

    #[test]
    fn test_cursor_flashes() {
        let mut e = playing(GameConfig::default());
        e.renderer_mut().cells.draws.clear();
        let start = e.clock_mut().now;
        run_until(&mut e, start + FLASH_PERIOD);
        assert_eq!(
            e.renderer().cells.draws,
            vec![(Position::new(0, 0), Glyph::Player(PlayerId::Player1))]
        );
        run_until(&mut e, start + 2 * FLASH_PERIOD);
        assert_eq!(
            e.renderer().cells.last_at(Position::new(0, 0)),
            Some(Glyph::Object(crate::board::ObjectType::StartPoint))
        );
    }
}
