//! Integration tests for the state machine and per-step rules

use std::time::Duration;

use blockfall::core::{ActivePiece, Game, ScoreState, SeedSource, Session, StepOutcome};
use blockfall::types::{
    GameAction, GamePhase, InputSnapshot, PieceKind, Rotation, FIELD_HEIGHT, FIELD_WIDTH,
    INITIAL_FRAMES_PER_FALL_STEP,
};

const FRAME: Duration = Duration::from_millis(16);

fn press(action: GameAction) -> InputSnapshot {
    InputSnapshot::with(action)
}

#[test]
fn test_game_lifecycle() {
    let mut game = Game::new(SeedSource::Fixed(12345));
    assert_eq!(game.phase(), GamePhase::TitleScreen);

    assert_eq!(game.update(&press(GameAction::Start), FRAME), GamePhase::Playing);
    let session = game.session().unwrap();
    assert!(session.field().is_empty());
    assert_eq!(*game.score(), ScoreState::default());

    // Pieces stack up in the middle until a spawn is blocked.
    let mut frames = 0;
    while game.phase() == GamePhase::Playing {
        game.update(&press(GameAction::HardDrop), FRAME);
        frames += 1;
        assert!(frames < 200, "game never ended");
    }
    assert_eq!(game.phase(), GamePhase::GameOver);
    let best = game.score().high_score;
    assert!(best > 0);

    assert_eq!(game.update(&press(GameAction::Start), FRAME), GamePhase::TitleScreen);
    assert_eq!(game.update(&press(GameAction::Start), FRAME), GamePhase::Playing);
    assert_eq!(game.score().score, 0);
    assert_eq!(game.score().high_score, best);
}

#[test]
fn test_game_over_ignores_gameplay_input() {
    let mut game = Game::new(SeedSource::Fixed(7));
    game.update(&press(GameAction::Start), FRAME);
    while game.phase() == GamePhase::Playing {
        game.update(&press(GameAction::HardDrop), FRAME);
    }
    let field = game.session().unwrap().field().clone();
    let score = *game.score();

    for action in [GameAction::MoveLeft, GameAction::HardDrop, GameAction::RotateCw] {
        assert_eq!(game.update(&press(action), FRAME), GamePhase::GameOver);
    }
    assert_eq!(game.session().unwrap().field(), &field);
    assert_eq!(*game.score(), score);
}

#[test]
fn test_hard_drop_lands_on_floor_and_scores_rows() {
    for kind in PieceKind::ALL {
        let mut session = Session::new(1);
        let mut score = ScoreState::new();
        let piece = ActivePiece::spawn(kind, FIELD_WIDTH);
        session.set_active(piece);

        let deepest = piece.shape().iter().map(|&(_, dy)| dy as i32).max().unwrap();
        let landing_y = FIELD_HEIGHT as i32 - 1 - deepest;

        assert_eq!(session.hard_drop(&mut score), StepOutcome::Continue);
        assert_eq!(score.score, landing_y as u32, "{kind:?}");
        for (x, y) in piece.shifted(0, landing_y).blocks() {
            assert_eq!(session.field().cell_at(x, y), Some(Some(kind)));
        }
    }
}

#[test]
fn test_four_lines_at_level_zero_scores_1200_plus_drops() {
    let mut session = Session::new(3);
    let mut score = ScoreState::new();
    for y in 16..20 {
        for x in 0..9 {
            session.field_mut().set_cell(x, y, Some(PieceKind::L));
        }
    }
    session.set_active(ActivePiece::new(PieceKind::I, Rotation::new(1), 7, 0));

    session.hard_drop(&mut score);

    assert_eq!(score.lines, 4);
    assert_eq!(score.score, 1200 + 16);
    assert!(session.field().is_empty());
}

#[test]
fn test_moves_happen_before_gravity() {
    let mut session = Session::new(11);
    let mut score = ScoreState::new();
    session.set_active(ActivePiece::spawn(PieceKind::T, FIELD_WIDTH));

    let input: InputSnapshot = [GameAction::MoveLeft, GameAction::RotateCw]
        .into_iter()
        .collect();
    session.step(&input, &mut score);

    let active = session.active();
    assert_eq!(active.x, 2);
    assert_eq!(active.rotation, Rotation::new(3));
    assert_eq!(active.y, 0);
    assert_eq!(
        session.fall_timer().frames_until_fall,
        INITIAL_FRAMES_PER_FALL_STEP - 1
    );
}

#[test]
fn test_soft_drop_and_pause_do_nothing() {
    let mut session = Session::new(11);
    let mut score = ScoreState::new();
    let before = *session.active();

    let input: InputSnapshot = [GameAction::SoftDrop, GameAction::Pause]
        .into_iter()
        .collect();
    assert_eq!(session.step(&input, &mut score), StepOutcome::Continue);
    assert_eq!(*session.active(), before);
}

#[test]
fn test_counter_clockwise_rotation_can_enter_the_wall() {
    let mut session = Session::new(11);
    // Vertical I flush with the right wall at column 9.
    session.set_active(ActivePiece::new(PieceKind::I, Rotation::new(1), 7, 5));

    session.rotate_ccw();

    // Rotation 2 is horizontal across columns 7..=10; column 10 is outside.
    assert_eq!(session.active().rotation, Rotation::new(2));
    assert!(blockfall::core::overlaps(session.active(), session.field()));
}

#[test]
fn test_level_rises_every_ten_lines() {
    let mut session = Session::new(5);
    let mut score = ScoreState::new();

    for cleared in 1..=20u32 {
        // Row 19 complete except column 0, then a vertical I into the gap.
        for x in 1..10 {
            session.field_mut().set_cell(x, 19, Some(PieceKind::O));
        }
        session.set_active(ActivePiece::new(PieceKind::I, Rotation::new(3), -1, 0));
        assert_eq!(session.hard_drop(&mut score), StepOutcome::Continue);

        assert_eq!(score.lines, cleared);
        assert_eq!(score.level, cleared / 10);
        // Leftover I blocks stay in column 0; clear them for the next round.
        for y in 0..20 {
            session.field_mut().set_cell(0, y, None);
        }
    }

    assert_eq!(
        session.fall_timer().frames_per_fall_step,
        INITIAL_FRAMES_PER_FALL_STEP - 4
    );
}
