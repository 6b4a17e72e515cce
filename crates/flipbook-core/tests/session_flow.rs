use flipbook_core::{
    BookSession, Direction, FlipTuning, IgnoreReason, LayoutMode, Outcome, PageIndex,
    RecordingSink, RenderSink,
};
use proptest::prelude::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);
const BOOK_WIDTH: f32 = 1000.0;

fn page(n: u32) -> Option<PageIndex> {
    PageIndex::new(n)
}

fn open(page_count: u32) -> (BookSession, RecordingSink) {
    let mut session = BookSession::new(page_count, FlipTuning::default()).unwrap();
    let mut sink = RecordingSink::new();
    session.attach(&mut sink);
    (session, sink)
}

/// Tick until the session settles; returns the number of frames delivered.
fn run_frames(session: &mut BookSession, sink: &mut impl RenderSink) -> usize {
    let mut frames = 0;
    while session.needs_frames() {
        session.tick(FRAME, sink);
        frames += 1;
        assert!(frames < 500, "animation never settled");
    }
    frames
}

fn step(session: &mut BookSession, sink: &mut RecordingSink, direction: Direction) -> Outcome {
    let outcome = session.flip(direction, sink);
    run_frames(session, sink);
    outcome
}

#[test]
fn reading_a_28_page_book_front_to_back() {
    let (mut session, mut sink) = open(28);
    assert_eq!(sink.slots(), (None, page(1)));
    assert_eq!(sink.layout, LayoutMode::Single);

    assert_eq!(
        step(&mut session, &mut sink, Direction::Forward),
        Outcome::Moved { to_state: 1 }
    );
    assert_eq!(sink.slots(), (page(2), page(3)));
    assert_eq!(sink.layout, LayoutMode::Spread);

    assert_eq!(
        step(&mut session, &mut sink, Direction::Forward),
        Outcome::AnimationStarted { to_state: 2 }
    );
    assert_eq!(sink.slots(), (page(4), page(5)));

    while session.current_state() < 13 {
        step(&mut session, &mut sink, Direction::Forward);
    }
    assert_eq!(sink.slots(), (page(26), page(27)));

    assert_eq!(
        step(&mut session, &mut sink, Direction::Forward),
        Outcome::Moved { to_state: 14 }
    );
    assert_eq!(sink.slots(), (None, page(28)));
    assert_eq!(sink.layout, LayoutMode::Single);

    assert_eq!(
        step(&mut session, &mut sink, Direction::Forward),
        Outcome::Moved { to_state: 0 }
    );
    assert_eq!(sink.slots(), (None, page(1)));
}

#[test]
fn paging_back_from_the_back_cover_reopens_the_last_spread() {
    let (mut session, mut sink) = open(28);
    for _ in 0..14 {
        step(&mut session, &mut sink, Direction::Forward);
    }
    assert_eq!(session.current_state(), 14);

    assert_eq!(
        step(&mut session, &mut sink, Direction::Backward),
        Outcome::Moved { to_state: 13 }
    );
    assert_eq!(sink.layout, LayoutMode::Spread);
    assert_eq!(sink.slots(), (page(26), page(27)));
}

#[test]
fn forward_then_backward_returns_to_the_same_spread() {
    let (mut session, mut sink) = open(28);
    for start in 0..14 {
        while session.current_state() != start {
            step(&mut session, &mut sink, Direction::Forward);
        }
        let before = sink.slots();
        step(&mut session, &mut sink, Direction::Forward);
        step(&mut session, &mut sink, Direction::Backward);
        assert_eq!(session.current_state(), start);
        assert_eq!(sink.slots(), before, "round trip from state {start}");
    }
}

#[test]
fn disabling_the_wrap_stops_at_the_back_cover() {
    let tuning = FlipTuning {
        loop_to_cover: false,
        ..FlipTuning::default()
    };
    let mut session = BookSession::new(6, tuning).unwrap();
    let mut sink = RecordingSink::new();
    session.attach(&mut sink);
    for _ in 0..3 {
        step(&mut session, &mut sink, Direction::Forward);
    }
    assert_eq!(session.current_state(), 3);
    assert_eq!(
        step(&mut session, &mut sink, Direction::Forward),
        Outcome::Ignored(IgnoreReason::Boundary)
    );
    assert_eq!(session.current_state(), 3);
}

#[test]
fn every_input_is_refused_mid_flip() {
    let (mut session, mut sink) = open(28);
    step(&mut session, &mut sink, Direction::Forward);
    session.flip_forward(&mut sink);
    session.tick(FRAME, &mut sink);

    let busy = Outcome::Ignored(IgnoreReason::Busy);
    assert_eq!(session.flip_forward(&mut sink), busy);
    assert_eq!(session.flip_backward(&mut sink), busy);
    assert_eq!(session.click(10.0, BOOK_WIDTH, &mut sink), busy);
    assert_eq!(session.pointer_down(990.0, BOOK_WIDTH, &mut sink), busy);

    run_frames(&mut session, &mut sink);
    assert_eq!(session.current_state(), 2);
}

#[test]
fn release_just_above_threshold_commits() {
    let (mut session, mut sink) = open(28);
    step(&mut session, &mut sink, Direction::Forward);
    step(&mut session, &mut sink, Direction::Forward);

    // 162 / (1000 * 0.45) = 0.36
    let start = 980.0;
    session.pointer_down(start, BOOK_WIDTH, &mut sink);
    session.pointer_move(start - 162.0, BOOK_WIDTH, &mut sink);
    assert_eq!(
        session.pointer_up(start - 162.0, BOOK_WIDTH, &mut sink),
        Outcome::AnimationStarted { to_state: 3 }
    );
    run_frames(&mut session, &mut sink);
    assert_eq!(session.current_state(), 3);
}

#[test]
fn release_below_threshold_snaps_back() {
    let (mut session, mut sink) = open(28);
    step(&mut session, &mut sink, Direction::Forward);
    step(&mut session, &mut sink, Direction::Forward);
    let before = sink.slots();

    // 135 / 450 = 0.30
    session.pointer_down(980.0, BOOK_WIDTH, &mut sink);
    session.pointer_move(845.0, BOOK_WIDTH, &mut sink);
    assert_eq!(
        session.pointer_up(845.0, BOOK_WIDTH, &mut sink),
        Outcome::AnimationStarted { to_state: 2 }
    );
    run_frames(&mut session, &mut sink);
    assert_eq!(session.current_state(), 2);
    assert_eq!(sink.slots(), before);
    assert!(sink.flip.is_none());
}

#[test]
fn backward_drag_past_threshold_commits() {
    let (mut session, mut sink) = open(28);
    for _ in 0..4 {
        step(&mut session, &mut sink, Direction::Forward);
    }
    // 180 / 450 = 0.40
    session.pointer_down(20.0, BOOK_WIDTH, &mut sink);
    session.pointer_up(200.0, BOOK_WIDTH, &mut sink);
    run_frames(&mut session, &mut sink);
    assert_eq!(session.current_state(), 3);
    assert_eq!(sink.slots(), (page(6), page(7)));
}

#[test]
fn click_after_a_drag_does_not_start_a_second_flip() {
    let (mut session, mut sink) = open(28);
    step(&mut session, &mut sink, Direction::Forward);
    step(&mut session, &mut sink, Direction::Forward);

    session.pointer_down(980.0, BOOK_WIDTH, &mut sink);
    session.pointer_up(700.0, BOOK_WIDTH, &mut sink);
    assert_eq!(
        session.click(700.0, BOOK_WIDTH, &mut sink),
        Outcome::Ignored(IgnoreReason::Busy)
    );
    run_frames(&mut session, &mut sink);
    assert_eq!(session.current_state(), 3);
}

#[test]
fn default_flip_takes_about_forty_frames() {
    let (mut session, mut sink) = open(28);
    step(&mut session, &mut sink, Direction::Forward);
    session.flip_forward(&mut sink);
    let frames = run_frames(&mut session, &mut sink);
    // 650ms at 16ms per frame
    assert_eq!(frames, 41);
}

#[test]
fn smallest_books_only_switch_layouts() {
    let (mut session, mut sink) = open(2);
    assert_eq!(
        step(&mut session, &mut sink, Direction::Forward),
        Outcome::Moved { to_state: 1 }
    );
    assert_eq!(sink.slots(), (None, page(2)));
    assert_eq!(
        step(&mut session, &mut sink, Direction::Forward),
        Outcome::Moved { to_state: 0 }
    );

    let (mut session, mut sink) = open(4);
    step(&mut session, &mut sink, Direction::Forward);
    assert_eq!(sink.slots(), (page(2), page(3)));
    assert_eq!(
        session.pointer_down(990.0, BOOK_WIDTH, &mut sink),
        Outcome::Ignored(IgnoreReason::Boundary)
    );
}

proptest! {
    #[test]
    fn forward_steps_visit_states_in_order_and_wrap(pages in 1u32..40) {
        let page_count = pages * 2;
        let (mut session, mut sink) = open(page_count);
        let len = session.states().len();
        for expected in 1..=len {
            step(&mut session, &mut sink, Direction::Forward);
            prop_assert_eq!(session.current_state(), expected % len);
            prop_assert!(!session.is_busy());
        }
    }

    #[test]
    fn random_inputs_keep_the_session_consistent(
        inputs in prop::collection::vec((0u8..5, 0.0f32..1000.0), 1..60)
    ) {
        let (mut session, mut sink) = open(28);
        let len = session.states().len();
        for (kind, x) in inputs {
            match kind {
                0 => { session.flip_forward(&mut sink); }
                1 => { session.flip_backward(&mut sink); }
                2 => { session.pointer_down(x, BOOK_WIDTH, &mut sink); }
                3 => { session.pointer_up(x, BOOK_WIDTH, &mut sink); }
                _ => { session.tick(FRAME, &mut sink); }
            }
            prop_assert!(session.current_state() < len);
            let overlay = session.overlay();
            prop_assert!(overlay.left.alpha == 0.0 || overlay.right.alpha == 0.0);
        }
        if session.is_dragging() {
            session.pointer_up(0.0, BOOK_WIDTH, &mut sink);
        }
        run_frames(&mut session, &mut sink);
        let spread = session.current_spread();
        prop_assert_eq!(sink.slots(), (spread.left, Some(spread.right)));
        prop_assert!(sink.flip.is_none());
    }
}
