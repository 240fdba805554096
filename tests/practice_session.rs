use std::path::Path;

use signtutor::config::Catalog;
use signtutor::frames::load_frames;
use signtutor::{Detection, Error, Feedback, Gesture, PracticeSession, SessionStats};

fn open_hand_session() -> PracticeSession {
    let catalog = Catalog::builtin().unwrap();
    let mut session = PracticeSession::new(catalog.into_session().unwrap());
    let idx = session.lessons().position("open-hand").unwrap();
    session.select_lesson(idx).unwrap();
    session
}

#[test]
fn recorded_session_scores_each_frame_in_order() {
    let frames = load_frames(Path::new("tests/data/open_hand_session.jsonl")).unwrap();
    assert_eq!(frames.len(), 7);

    let mut session = open_hand_session();
    assert_eq!(session.current_lesson().gesture, "Open Hand");

    let mut results = Vec::new();
    for (line, frame) in &frames {
        match session.on_frame(frame.primary_hand()) {
            Ok(r) => results.push((*line, r)),
            Err(e) => {
                assert_eq!(*line, 4);
                assert_eq!(
                    e,
                    Error::InvalidLandmarkSet {
                        expected: 21,
                        actual: 20
                    }
                );
            }
        }
    }

    let summary: Vec<(usize, Detection, Feedback)> = results
        .iter()
        .map(|(line, r)| (*line, r.detected, r.feedback.clone()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, Detection::Gesture(Gesture::OpenHand), Feedback::Correct),
            (2, Detection::NoHand, Feedback::NoHand),
            (
                3,
                Detection::Gesture(Gesture::ThumbsDown),
                Feedback::WrongGesture {
                    detected: Gesture::ThumbsDown,
                    target: "Open Hand".to_string()
                }
            ),
            (5, Detection::Gesture(Gesture::OpenHand), Feedback::Correct),
            (
                6,
                Detection::Gesture(Gesture::PeaceSign),
                Feedback::WrongGesture {
                    detected: Gesture::PeaceSign,
                    target: "Open Hand".to_string()
                }
            ),
            (7, Detection::NoGesture, Feedback::Unrecognized),
        ]
    );

    let attempts: Vec<u64> = results.iter().map(|(_, r)| r.stats.attempts).collect();
    assert_eq!(attempts, vec![1, 1, 2, 3, 4, 5]);

    assert_eq!(
        session.stats(),
        SessionStats {
            correct: 2,
            attempts: 5
        }
    );
    assert_eq!(session.stats().accuracy(), 40);
}

#[test]
fn navigation_wraps_around_builtin_catalog() {
    let mut session = PracticeSession::new(Catalog::builtin().unwrap().into_session().unwrap());
    let last = session.lessons().len() - 1;

    assert_eq!(session.previous().id, "i-love-you");
    assert_eq!(session.lessons().current_index(), last);
    assert_eq!(session.next().id, "thumbs-up");
    assert_eq!(session.lessons().current_index(), 0);

    assert!(session.select_lesson(last + 1).is_err());
    assert_eq!(session.lessons().current_index(), 0);
}

#[test]
fn call_me_lesson_cannot_be_passed_with_its_own_pose() {
    let frames = load_frames(Path::new("tests/data/thumb_and_pinky.jsonl")).unwrap();
    let mut session = PracticeSession::new(Catalog::builtin().unwrap().into_session().unwrap());
    let idx = session.lessons().position("call-me").unwrap();
    session.select_lesson(idx).unwrap();

    let r = session.on_frame(frames[0].1.primary_hand()).unwrap();
    assert_eq!(r.detected, Detection::Gesture(Gesture::PinkyPromise));
    assert_eq!(
        r.feedback,
        Feedback::WrongGesture {
            detected: Gesture::PinkyPromise,
            target: "Call Me".to_string()
        }
    );

    let idx = session.lessons().position("pinky-promise").unwrap();
    session.select_lesson(idx).unwrap();
    let r = session.on_frame(frames[0].1.primary_hand()).unwrap();
    assert_eq!(r.feedback, Feedback::Correct);
}
