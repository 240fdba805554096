use anyhow::{Result, anyhow};
use log::{info, warn};
use pico_args::Arguments;
use std::{env, path::PathBuf};

use signtutor::config::{self, Catalog};
use signtutor::frames;
use signtutor::gestures::{self, Detection, PoseFeatures};
use signtutor::{Hand, PracticeSession};

pub fn run() -> Result<()> {
    let mut pargs = Arguments::from_env();

    // No args -> general help
    if env::args().len() == 1 {
        print_help();
        return Ok(());
    }

    if pargs.contains("-h") || pargs.contains("--help") {
        print_help();
        return Ok(());
    }

    // First free arg is the subcommand
    let subcmd: Option<String> = pargs.free_from_str().ok();

    match subcmd.as_deref() {
        Some("help") => {
            let topic: Option<String> = pargs.free_from_str().ok();
            if let Some(t) = topic {
                print_subcmd_help(&t);
            } else {
                print_help();
            }
            Ok(())
        }

        Some("init") => {
            let path = config::catalog_path()?;
            let installed = config::install_default(&path)?;
            print_response(&serde_json::json!({"ok": true, "data": {
                "catalog": path,
                "installed": installed,
            }}));
            Ok(())
        }

        Some("lessons") => {
            let catalog = load_catalog(&mut pargs)?;
            let lessons: Vec<_> = catalog
                .lessons
                .iter()
                .enumerate()
                .map(|(i, l)| {
                    serde_json::json!({
                        "index": i,
                        "id": l.id,
                        "gesture": l.gesture,
                        "emoji": l.target().map(|g| g.emoji()),
                        "meaning": l.meaning,
                        "hint": l.hint,
                    })
                })
                .collect();
            print_response(&serde_json::json!({"ok": true, "data": {
                "catalog": catalog.name(),
                "lessons": lessons,
            }}));
            Ok(())
        }

        Some("rules") => {
            let reachable = gestures::reachable_gestures();
            let rules: Vec<_> = gestures::RULES
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    serde_json::json!({
                        "order": i + 1,
                        "gesture": r.gesture,
                        "emoji": r.gesture.emoji(),
                        "reachable": reachable.contains(&r.gesture),
                    })
                })
                .collect();
            print_response(&serde_json::json!({"ok": true, "data": {"rules": rules}}));
            Ok(())
        }

        Some("classify") => {
            let path: PathBuf = pargs
                .free_from_str()
                .map_err(|_| anyhow!("usage: signtutor classify <frames.jsonl>"))?;
            let mut skipped = 0usize;
            for (line, frame) in frames::load_frames(&path)? {
                let Some(points) = frame.primary_hand() else {
                    print_line(&serde_json::json!({"line": line, "detected": Detection::NoHand}));
                    continue;
                };
                let hand = match Hand::from_slice(points) {
                    Ok(h) => h,
                    Err(e) => {
                        warn!("line {line}: skipping frame: {e}");
                        skipped += 1;
                        continue;
                    }
                };
                let pose = PoseFeatures::from_hand(&hand);
                print_line(&serde_json::json!({
                    "line": line,
                    "detected": Detection::from(gestures::classify(&pose)),
                    "fingers": pose.fingers,
                }));
            }
            if skipped > 0 {
                warn!("skipped {skipped} malformed frame(s)");
            }
            Ok(())
        }

        Some("practice") => {
            let lesson_idx: Option<usize> = pargs.opt_value_from_str("--lesson")?;
            let lesson_id: Option<String> = pargs.opt_value_from_str("--lesson-id")?;
            let catalog = load_catalog(&mut pargs)?;
            let path: PathBuf = pargs.free_from_str().map_err(|_| {
                anyhow!("usage: signtutor practice <frames.jsonl> [--lesson N] [--catalog PATH]")
            })?;

            let mut session = PracticeSession::new(catalog.into_session()?);
            if let Some(id) = lesson_id {
                let idx = session
                    .lessons()
                    .position(&id)
                    .ok_or_else(|| anyhow!("no lesson with id '{id}'"))?;
                session.select_lesson(idx)?;
            } else if let Some(idx) = lesson_idx {
                session.select_lesson(idx)?;
            }
            let lesson = session.current_lesson().clone();
            info!("practicing '{}' (target: {})", lesson.id, lesson.gesture);

            let mut skipped = 0usize;
            for (line, frame) in frames::load_frames(&path)? {
                match session.on_frame(frame.primary_hand()) {
                    Ok(r) => print_line(&serde_json::json!({
                        "line": line,
                        "detected": r.detected,
                        "feedback": r.feedback,
                        "message": r.feedback.to_string(),
                        "stats": r.stats,
                    })),
                    Err(e) => {
                        warn!("line {line}: skipping frame: {e}");
                        skipped += 1;
                    }
                }
            }

            let stats = session.stats();
            print_line(&serde_json::json!({"summary": {
                "lesson": lesson.id,
                "target": lesson.gesture,
                "correct": stats.correct,
                "attempts": stats.attempts,
                "accuracy": stats.accuracy(),
                "skipped": skipped,
            }}));
            Ok(())
        }

        Some(other) => {
            eprintln!("unknown subcommand: {other}\n");
            print_help();
            Ok(())
        }

        None => {
            print_help();
            Ok(())
        }
    }
}

fn load_catalog(pargs: &mut Arguments) -> Result<Catalog> {
    match pargs.opt_value_from_str::<_, PathBuf>("--catalog")? {
        Some(p) => Catalog::load(&p),
        None => Catalog::load_or_install_default(),
    }
}

fn print_help() {
    println!(
        r#"signtutor: hand sign practice from tracked landmarks

USAGE:
  signtutor help [command]                Show general or command-specific help
  signtutor init                          Install the default lesson catalog
  signtutor lessons [--catalog PATH]      List lessons
  signtutor rules                         Show the ordered gesture rules
  signtutor classify <frames.jsonl>       Classify recorded frames
  signtutor practice <frames.jsonl>       Score recorded frames against a lesson
        [--lesson N | --lesson-id ID] [--catalog PATH]

TIPS:
  - Catalog: ~/.config/signtutor/lessons.toml
  - Frames: one {{"hands": [[{{"x":..,"y":..,"z":..}} x21]]}} object per line
  - Log level: RUST_LOG=debug
"#
    );
}

fn print_subcmd_help(cmd: &str) {
    match cmd {
        "init" => println!(
            "usage: signtutor init\nWrites the default catalog to ~/.config/signtutor/lessons.toml if missing."
        ),
        "lessons" => println!(
            "usage: signtutor lessons [--catalog PATH]\nLists lessons with their index, target gesture and hint."
        ),
        "rules" => println!(
            "usage: signtutor rules\nShows the gesture rules in evaluation order and which can ever match."
        ),
        "classify" => println!(
            "usage: signtutor classify <frames.jsonl>\nPrints the detected gesture and finger states per frame."
        ),
        "practice" => println!(
            "usage: signtutor practice <frames.jsonl> [--lesson N | --lesson-id ID] [--catalog PATH]\nScores each frame against the selected lesson; malformed frames are skipped."
        ),
        _ => {
            eprintln!("unknown command: {cmd}\n");
            print_help();
        }
    }
}

fn print_response(v: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(v).unwrap_or_default());
}

fn print_line(v: &serde_json::Value) {
    println!("{v}");
}
