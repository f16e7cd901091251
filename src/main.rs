//! fretgrid CLI — headless tab inspection and playback.
//!
//! Operates on the built-in demo document:
//!   fretgrid                 print the document summary
//!   fretgrid --events        dump the compiled event sequence
//!   fretgrid --layout        dump note drawing positions
//!   fretgrid --suggest       append echoed suggestions to the last measure
//!   fretgrid --play          play through a console-logging source
//!   fretgrid --tempo <bpm>   override the document tempo first

use std::{env, process};

use fg_ir::{fit_pitch, melody_pitches, summarize, Pitch};
use fg_session::{
    compile, NoteCandidate, NoteDuration, Session, SoundSource, SourceError, SuggestError,
    SuggestionProvider, TabDocument,
};

/// Reports every trigger on stdout instead of sounding it.
struct ConsoleSource;

impl SoundSource for ConsoleSource {
    fn trigger_note(
        &mut self,
        pitch: Pitch,
        duration_secs: f64,
        onset_secs: f64,
        velocity: f32,
    ) -> Result<(), SourceError> {
        println!(
            "  {:>7.3}s  {:<4}  {:.3}s  vel {:.2}",
            onset_secs,
            pitch.to_string(),
            duration_secs,
            velocity
        );
        Ok(())
    }

    fn silence_all(&mut self) -> Result<(), SourceError> {
        Ok(())
    }
}

/// Echoes the tail of the current melody, refit onto the fretboard.
struct EchoProvider;

impl SuggestionProvider for EchoProvider {
    fn suggest(&mut self, document: &TabDocument) -> Result<Vec<NoteCandidate>, SuggestError> {
        let track = document
            .first_track()
            .ok_or_else(|| SuggestError::Unavailable("document has no track".into()))?;
        let pitches = melody_pitches(document);
        if pitches.is_empty() {
            return Err(SuggestError::Unavailable("nothing to echo".into()));
        }

        let tail = &pitches[pitches.len().saturating_sub(4)..];
        Ok(tail
            .iter()
            .filter_map(|&pitch| fit_pitch(pitch, &track.tuning))
            .map(|(string, fret)| NoteCandidate {
                string,
                fret,
                duration: NoteDuration::Eighth,
            })
            .collect())
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let mut session = Session::new(ConsoleSource);

    if let Some(raw) = flag_value(&args, "--tempo") {
        let bpm: u16 = raw.parse().unwrap_or_else(|_| {
            eprintln!("--tempo expects a number, got \"{}\"", raw);
            process::exit(1);
        });
        session.set_tempo(bpm).unwrap_or_else(|e| {
            eprintln!("{}", e);
            process::exit(1);
        });
    }

    if args.iter().any(|a| a == "--suggest") {
        run_suggest(&mut session);
    }

    print_summary(session.document());

    if args.iter().any(|a| a == "--events") {
        print_events(session.document());
    }
    if args.iter().any(|a| a == "--layout") {
        print_layout(&session);
    }
    if args.iter().any(|a| a == "--play") {
        play(&mut session);
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
}

fn print_usage() {
    println!("Usage: fretgrid [--events] [--layout] [--suggest] [--play] [--tempo <bpm>]");
    println!();
    println!("Inspects and plays the built-in demo tab document.");
    println!("  --events       dump the compiled event sequence");
    println!("  --layout       dump note drawing positions");
    println!("  --suggest      append echoed suggestions to the last measure");
    println!("  --play         play through a console-logging source");
    println!("  --tempo <bpm>  override the document tempo (40-300)");
}

fn print_summary(document: &TabDocument) {
    println!("Title:    {}", document.title);
    println!("Tempo:    {} BPM", document.tempo);
    if let Some(track) = document.first_track() {
        let names: Vec<&str> = track.tuning.strings.iter().map(|c| c.name()).collect();
        println!("Tuning:   {}", names.join(" "));
    }
    println!();

    print!("{}", summarize(document));
    println!();
}

fn print_events(document: &TabDocument) {
    let events = compile(document).unwrap_or_else(|e| {
        eprintln!("Compile failed: {}", e);
        process::exit(1);
    });

    println!("Events:");
    for event in &events {
        println!(
            "  {:>7.3}s  {:<4}  {:.3}s  vel {:.2}",
            event.onset_secs,
            event.pitch.to_string(),
            event.duration_secs,
            event.velocity
        );
    }
    println!();
}

fn print_layout(session: &Session<ConsoleSource>) {
    println!("Placements:");
    for p in session.placements() {
        println!(
            "  m{} slot {}  string {} fret {:>2}  {}  at ({:>6.1}, {:>5.1})",
            p.measure,
            p.slot,
            p.string,
            p.fret,
            p.duration.glyph(),
            p.x,
            p.y
        );
    }
    println!();
}

fn run_suggest(session: &mut Session<ConsoleSource>) {
    let mut provider = EchoProvider;
    let candidates = session
        .request_suggestions(&mut provider)
        .unwrap_or_else(|e| {
            eprintln!("Suggestion failed: {}", e);
            process::exit(1);
        });

    let last = session
        .document()
        .first_track()
        .map_or(0, |t| t.measures.len().saturating_sub(1));
    match session.apply_candidates(last, &candidates) {
        Ok(count) => println!("Appended {} suggested notes to measure {}", count, last),
        Err(e) => {
            eprintln!("Suggestion rejected: {}", e);
            process::exit(1);
        }
    }
    println!();
}

fn play(session: &mut Session<ConsoleSource>) {
    println!("Playing...");
    if let Err(e) = session.play() {
        eprintln!("{}", e);
        process::exit(1);
    }

    while session.is_playing() {
        std::thread::sleep(std::time::Duration::from_millis(25));
    }
    println!("Done.");
}
