// Interactive terminal trainer.
// Run with: cargo run --bin simulator
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{StyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use grammar_core::config::{init_tracing, TrainerConfig};
use grammar_core::core::data::{LOCATIONS, NOUNS, PRONOUNS};
use grammar_core::core::highlight::HighlightTicket;
use grammar_core::core::puzzle::{PlacementOutcome, PuzzleState};
use grammar_core::core::types::{HighlightElement, Mode, SlotKind, TemplateId};
use grammar_core::{GrammarEngine, GrammarError, Result};
use std::io::{self, stdin, stdout, Write};
use std::str::FromStr;
use std::time::Instant;

/// Clear-timers waiting to fire. Checked once per input line.
struct Timers {
    pending: Vec<(Instant, HighlightTicket)>,
}

impl Timers {
    fn schedule(&mut self, ticket: HighlightTicket, config: &TrainerConfig) {
        self.pending.push((Instant::now() + config.highlight_delay(), ticket));
    }

    fn fire_due(&mut self, engine: &mut GrammarEngine) {
        let now = Instant::now();
        self.pending.retain(|(due, ticket)| {
            if *due <= now {
                engine.expire_highlight(*ticket);
                false
            } else {
                true
            }
        });
    }
}

fn main() -> io::Result<()> {
    let config = TrainerConfig::discover().unwrap_or_default();
    init_tracing(&config);

    let mut engine = GrammarEngine::from_config_or_detached(&config);
    let mut timers = Timers { pending: Vec::new() };
    let mut status = String::from("Type 'help' for commands.");

    loop {
        timers.fire_due(&mut engine);
        print_ui(&engine, &status)?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let arg = parts.next().unwrap_or("");

        if cmd == "quit" || cmd == "exit" {
            break;
        }
        status = match run_command(&mut engine, &mut timers, &config, cmd, arg) {
            Ok(message) => message,
            Err(e) => format!("Error: {}", e),
        };
    }

    if let Err(e) = engine.save_ledger() {
        eprintln!("[ERROR] Could not save score ledger: {}", e);
    }
    println!("\nFinal score: {}", engine.cumulative_score());
    Ok(())
}

fn parse_number<T: FromStr>(arg: &str) -> Result<T> {
    arg.parse::<T>()
        .map_err(|_| GrammarError::InvalidInput(format!("expected a number, got '{}'", arg)))
}

fn run_command(
    engine: &mut GrammarEngine,
    timers: &mut Timers,
    config: &TrainerConfig,
    cmd: &str,
    arg: &str,
) -> Result<String> {
    let message = match cmd {
        "noun" => {
            timers.schedule(engine.select_noun(parse_number(arg)?)?, config);
            "Noun changed; number reset to 1.".to_string()
        }
        "num" => {
            timers.schedule(engine.select_numeral(parse_number::<u32>(arg)?)?, config);
            "Number changed.".to_string()
        }
        "loc" => {
            timers.schedule(engine.select_location(parse_number(arg)?)?, config);
            "Location changed.".to_string()
        }
        "pro" => {
            timers.schedule(engine.select_pronoun(parse_number(arg)?)?, config);
            "Pronoun changed.".to_string()
        }
        "mode" => {
            engine.set_mode(arg.parse::<Mode>()?);
            format!("Mode: {}", arg)
        }
        "template" => {
            engine.switch_template(arg.parse::<TemplateId>()?);
            format!("Template: {}", engine.template())
        }
        "place" => match engine.place_slot(arg.parse::<SlotKind>()?) {
            PlacementOutcome::Ignored => "Nothing placed.".to_string(),
            PlacementOutcome::Placed { correct: true } => "Correct position!".to_string(),
            PlacementOutcome::Placed { correct: false } => "Not in that position.".to_string(),
            PlacementOutcome::Completed { round_score, perfect: true, .. } => {
                format!("Perfect sentence! +{} points", round_score)
            }
            PlacementOutcome::Completed { round_score, .. } => {
                format!("Sentence complete. +{} points", round_score)
            }
        },
        "remove" => match engine.remove_slot(parse_number(arg)?) {
            Some(kind) => format!("Removed {}.", kind),
            None => "Nothing removed.".to_string(),
        },
        "reset" => {
            engine.reset_puzzle();
            "Puzzle reset.".to_string()
        }
        "save" => {
            if engine.save_ledger()? {
                "Score saved.".to_string()
            } else {
                "No ledger_path configured; score kept in memory only.".to_string()
            }
        }
        "help" => "noun N | num V | loc N | pro N | mode explore|build | template existential|possessive | place SLOT | remove I | reset | save | quit".to_string(),
        "" => String::new(),
        other => format!("Unknown command '{}'.", other),
    };
    Ok(message)
}

fn mark(text: String, highlighted: bool) -> StyledContent<String> {
    if highlighted {
        text.yellow().bold()
    } else {
        text.stylize()
    }
}

fn print_ui(engine: &GrammarEngine, status: &str) -> io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Chuukese Grammar Trainer".bold());
    println!("---------------------------------------------------------------");

    let noun = &NOUNS[engine.selected_noun()];
    println!(
        "Noun:     {}",
        mark(
            format!("{} ({}, {})", noun.chuukese, noun.english, noun.category.label()),
            engine.is_highlighted(HighlightElement::Noun)
        )
    );
    println!(
        "Number:   {}",
        mark(
            engine.selected_numeral().get().to_string(),
            engine.is_highlighted(HighlightElement::Numeral)
        )
    );
    if engine.template_has_location_slots() {
        let loc = &LOCATIONS[engine.selected_location()];
        println!(
            "Location: {}",
            mark(
                format!("{} {} ({} the {})", loc.preposition_chk, loc.chuukese, loc.preposition_en, loc.english),
                engine.is_highlighted(HighlightElement::Location)
            )
        );
    } else {
        let pro = &PRONOUNS[engine.selected_pronoun()];
        println!(
            "Pronoun:  {}",
            mark(
                format!("{} ({})", pro.chuukese, pro.english),
                engine.is_highlighted(HighlightElement::Pronoun)
            )
        );
    }

    let sentence = engine.sentence();
    println!("\nTemplate: {}", engine.template());
    println!("Chuukese: {}", sentence.chuukese_text().cyan());
    println!("English:  {}", sentence.english_text());

    if engine.mode() == Mode::Build {
        println!("\n{}", "Build mode".bold());
        let placed: Vec<String> = engine
            .placed_slots()
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let word = sentence
                    .binding(p.kind)
                    .map(|b| b.chuukese.clone())
                    .unwrap_or_default();
                let cell = format!("{}:{}", i, word);
                if p.correct { cell.green().to_string() } else { cell.red().to_string() }
            })
            .collect();
        println!("Placed:    [{}]", placed.join(" "));
        let remaining: Vec<String> = engine
            .remaining_scrambled_slots()
            .iter()
            .map(|k| k.to_string())
            .collect();
        println!("Remaining: {}", remaining.join(", "));
        if engine.puzzle_state() == PuzzleState::Completed {
            println!("{}", "Complete! 'reset' for another round.".green());
        }
    }

    let badge = engine.badge_tier().map(|b| b.label()).unwrap_or("none");
    println!("\nScore: {}   Badge: {}", engine.cumulative_score(), badge);
    println!("\n{}", status);
    print!("> ");
    out.flush()
}
