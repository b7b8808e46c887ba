//! Line-command loop for the seatpick shell.
//!
//! Every user action becomes one core mutation; errors print and the loop
//! keeps going, so a bad seat id or a missing file never ends the session.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use seatpick_core::SeatId;

use crate::app::App;

const HELP: &str = "\
Commands:
  pick                 draw the next student/seat pairing
  show                 print the seat grid and remaining counter
  remaining            seats left in the current pass
  enable <seat>        enable a seat (rebuilds the seat pool)
  disable <seat>       disable a seat (clears its tardy flag)
  tardy <seat> [off]   mark or unmark a student tardy
  name <seat> [text]   assign a student to a seat (no text clears it)
  swap <seat>          two-step swap: select a seat, then its target
  randomize            reshuffle every assigned student onto new seats
  clear                reset the whole chart
  add <student>        add a student to the roster
  remove <student>     remove a student from the roster
  roster               list the roster
  save [path]          save the seating chart
  load <path>          load a seating chart
  export [path]        export attendance (absent/tardy/present)
  help                 show this help
  quit                 exit";

pub fn run(app: &mut App) -> Result<()> {
    println!("seatpick - type 'help' for commands");
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        if dispatch(app, line.trim()) {
            break;
        }
    }
    Ok(())
}

/// Handle one command line. Returns true if the shell should quit.
fn dispatch(app: &mut App, line: &str) -> bool {
    let mut parts = line.split_whitespace();
    let Some(cmd) = parts.next() else {
        return false;
    };
    let args: Vec<&str> = parts.collect();

    let result = match cmd {
        "pick" => Ok(app.pick()),
        "show" => Ok(app.show()),
        "remaining" => Ok(format!(
            "Remaining seats: {}",
            app.engine.remaining_seats()
        )),
        "enable" => seat_arg(&args).and_then(|s| app.set_enabled(s, true)),
        "disable" => seat_arg(&args).and_then(|s| app.set_enabled(s, false)),
        "tardy" => {
            seat_arg(&args).and_then(|s| app.set_tardy(s, args.get(1) != Some(&"off")))
        }
        "name" => seat_arg(&args).and_then(|s| app.set_name(s, &args[1..].join(" "))),
        "swap" => seat_arg(&args).and_then(|s| app.swap(s)),
        "randomize" => app.randomize(),
        "clear" => Ok(app.clear()),
        "add" => app.add_student(&args.join(" ")),
        "remove" => app.remove_student(&args.join(" ")),
        "roster" => Ok(app.roster_list()),
        "save" => app.save_chart(args.first().map(PathBuf::from)),
        "load" => match args.first() {
            Some(p) => app.load_chart(Path::new(p)),
            None => Err(anyhow!("usage: load <path>")),
        },
        "export" => app.export(args.first().map(PathBuf::from)),
        "help" => Ok(HELP.to_string()),
        "quit" | "exit" | "q" => return true,
        _ => Ok(format!("unknown command: {} (try 'help')", cmd)),
    };

    match result {
        Ok(msg) => println!("{}", msg),
        Err(e) => println!("error: {:#}", e),
    }
    false
}

fn seat_arg(args: &[&str]) -> Result<SeatId> {
    let field = args.first().context("expected a seat id (like A1)")?;
    Ok(field.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatpick_core::Config;

    #[test]
    fn test_quit_commands() {
        let mut app = App::new(Config::default(), None, None);
        assert!(dispatch(&mut app, "quit"));
        assert!(dispatch(&mut app, "exit"));
        assert!(dispatch(&mut app, "q"));
    }

    #[test]
    fn test_blank_and_unknown_lines_keep_running() {
        let mut app = App::new(Config::default(), None, None);
        assert!(!dispatch(&mut app, ""));
        assert!(!dispatch(&mut app, "   "));
        assert!(!dispatch(&mut app, "frobnicate"));
    }

    #[test]
    fn test_seat_arg_parses_and_rejects() {
        assert_eq!(seat_arg(&["a1"]).unwrap().to_string(), "A1");
        assert!(seat_arg(&[]).is_err());
        assert!(seat_arg(&["nope"]).is_err());
    }

    #[test]
    fn test_mutating_commands_keep_loop_alive() {
        let mut app = App::new(Config::default(), None, None);
        assert!(!dispatch(&mut app, "name A1 Alice"));
        assert!(!dispatch(&mut app, "disable B2"));
        assert!(!dispatch(&mut app, "swap A1"));
        assert!(!dispatch(&mut app, "swap C3"));
        assert_eq!(app.registry.assigned_name("C3".parse().unwrap()), Some("Alice"));
        assert!(!app.registry.is_enabled("A1".parse().unwrap()));
    }
}
