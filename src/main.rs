use memecalc::{render, AngleMode, Session};
use std::io::{self, Write};

fn meme_row(display: &str) -> String {
    render::glyphs(display)
        .iter()
        .filter_map(|g| render::asset(*g))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new();
    let mut buffer = String::new();
    let mut stdout = io::stdout();
    let stdin = io::stdin();
    loop {
        stdout.write_all("> ".as_bytes())?;
        stdout.flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            break;
        }
        match buffer.trim() {
            "quit" | "exit" => break,
            "deg" => session.angle_mode = AngleMode::Degrees,
            "rad" => session.angle_mode = AngleMode::Radians,
            "mc" => session.memory_clear(),
            "mr" => {
                session.memory_recall();
                println!("{}", session.display());
            }
            "m+" => session.memory_add(),
            "m-" => session.memory_subtract(),
            "" => {}
            line => {
                session.clear_entry();
                session.press(line);
                match session.calculate() {
                    Ok(_) => println!("{}   [{}]", session.display(), meme_row(session.display())),
                    Err(e) => eprintln!("Error: {e}"),
                }
            }
        }
        buffer.clear();
    }
    Ok(())
}
