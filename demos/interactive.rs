//! Text prompt for checking how suitable the predicted weather is for an event.
//!
//! Usage: `cargo run --example interactive -- [data/weather_data.csv]`
//! The dataset path may also be given through the `WEATHER_DATA` variable.

use std::env;
use std::io::{self, BufRead, Write};
use weather_advisor::{AdvisorError, Event, ModelKind, WeatherAdvisor, LAST_START_HOUR};

const DEFAULT_DATA_FILE: &str = "data/weather_data.csv";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let path = env::args()
        .nth(1)
        .or_else(|| env::var("WEATHER_DATA").ok())
        .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
    let advisor = WeatherAdvisor::from_csv(&path)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Let's determine how suitable your event is for the predicted weather.");
    let event = ask_event(&mut input)?;

    loop {
        let model = ask_model(&mut input)?;
        let window_days = if model.uses_window() {
            Some(ask_number(
                &mut input,
                "How many days of data should the prediction use?",
                1..=advisor.series().size().max(1),
            )?)
        } else {
            None
        };

        match advisor
            .assess()
            .event(&event)
            .model(model)
            .maybe_window_days(window_days)
            .call()
        {
            Ok(assessment) => println!("{}", assessment),
            Err(AdvisorError::Prediction(e)) => println!("Could not predict the weather: {}", e),
            Err(e) => return Err(e.into()),
        }

        if !ask_yes_no(&mut input, "Would you like to check again?")? {
            return Ok(());
        }
    }
}

fn prompt(input: &mut impl BufRead, question: &str) -> io::Result<String> {
    print!("{} ", question);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

fn ask_event(input: &mut impl BufRead) -> Result<Event, Box<dyn std::error::Error>> {
    let name = prompt(input, "What is the name of the event?")?;
    let outdoors = ask_yes_no(input, "Is the event outdoors?")?;
    let cover_available = ask_yes_no(input, "Is there covered shelter?")?;
    let start_hour = ask_number(input, "What time is the event?", 0..=usize::from(LAST_START_HOUR))?;
    Ok(Event::builder()
        .name(name)
        .outdoors(outdoors)
        .cover_available(cover_available)
        .start_hour(start_hour as u8)
        .build()?)
}

fn ask_yes_no(input: &mut impl BufRead, question: &str) -> io::Result<bool> {
    loop {
        let answer = prompt(input, question)?.to_lowercase();
        match answer.as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("\nError: '{}' is not in the form Yes/No or Y/N. Try again.\n", answer),
        }
    }
}

fn ask_number(
    input: &mut impl BufRead,
    question: &str,
    range: std::ops::RangeInclusive<usize>,
) -> io::Result<usize> {
    loop {
        let answer = prompt(input, question)?;
        match answer.parse::<usize>() {
            Ok(value) if range.contains(&value) => return Ok(value),
            _ => println!(
                "\nError: '{}' is not a whole number between {} and {}. Try again.\n",
                answer,
                range.start(),
                range.end()
            ),
        }
    }
}

fn ask_model(input: &mut impl BufRead) -> io::Result<ModelKind> {
    loop {
        println!("Select the weather prediction model you wish to use:");
        for (option, kind) in ModelKind::ALL.iter().enumerate() {
            println!("  {}) {}", option + 1, kind.label());
        }
        let answer = prompt(input, ">")?;
        match answer.parse::<usize>().map(ModelKind::from_option) {
            Ok(Ok(kind)) => return Ok(kind),
            _ => println!("\nError: '{}' is not a valid option. Try again.\n", answer),
        }
    }
}
