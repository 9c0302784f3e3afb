use std::env;
use std::path::Path;
use weather_advisor::{Event, ModelKind, WeatherAdvisor, WeatherDataLoader, WeatherField};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "data/weather_data.csv".to_string());
    let advisor = WeatherAdvisor::builder()
        .series(WeatherDataLoader::new(Path::new(&path)).load()?)
        .window_days(10)
        .build();

    let festival = Event::builder()
        .name("Street festival")
        .outdoors(true)
        .cover_available(false)
        .start_hour(11)
        .build()?;

    println!("{} days of history loaded", advisor.series().size());
    if let Some(first) = advisor.series().iter().next() {
        println!("Oldest record: {:?}", first.date);
    }

    for kind in ModelKind::ALL {
        let model = advisor.predict(kind, None)?;
        println!(
            "{:<24} mean rainfall {:.1} mm over {} days",
            model.name(),
            model.average(WeatherField::Rainfall),
            model.number_days()
        );
        let assessment = advisor.assess().event(&festival).model(kind).call()?;
        println!("  {:?}", assessment.forecast);
        println!("  {}", assessment);
    }

    Ok(())
}
