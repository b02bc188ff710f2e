use hk_weather::{HkWeather, HkWeatherError, Origin};
use std::env;

#[tokio::main]
async fn main() -> Result<(), HkWeatherError> {
    let mut args = env::args().skip(1);
    let year = args.next().and_then(|a| a.parse().ok()).unwrap_or(2024);
    let month = args.next().and_then(|a| a.parse().ok()).unwrap_or(8);

    let client = HkWeather::new()?;
    let acquisition = client.acquire(year, month).await?;

    let source = match acquisition.origin {
        Origin::Primary => "Hong Kong Observatory",
        Origin::Fallback => "Open-Meteo",
    };
    println!(
        "{} days for {:04}-{:02} from {}",
        acquisition.observations.len(),
        year,
        month,
        source
    );
    for day in &acquisition.observations {
        println!("{}  {:>5.1}°C  {}", day.date, day.mean_temperature, day.category);
    }

    Ok(())
}
