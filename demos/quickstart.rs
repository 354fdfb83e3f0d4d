use equisol::{calculate, season_span, Season};

fn main() -> Result<(), equisol::Error> {
    for season in Season::ALL {
        let instant = calculate(2013, season)?;
        println!("{season} 2013 begins at {instant}");
    }

    let autumn = season_span(2013, Season::Autumn)?;
    println!("Autumn 2013: {} - {}", autumn.start, autumn.end);
    Ok(())
}
