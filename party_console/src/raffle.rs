use party_draft::Raffle;

use crate::draft::read_roster;
use crate::event_config::EventConfig;


pub fn run(roster_file: &str, num_winners: usize, config: &EventConfig) -> anyhow::Result<()> {
    let roster = read_roster(roster_file)?;
    let mut raffle = Raffle::new(roster.iter().map(|p| p.id.clone()));
    let mut rng = config.rng();
    for place in 1..=num_winners {
        let Some(winner) = raffle.draw(&mut rng) else {
            log::warn!("Everybody has won already; stopping after {} draw(s)", place - 1);
            break;
        };
        // Ids are unique in a valid roster, so the lookup is only for the display name.
        let name = roster.iter().find(|p| p.id == winner).map_or(winner.as_str(), |p| &p.name);
        println!("{place}. {name}");
    }
    Ok(())
}
